/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! The paper model.
//!
//! A [`PaperData`] is the single root aggregate of a draft: title block,
//! authors, abstract, keywords, ordered sections, and the figures, tables
//! and references that section content points at.
//!
//! ## Identity
//!
//! Authors and keywords have no identity beyond their position in the list.
//! Sections, figures, tables and references carry an `id` which is unique
//! within its own collection. Figure and table ids are the keys used by the
//! inline reference tokens (see [`crate::token`]).
//!
//! ## Serialization
//!
//! The serde shape is the persisted document shape: camelCase optional keys
//! (`figureId`, `tableId`), `type` for the section kind, and absent optional
//! fields skipped on output.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A paper author. Identified only by position in [`PaperData::authors`].
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub struct Author {
    pub name: String,
    pub affiliation: String,
    pub email: String,
}

/// A bibliography entry.
///
/// `year` is mandatory but free text. Presentation order is list order; the
/// entry number printed in the reference list is purely positional.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub struct Reference {
    pub id: String,
    pub authors: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub journal: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conference: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pages: Option<String>,
    pub year: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doi: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl Reference {
    /// A blank journal reference dated `year`, as created by "add reference".
    pub fn blank(id: impl Into<String>, year: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            journal: Some(String::new()),
            volume: Some(String::new()),
            number: Some(String::new()),
            pages: Some(String::new()),
            year: year.into(),
            ..Default::default()
        }
    }

    /// The publication venue: the journal if it is non-empty, else the conference.
    pub fn venue(&self) -> Option<&str> {
        non_empty(self.journal.as_deref()).or_else(|| non_empty(self.conference.as_deref()))
    }
}

/// Treat `Some("")` the same as `None`.
pub fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// An embedded image.
///
/// `src` holds the image payload itself (a data URI); the paper owns the
/// bytes. `width` and `height` are CSS pixels.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub struct Figure {
    pub id: String,
    pub src: String,
    pub caption: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
}

/// Preset display sizes offered by the figure resizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub enum FigureSize {
    Small,
    Medium,
    Large,
    FullWidth,
}

impl FigureSize {
    pub const ALL: [FigureSize; 4] = [
        FigureSize::Small,
        FigureSize::Medium,
        FigureSize::Large,
        FigureSize::FullWidth,
    ];

    /// `(width, height)` in pixels.
    pub fn dimensions(self) -> (f64, f64) {
        match self {
            FigureSize::Small => (150.0, 112.0),
            FigureSize::Medium => (250.0, 187.0),
            FigureSize::Large => (350.0, 262.0),
            FigureSize::FullWidth => (400.0, 300.0),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FigureSize::Small => "Small",
            FigureSize::Medium => "Medium",
            FigureSize::Large => "Large",
            FigureSize::FullWidth => "Full Width",
        }
    }
}

impl Figure {
    pub const NEW_CAPTION: &'static str = "Enter figure caption here";

    pub fn new(id: impl Into<String>, src: impl Into<String>, caption: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            src: src.into(),
            caption: caption.into(),
            width: None,
            height: None,
        }
    }

    pub fn resize(mut self, width: f64, height: f64) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    pub fn resize_to(self, size: FigureSize) -> Self {
        let (w, h) = size.dimensions();
        self.resize(w, h)
    }
}

/// A data table. Structural edits live in [`crate::table`].
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub struct Table {
    pub id: String,
    pub caption: String,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// What a section holds. Only `Text` is produced by the editor today; the
/// other kinds are reserved and rendered like text.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub enum SectionKind {
    #[default]
    Text,
    Figure,
    Table,
    Equation,
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SectionKind::Text => write!(f, "text"),
            SectionKind::Figure => write!(f, "figure"),
            SectionKind::Table => write!(f, "table"),
            SectionKind::Equation => write!(f, "equation"),
        }
    }
}

/// A body section. `content` is HTML and may embed reference tokens.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub struct Section {
    pub id: String,
    pub title: String,
    pub content: String,
    #[serde(rename = "type", default)]
    pub kind: SectionKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub figure_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table_id: Option<String>,
}

impl Section {
    pub const NEW_TITLE: &'static str = "New Section";
    pub const NEW_CONTENT: &'static str = "<p>Enter your content here...</p>";

    pub fn new(id: impl Into<String>, title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            content: content.into(),
            ..Default::default()
        }
    }

    /// A placeholder text section, as created by "add section".
    pub fn placeholder(id: impl Into<String>) -> Self {
        Self::new(id, Self::NEW_TITLE, Self::NEW_CONTENT)
    }
}

/// The root aggregate.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub struct PaperData {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub authors: Vec<Author>,
    #[serde(default)]
    pub r#abstract: String,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub sections: Vec<Section>,
    #[serde(default)]
    pub references: Vec<Reference>,
    #[serde(default)]
    pub figures: Vec<Figure>,
    #[serde(default)]
    pub tables: Vec<Table>,
}

impl PaperData {
    /// First section with `id`.
    pub fn section(&self, id: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.id == id)
    }

    /// First figure with `id`. Later duplicates are shadowed.
    pub fn figure(&self, id: &str) -> Option<&Figure> {
        self.figures.iter().find(|f| f.id == id)
    }

    /// First table with `id`. Later duplicates are shadowed.
    pub fn table(&self, id: &str) -> Option<&Table> {
        self.tables.iter().find(|t| t.id == id)
    }

    pub fn reference(&self, id: &str) -> Option<&Reference> {
        self.references.iter().find(|r| r.id == id)
    }
}

/// Entities addressed by id.
pub trait Identified {
    fn id(&self) -> &str;
}

macro_rules! impl_identified {
    ($($ty:ty),*) => {
        $(impl Identified for $ty {
            fn id(&self) -> &str {
                &self.id
            }
        })*
    };
}

impl_identified!(Section, Figure, Table, Reference);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn section_kind_serializes_as_type() {
        let section = Section::placeholder("9");
        let json = serde_json::to_value(&section).unwrap();
        assert_eq!(json["type"], "text");
        assert!(json.get("figureId").is_none());
    }

    #[test]
    fn venue_skips_empty_journal() {
        let reference = Reference {
            journal: Some(String::new()),
            conference: Some("Proc. ICRA".to_string()),
            ..Default::default()
        };
        assert_eq!(reference.venue(), Some("Proc. ICRA"));
        assert_eq!(Reference::blank("1", "2024").venue(), None);
    }

    #[test]
    fn lookup_returns_first_duplicate() {
        let paper = PaperData {
            figures: vec![Figure::new("f", "a", "first"), Figure::new("f", "b", "second")],
            ..Default::default()
        };
        assert_eq!(paper.figure("f").map(|f| f.caption.as_str()), Some("first"));
    }

    #[test]
    fn preset_sizes() {
        let fig = Figure::new("f1", "data:", "x").resize_to(FigureSize::Medium);
        assert_eq!((fig.width, fig.height), (Some(250.0), Some(187.0)));
    }
}
