/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Update operations on the paper aggregate.
//!
//! Each operation consumes the current [`PaperData`] and returns the next
//! one. None of them fail: out-of-range indices and unknown ids leave the
//! paper unchanged, and there is no validation of content (duplicate ids,
//! empty fields and so on are kept as given).
//!
//! Authors and keywords are addressed by index; sections, figures, tables
//! and references by id. An update by id is a shallow merge of the fields
//! set in the patch. Removing a figure or table leaves any token that
//! pointed at it in place.

use crate::paper::{Author, Figure, Identified, PaperData, Reference, Section, SectionKind, Table};
use crate::token::{self, TokenKind};
use serde::{Deserialize, Serialize};

/// A shallow merge onto an existing entity.
pub trait Patch<T> {
    fn merge_into(self, target: &mut T);
}

macro_rules! merge_fields {
    ($patch:expr, $target:expr; $($field:ident),* ; $($opt:ident),*) => {
        $(if let Some(value) = $patch.$field {
            $target.$field = value;
        })*
        $(if let Some(value) = $patch.$opt {
            $target.$opt = Some(value);
        })*
    };
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub struct AuthorPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub affiliation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl Patch<Author> for AuthorPatch {
    fn merge_into(self, target: &mut Author) {
        merge_fields!(self, target; name, affiliation, email;);
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub struct SectionPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<SectionKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub figure_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table_id: Option<String>,
}

impl Patch<Section> for SectionPatch {
    fn merge_into(self, target: &mut Section) {
        merge_fields!(self, target; title, content, kind; figure_id, table_id);
    }
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub struct FigurePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub src: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
}

impl Patch<Figure> for FigurePatch {
    fn merge_into(self, target: &mut Figure) {
        merge_fields!(self, target; src, caption; width, height);
    }
}

/// Replaces whole header and row lists. Prefer the structural edits in
/// [`crate::table`] when the shape changes.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub struct TablePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headers: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rows: Option<Vec<Vec<String>>>,
}

impl Patch<Table> for TablePatch {
    fn merge_into(self, target: &mut Table) {
        merge_fields!(self, target; caption, headers, rows;);
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub struct ReferencePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authors: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub journal: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conference: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pages: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doi: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl Patch<Reference> for ReferencePatch {
    fn merge_into(self, target: &mut Reference) {
        merge_fields!(self, target; authors, title, year;
            journal, conference, volume, number, pages, doi, url);
    }
}

fn update_by_index<T, F>(mut items: Vec<T>, index: usize, f: F) -> Vec<T>
where
    F: FnOnce(&mut T),
{
    if let Some(item) = items.get_mut(index) {
        f(item);
    }
    items
}

fn remove_by_index<T>(mut items: Vec<T>, index: usize) -> Vec<T> {
    if index < items.len() {
        items.remove(index);
    }
    items
}

/// Update the first entity with `id`.
fn update_by_id<T, F>(mut items: Vec<T>, id: &str, f: F) -> Vec<T>
where
    T: Identified,
    F: FnOnce(T) -> T,
{
    if let Some(pos) = items.iter().position(|item| item.id() == id) {
        let item = items.remove(pos);
        items.insert(pos, f(item));
    }
    items
}

/// Drop every entity with `id`.
fn remove_by_id<T: Identified>(mut items: Vec<T>, id: &str) -> Vec<T> {
    items.retain(|item| item.id() != id);
    items
}

fn merge<T, P: Patch<T>>(patch: P) -> impl FnOnce(T) -> T {
    move |mut item| {
        patch.merge_into(&mut item);
        item
    }
}

impl PaperData {
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_abstract(mut self, text: impl Into<String>) -> Self {
        self.r#abstract = text.into();
        self
    }

    pub fn add_author(mut self, author: Author) -> Self {
        self.authors.push(author);
        self
    }

    pub fn update_author(mut self, index: usize, patch: AuthorPatch) -> Self {
        self.authors = update_by_index(self.authors, index, |a| patch.merge_into(a));
        self
    }

    pub fn remove_author(mut self, index: usize) -> Self {
        self.authors = remove_by_index(self.authors, index);
        self
    }

    pub fn add_keyword(mut self, keyword: impl Into<String>) -> Self {
        self.keywords.push(keyword.into());
        self
    }

    pub fn update_keyword(mut self, index: usize, keyword: impl Into<String>) -> Self {
        let keyword = keyword.into();
        self.keywords = update_by_index(self.keywords, index, |k| *k = keyword);
        self
    }

    pub fn remove_keyword(mut self, index: usize) -> Self {
        self.keywords = remove_by_index(self.keywords, index);
        self
    }

    pub fn add_section(mut self, section: Section) -> Self {
        self.sections.push(section);
        self
    }

    pub fn update_section(mut self, id: &str, patch: SectionPatch) -> Self {
        self.sections = update_by_id(self.sections, id, merge(patch));
        self
    }

    pub fn remove_section(mut self, id: &str) -> Self {
        self.sections = remove_by_id(self.sections, id);
        self
    }

    /// Move the section at `from` to `to`, shifting the sections in between.
    ///
    /// `to` is clamped to the last position. An out-of-range `from`, or
    /// `from == to`, leaves the order unchanged.
    pub fn move_section(mut self, from: usize, to: usize) -> Self {
        if from >= self.sections.len() || from == to {
            return self;
        }
        let section = self.sections.remove(from);
        let to = to.min(self.sections.len());
        self.sections.insert(to, section);
        self
    }

    /// Splice a reference token into a section's content at byte `caret`.
    pub fn insert_token(
        mut self,
        section_id: &str,
        caret: usize,
        kind: TokenKind,
        target: &str,
    ) -> Self {
        self.sections = update_by_id(self.sections, section_id, |mut s| {
            s.content = token::insert_token(&s.content, caret, kind, target);
            s
        });
        self
    }

    pub fn add_figure(mut self, figure: Figure) -> Self {
        self.figures.push(figure);
        self
    }

    pub fn update_figure(mut self, id: &str, patch: FigurePatch) -> Self {
        self.figures = update_by_id(self.figures, id, merge(patch));
        self
    }

    pub fn remove_figure(mut self, id: &str) -> Self {
        self.figures = remove_by_id(self.figures, id);
        self
    }

    pub fn add_table(mut self, table: Table) -> Self {
        self.tables.push(table);
        self
    }

    pub fn update_table(mut self, id: &str, patch: TablePatch) -> Self {
        self.tables = update_by_id(self.tables, id, merge(patch));
        self
    }

    /// Apply a structural edit (see [`crate::table`]) to the table with `id`.
    pub fn edit_table<F>(mut self, id: &str, edit: F) -> Self
    where
        F: FnOnce(Table) -> Table,
    {
        self.tables = update_by_id(self.tables, id, edit);
        self
    }

    pub fn remove_table(mut self, id: &str) -> Self {
        self.tables = remove_by_id(self.tables, id);
        self
    }

    pub fn add_reference(mut self, reference: Reference) -> Self {
        self.references.push(reference);
        self
    }

    pub fn update_reference(mut self, id: &str, patch: ReferencePatch) -> Self {
        self.references = update_by_id(self.references, id, merge(patch));
        self
    }

    pub fn remove_reference(mut self, id: &str) -> Self {
        self.references = remove_by_id(self.references, id);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sections(ids: &[&str]) -> PaperData {
        PaperData {
            sections: ids.iter().map(|id| Section::new(*id, *id, "")).collect(),
            ..Default::default()
        }
    }

    fn ids(paper: &PaperData) -> Vec<&str> {
        paper.sections.iter().map(|s| s.id.as_str()).collect()
    }

    #[test]
    fn move_section_is_idempotent_for_same_index() {
        for i in 0..4 {
            let paper = sections(&["a", "b", "c", "d"]).move_section(i, i);
            assert_eq!(ids(&paper), vec!["a", "b", "c", "d"]);
        }
    }

    #[test]
    fn move_section_shifts_between() {
        let paper = sections(&["a", "b", "c", "d"]).move_section(0, 2);
        assert_eq!(ids(&paper), vec!["b", "c", "a", "d"]);
        let paper = paper.move_section(3, 0);
        assert_eq!(ids(&paper), vec!["d", "b", "c", "a"]);
    }

    #[test]
    fn move_section_clamps_destination() {
        let paper = sections(&["a", "b", "c"]).move_section(0, 10);
        assert_eq!(ids(&paper), vec!["b", "c", "a"]);
        let paper = paper.move_section(7, 0);
        assert_eq!(ids(&paper), vec!["b", "c", "a"]);
    }

    #[test]
    fn section_patch_is_shallow_merge() {
        let paper = sections(&["a"]).update_section(
            "a",
            SectionPatch {
                title: Some("Intro".to_string()),
                ..Default::default()
            },
        );
        let section = &paper.sections[0];
        assert_eq!(section.title, "Intro");
        assert_eq!(section.id, "a");
        assert_eq!(section.content, "");
    }

    #[test]
    fn remove_author_shifts_indices() {
        let paper = PaperData::default()
            .add_author(Author { name: "A".into(), ..Default::default() })
            .add_author(Author { name: "B".into(), ..Default::default() })
            .add_author(Author { name: "C".into(), ..Default::default() })
            .remove_author(0)
            .update_author(
                0,
                AuthorPatch {
                    email: Some("b@x.org".into()),
                    ..Default::default()
                },
            );
        assert_eq!(paper.authors.len(), 2);
        assert_eq!(paper.authors[0].name, "B");
        assert_eq!(paper.authors[0].email, "b@x.org");
    }

    #[test]
    fn keywords_by_index() {
        let paper = PaperData::default()
            .add_keyword("a")
            .add_keyword("b")
            .update_keyword(1, "robotics")
            .update_keyword(9, "ignored")
            .remove_keyword(0);
        assert_eq!(paper.keywords, vec!["robotics"]);
    }

    #[test]
    fn removing_figure_keeps_dangling_token() {
        let paper = PaperData::default()
            .add_section(Section::new("s", "S", "[[FIGURE:f]]"))
            .add_figure(Figure::new("f", "data:", "c"))
            .remove_figure("f");
        assert!(paper.figures.is_empty());
        assert_eq!(paper.sections[0].content, "[[FIGURE:f]]");
    }

    #[test]
    fn unknown_id_is_noop() {
        let paper = sections(&["a"]);
        let same = paper.clone().update_section("zz", SectionPatch::default()).remove_table("zz");
        assert_eq!(paper, same);
    }

    #[test]
    fn empty_collections_are_allowed() {
        let paper = sections(&["a"]).remove_section("a");
        assert!(paper.sections.is_empty());
    }

    #[test]
    fn reference_patch_sets_optional_fields() {
        let paper = PaperData::default()
            .add_reference(Reference::blank("r1", "2024"))
            .update_reference(
                "r1",
                ReferencePatch {
                    doi: Some("10.1109/5.771073".into()),
                    year: Some("1999".into()),
                    ..Default::default()
                },
            );
        let reference = &paper.references[0];
        assert_eq!(reference.doi.as_deref(), Some("10.1109/5.771073"));
        assert_eq!(reference.year, "1999");
    }

    #[test]
    fn edit_table_by_id() {
        let paper = PaperData::default()
            .add_table(Table::with_shape("t", 1, 1))
            .edit_table("t", Table::add_column);
        assert_eq!(paper.tables[0].headers.len(), 2);
    }

    #[test]
    fn insert_token_into_section() {
        let paper = sections(&["a"])
            .update_section(
                "a",
                SectionPatch {
                    content: Some("<p></p>".into()),
                    ..Default::default()
                },
            )
            .insert_token("a", 3, TokenKind::Table, "t1");
        assert_eq!(paper.sections[0].content, "<p>[[TABLE:t1]]</p>");
    }
}
