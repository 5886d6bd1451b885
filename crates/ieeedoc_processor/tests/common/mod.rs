/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

#![allow(dead_code)]

use ieeedoc_core::{Figure, PaperData, Reference, Section, Table};

// --- Helper Functions for Test Data Construction ---

/// A paper with one section per entry of `contents`, titled `S1`, `S2`, ...
pub fn paper_with_sections(contents: &[&str]) -> PaperData {
    PaperData {
        title: "Test Paper".to_string(),
        sections: contents
            .iter()
            .enumerate()
            .map(|(i, content)| Section::new(format!("s{}", i + 1), format!("S{}", i + 1), *content))
            .collect(),
        ..Default::default()
    }
}

pub fn make_figure(id: &str, caption: &str) -> Figure {
    Figure::new(id, format!("data:image/png;base64,{}", id), caption)
}

pub fn make_table(id: &str, caption: &str) -> Table {
    Table {
        caption: caption.to_string(),
        ..Table::with_shape(id, 1, 2)
    }
}

pub fn make_reference(id: &str, title: &str) -> Reference {
    Reference {
        id: id.to_string(),
        authors: "A. Author".to_string(),
        title: title.to_string(),
        journal: Some("IEEE Access".to_string()),
        year: "2024".to_string(),
        ..Default::default()
    }
}
