/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! The built-in starter paper.
//!
//! Used when no stored document exists, when the stored one cannot be read,
//! and by the reset action.

use crate::paper::{Author, PaperData, Reference, Section};

/// A five-section IEEE skeleton with one author and one example reference.
pub fn template() -> PaperData {
    PaperData {
        title: "Your Paper Title Here".to_string(),
        authors: vec![Author {
            name: "Author Name".to_string(),
            affiliation: "Institution Name".to_string(),
            email: "author@institution.edu".to_string(),
        }],
        r#abstract: "Write your abstract here. This should be a concise summary of your work, \
                     typically 150-250 words."
            .to_string(),
        keywords: vec![
            "keyword1".to_string(),
            "keyword2".to_string(),
            "keyword3".to_string(),
        ],
        sections: vec![
            text_section(
                "1",
                "Introduction",
                "Write your introduction here. This section should provide background \
                 information and motivation for your work.",
            ),
            text_section(
                "2",
                "Related Work",
                "Discuss related work and how your contribution differs from existing approaches.",
            ),
            text_section(
                "3",
                "Methodology",
                "Describe your methodology and approach in detail.",
            ),
            text_section(
                "4",
                "Results",
                "Present your experimental results and findings.",
            ),
            text_section(
                "5",
                "Conclusion",
                "Summarize your contributions and suggest future work.",
            ),
        ],
        references: vec![Reference {
            id: "1".to_string(),
            authors: "Smith, J. and Doe, A.".to_string(),
            title: "Example Paper Title".to_string(),
            journal: Some("IEEE Transactions on Example Topic".to_string()),
            volume: Some("10".to_string()),
            number: Some("2".to_string()),
            pages: Some("123-135".to_string()),
            year: "2023".to_string(),
            ..Default::default()
        }],
        figures: Vec::new(),
        tables: Vec::new(),
    }
}

fn text_section(id: &str, title: &str, paragraph: &str) -> Section {
    Section::new(id, title, format!("<p>{}</p>", paragraph))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn template_first_section_is_introduction() {
        let paper = template();
        assert_eq!(paper.sections.len(), 5);
        assert_eq!(paper.sections[0].id, "1");
        assert_eq!(paper.sections[0].title, "Introduction");
        assert!(paper.sections[0].content.starts_with("<p>Write your introduction"));
    }
}
