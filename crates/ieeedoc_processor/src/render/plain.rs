/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Plain text output format.
//!
//! Useful for reviewing structure and numbering in a terminal. Section
//! content is still written as authored, markup included.

use super::format::OutputFormat;
use super::RenderOptions;
use ieeedoc_core::{Author, Figure, Table, TokenKind};

#[derive(Default, Clone)]
pub struct PlainText;

impl OutputFormat for PlainText {
    fn text(&self, s: &str) -> String {
        s.to_string()
    }

    fn emph(&self, content: String) -> String {
        if content.is_empty() {
            return content;
        }
        format!("_{}_", content)
    }

    fn title(&self, title: &str) -> String {
        title.to_string()
    }

    fn author(&self, author: &Author) -> String {
        [&author.name, &author.affiliation, &author.email]
            .into_iter()
            .filter(|s| !s.is_empty())
            .cloned()
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn authors(&self, authors: Vec<String>) -> String {
        authors.join("\n\n")
    }

    fn abstract_block(&self, text: &str, keywords: &[String]) -> String {
        let mut out = format!("ABSTRACT\n{}", text);
        if !keywords.is_empty() {
            out.push_str("\nKeywords: ");
            out.push_str(&keywords.join(", "));
        }
        out
    }

    fn section(&self, label: &str, title: &str, body: String) -> String {
        format!("{}. {}\n\n{}", label, title, body)
    }

    fn figure(&self, _figure: &Figure, caption: &str, _options: &RenderOptions) -> String {
        format!("\n[image]\n{}\n", caption)
    }

    fn table(&self, table: &Table, label: &str) -> String {
        let mut lines = vec![label.to_string(), table.caption.clone()];
        lines.push(table.headers.join(" | "));
        for row in &table.rows {
            lines.push(row.join(" | "));
        }
        format!("\n{}\n", lines.join("\n"))
    }

    fn unresolved(&self, kind: TokenKind, id: &str) -> String {
        format!("[{} NOT FOUND: {}]", kind, id)
    }

    fn entry(&self, _id: &str, content: String) -> String {
        content
    }

    fn bibliography(&self, entries: Vec<String>) -> String {
        format!("REFERENCES\n\n{}", entries.join("\n"))
    }

    fn document(&self, front: Vec<String>, body: Vec<String>) -> String {
        let mut parts = front;
        parts.extend(body);
        parts.join("\n\n")
    }
}
