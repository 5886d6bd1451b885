/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! HTML output format.
//!
//! The markup matches the preview page stylesheet (`ieee-*` classes).
//! Plain-text fields are escaped; section content, captions and table
//! cells are authored markup and are written as is.

use super::format::OutputFormat;
use super::RenderOptions;
use ieeedoc_core::{Author, Figure, Table, TokenKind};
use std::fmt::Write;

#[derive(Default, Clone)]
pub struct Html;

const CELL_STYLE: &str = "border: 1px solid #ccc; padding: 4px;";

impl OutputFormat for Html {
    fn text(&self, s: &str) -> String {
        let mut out = String::with_capacity(s.len());
        for c in s.chars() {
            match c {
                '&' => out.push_str("&amp;"),
                '<' => out.push_str("&lt;"),
                '>' => out.push_str("&gt;"),
                '"' => out.push_str("&quot;"),
                _ => out.push(c),
            }
        }
        out
    }

    fn emph(&self, content: String) -> String {
        if content.is_empty() {
            return content;
        }
        format!("<em>{}</em>", content)
    }

    fn title(&self, title: &str) -> String {
        format!(r#"<div class="ieee-title">{}</div>"#, self.text(title))
    }

    fn author(&self, author: &Author) -> String {
        format!(
            r#"<div class="ieee-author"><div class="ieee-author-name">{}</div><div class="ieee-author-affiliation">{}</div><div class="ieee-author-email">{}</div></div>"#,
            self.text(&author.name),
            self.text(&author.affiliation),
            self.text(&author.email)
        )
    }

    fn authors(&self, authors: Vec<String>) -> String {
        format!(
            r#"<div class="ieee-authors">{}</div>"#,
            authors.join("\n")
        )
    }

    fn abstract_block(&self, text: &str, keywords: &[String]) -> String {
        let mut out = String::from(r#"<div class="ieee-abstract">"#);
        out.push_str(r#"<div class="ieee-abstract-heading">ABSTRACT</div>"#);
        let _ = write!(
            out,
            r#"<div class="ieee-abstract-body">{}</div>"#,
            self.text(text)
        );
        if !keywords.is_empty() {
            let _ = write!(
                out,
                r#"<div class="ieee-keywords"><b>Keywords: </b>{}</div>"#,
                keywords
                    .iter()
                    .map(|k| self.text(k))
                    .collect::<Vec<_>>()
                    .join(", ")
            );
        }
        out.push_str("</div>");
        out
    }

    fn section(&self, label: &str, title: &str, body: String) -> String {
        format!(
            r#"<div class="ieee-section"><div class="ieee-section-title">{}. {}</div><div class="ieee-section-body">{}</div></div>"#,
            label,
            self.text(title),
            body
        )
    }

    fn figure(&self, figure: &Figure, caption: &str, options: &RenderOptions) -> String {
        let (max_width, max_height) = options.figure_box(figure);
        format!(
            r#"<div class="ieee-figure" style="text-align: center; margin-bottom: 1em;"><img src="{}" alt="{}" style="max-width: {}; max-height: {}; display: inline-block;"/><div class="ieee-caption" style="text-align: center; font-size: 0.9em; margin-top: 0.5em;">{}</div></div>"#,
            figure.src, figure.caption, max_width, max_height, caption
        )
    }

    fn table(&self, table: &Table, label: &str) -> String {
        let mut head = String::from("<tr>");
        for header in &table.headers {
            let _ = write!(
                head,
                r#"<th style="{} text-align: left;">{}</th>"#,
                CELL_STYLE, header
            );
        }
        head.push_str("</tr>");

        let mut body = String::new();
        for row in &table.rows {
            body.push_str("<tr>");
            for cell in row {
                let _ = write!(body, r#"<td style="{}">{}</td>"#, CELL_STYLE, cell);
            }
            body.push_str("</tr>");
        }

        format!(
            r#"<div class="ieee-figure" style="margin-bottom: 1em;"><div class="ieee-caption" style="text-align: center; font-size: 0.9em; margin-bottom: 0.5em;">{}<br/>{}</div><table class="ieee-table" style="width: auto; margin-left: auto; margin-right: auto; border-collapse: collapse; font-size: 0.9em;"><thead style="background-color: #f0f0f0;">{}</thead><tbody>{}</tbody></table></div>"#,
            label, table.caption, head, body
        )
    }

    fn unresolved(&self, kind: TokenKind, id: &str) -> String {
        format!(
            r#"<span class="ieee-unresolved" style="color: red;">[{} NOT FOUND: {}]</span>"#,
            kind, id
        )
    }

    fn entry(&self, id: &str, content: String) -> String {
        format!(
            r#"<div class="ieee-reference" id="ref-{}">{}</div>"#,
            id, content
        )
    }

    fn bibliography(&self, entries: Vec<String>) -> String {
        format!(
            r#"<div class="ieee-references"><div class="ieee-section-title">REFERENCES</div>
{}
</div>"#,
            entries.join("\n")
        )
    }

    fn document(&self, front: Vec<String>, body: Vec<String>) -> String {
        format!(
            r#"<div id="ieee-page-container" class="ieee-page">
{}
<div class="ieee-columns">
{}
</div>
</div>"#,
            front.join("\n"),
            body.join("\n")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_emphasis_is_dropped() {
        assert_eq!(Html.emph(String::new()), "");
        assert_eq!(Html.emph("IEEE Trans.".into()), "<em>IEEE Trans.</em>");
    }

    #[test]
    fn text_fields_are_escaped() {
        assert_eq!(
            Html.title("Graphs & <T> Types"),
            r#"<div class="ieee-title">Graphs &amp; &lt;T&gt; Types</div>"#
        );
        let with = Html.abstract_block("a < b", &["R&D".into()]);
        assert!(with.contains(">a &lt; b</div>"));
        assert!(with.contains("</b>R&amp;D</div>"));
        let section = Html.section("A", "\"Quoted\"", "<p>kept</p>".into());
        assert!(section.contains("A. &quot;Quoted&quot;</div>"));
        assert!(section.contains("<p>kept</p>"));
    }

    #[test]
    fn keywords_only_when_present() {
        let without = Html.abstract_block("Summary.", &[]);
        assert!(!without.contains("Keywords"));
        let with = Html.abstract_block("Summary.", &["a".into(), "b".into()]);
        assert!(with.contains("<b>Keywords: </b>a, b"));
    }

    #[test]
    fn table_grid_preserves_cell_order() {
        let table = Table::with_shape("t", 2, 2)
            .set_header(0, "Model")
            .set_header(1, "F1")
            .set_cell(0, 0, "A")
            .set_cell(0, 1, "0.8")
            .set_cell(1, 0, "B")
            .set_cell(1, 1, "0.9");
        let html = Html.table(&table, "TABLE II");
        assert!(html.contains("TABLE II<br/>Enter table caption here"));
        let a = html.find(">A<").unwrap();
        let f = html.find(">0.8<").unwrap();
        let b = html.find(">B<").unwrap();
        assert!(a < f && f < b);
        assert_eq!(html.matches("<th ").count(), 2);
        assert_eq!(html.matches("<td ").count(), 4);
    }

    #[test]
    fn unresolved_marker_shows_id() {
        assert_eq!(
            Html.unresolved(TokenKind::Table, "missing"),
            r#"<span class="ieee-unresolved" style="color: red;">[TABLE NOT FOUND: missing]</span>"#
        );
    }
}
