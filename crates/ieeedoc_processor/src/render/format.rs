/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Output format trait for pluggable renderers.

use super::RenderOptions;
use ieeedoc_core::{Author, Figure, Table, TokenKind};

/// Trait for defining how the parts of a paper are written out in a
/// specific format.
///
/// The processor decides what goes where and how things are numbered;
/// implementations only decide the markup. Plain-text fields (title,
/// authors, abstract, keywords, section titles, reference fields) go through
/// [`OutputFormat::text`]. Section content, figure captions and table cells
/// are authored markup and are handed through untouched.
pub trait OutputFormat: Default + Clone {
    /// Convert a plain-text field into the format.
    ///
    /// The implementation should handle any character escaping required by
    /// the target format.
    fn text(&self, s: &str) -> String;

    /// Render content with emphasis (typically italics).
    fn emph(&self, content: String) -> String;

    /// The paper title.
    fn title(&self, title: &str) -> String;

    /// One author's name, affiliation and email.
    fn author(&self, author: &Author) -> String;

    /// The author block, from already rendered authors.
    fn authors(&self, authors: Vec<String>) -> String;

    /// The abstract, followed by the keyword list when there is one.
    fn abstract_block(&self, text: &str, keywords: &[String]) -> String;

    /// A section with its `label. title` heading and its rendered body.
    fn section(&self, label: &str, title: &str, body: String) -> String;

    /// A resolved figure. `caption` is the full caption line, number
    /// included (`Fig. 2. Overview`).
    fn figure(&self, figure: &Figure, caption: &str, options: &RenderOptions) -> String;

    /// A resolved table under its `TABLE <n>` label.
    fn table(&self, table: &Table, label: &str) -> String;

    /// A visible marker for a token whose target does not exist.
    fn unresolved(&self, kind: TokenKind, id: &str) -> String;

    /// One reference list entry.
    fn entry(&self, id: &str, content: String) -> String;

    /// The reference list under its heading.
    fn bibliography(&self, entries: Vec<String>) -> String;

    /// Assemble the page: the front matter (title, authors, abstract) and
    /// the body (sections, then references).
    fn document(&self, front: Vec<String>, body: Vec<String>) -> String;
}
