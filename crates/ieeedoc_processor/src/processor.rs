/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! The preview processor.
//!
//! Turns a paper snapshot into one formatted page. The paper is only read.
//!
//! ## Numbering
//!
//! Figures and tables are numbered by a single left-to-right scan over the
//! sections in order. The counters start at zero once per render and are
//! threaded through the section fold as a [`Numbering`] value, so numbering
//! is continuous across section boundaries.
//!
//! Every resolved token takes the next number, including a second token
//! for the same figure or table: that figure is printed twice, under two
//! numbers. Unresolved tokens render a "not found" marker and do not
//! consume a number.

use crate::labels::{romanize, section_letter};
use crate::reference::format_reference;
use crate::render::format::OutputFormat;
use crate::render::html::Html;
use crate::render::RenderOptions;
use ieeedoc_core::token::{self, Segment};
use ieeedoc_core::{Figure, PaperData, Section, SectionKind, Table, TokenKind};
use indexmap::IndexMap;

/// Render-scoped figure and table counters.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Numbering {
    pub figures: u32,
    pub tables: u32,
}

/// A token left unresolved during a render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unresolved {
    pub section: String,
    pub kind: TokenKind,
    pub id: String,
}

/// One rendered section and the counters after it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedSection {
    pub output: String,
    pub numbering: Numbering,
    pub unresolved: Vec<Unresolved>,
}

/// A rendered page plus what the render observed.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RenderedPaper {
    pub output: String,
    /// Counters after the last section.
    pub numbering: Numbering,
    pub unresolved: Vec<Unresolved>,
}

/// The preview processor.
#[derive(Debug)]
pub struct Processor<'a> {
    paper: &'a PaperData,
    options: RenderOptions,
    /// Figures by id; the first figure wins when ids repeat.
    figures: IndexMap<&'a str, &'a Figure>,
    /// Tables by id; the first table wins when ids repeat.
    tables: IndexMap<&'a str, &'a Table>,
}

impl<'a> Processor<'a> {
    pub fn new(paper: &'a PaperData) -> Self {
        Self::with_options(paper, RenderOptions::default())
    }

    pub fn with_options(paper: &'a PaperData, options: RenderOptions) -> Self {
        let mut figures = IndexMap::new();
        for figure in &paper.figures {
            figures.entry(figure.id.as_str()).or_insert(figure);
        }
        let mut tables = IndexMap::new();
        for table in &paper.tables {
            tables.entry(table.id.as_str()).or_insert(table);
        }
        Self {
            paper,
            options,
            figures,
            tables,
        }
    }

    /// Render the page as HTML.
    pub fn render(&self) -> String {
        self.render_with_format::<Html>()
    }

    pub fn render_with_format<F: OutputFormat>(&self) -> String {
        self.process::<F>().output
    }

    /// Render the page and report the final counters and unresolved tokens.
    pub fn process<F: OutputFormat>(&self) -> RenderedPaper {
        let fmt = F::default();
        let paper = self.paper;
        tracing::debug!(
            sections = paper.sections.len(),
            figures = paper.figures.len(),
            tables = paper.tables.len(),
            "rendering paper"
        );

        let mut front = vec![fmt.title(&paper.title)];
        let authors = paper.authors.iter().map(|a| fmt.author(a)).collect();
        front.push(fmt.authors(authors));
        front.push(fmt.abstract_block(&paper.r#abstract, &paper.keywords));

        let (mut body, numbering, unresolved) = paper.sections.iter().enumerate().fold(
            (Vec::new(), Numbering::default(), Vec::new()),
            |(mut body, numbering, mut unresolved), (index, section)| {
                let rendered = self.render_section(&fmt, index, section, numbering);
                body.push(rendered.output);
                unresolved.extend(rendered.unresolved);
                (body, rendered.numbering, unresolved)
            },
        );

        if let Some(references) = self.render_references(&fmt) {
            body.push(references);
        }

        if !unresolved.is_empty() {
            tracing::debug!(count = unresolved.len(), "unresolved reference tokens");
        }

        RenderedPaper {
            output: fmt.document(front, body),
            numbering,
            unresolved,
        }
    }

    /// Render the section at `index`, starting from `numbering`.
    pub fn render_section<F: OutputFormat>(
        &self,
        fmt: &F,
        index: usize,
        section: &Section,
        numbering: Numbering,
    ) -> RenderedSection {
        let mut numbering = numbering;
        let mut missing = Vec::new();
        let body = match section.kind {
            // Reserved kinds carry their material in content like text does.
            SectionKind::Text | SectionKind::Figure | SectionKind::Table | SectionKind::Equation => {
                self.render_content(fmt, &section.content, &mut numbering, &mut missing)
            }
        };
        RenderedSection {
            output: fmt.section(&section_letter(index), &section.title, body),
            numbering,
            unresolved: missing
                .into_iter()
                .map(|(kind, id)| Unresolved {
                    section: section.id.clone(),
                    kind,
                    id,
                })
                .collect(),
        }
    }

    /// Replace each token in `content` with its figure, table or marker.
    /// Text between tokens is copied as is.
    pub fn render_content<F: OutputFormat>(
        &self,
        fmt: &F,
        content: &str,
        numbering: &mut Numbering,
        missing: &mut Vec<(TokenKind, String)>,
    ) -> String {
        let mut out = String::with_capacity(content.len());
        for segment in token::scan(content) {
            match segment {
                Segment::Text(text) => out.push_str(text),
                Segment::Token(token) => {
                    let rendered = match token.kind {
                        TokenKind::Figure => self.figures.get(token.id).map(|figure| {
                            numbering.figures += 1;
                            let caption = format!("Fig. {}. {}", numbering.figures, figure.caption);
                            fmt.figure(figure, &caption, &self.options)
                        }),
                        TokenKind::Table => self.tables.get(token.id).map(|table| {
                            numbering.tables += 1;
                            let label = format!("TABLE {}", romanize(numbering.tables));
                            fmt.table(table, &label)
                        }),
                    };
                    match rendered {
                        Some(rendered) => out.push_str(&rendered),
                        None => {
                            missing.push((token.kind, token.id.to_string()));
                            out.push_str(&fmt.unresolved(token.kind, token.id));
                        }
                    }
                }
            }
        }
        out
    }

    /// The reference list, or `None` when the paper has no references.
    pub fn render_references<F: OutputFormat>(&self, fmt: &F) -> Option<String> {
        if self.paper.references.is_empty() {
            return None;
        }
        let entries = self
            .paper
            .references
            .iter()
            .enumerate()
            .map(|(i, r)| fmt.entry(&r.id, format_reference(fmt, i + 1, r)))
            .collect();
        Some(fmt.bibliography(entries))
    }
}
