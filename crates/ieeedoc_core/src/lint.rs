/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Advisory checks.
//!
//! The model accepts anything; these checks only report states an author
//! probably wants to hear about. None of them block editing or rendering.

use crate::paper::{Identified, PaperData};
use crate::token::{self, TokenKind};
use serde::Serialize;
use std::collections::HashSet;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Diagnostic {
    /// An id appears more than once in one collection.
    DuplicateId {
        collection: &'static str,
        id: String,
    },
    /// A token whose target does not exist.
    UnresolvedToken {
        section: String,
        token: TokenKind,
        id: String,
    },
    /// A table row whose cell count differs from the header count.
    RaggedRow {
        table: String,
        row: usize,
        expected: usize,
        found: usize,
    },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::DuplicateId { collection, id } => {
                write!(f, "duplicate {} id `{}`", collection, id)
            }
            Diagnostic::UnresolvedToken { section, token, id } => write!(
                f,
                "section `{}` refers to missing {} `{}`",
                section,
                token.tag().to_lowercase(),
                id
            ),
            Diagnostic::RaggedRow {
                table,
                row,
                expected,
                found,
            } => write!(
                f,
                "table `{}` row {} has {} cells, expected {}",
                table, row, found, expected
            ),
        }
    }
}

/// Whether a token of `kind` with `id` would resolve in `paper`.
pub fn resolves(paper: &PaperData, kind: TokenKind, id: &str) -> bool {
    match kind {
        TokenKind::Figure => paper.figure(id).is_some(),
        TokenKind::Table => paper.table(id).is_some(),
    }
}

/// Every token in section order whose target is missing.
pub fn unresolved_tokens(paper: &PaperData) -> Vec<Diagnostic> {
    paper
        .sections
        .iter()
        .flat_map(|section| {
            token::tokens(&section.content)
                .into_iter()
                .filter(|t| !resolves(paper, t.kind, t.id))
                .map(|t| Diagnostic::UnresolvedToken {
                    section: section.id.clone(),
                    token: t.kind,
                    id: t.id.to_string(),
                })
                .collect::<Vec<_>>()
        })
        .collect()
}

fn duplicates<T: Identified>(collection: &'static str, items: &[T]) -> Vec<Diagnostic> {
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    items
        .iter()
        .filter(|item| !seen.insert(item.id()) && reported.insert(item.id()))
        .map(|item| Diagnostic::DuplicateId {
            collection,
            id: item.id().to_string(),
        })
        .collect()
}

/// Run every check.
pub fn check(paper: &PaperData) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();
    diagnostics.extend(duplicates("section", &paper.sections));
    diagnostics.extend(duplicates("figure", &paper.figures));
    diagnostics.extend(duplicates("table", &paper.tables));
    diagnostics.extend(duplicates("reference", &paper.references));
    diagnostics.extend(unresolved_tokens(paper));
    for table in &paper.tables {
        for (row, cells) in table.rows.iter().enumerate() {
            if cells.len() != table.headers.len() {
                diagnostics.push(Diagnostic::RaggedRow {
                    table: table.id.clone(),
                    row,
                    expected: table.headers.len(),
                    found: cells.len(),
                });
            }
        }
    }
    diagnostics
}
