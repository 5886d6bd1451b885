/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! The editor state container.
//!
//! [`Editor`] owns the paper and the active section. Views read through
//! [`Editor::snapshot`] and request changes with [`Editor::dispatch`]; nothing
//! else gets write access to the nested collections.
//!
//! Dispatch also enforces the editor's policies: the last section, the last
//! table row and the last table column cannot be removed. These are editor
//! rules only. [`PaperData::apply`] itself accepts the same commands.

use crate::command::Command;
use crate::embedded;
use crate::paper::{PaperData, Section};
use crate::token::TokenKind;
use thiserror::Error;

/// A command refused by editor policy. The paper is left unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PolicyError {
    #[error("cannot delete the last section")]
    LastSection,

    #[error("table `{0}` must keep at least one row")]
    LastRow(String),

    #[error("table `{0}` must keep at least one column")]
    LastColumn(String),
}

#[derive(Debug, Clone)]
pub struct Editor {
    paper: PaperData,
    active_section: Option<String>,
}

impl Default for Editor {
    fn default() -> Self {
        Self::new(embedded::template())
    }
}

impl Editor {
    /// Wrap `paper`, selecting its first section.
    pub fn new(paper: PaperData) -> Self {
        let active_section = paper.sections.first().map(|s| s.id.clone());
        Self {
            paper,
            active_section,
        }
    }

    /// Wrap `paper` and restore a previously active section. Falls back to the
    /// first section when `id` no longer exists.
    pub fn with_active_section(paper: PaperData, id: Option<String>) -> Self {
        let mut editor = Self::new(paper);
        if let Some(id) = id {
            editor.select_section(&id);
        }
        editor
    }

    pub fn snapshot(&self) -> &PaperData {
        &self.paper
    }

    pub fn into_paper(self) -> PaperData {
        self.paper
    }

    pub fn active_section_id(&self) -> Option<&str> {
        self.active_section.as_deref()
    }

    pub fn active_section(&self) -> Option<&Section> {
        self.active_section
            .as_deref()
            .and_then(|id| self.paper.section(id))
    }

    /// Make `id` the active section. Unknown ids are ignored.
    pub fn select_section(&mut self, id: &str) -> bool {
        if self.paper.section(id).is_some() {
            self.active_section = Some(id.to_string());
            true
        } else {
            false
        }
    }

    /// Check editor policy, then apply `command`.
    pub fn dispatch(&mut self, command: Command) -> Result<(), PolicyError> {
        self.permit(&command)?;
        let paper = std::mem::take(&mut self.paper);
        self.paper = paper.apply(command);
        self.repair_selection();
        Ok(())
    }

    /// Insert a token into the active section at `caret`.
    ///
    /// Returns `false` when the target does not currently exist, so callers
    /// can warn; the token is inserted either way.
    pub fn insert_token(&mut self, caret: usize, kind: TokenKind, target: &str) -> bool {
        let Some(section) = self.active_section.clone() else {
            return false;
        };
        let exists = crate::lint::resolves(&self.paper, kind, target);
        if !exists {
            tracing::warn!(%kind, id = target, "inserting token for missing target");
        }
        let paper = std::mem::take(&mut self.paper);
        self.paper = paper.apply(Command::InsertToken {
            section,
            caret,
            kind,
            target: target.to_string(),
        });
        exists
    }

    /// Replace the paper with the built-in template.
    pub fn reset(&mut self) {
        *self = Self::new(embedded::template());
    }

    fn permit(&self, command: &Command) -> Result<(), PolicyError> {
        match command {
            Command::RemoveSection { id } => {
                let exists = self.paper.section(id).is_some();
                if exists && self.paper.sections.len() <= 1 {
                    return Err(PolicyError::LastSection);
                }
            }
            Command::RemoveTableRow { id, .. } => {
                if let Some(table) = self.paper.table(id) {
                    if table.rows.len() <= 1 {
                        return Err(PolicyError::LastRow(id.clone()));
                    }
                }
            }
            Command::RemoveTableColumn { id, .. } => {
                if let Some(table) = self.paper.table(id) {
                    if table.headers.len() <= 1 {
                        return Err(PolicyError::LastColumn(id.clone()));
                    }
                }
            }
            _ => {}
        }
        Ok(())
    }

    fn repair_selection(&mut self) {
        let valid = self
            .active_section
            .as_deref()
            .is_some_and(|id| self.paper.section(id).is_some());
        if !valid {
            self.active_section = self.paper.sections.first().map(|s| s.id.clone());
        }
    }
}
