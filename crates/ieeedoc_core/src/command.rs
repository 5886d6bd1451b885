/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Edit commands.
//!
//! A [`Command`] names one update operation together with its delta, so
//! edits can be queued, logged and read from a file. [`PaperData::apply`]
//! is the reducer that maps `(paper, command)` to the next paper.
//!
//! ```yaml
//! - op: set-title
//!   title: Learning to Grasp
//! - op: add-table-row
//!   id: t1
//! - op: insert-token
//!   section: "2"
//!   caret: 3
//!   kind: FIGURE
//!   target: fig-arch
//! ```

use crate::paper::{Author, Figure, PaperData, Reference, Section, Table};
use crate::token::TokenKind;
use crate::update::{AuthorPatch, FigurePatch, ReferencePatch, SectionPatch, TablePatch};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "kebab-case")]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub enum Command {
    SetTitle {
        title: String,
    },
    SetAbstract {
        r#abstract: String,
    },
    AddAuthor {
        #[serde(default)]
        author: Author,
    },
    UpdateAuthor {
        index: usize,
        patch: AuthorPatch,
    },
    RemoveAuthor {
        index: usize,
    },
    AddKeyword {
        keyword: String,
    },
    UpdateKeyword {
        index: usize,
        keyword: String,
    },
    RemoveKeyword {
        index: usize,
    },
    AddSection {
        section: Section,
    },
    UpdateSection {
        id: String,
        patch: SectionPatch,
    },
    RemoveSection {
        id: String,
    },
    MoveSection {
        from: usize,
        to: usize,
    },
    InsertToken {
        section: String,
        caret: usize,
        kind: TokenKind,
        target: String,
    },
    AddFigure {
        figure: Figure,
    },
    UpdateFigure {
        id: String,
        patch: FigurePatch,
    },
    RemoveFigure {
        id: String,
    },
    AddTable {
        table: Table,
    },
    UpdateTable {
        id: String,
        patch: TablePatch,
    },
    RemoveTable {
        id: String,
    },
    AddTableRow {
        id: String,
    },
    RemoveTableRow {
        id: String,
        row: usize,
    },
    AddTableColumn {
        id: String,
    },
    RemoveTableColumn {
        id: String,
        column: usize,
    },
    SetTableHeader {
        id: String,
        column: usize,
        text: String,
    },
    SetTableCell {
        id: String,
        row: usize,
        column: usize,
        text: String,
    },
    AddReference {
        reference: Reference,
    },
    UpdateReference {
        id: String,
        patch: ReferencePatch,
    },
    RemoveReference {
        id: String,
    },
}

impl Command {
    /// The kebab-case operation name, as written in the `op` field.
    pub fn name(&self) -> &'static str {
        match self {
            Command::SetTitle { .. } => "set-title",
            Command::SetAbstract { .. } => "set-abstract",
            Command::AddAuthor { .. } => "add-author",
            Command::UpdateAuthor { .. } => "update-author",
            Command::RemoveAuthor { .. } => "remove-author",
            Command::AddKeyword { .. } => "add-keyword",
            Command::UpdateKeyword { .. } => "update-keyword",
            Command::RemoveKeyword { .. } => "remove-keyword",
            Command::AddSection { .. } => "add-section",
            Command::UpdateSection { .. } => "update-section",
            Command::RemoveSection { .. } => "remove-section",
            Command::MoveSection { .. } => "move-section",
            Command::InsertToken { .. } => "insert-token",
            Command::AddFigure { .. } => "add-figure",
            Command::UpdateFigure { .. } => "update-figure",
            Command::RemoveFigure { .. } => "remove-figure",
            Command::AddTable { .. } => "add-table",
            Command::UpdateTable { .. } => "update-table",
            Command::RemoveTable { .. } => "remove-table",
            Command::AddTableRow { .. } => "add-table-row",
            Command::RemoveTableRow { .. } => "remove-table-row",
            Command::AddTableColumn { .. } => "add-table-column",
            Command::RemoveTableColumn { .. } => "remove-table-column",
            Command::SetTableHeader { .. } => "set-table-header",
            Command::SetTableCell { .. } => "set-table-cell",
            Command::AddReference { .. } => "add-reference",
            Command::UpdateReference { .. } => "update-reference",
            Command::RemoveReference { .. } => "remove-reference",
        }
    }
}

impl PaperData {
    /// Produce the next paper from this one and `command`.
    pub fn apply(self, command: Command) -> Self {
        tracing::debug!(op = command.name(), "applying command");
        match command {
            Command::SetTitle { title } => self.with_title(title),
            Command::SetAbstract { r#abstract } => self.with_abstract(r#abstract),
            Command::AddAuthor { author } => self.add_author(author),
            Command::UpdateAuthor { index, patch } => self.update_author(index, patch),
            Command::RemoveAuthor { index } => self.remove_author(index),
            Command::AddKeyword { keyword } => self.add_keyword(keyword),
            Command::UpdateKeyword { index, keyword } => self.update_keyword(index, keyword),
            Command::RemoveKeyword { index } => self.remove_keyword(index),
            Command::AddSection { section } => self.add_section(section),
            Command::UpdateSection { id, patch } => self.update_section(&id, patch),
            Command::RemoveSection { id } => self.remove_section(&id),
            Command::MoveSection { from, to } => self.move_section(from, to),
            Command::InsertToken {
                section,
                caret,
                kind,
                target,
            } => self.insert_token(&section, caret, kind, &target),
            Command::AddFigure { figure } => self.add_figure(figure),
            Command::UpdateFigure { id, patch } => self.update_figure(&id, patch),
            Command::RemoveFigure { id } => self.remove_figure(&id),
            Command::AddTable { table } => self.add_table(table),
            Command::UpdateTable { id, patch } => self.update_table(&id, patch),
            Command::RemoveTable { id } => self.remove_table(&id),
            Command::AddTableRow { id } => self.edit_table(&id, Table::add_row),
            Command::RemoveTableRow { id, row } => self.edit_table(&id, |t| t.remove_row(row)),
            Command::AddTableColumn { id } => self.edit_table(&id, Table::add_column),
            Command::RemoveTableColumn { id, column } => {
                self.edit_table(&id, |t| t.remove_column(column))
            }
            Command::SetTableHeader { id, column, text } => {
                self.edit_table(&id, |t| t.set_header(column, text))
            }
            Command::SetTableCell {
                id,
                row,
                column,
                text,
            } => self.edit_table(&id, |t| t.set_cell(row, column, text)),
            Command::AddReference { reference } => self.add_reference(reference),
            Command::UpdateReference { id, patch } => self.update_reference(&id, patch),
            Command::RemoveReference { id } => self.remove_reference(&id),
        }
    }

    /// Apply `commands` in order.
    pub fn apply_all<I>(self, commands: I) -> Self
    where
        I: IntoIterator<Item = Command>,
    {
        commands.into_iter().fold(self, PaperData::apply)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_tagged_commands() {
        let json = r#"[
            {"op": "set-title", "title": "Grasping"},
            {"op": "add-table-row", "id": "t1"},
            {"op": "insert-token", "section": "1", "caret": 0, "kind": "TABLE", "target": "t1"},
            {"op": "update-section", "id": "1", "patch": {"type": "equation"}}
        ]"#;
        let commands: Vec<Command> = serde_json::from_str(json).unwrap();
        assert_eq!(commands.len(), 4);
        assert_eq!(commands[1], Command::AddTableRow { id: "t1".to_string() });
        assert_eq!(commands[2].name(), "insert-token");
    }

    #[test]
    fn name_matches_serde_tag() {
        let command = Command::RemoveTableColumn {
            id: "t".to_string(),
            column: 0,
        };
        let value = serde_json::to_value(&command).unwrap();
        assert_eq!(value["op"], command.name());
    }

    #[test]
    fn apply_all_folds_in_order() {
        let paper = PaperData::default().apply_all(vec![
            Command::AddTable {
                table: Table::with_shape("t", 1, 1),
            },
            Command::AddTableColumn { id: "t".into() },
            Command::SetTableCell {
                id: "t".into(),
                row: 0,
                column: 1,
                text: "42".into(),
            },
            Command::RemoveTableColumn {
                id: "t".into(),
                column: 0,
            },
        ]);
        let table = &paper.tables[0];
        assert_eq!(table.headers, vec!["Column 2"]);
        assert_eq!(table.rows, vec![vec!["42".to_string()]]);
    }
}
