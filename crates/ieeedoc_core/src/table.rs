/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Structural table edits.
//!
//! Every edit consumes the table and returns the next one. After each edit
//! every row has exactly `headers.len()` cells, provided the input did.
//! Removing the last row or column is allowed here; refusing it is an
//! editor policy (see [`crate::editor`]).

use crate::paper::Table;

impl Table {
    pub const NEW_CAPTION: &'static str = "Enter table caption here";

    /// A `rows` x `cols` table with `Column n` headers and empty cells.
    pub fn with_shape(id: impl Into<String>, rows: usize, cols: usize) -> Self {
        Self {
            id: id.into(),
            caption: Self::NEW_CAPTION.to_string(),
            headers: (1..=cols).map(default_header).collect(),
            rows: vec![vec![String::new(); cols]; rows],
        }
    }

    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    /// Whether every row has one cell per header.
    pub fn is_rectangular(&self) -> bool {
        self.rows.iter().all(|row| row.len() == self.headers.len())
    }

    /// Append an empty row.
    pub fn add_row(mut self) -> Self {
        self.rows.push(vec![String::new(); self.headers.len()]);
        self
    }

    /// Drop row `index`; out of range is a no-op.
    pub fn remove_row(mut self, index: usize) -> Self {
        if index < self.rows.len() {
            self.rows.remove(index);
        }
        self
    }

    /// Append a `Column n` header and an empty cell to every row.
    pub fn add_column(mut self) -> Self {
        let header = default_header(self.headers.len() + 1);
        self.headers.push(header);
        for row in &mut self.rows {
            row.push(String::new());
        }
        self
    }

    /// Drop column `index` from the headers and from every row.
    pub fn remove_column(mut self, index: usize) -> Self {
        if index >= self.headers.len() {
            return self;
        }
        self.headers.remove(index);
        for row in &mut self.rows {
            if index < row.len() {
                row.remove(index);
            }
        }
        self
    }

    pub fn set_header(mut self, column: usize, text: impl Into<String>) -> Self {
        if let Some(header) = self.headers.get_mut(column) {
            *header = text.into();
        }
        self
    }

    pub fn set_cell(mut self, row: usize, column: usize, text: impl Into<String>) -> Self {
        if let Some(cell) = self.rows.get_mut(row).and_then(|r| r.get_mut(column)) {
            *cell = text.into();
        }
        self
    }
}

fn default_header(n: usize) -> String {
    format!("Column {}", n)
}
