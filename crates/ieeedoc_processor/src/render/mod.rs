/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Output formats for the paper preview.

pub mod format;
pub mod html;
pub mod plain;

use ieeedoc_core::Figure;
use serde::{Deserialize, Serialize};

/// Presentation settings that are not part of the paper itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct RenderOptions {
    /// CSS max-width for figures without an explicit width.
    pub figure_max_width: String,
    /// CSS max-height for figures without an explicit height.
    pub figure_max_height: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            figure_max_width: "80%".to_string(),
            figure_max_height: "400px".to_string(),
        }
    }
}

impl RenderOptions {
    /// CSS `(max-width, max-height)` for `figure`.
    pub fn figure_box(&self, figure: &Figure) -> (String, String) {
        let width = figure
            .width
            .map(|w| format!("{}px", w))
            .unwrap_or_else(|| self.figure_max_width.clone());
        let height = figure
            .height
            .map(|h| format!("{}px", h))
            .unwrap_or_else(|| self.figure_max_height.clone());
        (width, height)
    }
}
