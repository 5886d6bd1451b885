/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

use anyhow::{Context, Result};
use ieeedoc_processor::RenderOptions;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::cli::Format;

pub const PROJECT_CONFIG: &str = "ieeedoc.toml";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub render: RenderConfig,

    #[serde(default)]
    pub store: StoreConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderConfig {
    #[serde(default)]
    pub format: Format,

    #[serde(default = "default_figure_max_width")]
    pub figure_max_width: String,

    #[serde(default = "default_figure_max_height")]
    pub figure_max_height: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreConfig {
    #[serde(default = "default_store_dir")]
    pub dir: PathBuf,

    #[serde(default = "default_autosave_ms")]
    pub autosave_ms: u64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            format: Format::default(),
            figure_max_width: default_figure_max_width(),
            figure_max_height: default_figure_max_height(),
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            dir: default_store_dir(),
            autosave_ms: default_autosave_ms(),
        }
    }
}

fn default_figure_max_width() -> String {
    RenderOptions::default().figure_max_width
}

fn default_figure_max_height() -> String {
    RenderOptions::default().figure_max_height
}

fn default_store_dir() -> PathBuf {
    PathBuf::from(".ieeedoc")
}

fn default_autosave_ms() -> u64 {
    1000
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("invalid config {}", path.display()))?;
        Ok(config)
    }

    /// `ieeedoc.toml` in the working directory, if there is one.
    pub fn load_from_project() -> Result<Option<Self>> {
        let path = Path::new(PROJECT_CONFIG);
        if path.exists() {
            return Ok(Some(Self::load(path)?));
        }
        Ok(None)
    }

    /// An explicit `--config` must exist; otherwise fall back to the
    /// project file, then to defaults.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::load(path),
            None => Ok(Self::load_from_project()?.unwrap_or_default()),
        }
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            figure_max_width: self.render.figure_max_width.clone(),
            figure_max_height: self.render.figure_max_height.clone(),
        }
    }

    pub fn autosave_interval(&self) -> Duration {
        Duration::from_millis(self.store.autosave_ms)
    }
}
