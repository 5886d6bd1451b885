/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use ieeedoc_core::{FigureSize, TokenKind};
use ieeedoc_processor::io::EXPORT_FILE_NAME;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "ieeedoc", author, version, long_about = None)]
#[command(about = "Edit and preview IEEE-style paper drafts")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Config file (defaults to ./ieeedoc.toml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory holding the working paper
    #[arg(long, global = true)]
    pub store: Option<PathBuf>,

    /// More log output (-v debug, -vv trace); RUST_LOG takes precedence
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Command {
    /// Write the template paper as JSON
    New {
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Render the preview of a paper file, or of the working paper
    Render {
        paper: Option<PathBuf>,

        #[arg(short, long, value_enum)]
        format: Option<Format>,

        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Report duplicate ids, missing token targets and ragged tables
    Check {
        paper: Option<PathBuf>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Apply a JSON or YAML list of edits
    Apply {
        edits: PathBuf,

        /// Edit this paper file in place instead of the working paper
        #[arg(long)]
        paper: Option<PathBuf>,
    },

    /// Add a new item to the working paper
    Add {
        #[command(subcommand)]
        item: AddItem,
    },

    /// Insert a figure or table token into the active section
    Cite {
        #[arg(value_enum)]
        kind: Kind,

        id: String,

        /// Byte offset in the section content (default: the end)
        #[arg(long)]
        caret: Option<usize>,
    },

    /// Show or change the active section
    Select { id: Option<String> },

    /// Export the working paper
    Export {
        #[arg(short, long, default_value = EXPORT_FILE_NAME)]
        output: PathBuf,
    },

    /// Replace the working paper with a JSON export
    Import { file: PathBuf },

    /// Discard the working paper and start over from the template
    Reset,

    /// Generate the JSON schema for paper files
    #[cfg(feature = "schema")]
    Schema,

    /// Generate shell completion scripts
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand)]
pub enum AddItem {
    /// A placeholder text section at the end
    Section,

    /// An empty author
    Author,

    Keyword { text: String },

    /// An empty table with numbered column headers
    Table {
        #[arg(long, default_value_t = 3)]
        rows: usize,

        #[arg(long, default_value_t = 3)]
        columns: usize,
    },

    /// A figure embedding an image file
    Figure {
        image: PathBuf,

        #[arg(long)]
        caption: Option<String>,

        #[arg(long, value_enum)]
        size: Option<Size>,
    },

    /// A blank journal reference dated this year
    Reference,
}

#[derive(
    Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    #[default]
    Html,
    Plain,
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Format::Html => write!(f, "html"),
            Format::Plain => write!(f, "plain"),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Kind {
    Figure,
    Table,
}

impl From<Kind> for TokenKind {
    fn from(kind: Kind) -> Self {
        match kind {
            Kind::Figure => TokenKind::Figure,
            Kind::Table => TokenKind::Table,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Size {
    Small,
    Medium,
    Large,
    FullWidth,
}

impl From<Size> for FigureSize {
    fn from(size: Size) -> Self {
        match size {
            Size::Small => FigureSize::Small,
            Size::Medium => FigureSize::Medium,
            Size::Large => FigureSize::Large,
            Size::FullWidth => FigureSize::FullWidth,
        }
    }
}
