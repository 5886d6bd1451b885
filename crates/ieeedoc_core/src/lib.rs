/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! IEEE paper document model.
//!
//! This crate holds the paper aggregate ([`PaperData`]) and everything that
//! changes it: update operations, table edits, the [`Command`] reducer and
//! the [`Editor`] state container. It also defines the inline reference
//! token language (`[[FIGURE:id]]`, `[[TABLE:id]]`) that section content
//! uses to point at figures and tables.
//!
//! Rendering lives in `ieeedoc_processor`.
//!
//! # Example
//!
//! ```rust
//! use ieeedoc_core::{Command, Editor, Figure, TokenKind};
//!
//! let mut editor = Editor::default();
//! editor
//!     .dispatch(Command::AddFigure {
//!         figure: Figure::new("arch", "data:image/png;base64,AAAA", "System overview"),
//!     })
//!     .unwrap();
//! assert!(editor.insert_token(3, TokenKind::Figure, "arch"));
//! assert!(editor
//!     .active_section()
//!     .unwrap()
//!     .content
//!     .starts_with("<p>[[FIGURE:arch]]"));
//! ```

pub mod command;
pub mod editor;
pub mod embedded;
pub mod id;
pub mod lint;
pub mod paper;
pub mod table;
pub mod token;
pub mod update;

pub use command::Command;
pub use editor::{Editor, PolicyError};
pub use id::IdGenerator;
pub use lint::Diagnostic;
pub use paper::{
    Author, Figure, FigureSize, PaperData, Reference, Section, SectionKind, Table,
};
pub use token::{Segment, Token, TokenKind};
pub use update::{AuthorPatch, FigurePatch, Patch, ReferencePatch, SectionPatch, TablePatch};
