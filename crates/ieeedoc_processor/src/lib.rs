/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! IEEE paper preview processor
//!
//! This crate renders an [`ieeedoc_core::PaperData`] snapshot into a single
//! formatted page: title block, authors, abstract and keywords, lettered
//! sections with their figure and table tokens resolved and numbered, and
//! the numbered reference list. It also reads and writes paper files and
//! keeps the working paper in a local blob store.
//!
//! The processor is pluggable with different output formats through
//! [`render::format::OutputFormat`]; HTML is the preview format.
//!
//! # Example
//!
//! ```rust
//! use ieeedoc_core::{Figure, PaperData, Section};
//! use ieeedoc_processor::Processor;
//!
//! let paper = PaperData {
//!     sections: vec![Section::new("1", "Introduction", "<p>See [[FIGURE:f1]].</p>")],
//!     figures: vec![Figure::new("f1", "data:image/png;base64,AAAA", "Pipeline")],
//!     ..Default::default()
//! };
//! let html = Processor::new(&paper).render();
//! assert!(html.contains("A. Introduction"));
//! assert!(html.contains("Fig. 1. Pipeline"));
//! ```

pub mod error;
pub mod io;
pub mod labels;
pub mod processor;
pub mod reference;
pub mod render;
pub mod store;

pub use error::ProcessorError;
pub use processor::{Numbering, Processor, RenderedPaper, RenderedSection, Unresolved};
pub use render::RenderOptions;
