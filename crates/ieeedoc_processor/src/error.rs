/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Processor errors.
//!
//! Rendering itself never fails; these come from reading, writing and
//! parsing stored papers.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProcessorError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse {0}: {1}")]
    ParseError(String, String),

    #[error("failed to serialize paper: {0}")]
    SerializeError(String),

    #[error("unsupported image type: {0}")]
    UnsupportedImage(String),

    #[error("store error for key `{key}`: {message}")]
    StoreError { key: String, message: String },
}

impl From<serde_json::Error> for ProcessorError {
    fn from(e: serde_json::Error) -> Self {
        ProcessorError::ParseError("JSON".to_string(), e.to_string())
    }
}

impl From<serde_yaml::Error> for ProcessorError {
    fn from(e: serde_yaml::Error) -> Self {
        ProcessorError::ParseError("YAML".to_string(), e.to_string())
    }
}
