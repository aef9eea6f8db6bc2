//! Error types for dictuml operations.
//!
//! This module provides the main error type [`DictUmlError`] which wraps
//! the error conditions that can occur while turning a document into a
//! diagram.

use std::io;

use thiserror::Error;

use crate::render;

/// The main error type for dictuml operations.
///
/// # Diagnostic Variants
///
/// The `Parse` variant keeps the source document next to the JSON error so
/// the offending location can be shown when the error is reported.
#[derive(Debug, Error)]
pub enum DictUmlError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{err}")]
    Parse { err: serde_json::Error, src: String },

    /// The document root was not a mapping.
    #[error("The input should be a mapping, found {found}")]
    InvalidInputKind { found: &'static str },

    #[error("Render error: {0}")]
    Render(#[from] render::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl DictUmlError {
    /// Create a new `Parse` error with the associated source document.
    pub fn new_parse_error(err: serde_json::Error, src: impl Into<String>) -> Self {
        Self::Parse {
            err,
            src: src.into(),
        }
    }
}
