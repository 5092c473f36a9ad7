//! Error types for entity-block operations.
//!
//! This module provides the main error type [`EntityBlockError`] which wraps
//! the error conditions that can occur while converting an entity.

use std::io;

use thiserror::Error;

use entity_block_parser::error::ParseError;

/// The main error type for entity-block operations.
///
/// # Diagnostic Variants
///
/// The `Parse` variant carries the structured parse diagnostics together with
/// the source text, so callers can render labelled source snippets.
#[derive(Debug, Error)]
pub enum EntityBlockError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{err}")]
    Parse { err: ParseError, src: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Export error: {0}")]
    Export(Box<dyn std::error::Error>),
}

impl From<crate::export::Error> for EntityBlockError {
    fn from(error: crate::export::Error) -> Self {
        Self::Export(Box::new(error))
    }
}

impl EntityBlockError {
    /// Create a new `Parse` error with the associated source code.
    pub fn new_parse_error(err: ParseError, src: impl Into<String>) -> Self {
        Self::Parse {
            err,
            src: src.into(),
        }
    }
}
