//! The error type returned by [`parse`](crate::parse).

use std::fmt;

use crate::error::Diagnostic;

/// Error type of entity extraction.
///
/// Extraction stops at the first problem, so the error holds exactly one
/// [`Diagnostic`].
#[derive(Debug)]
pub struct ParseError {
    diagnostic: Diagnostic,
}

impl ParseError {
    pub fn new(diagnostic: Diagnostic) -> Self {
        Self { diagnostic }
    }

    pub fn diagnostic(&self) -> &Diagnostic {
        &self.diagnostic
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.diagnostic, f)
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.diagnostic)
    }
}

impl From<Diagnostic> for ParseError {
    fn from(diagnostic: Diagnostic) -> Self {
        Self::new(diagnostic)
    }
}
