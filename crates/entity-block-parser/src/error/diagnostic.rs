//! The diagnostic type of the entity parser.

use std::fmt;

use crate::{
    error::{ErrorCode, Label},
    span::Span,
};

/// An error message with an optional code, source label and help text.
///
/// ```text
/// error[E101]: entity has no name
///   --> counter.vhd:3:1
///    |
///  3 | entity is
///    | ^^^^^^ entity declared here
///    |
///    = help: write `entity <name> is`
/// ```
#[derive(Debug, Clone)]
pub struct Diagnostic {
    code: Option<ErrorCode>,
    message: String,
    label: Option<Label>,
    help: Option<String>,
}

impl Diagnostic {
    /// Create an error diagnostic.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            code: None,
            message: message.into(),
            label: None,
            help: None,
        }
    }

    pub fn code(&self) -> Option<ErrorCode> {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// The source location the diagnostic points at, if any.
    pub fn label(&self) -> Option<&Label> {
        self.label.as_ref()
    }

    pub fn help(&self) -> Option<&str> {
        self.help.as_deref()
    }

    /// Set the error code.
    pub fn with_code(mut self, code: ErrorCode) -> Self {
        self.code = Some(code);
        self
    }

    /// Point the diagnostic at `span`.
    pub fn with_label(mut self, span: Span, message: impl Into<String>) -> Self {
        self.label = Some(Label::new(span, message));
        self
    }

    /// Set the help text.
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // "error[E100]: message" or "error: message"
        write!(f, "error")?;
        if let Some(code) = self.code {
            write!(f, "[{}]", code)?;
        }
        write!(f, ": {}", self.message)
    }
}

impl std::error::Error for Diagnostic {}
