//! Error adapter for converting EntityBlockError to miette diagnostics.
//!
//! Parse failures carry one diagnostic with an error code, help text and at
//! most one label into the source. [`Report`] exposes those through miette so
//! the CLI can print the offending source line. The other error kinds are
//! reported with a fixed `entity_block::*` code and their error chain.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan, SourceSpan};

use entity_block::EntityBlockError;
use entity_block_parser::error::Diagnostic;

/// A renderable view of an [`EntityBlockError`].
pub struct Report<'a>(&'a EntityBlockError);

impl<'a> Report<'a> {
    pub fn new(err: &'a EntityBlockError) -> Self {
        Self(err)
    }

    /// The parse diagnostic and its source text, for parse failures.
    fn parse_diagnostic(&self) -> Option<(&'a Diagnostic, &'a String)> {
        match self.0 {
            EntityBlockError::Parse { err, src } => Some((err.diagnostic(), src)),
            _ => None,
        }
    }
}

impl fmt::Debug for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Report").field(self.0).finish()
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.parse_diagnostic() {
            // miette prints the code next to the message
            Some((diag, _)) => f.write_str(diag.message()),
            None => fmt::Display::fmt(self.0, f),
        }
    }
}

impl std::error::Error for Report<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self.0 {
            EntityBlockError::Parse { .. } => None,
            other => std::error::Error::source(other),
        }
    }
}

impl MietteDiagnostic for Report<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code: Box<dyn fmt::Display> = match self.0 {
            EntityBlockError::Parse { err, .. } => Box::new(err.diagnostic().code()?),
            EntityBlockError::Io(_) => Box::new("entity_block::io"),
            EntityBlockError::Config(_) => Box::new("entity_block::config"),
            EntityBlockError::Export(_) => Box::new("entity_block::export"),
        };
        Some(code)
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let (diag, _) = self.parse_diagnostic()?;
        diag.help().map(|help| Box::new(help) as Box<dyn fmt::Display>)
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        let (_, src) = self.parse_diagnostic()?;
        Some(src as &dyn miette::SourceCode)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let (diag, _) = self.parse_diagnostic()?;
        let label = diag.label()?;

        let labeled = LabeledSpan::new_primary_with_span(
            Some(label.message().to_string()),
            SourceSpan::from(label.span().range()),
        );
        Some(Box::new(std::iter::once(labeled)))
    }
}
