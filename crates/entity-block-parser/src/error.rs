//! Error and diagnostic types of the entity parser.
//!
//! A [`Diagnostic`] carries an optional [`ErrorCode`], a labelled source span
//! and help text. [`ParseError`] wraps the diagnostic returned from
//! [`parse`](crate::parse).
//!
//! # Example
//!
//! ```
//! # use entity_block_parser::error::{Diagnostic, ErrorCode};
//! # use entity_block_parser::Span;
//! let diag = Diagnostic::error("entity has no name")
//!     .with_code(ErrorCode::E101)
//!     .with_label(Span::new(0..6), "entity declared here")
//!     .with_help("write `entity <name> is`");
//! assert_eq!(diag.to_string(), "error[E101]: entity has no name");
//! ```

mod diagnostic;
mod error_code;
mod label;
mod parse_error;

pub use diagnostic::Diagnostic;
pub use error_code::ErrorCode;
pub use label::Label;
pub use parse_error::ParseError;
