//! Error codes for entity diagnostics.
//!
//! - `E1xx` - Entity extraction errors

use std::fmt;

/// Error codes for categorizing diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// No entity declaration.
    ///
    /// The input does not contain the `entity` keyword outside comments.
    E100,

    /// Unnamed entity.
    ///
    /// The `entity` keyword was found, but no name precedes the `is` keyword.
    E101,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E100 => "E100",
            ErrorCode::E101 => "E101",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_display() {
        assert_eq!(ErrorCode::E100.to_string(), "E100");
        assert_eq!(ErrorCode::E101.as_str(), "E101");
    }
}
