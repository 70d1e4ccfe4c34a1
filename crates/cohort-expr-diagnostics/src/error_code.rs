//! Expression error codes following a structured numbering system
//!
//! Error code ranges:
//! - CX0001-CX0099: Grammar errors (tokenizing and structure)
//! - CX0100-CX0199: Literal format errors (quoted value hygiene)
//! - CX0200-CX0299: Resolution errors (field lookups)

use serde::{Deserialize, Serialize};
use std::fmt;

/// Error code identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ErrorCode(u16);

impl ErrorCode {
    pub const fn new(code: u16) -> Self {
        Self(code)
    }

    pub const fn code(&self) -> u16 {
        self.0
    }

    /// Get error information for this code
    pub fn info(&self) -> &'static ErrorInfo {
        ERROR_INFO
            .iter()
            .find(|(code, _)| *code == self.0)
            .map(|(_, info)| info)
            .unwrap_or(&UNKNOWN_ERROR)
    }

    /// Check if this is a grammar error (0001-0099)
    pub const fn is_grammar_error(&self) -> bool {
        self.0 >= 1 && self.0 < 100
    }

    /// Check if this is a literal format error (0100-0199)
    pub const fn is_literal_error(&self) -> bool {
        self.0 >= 100 && self.0 < 200
    }

    /// Check if this is a resolution error (0200-0299)
    pub const fn is_resolution_error(&self) -> bool {
        self.0 >= 200 && self.0 < 300
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CX{:04}", self.0)
    }
}

/// Information about an error code
#[derive(Debug, Clone)]
pub struct ErrorInfo {
    /// Short description of the error
    pub description: &'static str,
    /// Hint shown to the author of the expression
    pub help: Option<&'static str>,
}

impl ErrorInfo {
    const fn new(description: &'static str) -> Self {
        Self {
            description,
            help: None,
        }
    }

    const fn with_help(mut self, help: &'static str) -> Self {
        self.help = Some(help);
        self
    }
}

static UNKNOWN_ERROR: ErrorInfo = ErrorInfo::new("Unknown error");

static ERROR_INFO: [(u16, ErrorInfo); 16] = [
    // Grammar errors (0001-0099)
    (1, ErrorInfo::new("Unexpected character")),
    (
        2,
        ErrorInfo::new("Unterminated string literal")
            .with_help("Close the quoted value with the same quote character it was opened with"),
    ),
    (3, ErrorInfo::new("Invalid number format")),
    (4, ErrorInfo::new("Empty expression")),
    (5, ErrorInfo::new("Unclosed parenthesis").with_help("Add a matching ')'")),
    (6, ErrorInfo::new("Unmatched closing parenthesis")),
    (
        7,
        ErrorInfo::new("Adjacent logical connectives")
            .with_help("AND/OR must be separated by a condition"),
    ),
    (
        8,
        ErrorInfo::new("Incomplete comparison")
            .with_help("Comparisons take the form: field <operator> value"),
    ),
    (9, ErrorInfo::new("Dangling logical connective")),
    (10, ErrorInfo::new("Unexpected token").with_help("Join conditions with AND or OR")),
    (11, ErrorInfo::new("Empty parenthesized group")),
    (
        12,
        ErrorInfo::new("Parentheses nested too deeply")
            .with_help("Flatten the expression; groups may be nested at most 64 levels"),
    ),
    // Literal format errors (0100-0199)
    (
        100,
        ErrorInfo::new("Disallowed character in quoted value")
            .with_help("Quoted values may only contain letters, digits and underscores"),
    ),
    (101, ErrorInfo::new("Quoted value too long")),
    // Resolution errors (0200-0299)
    (
        200,
        ErrorInfo::new("Unknown field").with_help("Check the spelling of the field name"),
    ),
    (
        201,
        ErrorInfo::new("No empty value defined for field")
            .with_help("Compare the field against a value explicitly"),
    ),
];

// Grammar errors
pub const CX0001: ErrorCode = ErrorCode::new(1);
pub const CX0002: ErrorCode = ErrorCode::new(2);
pub const CX0003: ErrorCode = ErrorCode::new(3);
pub const CX0004: ErrorCode = ErrorCode::new(4);
pub const CX0005: ErrorCode = ErrorCode::new(5);
pub const CX0006: ErrorCode = ErrorCode::new(6);
pub const CX0007: ErrorCode = ErrorCode::new(7);
pub const CX0008: ErrorCode = ErrorCode::new(8);
pub const CX0009: ErrorCode = ErrorCode::new(9);
pub const CX0010: ErrorCode = ErrorCode::new(10);
pub const CX0011: ErrorCode = ErrorCode::new(11);
pub const CX0012: ErrorCode = ErrorCode::new(12);

// Literal format errors
pub const CX0100: ErrorCode = ErrorCode::new(100);
pub const CX0101: ErrorCode = ErrorCode::new(101);

// Resolution errors
pub const CX0200: ErrorCode = ErrorCode::new(200);
pub const CX0201: ErrorCode = ErrorCode::new(201);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_display() {
        assert_eq!(CX0001.to_string(), "CX0001");
        assert_eq!(CX0201.to_string(), "CX0201");
    }

    #[test]
    fn test_error_categories() {
        assert!(CX0007.is_grammar_error());
        assert!(!CX0007.is_literal_error());

        assert!(CX0100.is_literal_error());
        assert!(!CX0100.is_resolution_error());

        assert!(CX0200.is_resolution_error());
    }

    #[test]
    fn test_error_info() {
        assert_eq!(CX0005.info().description, "Unclosed parenthesis");
        assert_eq!(CX0005.info().help, Some("Add a matching ')'"));
        assert_eq!(ErrorCode::new(999).info().description, "Unknown error");
    }
}
