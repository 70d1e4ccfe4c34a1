//! Diagnostics for cohort filter expressions
//!
//! This crate provides the error handling infrastructure shared by the
//! tokenizer, parser and compiler: error codes, source locations and the
//! three-way error taxonomy (grammar, literal format, unknown field).

mod error;
mod error_code;
mod span;

pub use error::*;
pub use error_code::*;
pub use span::*;

/// Result type for expression compilation
pub type Result<T> = std::result::Result<T, ExprError>;
