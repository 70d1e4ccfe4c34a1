//! Tokens and syntax tree for cohort filter expressions
//!
//! The filter language is deliberately small: field comparisons against
//! literals, bare field tests, `AND`/`OR` and parentheses. Both tokens and tree
//! nodes are closed enums so every stage matches them exhaustively.

mod expression;
mod literal;
mod operator;
mod token;

pub use expression::*;
pub use literal::*;
pub use operator::*;
pub use token::*;

pub use cohort_expr_diagnostics::Span;

/// A node with source span information
pub type Spanned<T> = cohort_expr_diagnostics::Spanned<T>;
