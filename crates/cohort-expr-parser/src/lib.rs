//! Cohort filter expression parser
//!
//! Three stages, each failing fast with a grammar error:
//! 1. [`tokenize`] lexes the text with winnow combinators
//! 2. [`validate_tokens`] scans the token sequence for structural mistakes
//! 3. [`parse_tokens`] builds the expression tree by recursive descent

mod expression;
mod lexer;
mod validate;

pub use expression::parse_tokens;
pub use lexer::tokenize;
pub use validate::validate_tokens;

use cohort_expr_ast::{Expression, Span};
use cohort_expr_diagnostics::{CX0012, ExprError, Result};

/// Deepest parenthesis nesting accepted
pub const MAX_GROUP_DEPTH: usize = 64;

/// Tokenize, validate and parse a filter expression
pub fn parse_expression(source: &str) -> Result<Expression> {
    let tokens = tokenize(source)?;
    validate_tokens(&tokens, source)?;
    parse_tokens(&tokens, source)
}

fn too_deep(source: &str, open: Span) -> ExprError {
    ExprError::grammar(
        CX0012,
        format!("parentheses are nested more than {MAX_GROUP_DEPTH} levels deep"),
        source,
        open,
    )
}
