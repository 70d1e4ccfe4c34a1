//! Structural validation of a token sequence
//!
//! A single left-to-right scan that rejects the malformed shapes authors
//! most often write, before any tree is built:
//! - unbalanced parentheses
//! - `AND AND`, `AND OR`
//! - comparisons missing a side, or chained (`a > > b`, `a = b = c`)
//! - connectives at the start or end of the expression or of a group
//! - parentheses nested deeper than [`MAX_GROUP_DEPTH`]

use crate::{MAX_GROUP_DEPTH, too_deep};
use cohort_expr_ast::{Span, Spanned, Token};
use cohort_expr_diagnostics::{
    CX0004, CX0005, CX0006, CX0007, CX0008, CX0009, CX0011, ExprError, Result,
};

/// Check `tokens` (produced from `source`) for structural errors
///
/// Stops at the first violation.
pub fn validate_tokens(tokens: &[Spanned<Token>], source: &str) -> Result<()> {
    if tokens.is_empty() {
        return Err(ExprError::grammar(
            CX0004,
            "expression is empty",
            source,
            Span::point(0),
        ));
    }

    let end_of_input = Span::point(source.trim_end().len());
    let mut open_groups: Vec<Span> = Vec::new();

    for (i, token) in tokens.iter().enumerate() {
        let prev = i.checked_sub(1).and_then(|p| tokens.get(p)).map(|t| &t.inner);
        let next = tokens.get(i + 1);

        match &token.inner {
            Token::LeftParen => {
                if let Some(Spanned {
                    inner: Token::RightParen,
                    span,
                }) = next
                {
                    return Err(ExprError::grammar(
                        CX0011,
                        "empty parentheses",
                        source,
                        token.span.merge(*span),
                    ));
                }
                if open_groups.len() >= MAX_GROUP_DEPTH {
                    return Err(too_deep(source, token.span));
                }
                open_groups.push(token.span);
            }
            Token::RightParen => {
                if open_groups.pop().is_none() {
                    return Err(ExprError::grammar(
                        CX0006,
                        "')' has no matching '('",
                        source,
                        token.span,
                    ));
                }
            }
            Token::Connective(connective) => {
                match prev {
                    None => {
                        return Err(ExprError::grammar(
                            CX0009,
                            format!("expression cannot start with '{connective}'"),
                            source,
                            token.span,
                        ));
                    }
                    Some(Token::LeftParen) => {
                        return Err(ExprError::grammar(
                            CX0009,
                            format!("'{connective}' cannot follow '('"),
                            source,
                            token.span,
                        ));
                    }
                    Some(Token::Connective(before)) => {
                        return Err(ExprError::grammar(
                            CX0007,
                            format!("'{connective}' directly follows '{before}'"),
                            source,
                            token.span,
                        ));
                    }
                    Some(_) => {}
                }
                match next.map(|t| &t.inner) {
                    None => {
                        return Err(ExprError::grammar(
                            CX0009,
                            format!("expression cannot end with '{connective}'"),
                            source,
                            token.span,
                        ));
                    }
                    Some(Token::RightParen) => {
                        return Err(ExprError::grammar(
                            CX0009,
                            format!("'{connective}' cannot precede ')'"),
                            source,
                            token.span,
                        ));
                    }
                    Some(_) => {}
                }
            }
            Token::Comparison(op) => {
                match prev {
                    Some(Token::Identifier(_)) => {
                        let before_field = i.checked_sub(2).and_then(|p| tokens.get(p));
                        if let Some(Spanned {
                            inner: Token::Comparison(_),
                            ..
                        }) = before_field
                        {
                            return Err(ExprError::grammar(
                                CX0008,
                                format!("comparisons cannot be chained with '{op}'"),
                                source,
                                token.span,
                            ));
                        }
                    }
                    None => {
                        return Err(ExprError::grammar(
                            CX0008,
                            format!("'{op}' has no field on its left"),
                            source,
                            token.span,
                        ));
                    }
                    Some(other) => {
                        return Err(ExprError::grammar(
                            CX0008,
                            format!("'{op}' must follow a field, found {}", other.describe()),
                            source,
                            token.span,
                        ));
                    }
                }
                match next {
                    Some(operand) if operand.inner.is_operand() => {}
                    Some(other) => {
                        return Err(ExprError::grammar(
                            CX0008,
                            format!(
                                "'{op}' must be followed by a value, found {}",
                                other.inner.describe()
                            ),
                            source,
                            other.span,
                        ));
                    }
                    None => {
                        return Err(ExprError::grammar(
                            CX0008,
                            format!("'{op}' has no value on its right"),
                            source,
                            end_of_input,
                        ));
                    }
                }
            }
            Token::Identifier(_) | Token::String { .. } | Token::Number(_) => {}
        }
    }

    if let Some(unclosed) = open_groups.pop() {
        return Err(ExprError::grammar(
            CX0005,
            "'(' is never closed",
            source,
            unclosed,
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenize;
    use cohort_expr_diagnostics::{CX0012, ErrorCode};

    fn check(source: &str) -> Result<()> {
        let tokens = tokenize(source).expect("tokenize");
        validate_tokens(&tokens, source)
    }

    fn code_of(source: &str) -> ErrorCode {
        check(source)
            .err()
            .unwrap_or_else(|| panic!("expected '{source}' to be rejected"))
            .code()
    }

    #[test]
    fn test_well_formed() {
        for source in [
            "a",
            "a AND b",
            "foo AND (bar > 3 OR baz = 'hello')",
            "((a))",
            "a = b",
            "\"quoted\"",
        ] {
            assert!(check(source).is_ok(), "{source}");
        }
    }

    #[test]
    fn test_fixture_violations() {
        assert_eq!(code_of("a AND AND b"), CX0007);
        assert_eq!(code_of("(a AND b"), CX0005);
        assert_eq!(code_of("a > > b"), CX0008);
    }

    #[test]
    fn test_unbalanced() {
        assert_eq!(code_of("a AND b)"), CX0006);
        assert_eq!(code_of(")a("), CX0006);
        assert_eq!(code_of("((a)"), CX0005);
        assert_eq!(code_of("()"), CX0011);
    }

    #[test]
    fn test_dangling_connectives() {
        assert_eq!(code_of("AND a"), CX0009);
        assert_eq!(code_of("a OR"), CX0009);
        assert_eq!(code_of("(OR a)"), CX0009);
        assert_eq!(code_of("(a AND) b"), CX0009);
    }

    #[test]
    fn test_incomplete_comparisons() {
        assert_eq!(code_of("> 3"), CX0008);
        assert_eq!(code_of("a >"), CX0008);
        assert_eq!(code_of("3 < a"), CX0008);
        assert_eq!(code_of("a = (b)"), CX0008);
        assert_eq!(code_of("a = b = c"), CX0008);
        assert_eq!(code_of("a == 3"), CX0008);
    }

    #[test]
    fn test_empty() {
        assert_eq!(code_of(""), CX0004);
        assert_eq!(code_of("   "), CX0004);
    }

    #[test]
    fn test_error_points_at_second_connective() {
        let err = check("a AND AND b").unwrap_err();
        assert_eq!(err.location().map(|l| l.column), Some(7));
    }

    #[test]
    fn test_group_depth_limit() {
        let nested = |depth: usize| format!("{}a{}", "(".repeat(depth), ")".repeat(depth));
        assert!(check(&nested(MAX_GROUP_DEPTH)).is_ok());

        let err = check(&nested(MAX_GROUP_DEPTH + 1)).unwrap_err();
        assert_eq!(err.code(), CX0012);
        assert_eq!(err.location().map(|l| l.column), Some(MAX_GROUP_DEPTH + 1));
    }
}
