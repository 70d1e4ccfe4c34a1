//! Quoted value hygiene

use cohort_expr_ast::{Literal, Spanned};
use cohort_expr_diagnostics::{CX0100, CX0101, ExprError, Result};
use serde::{Deserialize, Serialize};

/// Longest quoted value accepted by default, in characters
pub const DEFAULT_MAX_LITERAL_LENGTH: usize = 16;

/// Limits applied to every quoted value in an expression
///
/// Quoted values may only contain ASCII letters, digits and underscores, so
/// they can be embedded in SQL without escaping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LiteralPolicy {
    pub max_length: usize,
}

impl Default for LiteralPolicy {
    fn default() -> Self {
        Self {
            max_length: DEFAULT_MAX_LITERAL_LENGTH,
        }
    }
}

impl LiteralPolicy {
    pub const fn with_max_length(max_length: usize) -> Self {
        Self { max_length }
    }

    /// Validate one literal; numbers always pass
    pub fn check(&self, literal: &Spanned<Literal>, expression: &str) -> Result<()> {
        let Literal::String(value) = &literal.inner else {
            return Ok(());
        };

        if let Some(bad) = value.chars().find(|c| !is_allowed(*c)) {
            return Err(ExprError::literal_format(
                CX0100,
                format!(
                    "'{value}' contains {}; quoted values may only contain letters, digits and underscores",
                    describe_char(bad)
                ),
                value.as_str(),
                expression,
                literal.span,
            ));
        }

        let length = value.chars().count();
        if length > self.max_length {
            return Err(ExprError::literal_format(
                CX0101,
                format!(
                    "'{value}' is {length} characters long; quoted values may be at most {} characters",
                    self.max_length
                ),
                value.as_str(),
                expression,
                literal.span,
            ));
        }

        Ok(())
    }
}

fn is_allowed(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

fn describe_char(c: char) -> String {
    match c {
        ' ' => "a space".to_string(),
        c if c.is_whitespace() => "whitespace".to_string(),
        c => format!("'{c}'"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cohort_expr_ast::Span;
    use cohort_expr_diagnostics::ErrorKind;

    fn string(value: &str) -> Spanned<Literal> {
        Spanned::new(Literal::String(value.to_string()), Span::new(0, value.len() + 2))
    }

    #[test]
    fn test_accepts_word_characters() {
        let policy = LiteralPolicy::default();
        for value in ["", "quoted", "hello", "E11_3", "exactly_16_chars"] {
            assert!(policy.check(&string(value), "").is_ok(), "{value}");
        }
    }

    #[test]
    fn test_rejects_spaces_and_punctuation() {
        let policy = LiteralPolicy::default();
        for value in ["no spaces", "no$special$chars", "a-b", "it's", "tab\there"] {
            let err = policy.check(&string(value), "").unwrap_err();
            assert_eq!(err.kind(), ErrorKind::LiteralFormat);
            assert_eq!(err.code(), CX0100, "{value}");
        }
    }

    #[test]
    fn test_rejects_long_values() {
        let err = LiteralPolicy::default()
            .check(&string("all_ok_characters_but_just_a_bit_too_long"), "")
            .unwrap_err();
        assert_eq!(err.code(), CX0101);
        assert!(LiteralPolicy::default().check(&string("seventeen_chars_x"), "").is_err());
    }

    #[test]
    fn test_custom_max_length() {
        let policy = LiteralPolicy::with_max_length(64);
        assert!(policy
            .check(&string("all_ok_characters_but_just_a_bit_too_long"), "")
            .is_ok());
    }

    #[test]
    fn test_numbers_are_not_checked() {
        let number = Spanned::new(Literal::Number("12345678901234567890".into()), Span::new(0, 20));
        assert!(LiteralPolicy::with_max_length(1).check(&number, "").is_ok());
    }

    #[test]
    fn test_policy_from_json() {
        let policy: LiteralPolicy = serde_json::from_str("{}").unwrap();
        assert_eq!(policy, LiteralPolicy::default());
        let policy: LiteralPolicy = serde_json::from_str(r#"{"max_length": 8}"#).unwrap();
        assert_eq!(policy.max_length, 8);
    }
}
