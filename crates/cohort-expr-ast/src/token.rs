//! Lexical tokens

use crate::{ComparisonOp, Connective, Literal, QuoteStyle};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A classified lexical unit of a filter expression
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Token {
    /// Field name
    Identifier(String),
    /// `=`, `!=`, `<`, `<=`, `>`, `>=`
    Comparison(ComparisonOp),
    /// `AND` / `OR`
    Connective(Connective),
    LeftParen,
    RightParen,
    /// Quoted string, content without the quotes
    String { value: String, quote: QuoteStyle },
    /// Number in its source spelling
    Number(String),
}

impl Token {
    /// Tokens that can stand on the right of a comparison operator
    pub const fn is_operand(&self) -> bool {
        matches!(
            self,
            Token::Identifier(_) | Token::String { .. } | Token::Number(_)
        )
    }

    pub fn as_literal(&self) -> Option<Literal> {
        match self {
            Token::String { value, .. } => Some(Literal::String(value.clone())),
            Token::Number(raw) => Some(Literal::Number(raw.clone())),
            _ => None,
        }
    }

    /// Short description used in error messages
    pub fn describe(&self) -> String {
        match self {
            Token::Identifier(name) => format!("field '{name}'"),
            Token::Comparison(op) => format!("operator '{op}'"),
            Token::Connective(c) => format!("'{c}'"),
            Token::LeftParen => "'('".to_string(),
            Token::RightParen => "')'".to_string(),
            Token::String { .. } => format!("value {self}"),
            Token::Number(raw) => format!("number {raw}"),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Identifier(name) => f.write_str(name),
            Token::Comparison(op) => write!(f, "{op}"),
            Token::Connective(c) => write!(f, "{c}"),
            Token::LeftParen => f.write_str("("),
            Token::RightParen => f.write_str(")"),
            Token::String { value, quote } => {
                let q = quote.char();
                write!(f, "{q}{value}{q}")
            }
            Token::Number(raw) => f.write_str(raw),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_keeps_source_quote() {
        let tok = Token::String {
            value: "quoted".into(),
            quote: QuoteStyle::Double,
        };
        assert_eq!(tok.to_string(), "\"quoted\"");
        assert_eq!(tok.describe(), "value \"quoted\"");
    }

    #[test]
    fn test_operands() {
        assert!(Token::Identifier("a".into()).is_operand());
        assert!(Token::Number("3".into()).is_operand());
        assert!(!Token::Comparison(ComparisonOp::Greater).is_operand());
        assert!(!Token::LeftParen.is_operand());
    }
}
