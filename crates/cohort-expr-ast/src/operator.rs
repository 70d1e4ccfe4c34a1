//! Comparison operators and logical connectives

use serde::{Deserialize, Serialize};
use std::fmt;

/// Comparison between a field and a value (or another field)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ComparisonOp {
    /// `=`
    Equal,
    /// `!=`
    NotEqual,
    /// `<`
    Less,
    /// `<=`
    LessOrEqual,
    /// `>`
    Greater,
    /// `>=`
    GreaterOrEqual,
}

impl ComparisonOp {
    /// All operators, two-character symbols first so greedy matching works
    pub const ALL: [ComparisonOp; 6] = [
        Self::GreaterOrEqual,
        Self::LessOrEqual,
        Self::NotEqual,
        Self::Equal,
        Self::Greater,
        Self::Less,
    ];

    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Equal => "=",
            Self::NotEqual => "!=",
            Self::Less => "<",
            Self::LessOrEqual => "<=",
            Self::Greater => ">",
            Self::GreaterOrEqual => ">=",
        }
    }
}

impl fmt::Display for ComparisonOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Logical connective; AND binds tighter than OR
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Connective {
    And,
    Or,
}

impl Connective {
    /// Canonical (upper case) keyword
    pub const fn keyword(&self) -> &'static str {
        match self {
            Self::And => "AND",
            Self::Or => "OR",
        }
    }

    /// Match a keyword in any letter case
    pub fn from_keyword(word: &str) -> Option<Self> {
        if word.eq_ignore_ascii_case("and") {
            Some(Self::And)
        } else if word.eq_ignore_ascii_case("or") {
            Some(Self::Or)
        } else {
            None
        }
    }
}

impl fmt::Display for Connective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keywords_are_case_insensitive() {
        assert_eq!(Connective::from_keyword("AND"), Some(Connective::And));
        assert_eq!(Connective::from_keyword("or"), Some(Connective::Or));
        assert_eq!(Connective::from_keyword("Or"), Some(Connective::Or));
        assert_eq!(Connective::from_keyword("andy"), None);
    }

    #[test]
    fn test_greedy_order() {
        let first_single = ComparisonOp::ALL
            .iter()
            .position(|op| op.symbol().len() == 1)
            .unwrap();
        assert!(ComparisonOp::ALL[first_single..]
            .iter()
            .all(|op| op.symbol().len() == 1));
    }
}
