//! Literal values and empty-value sentinels

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Quote character a string literal was written with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QuoteStyle {
    /// `'value'`
    Single,
    /// `"value"`
    Double,
}

impl QuoteStyle {
    pub const fn char(&self) -> char {
        match self {
            Self::Single => '\'',
            Self::Double => '"',
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '\'' => Some(Self::Single),
            '"' => Some(Self::Double),
            _ => None,
        }
    }
}

/// A literal value as written by the expression author
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Literal {
    /// Quoted string, content only
    String(String),
    /// Number in its source spelling (`3`, `-1`, `2.50`)
    Number(String),
}

impl Literal {
    /// SQL spelling: strings single-quoted, numbers unchanged
    pub fn to_sql(&self) -> String {
        match self {
            Literal::String(value) => quote_sql(value),
            Literal::Number(raw) => raw.clone(),
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_sql())
    }
}

/// Value a field holds when it is "absent", used to expand bare field tests
///
/// Deserializes from a JSON number or string.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawEmptyValue")]
pub enum EmptyValue {
    /// Rendered unquoted
    Number(Decimal),
    /// Rendered as a single-quoted string
    Text(String),
}

impl EmptyValue {
    pub fn to_sql(&self) -> String {
        match self {
            EmptyValue::Number(n) => n.normalize().to_string(),
            EmptyValue::Text(s) => quote_sql(s),
        }
    }
}

impl fmt::Display for EmptyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_sql())
    }
}

impl From<i64> for EmptyValue {
    fn from(n: i64) -> Self {
        Self::Number(Decimal::from(n))
    }
}

impl From<i32> for EmptyValue {
    fn from(n: i32) -> Self {
        Self::Number(Decimal::from(n))
    }
}

impl From<Decimal> for EmptyValue {
    fn from(n: Decimal) -> Self {
        Self::Number(n)
    }
}

impl From<&str> for EmptyValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for EmptyValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawEmptyValue {
    Integer(i64),
    Float(f64),
    Text(String),
}

impl TryFrom<RawEmptyValue> for EmptyValue {
    type Error = rust_decimal::Error;

    fn try_from(raw: RawEmptyValue) -> Result<Self, Self::Error> {
        match raw {
            RawEmptyValue::Integer(n) => Ok(Self::from(n)),
            RawEmptyValue::Float(f) => Decimal::try_from(f).map(Self::Number),
            RawEmptyValue::Text(s) => Ok(Self::Text(s)),
        }
    }
}

/// Single-quote a string for SQL, doubling embedded quotes
fn quote_sql(value: &str) -> String {
    format!("'{}'", value.replace('\'', "''"))
}
