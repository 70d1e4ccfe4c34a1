//! Predicate text rendering

use crate::{Predicate, Value};
use std::fmt;

/// Render a resolved predicate as SQL filter text
///
/// Output is fully determined by the tree:
/// - comparisons are `column op value` with single spaces
/// - bare field tests are always wrapped: `( column != sentinel )`
/// - explicit groups are `( inner )` at every depth
/// - connectives get no extra parentheses
pub fn render(predicate: &Predicate<'_>) -> String {
    predicate.to_string()
}

impl fmt::Display for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Literal(literal) => write!(f, "{literal}"),
            Value::Column(column) => f.write_str(column),
        }
    }
}

impl fmt::Display for Predicate<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Predicate::Compare { column, op, value } => write!(f, "{column} {op} {value}"),
            Predicate::NotEmpty { column, sentinel } => write!(f, "( {column} != {sentinel} )"),
            Predicate::Logical { op, operands } => {
                for (i, operand) in operands.iter().enumerate() {
                    if i > 0 {
                        write!(f, " {op} ")?;
                    }
                    write!(f, "{operand}")?;
                }
                Ok(())
            }
            Predicate::Group(inner) => write!(f, "( {inner} )"),
            Predicate::Value(literal) => write!(f, "{literal}"),
        }
    }
}
