//! Expression tree

use crate::{ComparisonOp, Connective, Literal, Spanned};
use indexmap::IndexSet;

/// A field name together with where it appeared in the source
pub type Field = Spanned<String>;

/// Right-hand side of a comparison
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operand {
    Literal(Spanned<Literal>),
    /// Field-to-field comparison
    Field(Field),
}

/// A parsed filter expression
///
/// Produced top-down from a finite token stream, so the tree has no cycles.
/// `Group` nodes correspond one-to-one with parenthesis pairs in the source.
/// A run of terms joined by the same connective is a single `Logical` node,
/// so nesting depth grows with parentheses only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expression {
    /// `field <op> value`
    Comparison {
        field: Field,
        op: ComparisonOp,
        rhs: Operand,
    },
    /// A standalone field reference, true when the field is not empty
    BareTest { field: Field },
    /// `a AND b AND ...` / `a OR b OR ...`, at least two operands in source
    /// order
    Logical {
        op: Connective,
        operands: Vec<Expression>,
    },
    /// `( inner )`
    Group { inner: Box<Expression> },
    /// A standalone literal
    Value(Spanned<Literal>),
}

impl Expression {
    /// Join `operands` with `op`; a single operand is returned unchanged
    pub fn logical(op: Connective, operands: Vec<Expression>) -> Self {
        match <[Expression; 1]>::try_from(operands) {
            Ok([only]) => only,
            Err(operands) => Self::Logical { op, operands },
        }
    }

    pub fn group(inner: Expression) -> Self {
        Self::Group {
            inner: Box::new(inner),
        }
    }

    /// Visit every node in source order (parent before children)
    pub fn walk<'a>(&'a self, visit: &mut impl FnMut(&'a Expression)) {
        visit(self);
        match self {
            Expression::Logical { operands, .. } => {
                for operand in operands {
                    operand.walk(visit);
                }
            }
            Expression::Group { inner } => inner.walk(visit),
            Expression::Comparison { .. } | Expression::BareTest { .. } | Expression::Value(_) => {}
        }
    }

    /// Every field reference in source order, duplicates included
    pub fn fields(&self) -> Vec<&Field> {
        let mut fields = Vec::new();
        self.walk(&mut |node| match node {
            Expression::Comparison { field, rhs, .. } => {
                fields.push(field);
                if let Operand::Field(other) = rhs {
                    fields.push(other);
                }
            }
            Expression::BareTest { field } => fields.push(field),
            _ => {}
        });
        fields
    }

    /// Distinct field names in order of first appearance
    pub fn distinct_fields(&self) -> Vec<&str> {
        let names: IndexSet<&str> = self.fields().into_iter().map(|f| f.inner.as_str()).collect();
        names.into_iter().collect()
    }
}
