//! Field resolution and bare-field expansion
//!
//! Lowers a parsed [`Expression`] into a [`Predicate`]: every field name is
//! replaced by its physical column reference, every bare field test becomes an
//! explicit "not empty" comparison, and every quoted value has passed the
//! [`LiteralPolicy`].

use crate::LiteralPolicy;
use cohort_expr_ast::{ComparisonOp, Connective, EmptyValue, Expression, Field, Literal, Operand};
use cohort_expr_diagnostics::{CX0200, CX0201, ExprError, FieldMap, Result};
use indexmap::IndexMap;
use serde::Deserialize;

/// Logical field name to physical column reference (`table.column`)
pub type NameMap = IndexMap<String, String>;

/// Logical field name to the value that field holds when "absent"
pub type EmptyValueMap = IndexMap<String, EmptyValue>;

/// Lookup of field names supplied by the query-assembly layer
pub trait FieldSource {
    /// Physical column reference for a logical field
    fn column(&self, field: &str) -> Option<&str>;

    /// Sentinel used when `field` appears as a bare test
    fn empty_value(&self, field: &str) -> Option<&EmptyValue>;
}

/// Owned name and empty-value maps, deserializable from JSON
///
/// ```json
/// {
///   "names": {"foo": "table1.foo", "baz": "other"},
///   "empty_values": {"foo": 0, "baz": ""}
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct FieldMaps {
    #[serde(default, alias = "name_map")]
    pub names: NameMap,
    #[serde(default, alias = "empty_value_map")]
    pub empty_values: EmptyValueMap,
}

impl FieldMaps {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a field usable both in comparisons and as a bare test
    pub fn with_field(
        mut self,
        name: impl Into<String>,
        column: impl Into<String>,
        empty: impl Into<EmptyValue>,
    ) -> Self {
        let name = name.into();
        self.empty_values.insert(name.clone(), empty.into());
        self.names.insert(name, column.into());
        self
    }

    /// Register a field usable only in comparisons
    pub fn with_column(mut self, name: impl Into<String>, column: impl Into<String>) -> Self {
        self.names.insert(name.into(), column.into());
        self
    }
}

impl FieldSource for FieldMaps {
    fn column(&self, field: &str) -> Option<&str> {
        self.names.get(field).map(String::as_str)
    }

    fn empty_value(&self, field: &str) -> Option<&EmptyValue> {
        self.empty_values.get(field)
    }
}

impl FieldSource for (&NameMap, &EmptyValueMap) {
    fn column(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    fn empty_value(&self, field: &str) -> Option<&EmptyValue> {
        self.1.get(field)
    }
}

/// Right-hand side of a resolved comparison
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value<'a> {
    Literal(&'a Literal),
    Column(&'a str),
}

/// A validated, resolved and expanded expression, ready to render
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Predicate<'a> {
    /// `column <op> value`
    Compare {
        column: &'a str,
        op: ComparisonOp,
        value: Value<'a>,
    },
    /// Expansion of a bare field test: `( column != sentinel )`
    NotEmpty {
        column: &'a str,
        sentinel: &'a EmptyValue,
    },
    /// Operands joined by one connective, in source order
    Logical {
        op: Connective,
        operands: Vec<Predicate<'a>>,
    },
    Group(Box<Predicate<'a>>),
    Value(&'a Literal),
}

/// Lower `expr` against `fields`, stopping at the first failing node
///
/// Nodes are visited in source order, so the reported error is always the
/// leftmost problem in the expression text.
pub fn resolve<'a, S>(
    expr: &'a Expression,
    fields: &'a S,
    policy: &LiteralPolicy,
    source: &str,
) -> Result<Predicate<'a>>
where
    S: FieldSource + ?Sized,
{
    let resolver = Resolver {
        fields,
        policy,
        source,
    };
    resolver.lower(expr)
}

struct Resolver<'a, 'p, S: ?Sized> {
    fields: &'a S,
    policy: &'p LiteralPolicy,
    source: &'p str,
}

impl<'a, S: FieldSource + ?Sized> Resolver<'a, '_, S> {
    fn lower(&self, expr: &'a Expression) -> Result<Predicate<'a>> {
        match expr {
            Expression::Comparison { field, op, rhs } => {
                let column = self.column(field)?;
                let value = match rhs {
                    Operand::Field(other) => Value::Column(self.column(other)?),
                    Operand::Literal(literal) => {
                        self.policy.check(literal, self.source)?;
                        Value::Literal(&literal.inner)
                    }
                };
                Ok(Predicate::Compare {
                    column,
                    op: *op,
                    value,
                })
            }
            Expression::BareTest { field } => {
                let column = self.column(field)?;
                let sentinel = self.fields.empty_value(&field.inner).ok_or_else(|| {
                    ExprError::unknown_field(
                        CX0201,
                        field.inner.as_str(),
                        FieldMap::EmptyValues,
                        self.source,
                        field.span,
                    )
                })?;
                Ok(Predicate::NotEmpty { column, sentinel })
            }
            Expression::Logical { op, operands } => Ok(Predicate::Logical {
                op: *op,
                operands: operands
                    .iter()
                    .map(|operand| self.lower(operand))
                    .collect::<Result<_>>()?,
            }),
            Expression::Group { inner } => Ok(Predicate::Group(Box::new(self.lower(inner)?))),
            Expression::Value(literal) => {
                self.policy.check(literal, self.source)?;
                Ok(Predicate::Value(&literal.inner))
            }
        }
    }

    fn column(&self, field: &Field) -> Result<&'a str> {
        self.fields.column(&field.inner).ok_or_else(|| {
            ExprError::unknown_field(
                CX0200,
                field.inner.as_str(),
                FieldMap::Names,
                self.source,
                field.span,
            )
        })
    }
}
