//! Compilation entry points

use crate::{EmptyValueMap, FieldMaps, FieldSource, LiteralPolicy, NameMap, render, resolve};
use cohort_expr_diagnostics::Result;
use cohort_expr_parser::parse_expression;

/// Compile `expression` into predicate text using `fields` for lookups
///
/// Pure function of its inputs: the same arguments always produce the same
/// text or the same error, and nothing is returned unless every stage passed.
pub fn compile<S>(expression: &str, fields: &S, policy: &LiteralPolicy) -> Result<String>
where
    S: FieldSource + ?Sized,
{
    let result = parse_expression(expression)
        .and_then(|tree| resolve(&tree, fields, policy, expression).map(|p| render(&p)));

    match &result {
        Ok(text) => log::debug!("compiled {:?} to {:?}", expression, text),
        Err(e) => log::debug!("rejected {:?}: {}", expression, e),
    }
    result
}

/// Compile with the default [`LiteralPolicy`]
///
/// ```
/// use cohort_expr_compile::{format_expression, EmptyValueMap, NameMap};
///
/// let names: NameMap = [("foo", "table1.foo"), ("bar", "table2.bar")]
///     .into_iter()
///     .map(|(k, v)| (k.to_string(), v.to_string()))
///     .collect();
/// let empty: EmptyValueMap = [("foo".to_string(), 0.into())].into_iter().collect();
///
/// let sql = format_expression("foo AND bar > 3", &names, &empty).unwrap();
/// assert_eq!(sql, "( table1.foo != 0 ) AND table2.bar > 3");
/// ```
pub fn format_expression(
    expression: &str,
    name_map: &NameMap,
    empty_value_map: &EmptyValueMap,
) -> Result<String> {
    compile(
        expression,
        &(name_map, empty_value_map),
        &LiteralPolicy::default(),
    )
}

/// Reusable compiler holding field maps and a literal policy
///
/// Immutable once built; share it by reference across threads.
#[derive(Debug, Clone, Default)]
pub struct Compiler {
    fields: FieldMaps,
    policy: LiteralPolicy,
}

impl Compiler {
    pub fn new(fields: FieldMaps) -> Self {
        Self {
            fields,
            policy: LiteralPolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: LiteralPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn compile(&self, expression: &str) -> Result<String> {
        compile(expression, &self.fields, &self.policy)
    }

    /// Distinct logical field names referenced by `expression`, in order of
    /// first appearance
    ///
    /// Only grammar is checked; the fields need not be known to this compiler.
    pub fn referenced_fields(&self, expression: &str) -> Result<Vec<String>> {
        let tree = parse_expression(expression)?;
        Ok(tree.distinct_fields().into_iter().map(str::to_string).collect())
    }
}
