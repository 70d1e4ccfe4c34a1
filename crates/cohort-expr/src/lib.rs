//! Cohort filter expression compiler
//!
//! Compiles the filter criteria written by study authors into SQL predicate
//! text for the query-assembly layer.
//!
//! # Example
//!
//! ```
//! use cohort_expr::{Compiler, FieldMaps};
//!
//! let compiler = Compiler::new(
//!     FieldMaps::new()
//!         .with_field("foo", "table1.foo", 0)
//!         .with_field("bar", "table2.bar", 0)
//!         .with_field("baz", "other", ""),
//! );
//!
//! let sql = compiler.compile("foo AND (bar > 3 OR baz = 'hello')")?;
//! assert_eq!(sql, "( table1.foo != 0 ) AND ( table2.bar > 3 OR other = 'hello' )");
//! # Ok::<(), cohort_expr::ExprError>(())
//! ```

// Re-export all public APIs from internal crates
pub use cohort_expr_ast as ast;
pub use cohort_expr_compile as compile;
pub use cohort_expr_diagnostics as diagnostics;
pub use cohort_expr_parser as parser;

// Convenience re-exports
pub use cohort_expr_ast::{EmptyValue, Expression};
pub use cohort_expr_compile::{
    Compiler, EmptyValueMap, FieldMaps, LiteralPolicy, NameMap, format_expression,
};
pub use cohort_expr_diagnostics::{ErrorKind, ExprError, Result};
pub use cohort_expr_parser::parse_expression;

pub mod config;

// CLI module (only available with cli feature)
#[cfg(feature = "cli")]
pub mod cli;
