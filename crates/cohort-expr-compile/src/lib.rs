//! Cohort filter expression compiler
//!
//! Turns filter criteria such as
//!
//! ```text
//! foo AND (bar > 3 OR baz = 'hello')
//! ```
//!
//! into SQL predicate text qualified with physical column references:
//!
//! ```text
//! ( table1.foo != 0 ) AND ( table2.bar > 3 OR other = 'hello' )
//! ```
//!
//! The pipeline is parse → resolve (literal policy, field names, bare-field
//! expansion) → render. Every stage fails fast and nothing is returned unless
//! all of them pass.

mod compiler;
mod literal;
mod render;
mod resolve;

pub use compiler::{Compiler, compile, format_expression};
pub use literal::{DEFAULT_MAX_LITERAL_LENGTH, LiteralPolicy};
pub use render::render;
pub use resolve::{EmptyValueMap, FieldMaps, FieldSource, NameMap, Predicate, Value, resolve};

pub use cohort_expr_ast::EmptyValue;
pub use cohort_expr_diagnostics::{ErrorKind, ExprError, Result};
