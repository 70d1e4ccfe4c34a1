//! CLI functionality for the `cohort-expr` tool
//!
//! - `compile`: expressions to predicate text
//! - `check`: every expression in a file
//! - `inspect`: token stream and referenced fields

pub mod check;
pub mod compile;
pub mod inspect;
pub mod output;
