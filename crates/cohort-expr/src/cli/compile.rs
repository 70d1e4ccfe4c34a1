//! Compile command implementation

use super::output;
use crate::config::Config;
use anyhow::{Context, Result};
use std::path::PathBuf;

/// Configuration for compile command
pub struct CompileConfig {
    pub maps: PathBuf,
    pub expressions: Vec<String>,
}

/// Compile each expression in turn, stopping at the first rejection
pub fn compile(config: CompileConfig) -> Result<()> {
    if config.expressions.is_empty() {
        anyhow::bail!("No expressions given");
    }

    let compiler = Config::load(&config.maps)
        .context("Failed to load field maps")?
        .into_compiler();

    for (index, expression) in config.expressions.iter().enumerate() {
        match compiler.compile(expression) {
            Ok(predicate) => println!("{predicate}"),
            Err(e) => {
                eprintln!("{}", output::format_diagnostic(&e));
                anyhow::bail!(
                    "expression {} of {} was rejected",
                    index + 1,
                    config.expressions.len()
                );
            }
        }
    }
    Ok(())
}
