//! Check command implementation

use super::output;
use crate::config::Config;
use anyhow::{Context, Result};
use cohort_expr_compile::Compiler;
use cohort_expr_diagnostics::ExprError;
use colored::Colorize;
use std::fs;
use std::path::PathBuf;

/// Configuration for check command
pub struct CheckConfig {
    pub maps: PathBuf,
    pub file: PathBuf,
    pub verbose: bool,
}

/// Outcome of one expression line
#[derive(Debug)]
pub struct LineReport {
    /// 1-based line number in the checked file
    pub line: usize,
    pub expression: String,
    pub result: std::result::Result<String, ExprError>,
}

/// Compile every non-empty line that is not a `#` comment
pub fn check_source(compiler: &Compiler, text: &str) -> Vec<LineReport> {
    text.lines()
        .enumerate()
        .filter_map(|(i, line)| {
            let expression = line.trim();
            if expression.is_empty() || expression.starts_with('#') {
                return None;
            }
            Some(LineReport {
                line: i + 1,
                expression: expression.to_string(),
                result: compiler.compile(expression),
            })
        })
        .collect()
}

pub fn check(config: CheckConfig) -> Result<()> {
    let compiler = Config::load(&config.maps)
        .context("Failed to load field maps")?
        .into_compiler();
    let text = fs::read_to_string(&config.file)
        .with_context(|| format!("Failed to read file: {}", config.file.display()))?;

    let file = config.file.display().to_string();
    let reports = check_source(&compiler, &text);
    let mut failures = 0;

    for report in &reports {
        match &report.result {
            Ok(predicate) if config.verbose => {
                println!("{} {}", output::format_location(&file, report.line), predicate);
            }
            Ok(_) => {}
            Err(e) => {
                failures += 1;
                eprintln!("{}", output::format_location(&file, report.line));
                eprintln!("{}\n", output::format_diagnostic(e));
            }
        }
    }

    println!();
    if failures == 0 {
        println!(
            "{}",
            output::format_success(&format!("{} expressions compiled", reports.len()))
        );
        Ok(())
    } else {
        println!(
            "{} {} of {} expressions rejected",
            "Failed:".red().bold(),
            failures,
            reports.len()
        );
        anyhow::bail!("{} failed the check", file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cohort_expr_compile::FieldMaps;
    use cohort_expr_diagnostics::ErrorKind;

    #[test]
    fn test_skips_blank_and_comment_lines() {
        let compiler = Compiler::new(FieldMaps::new().with_field("foo", "t.foo", 0));
        let text = "# cohort criteria\n\nfoo\n   \nfoo AND\n  # indented comment\nbar\n";
        let reports = check_source(&compiler, text);

        let summary: Vec<_> = reports
            .iter()
            .map(|r| (r.line, r.result.as_ref().map_err(ExprError::kind).cloned()))
            .collect();
        assert_eq!(
            summary,
            vec![
                (3, Ok("( t.foo != 0 )".to_string())),
                (5, Err(ErrorKind::Grammar)),
                (7, Err(ErrorKind::UnknownField)),
            ]
        );
    }
}
