//! Output formatting utilities

use cohort_expr_diagnostics::ExprError;
use colored::Colorize;
use std::io::IsTerminal;

/// Set up color output based on user preference
pub fn setup_colors(mode: &str) {
    match mode.to_lowercase().as_str() {
        "always" => colored::control::set_override(true),
        "never" => colored::control::set_override(false),
        _ => colored::control::set_override(std::io::stderr().is_terminal()),
    }
}

/// Format an error for display
pub fn format_error(error: &anyhow::Error) -> String {
    format!("{} {:#}", "Error:".red().bold(), error)
}

/// Format a success message for display
pub fn format_success(message: &str) -> String {
    format!("{} {}", "Success:".green().bold(), message)
}

/// Format a location prefix (file:line)
pub fn format_location(file: &str, line: usize) -> String {
    format!("{}:{}", file.cyan(), line)
}

/// Render a rejected expression with its caret diagnostic
pub fn format_diagnostic(error: &ExprError) -> String {
    error.to_diagnostic().render(error.expression())
}
