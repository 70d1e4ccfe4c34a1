//! Token and field listings

use super::output;
use anyhow::Result;
use cohort_expr_diagnostics::{ExprError, SourceLocation};
use cohort_expr_parser::{parse_expression, tokenize};

/// One line per token: `line:column  kind  text`
pub fn token_listing(expression: &str) -> std::result::Result<Vec<String>, ExprError> {
    let tokens = tokenize(expression)?;
    Ok(tokens
        .iter()
        .map(|token| {
            let location = SourceLocation::from_span(token.span, expression);
            format!("{:<6} {:<12} {}", location.to_string(), kind(&token.inner), token.inner)
        })
        .collect())
}

/// Distinct logical field names in order of first appearance
///
/// The whole expression must be grammatical; field names are not resolved.
pub fn field_listing(expression: &str) -> std::result::Result<Vec<String>, ExprError> {
    let tree = parse_expression(expression)?;
    Ok(tree.distinct_fields().into_iter().map(str::to_string).collect())
}

fn kind(token: &cohort_expr_ast::Token) -> &'static str {
    use cohort_expr_ast::Token;
    match token {
        Token::Identifier(_) => "identifier",
        Token::Comparison(_) => "comparison",
        Token::Connective(_) => "connective",
        Token::LeftParen | Token::RightParen => "paren",
        Token::String { .. } => "string",
        Token::Number(_) => "number",
    }
}

pub fn tokens(expression: &str) -> Result<()> {
    print_listing(token_listing(expression))
}

pub fn fields(expression: &str) -> Result<()> {
    print_listing(field_listing(expression))
}

fn print_listing(listing: std::result::Result<Vec<String>, ExprError>) -> Result<()> {
    match listing {
        Ok(lines) => {
            for line in lines {
                println!("{line}");
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("{}", output::format_diagnostic(&e));
            anyhow::bail!("{}", e)
        }
    }
}
