//! Expression error types

use crate::{ErrorCode, SourceLocation, Span};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Broad class of an [`ExprError`]
///
/// Grammar problems are syntax mistakes; literal problems are data hygiene
/// issues in quoted values; unknown fields point at the schema mapping. Callers
/// report each class to the author differently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    Grammar,
    LiteralFormat,
    UnknownField,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::Grammar => write!(f, "grammar error"),
            ErrorKind::LiteralFormat => write!(f, "literal format error"),
            ErrorKind::UnknownField => write!(f, "unknown field"),
        }
    }
}

/// Which caller-supplied map a field lookup failed against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldMap {
    /// Logical field name to physical column reference
    Names,
    /// Logical field name to empty/sentinel value
    EmptyValues,
}

impl fmt::Display for FieldMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldMap::Names => write!(f, "name map"),
            FieldMap::EmptyValues => write!(f, "empty-value map"),
        }
    }
}

/// Main expression error type
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ExprError {
    /// Malformed token structure
    #[error("{code}: {message}")]
    Grammar {
        code: ErrorCode,
        message: String,
        /// Offending fragment of the source text
        fragment: String,
        expression: String,
        location: Option<SourceLocation>,
    },

    /// Quoted value outside the allowed character set or length
    #[error("{code}: {message}")]
    LiteralFormat {
        code: ErrorCode,
        message: String,
        /// Content of the rejected literal, without quotes
        literal: String,
        expression: String,
        location: Option<SourceLocation>,
    },

    /// Identifier missing from a caller-supplied map
    #[error("{code}: {message}")]
    UnknownField {
        code: ErrorCode,
        message: String,
        field: String,
        map: FieldMap,
        expression: String,
        location: Option<SourceLocation>,
    },
}

impl ExprError {
    /// Grammar error pointing at `span` of `expression`
    pub fn grammar(
        code: ErrorCode,
        message: impl Into<String>,
        expression: &str,
        span: Span,
    ) -> Self {
        let fragment = if span.is_empty() {
            "<end of input>".to_string()
        } else {
            span.slice(expression).to_string()
        };
        Self::Grammar {
            code,
            message: message.into(),
            fragment,
            expression: expression.to_string(),
            location: Some(SourceLocation::from_span(span, expression)),
        }
    }

    pub fn literal_format(
        code: ErrorCode,
        message: impl Into<String>,
        literal: impl Into<String>,
        expression: &str,
        span: Span,
    ) -> Self {
        Self::LiteralFormat {
            code,
            message: message.into(),
            literal: literal.into(),
            expression: expression.to_string(),
            location: Some(SourceLocation::from_span(span, expression)),
        }
    }

    pub fn unknown_field(
        code: ErrorCode,
        field: impl Into<String>,
        map: FieldMap,
        expression: &str,
        span: Span,
    ) -> Self {
        let field = field.into();
        Self::UnknownField {
            code,
            message: format!("'{field}' is not defined in the {map}"),
            field,
            map,
            expression: expression.to_string(),
            location: Some(SourceLocation::from_span(span, expression)),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Grammar { .. } => ErrorKind::Grammar,
            Self::LiteralFormat { .. } => ErrorKind::LiteralFormat,
            Self::UnknownField { .. } => ErrorKind::UnknownField,
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Grammar { code, .. }
            | Self::LiteralFormat { code, .. }
            | Self::UnknownField { code, .. } => *code,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Self::Grammar { message, .. }
            | Self::LiteralFormat { message, .. }
            | Self::UnknownField { message, .. } => message,
        }
    }

    /// The full expression text the error was raised for
    pub fn expression(&self) -> &str {
        match self {
            Self::Grammar { expression, .. }
            | Self::LiteralFormat { expression, .. }
            | Self::UnknownField { expression, .. } => expression,
        }
    }

    pub fn location(&self) -> Option<&SourceLocation> {
        match self {
            Self::Grammar { location, .. }
            | Self::LiteralFormat { location, .. }
            | Self::UnknownField { location, .. } => location.as_ref(),
        }
    }

    pub fn is_grammar(&self) -> bool {
        self.kind() == ErrorKind::Grammar
    }

    pub fn is_literal_format(&self) -> bool {
        self.kind() == ErrorKind::LiteralFormat
    }

    pub fn is_unknown_field(&self) -> bool {
        self.kind() == ErrorKind::UnknownField
    }

    /// Convert to a diagnostic
    pub fn to_diagnostic(&self) -> Diagnostic {
        let mut diag = Diagnostic::new(self.kind(), self.code(), self.message());
        if let Some(loc) = self.location() {
            diag = diag.with_location(loc.clone());
        }
        if let Some(help) = self.code().info().help {
            diag = diag.with_help(help);
        }
        diag
    }
}

/// A reportable error with location and help text
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Diagnostic {
    pub kind: ErrorKind,
    pub code: ErrorCode,
    /// Human-readable message
    pub message: String,
    pub location: Option<SourceLocation>,
    pub help: Option<String>,
}

impl Diagnostic {
    pub fn new(kind: ErrorKind, code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            kind,
            code,
            message: message.into(),
            location: None,
            help: None,
        }
    }

    pub fn with_location(mut self, location: SourceLocation) -> Self {
        self.location = Some(location);
        self
    }

    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    /// Render the diagnostic with the offending line and a caret marker
    ///
    /// ```text
    /// grammar error[CX0007]: 'AND' directly follows 'AND'
    ///   |
    /// 1 | a AND AND b
    ///   |       ^^^
    ///   = help: AND/OR must be separated by a condition
    /// ```
    pub fn render(&self, source: &str) -> String {
        let mut out = format!("{}[{}]: {}", self.kind, self.code, self.message);

        if let Some(loc) = &self.location {
            let line_text = source.lines().nth(loc.line - 1).unwrap_or("");
            let gutter = loc.line.to_string();
            let pad = " ".repeat(gutter.len());
            let width = loc.span().slice(source).chars().count().max(1);
            let marker = format!(
                "{}{}",
                " ".repeat(loc.column.saturating_sub(1)),
                "^".repeat(width)
            );
            out.push_str(&format!(
                "\n{pad} |\n{gutter} | {line_text}\n{pad} | {}",
                paint_marker(&marker)
            ));
            if let Some(help) = &self.help {
                out.push_str(&format!("\n{pad} = help: {help}"));
            }
        } else if let Some(help) = &self.help {
            out.push_str(&format!("\n  = help: {help}"));
        }

        out
    }
}

#[cfg(feature = "colored")]
fn paint_marker(marker: &str) -> String {
    use colored::Colorize;
    marker.red().bold().to_string()
}

#[cfg(not(feature = "colored"))]
fn paint_marker(marker: &str) -> String {
    marker.to_string()
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} - {}", self.kind, self.code, self.message)?;
        if let Some(loc) = &self.location {
            write!(f, " at {}", loc)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CX0007, CX0100, CX0200};

    const ADJACENT: &str = "'AND' directly follows 'AND'";

    #[test]
    fn test_grammar_error_captures_fragment() {
        let err = ExprError::grammar(CX0007, ADJACENT, "a AND AND b", Span::new(6, 9));

        assert_eq!(err.kind(), ErrorKind::Grammar);
        assert_eq!(err.code(), CX0007);
        match &err {
            ExprError::Grammar { fragment, .. } => assert_eq!(fragment, "AND"),
            other => panic!("Expected Grammar, got: {:?}", other),
        }
        assert_eq!(err.location().map(|l| l.column), Some(7));
    }

    #[test]
    fn test_grammar_error_at_end_of_input() {
        let err = ExprError::grammar(CX0007, "expected a condition", "a AND", Span::point(5));
        match err {
            ExprError::Grammar { fragment, .. } => assert_eq!(fragment, "<end of input>"),
            other => panic!("Expected Grammar, got: {:?}", other),
        }
    }

    #[test]
    fn test_kinds_are_distinguishable() {
        let literal = ExprError::literal_format(CX0100, "bad", "a b", "\"a b\"", Span::new(0, 5));
        let field =
            ExprError::unknown_field(CX0200, "foo", FieldMap::Names, "foo", Span::new(0, 3));

        assert!(literal.is_literal_format());
        assert!(!literal.is_grammar());
        assert!(field.is_unknown_field());
        assert_eq!(field.message(), "'foo' is not defined in the name map");
    }

    #[test]
    fn test_diagnostic_display() {
        let diag = ExprError::grammar(CX0007, ADJACENT, "a AND AND b", Span::new(6, 9))
            .to_diagnostic();

        assert!(diag.to_string().contains("CX0007"));
        assert!(diag.to_string().contains("1:7"));
        assert_eq!(diag.help.as_deref(), CX0007.info().help);
    }

    #[cfg(not(feature = "colored"))]
    #[test]
    fn test_diagnostic_render_places_caret() {
        let source = "a AND AND b";
        let rendered = ExprError::grammar(CX0007, ADJACENT, source, Span::new(6, 9))
            .to_diagnostic()
            .render(source);

        let lines: Vec<&str> = rendered.lines().collect();
        pretty_assertions::assert_eq!(lines[0], format!("grammar error[CX0007]: {ADJACENT}"));
        pretty_assertions::assert_eq!(lines[2], "1 | a AND AND b");
        pretty_assertions::assert_eq!(lines[3], "  |       ^^^");
        assert!(lines[4].starts_with("  = help:"));
    }
}
