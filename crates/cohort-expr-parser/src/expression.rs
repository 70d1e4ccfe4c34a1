//! Recursive descent parser from tokens to an expression tree
//!
//! ```text
//! expr       := or_expr
//! or_expr    := and_expr ("OR" and_expr)*
//! and_expr   := term ("AND" term)*
//!
//! AND binds tighter than OR. A run of terms joined by one connective becomes a
//! single n-ary node, so only parentheses add nesting, and those are capped at
//! [`MAX_GROUP_DEPTH`].
//! term       := comparison | field | literal | "(" expr ")"
//! comparison := field cmp_op (literal | field)
//! ```

use crate::{MAX_GROUP_DEPTH, too_deep};
use cohort_expr_ast::{Connective, Expression, Operand, Span, Spanned, Token};
use cohort_expr_diagnostics::{
    CX0004, CX0005, CX0006, CX0007, CX0008, CX0009, CX0010, CX0011, ExprError, Result,
};

/// Build an expression tree from `tokens`
///
/// Never repairs input: the first token that does not fit the grammar is
/// reported as a grammar error.
pub fn parse_tokens(tokens: &[Spanned<Token>], source: &str) -> Result<Expression> {
    let mut parser = TokenParser {
        tokens,
        pos: 0,
        depth: 0,
        source,
    };
    if tokens.is_empty() {
        return Err(ExprError::grammar(
            CX0004,
            "expression is empty",
            source,
            Span::point(0),
        ));
    }

    let expr = parser.expression()?;

    match parser.peek() {
        None => Ok(expr),
        Some(Spanned {
            inner: Token::RightParen,
            span,
        }) => Err(ExprError::grammar(
            CX0006,
            "')' has no matching '('",
            source,
            *span,
        )),
        Some(extra) => Err(parser.unexpected(extra)),
    }
}

struct TokenParser<'t> {
    tokens: &'t [Spanned<Token>],
    pos: usize,
    /// Open groups around the current position
    depth: usize,
    source: &'t str,
}

impl<'t> TokenParser<'t> {
    fn peek(&self) -> Option<&'t Spanned<Token>> {
        self.tokens.get(self.pos)
    }

    fn advance(&mut self) -> Option<&'t Spanned<Token>> {
        let token = self.tokens.get(self.pos)?;
        self.pos += 1;
        Some(token)
    }

    fn eat_connective(&mut self, wanted: Connective) -> bool {
        match self.peek() {
            Some(Spanned {
                inner: Token::Connective(c),
                ..
            }) if *c == wanted => {
                self.pos += 1;
                true
            }
            _ => false,
        }
    }

    fn end_of_input(&self) -> Span {
        Span::point(self.source.trim_end().len())
    }

    fn unexpected(&self, token: &Spanned<Token>) -> ExprError {
        ExprError::grammar(
            CX0010,
            format!(
                "unexpected {}; conditions must be joined with AND or OR",
                token.inner.describe()
            ),
            self.source,
            token.span,
        )
    }

    fn expression(&mut self) -> Result<Expression> {
        let mut operands = vec![self.conjunction()?];
        while self.eat_connective(Connective::Or) {
            operands.push(self.conjunction()?);
        }
        Ok(Expression::logical(Connective::Or, operands))
    }

    fn conjunction(&mut self) -> Result<Expression> {
        let mut operands = vec![self.term()?];
        while self.eat_connective(Connective::And) {
            operands.push(self.term()?);
        }
        Ok(Expression::logical(Connective::And, operands))
    }

    fn term(&mut self) -> Result<Expression> {
        let Some(token) = self.advance() else {
            return Err(ExprError::grammar(
                CX0009,
                "expected a condition after the last connective",
                self.source,
                self.end_of_input(),
            ));
        };

        match &token.inner {
            Token::LeftParen => self.group(token.span),
            Token::Identifier(name) => {
                let field = Spanned::new(name.clone(), token.span);
                match self.peek() {
                    Some(Spanned {
                        inner: Token::Comparison(op),
                        span: op_span,
                    }) => {
                        self.pos += 1;
                        let rhs = self.operand(*op_span)?;
                        Ok(Expression::Comparison {
                            field,
                            op: *op,
                            rhs,
                        })
                    }
                    _ => Ok(Expression::BareTest { field }),
                }
            }
            Token::String { .. } | Token::Number(_) => match token.inner.as_literal() {
                Some(literal) => Ok(Expression::Value(Spanned::new(literal, token.span))),
                None => Err(self.unexpected(token)),
            },
            Token::Comparison(op) => Err(ExprError::grammar(
                CX0008,
                format!("'{op}' has no field on its left"),
                self.source,
                token.span,
            )),
            Token::Connective(c) => {
                let after_connective = self
                    .pos
                    .checked_sub(2)
                    .and_then(|p| self.tokens.get(p))
                    .is_some_and(|t| matches!(t.inner, Token::Connective(_)));
                let code = if after_connective { CX0007 } else { CX0009 };
                Err(ExprError::grammar(
                    code,
                    format!("expected a condition, found '{c}'"),
                    self.source,
                    token.span,
                ))
            }
            Token::RightParen => Err(ExprError::grammar(
                CX0011,
                "expected a condition, found ')'",
                self.source,
                token.span,
            )),
        }
    }

    fn group(&mut self, open: Span) -> Result<Expression> {
        if self.depth >= MAX_GROUP_DEPTH {
            return Err(too_deep(self.source, open));
        }
        self.depth += 1;
        let inner = self.expression()?;
        self.depth -= 1;
        match self.advance() {
            Some(Spanned {
                inner: Token::RightParen,
                ..
            }) => Ok(Expression::group(inner)),
            Some(other) => Err(self.unexpected(other)),
            None => Err(ExprError::grammar(
                CX0005,
                "'(' is never closed",
                self.source,
                open,
            )),
        }
    }

    fn operand(&mut self, op_span: Span) -> Result<Operand> {
        match self.advance() {
            Some(Spanned {
                inner: Token::Identifier(name),
                span,
            }) => Ok(Operand::Field(Spanned::new(name.clone(), *span))),
            Some(token) => match token.inner.as_literal() {
                Some(literal) => Ok(Operand::Literal(Spanned::new(literal, token.span))),
                None => Err(ExprError::grammar(
                    CX0008,
                    format!(
                        "comparison must be followed by a value, found {}",
                        token.inner.describe()
                    ),
                    self.source,
                    token.span,
                )),
            },
            None => Err(ExprError::grammar(
                CX0008,
                "comparison has no value on its right",
                self.source,
                op_span,
            )),
        }
    }
}
