//! Tokenizer built from winnow combinators

use cohort_expr_ast::{ComparisonOp, Connective, QuoteStyle, Span, Spanned, Token};
use cohort_expr_diagnostics::{CX0001, CX0002, CX0003, ExprError, Result};
use winnow::ascii::{digit1, multispace0};
use winnow::combinator::{alt, opt};
use winnow::prelude::*;
use winnow::token::{literal, one_of, take_while};

type Input<'a> = &'a str;
type PResult<T> = winnow::Result<T>;

/// Split an expression into tokens
///
/// Quoted values are read as one token up to the matching closing quote.
/// Outside quotes whitespace only separates tokens, and operators are
/// recognized without surrounding whitespace (`a>=3`).
pub fn tokenize(source: &str) -> Result<Vec<Spanned<Token>>> {
    let mut input: Input<'_> = source;
    let mut tokens = Vec::new();

    loop {
        ws(&mut input);
        let Some(first) = input.chars().next() else {
            break;
        };
        let start = offset(source, input);

        let token = if QuoteStyle::from_char(first).is_some() {
            string_literal(&mut input).map_err(|_| {
                ExprError::grammar(
                    CX0002,
                    "string literal is never closed",
                    source,
                    Span::new(start, source.len()),
                )
            })?
        } else if starts_number(input) {
            let token = number(&mut input).map_err(|_| invalid_number(source, start, start + 1))?;
            let trailing = trailing_word_len(input);
            if trailing > 0 {
                let end = offset(source, input) + trailing;
                return Err(invalid_number(source, start, end));
            }
            token
        } else {
            alt((paren, comparison, word))
                .parse_next(&mut input)
                .map_err(|_| {
                    ExprError::grammar(
                        CX0001,
                        format!("unexpected character '{first}'"),
                        source,
                        Span::new(start, start + first.len_utf8()),
                    )
                })?
        };

        let end = offset(source, input);
        tokens.push(Spanned::new(token, Span::new(start, end)));
    }

    log::trace!("tokenized {:?} into {} tokens", source, tokens.len());
    Ok(tokens)
}

fn offset(source: &str, rest: &str) -> usize {
    source.len() - rest.len()
}

fn ws(input: &mut Input<'_>) {
    // multispace0 accepts empty input, it cannot fail
    let _: PResult<&str> = multispace0.parse_next(input);
}

fn starts_number(input: &str) -> bool {
    let mut chars = input.chars();
    match chars.next() {
        Some(c) if c.is_ascii_digit() => true,
        Some('-') => chars.next().is_some_and(|c| c.is_ascii_digit()),
        _ => false,
    }
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Length of identifier-like text glued to the end of a number (`3abc`, `1.`)
fn trailing_word_len(input: &str) -> usize {
    input
        .char_indices()
        .find(|(_, c)| !(is_word_char(*c) || *c == '.'))
        .map_or(input.len(), |(i, _)| i)
}

fn invalid_number(source: &str, start: usize, end: usize) -> ExprError {
    let span = Span::new(start, end);
    ExprError::grammar(
        CX0003,
        format!("invalid number '{}'", span.slice(source)),
        source,
        span,
    )
}

/// `"..."` or `'...'`, closed by the same quote character that opened it
fn string_literal(input: &mut Input<'_>) -> PResult<Token> {
    let open = one_of(['\'', '"']).parse_next(input)?;
    let value = take_while(0.., move |c: char| c != open).parse_next(input)?;
    literal(open).parse_next(input)?;

    let quote = if open == '"' {
        QuoteStyle::Double
    } else {
        QuoteStyle::Single
    };
    Ok(Token::String {
        value: value.to_string(),
        quote,
    })
}

/// `-?digits(.digits)?`
fn number(input: &mut Input<'_>) -> PResult<Token> {
    (opt('-'), digit1, opt(('.', digit1)))
        .take()
        .map(|raw: &str| Token::Number(raw.to_string()))
        .parse_next(input)
}

fn paren(input: &mut Input<'_>) -> PResult<Token> {
    alt(('('.value(Token::LeftParen), ')'.value(Token::RightParen))).parse_next(input)
}

/// Tried in `ComparisonOp::ALL` order, so `>=` wins over `>`
fn comparison(input: &mut Input<'_>) -> PResult<Token> {
    alt(ComparisonOp::ALL.map(|op| literal(op.symbol()).value(op)))
        .map(Token::Comparison)
        .parse_next(input)
}

/// Field name or `AND`/`OR` keyword
fn word(input: &mut Input<'_>) -> PResult<Token> {
    (
        one_of(|c: char| c.is_ascii_alphabetic() || c == '_'),
        take_while(0.., is_word_char),
    )
        .take()
        .map(|word: &str| match Connective::from_keyword(word) {
            Some(connective) => Token::Connective(connective),
            None => Token::Identifier(word.to_string()),
        })
        .parse_next(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<Token> {
        tokenize(source)
            .unwrap_or_else(|e| panic!("Failed to tokenize '{}': {:?}", source, e))
            .into_iter()
            .map(|t| t.inner)
            .collect()
    }

    fn ident(name: &str) -> Token {
        Token::Identifier(name.to_string())
    }

    #[test]
    fn test_fixture_expression() {
        assert_eq!(
            kinds("foo AND (bar > 3 OR baz = 'hello')"),
            vec![
                ident("foo"),
                Token::Connective(Connective::And),
                Token::LeftParen,
                ident("bar"),
                Token::Comparison(ComparisonOp::Greater),
                Token::Number("3".into()),
                Token::Connective(Connective::Or),
                ident("baz"),
                Token::Comparison(ComparisonOp::Equal),
                Token::String {
                    value: "hello".into(),
                    quote: QuoteStyle::Single
                },
                Token::RightParen,
            ]
        );
    }

    #[test]
    fn test_operators_without_whitespace() {
        assert_eq!(
            kinds("a>=3"),
            vec![
                ident("a"),
                Token::Comparison(ComparisonOp::GreaterOrEqual),
                Token::Number("3".into())
            ]
        );
        assert_eq!(
            kinds("a!=b"),
            vec![ident("a"), Token::Comparison(ComparisonOp::NotEqual), ident("b")]
        );
    }

    #[test]
    fn test_every_operator_is_read_whole() {
        for op in ComparisonOp::ALL {
            let source = format!("a{}1", op.symbol());
            assert_eq!(
                kinds(&source),
                vec![ident("a"), Token::Comparison(op), Token::Number("1".into())],
                "{source}"
            );
        }
    }

    #[test]
    fn test_quoted_value_is_atomic() {
        assert_eq!(
            kinds(r#""a AND (b""#),
            vec![Token::String {
                value: "a AND (b".into(),
                quote: QuoteStyle::Double
            }]
        );
        assert_eq!(
            kinds(r#"'say "hi"'"#),
            vec![Token::String {
                value: "say \"hi\"".into(),
                quote: QuoteStyle::Single
            }]
        );
    }

    #[test]
    fn test_spans() {
        let tokens = tokenize("  bar >= 10").unwrap();
        let spans: Vec<Span> = tokens.iter().map(|t| t.span).collect();
        assert_eq!(spans, vec![Span::new(2, 5), Span::new(6, 8), Span::new(9, 11)]);
    }

    #[test]
    fn test_numbers() {
        assert_eq!(kinds("-1"), vec![Token::Number("-1".into())]);
        assert_eq!(kinds("2.50"), vec![Token::Number("2.50".into())]);
    }

    #[test]
    fn test_whitespace_only_is_empty() {
        assert!(kinds(" \t\n").is_empty());
    }

    #[test]
    fn test_unterminated_string() {
        let err = tokenize("a = 'open").unwrap_err();
        assert_eq!(err.code(), CX0002);
    }

    #[test]
    fn test_invalid_number() {
        let err = tokenize("a > 3abc").unwrap_err();
        assert_eq!(err.code(), CX0003);
        match err {
            ExprError::Grammar { fragment, .. } => assert_eq!(fragment, "3abc"),
            other => panic!("Expected Grammar, got: {:?}", other),
        }
        assert_eq!(tokenize("a > 1.").unwrap_err().code(), CX0003);
    }

    #[test]
    fn test_unexpected_character() {
        for source in ["a ! b", "a + 1", "a.b", "a == $"] {
            let err = tokenize(source).unwrap_err();
            assert!(err.is_grammar(), "{source}");
        }
        assert_eq!(tokenize("a ! b").unwrap_err().code(), CX0001);
    }
}
