use std::iter::Peekable;

use crate::{
    ast::{Expr, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, expect, parse_expression},
    },
    util::num::number_from_str,
};

/// Parses a factor, the innermost expression level.
///
/// Supported forms:
/// - a parenthesized expression, which yields the inner tree directly
///   (no wrapper node)
/// - prefix `+` and `-`, nesting right
/// - numeric and boolean literals
/// - `readnum()`
/// - an identifier, optionally followed by `()` (function call) or
///   `[expr]` (array element)
///
/// Grammar:
/// ```text
///     factor := "(" expression ")"
///             | ("+" | "-") factor
///             | NUMBER
///             | ("true" | "false")
///             | "readnum" "(" ")"
///             | ID ("(" ")" | "[" expression "]")?
/// ```
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of a factor.
///
/// # Returns
/// The parsed factor [`Expr`] or a `ParseError` on failure.
pub(crate) fn parse_factor<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match tokens.peek() {
        Some((Token::LParen, line)) => {
            let line = *line;
            tokens.next();
            let expr = parse_expression(tokens)?;
            match tokens.next() {
                Some((Token::RParen, _)) => Ok(expr),
                _ => Err(ParseError::ExpectedClosingParen { line }),
            }
        },
        Some((Token::Plus, _)) => {
            tokens.next();
            let expr = parse_factor(tokens)?;
            Ok(Expr::Unary { op:   UnaryOperator::Plus,
                             expr: Box::new(expr), })
        },
        Some((Token::Minus, _)) => {
            tokens.next();
            let expr = parse_factor(tokens)?;
            Ok(Expr::Unary { op:   UnaryOperator::Negate,
                             expr: Box::new(expr), })
        },
        Some((Token::Number(text), _)) => {
            let value = number_from_str(text);
            tokens.next();
            Ok(Expr::Number { value })
        },
        Some((Token::True, _)) => {
            tokens.next();
            Ok(Expr::Bool { value: true })
        },
        Some((Token::False, _)) => {
            tokens.next();
            Ok(Expr::Bool { value: false })
        },
        Some((Token::Readnum, _)) => {
            tokens.next();
            expect(tokens, &Token::LParen)?;
            expect(tokens, &Token::RParen)?;
            Ok(Expr::ReadNum)
        },
        Some((Token::Identifier(_), _)) => parse_identifier_factor(tokens),
        Some((token, line)) => {
            Err(ParseError::UnexpectedToken { token: token.text().to_string(),
                                              line:  *line, })
        },
        None => Err(ParseError::UnexpectedEndOfInput { line: 0 }),
    }
}

/// Parses a factor that begins with an identifier.
///
/// The identifier alone is a variable reference. Followed by `()` it is
/// a function call; followed by `[expr]` it reads one array element.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at an identifier.
///
/// # Returns
/// - [`Expr::Call`] if followed by parentheses,
/// - [`Expr::Element`] if followed by an index,
/// - [`Expr::Variable`] otherwise.
fn parse_identifier_factor<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let name = match tokens.next() {
        Some((Token::Identifier(name), _)) => name.clone(),
        _ => unreachable!("caller checked for an identifier"),
    };

    match tokens.peek() {
        Some((Token::LParen, _)) => {
            tokens.next();
            expect(tokens, &Token::RParen)?;
            Ok(Expr::Call { name })
        },
        Some((Token::LBracket, _)) => {
            tokens.next();
            let index = parse_expression(tokens)?;
            expect(tokens, &Token::RBracket)?;
            Ok(Expr::Element { name,
                               index: Box::new(index), })
        },
        _ => Ok(Expr::Variable { name }),
    }
}
