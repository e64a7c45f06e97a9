use std::iter::Peekable;

use crate::{
    ast::{Expr, Program},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{binary::parse_logical, statement::parse_stmt_list},
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a complete program.
///
/// A program is a statement list followed by the end of the token
/// stream. The list itself ends at the first token that cannot begin a
/// statement, so when tokens remain after it the parse fails with
/// [`ParseError::UnexpectedTrailingTokens`]. That keeps a syntactically
/// broken statement distinguishable from a valid prefix with junk after
/// it.
///
/// Grammar: `program := stmt_list`
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, line)` pairs.
///
/// # Returns
/// The parsed [`Program`].
pub fn parse_program<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Program>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let statements = parse_stmt_list(tokens)?;

    match tokens.peek() {
        Some((token, line)) => {
            Err(ParseError::UnexpectedTrailingTokens { token: token.text().to_string(),
                                                       line:  *line, })
        },
        None => Ok(Program { statements }),
    }
}

/// Parses a full expression.
///
/// This is the entry point for expression parsing.
/// It begins at the lowest-precedence level, the logical operators, and
/// recursively descends through the precedence hierarchy.
///
/// Grammar: `expression := logical`
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, line)` pairs.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_logical(tokens)
}

/// Consumes the next token, requiring it to equal `expected`.
///
/// # Errors
/// Returns a `ParseError` naming the expected token when the next token
/// differs, or when the input ends first.
pub(in crate::interpreter::parser) fn expect<'a, I>(tokens: &mut Peekable<I>,
                                                    expected: &Token)
                                                    -> ParseResult<()>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.next() {
        Some((token, _)) if token == expected => Ok(()),
        Some((token, line)) => {
            Err(ParseError::UnexpectedToken { token: format!("Expected '{}', found '{}'",
                                                             expected.text(),
                                                             token.text()),
                                              line:  *line, })
        },
        None => Err(ParseError::UnexpectedEndOfInput { line: 0 }),
    }
}
