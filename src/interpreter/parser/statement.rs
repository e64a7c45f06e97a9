use std::iter::Peekable;

use crate::{
    ast::{IfArm, Stmt, Target, WriteArg},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, expect, parse_expression},
    },
};

/// Parses a statement list.
///
/// Statements are collected while the current token can begin one:
/// `write`, `def`, `if`, `while`, `return`, or an identifier. Any other
/// token (a block terminator such as `end`, `else` or `elseif`, or the
/// end of the stream) ends the list successfully and is left for the
/// caller.
///
/// Grammar: `stmt_list := statement*`
///
/// # Parameters
/// - `tokens`: Token iterator containing `(Token, line)` pairs.
///
/// # Returns
/// The parsed statements, possibly empty.
pub fn parse_stmt_list<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Vec<Stmt>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut statements = Vec::new();
    while let Some((token, _)) = tokens.peek()
          && starts_statement(token)
    {
        statements.push(parse_statement(tokens)?);
    }
    Ok(statements)
}

/// Whether a token can begin a statement.
const fn starts_statement(token: &Token) -> bool {
    matches!(token,
             Token::Write
             | Token::Def
             | Token::If
             | Token::While
             | Token::Return
             | Token::Identifier(_))
}

/// Parses a single statement.
///
/// A statement may be one of:
/// - an output statement (`write(...)`),
/// - a function definition (`def name() ... end`),
/// - a conditional (`if ... end`),
/// - a loop (`while ... end`),
/// - an early return (`return expr`),
/// - a function call or an assignment, both led by an identifier.
///
/// The leading token decides the form; there is no backtracking.
///
/// # Parameters
/// - `tokens`: Token iterator containing `(Token, line)` pairs.
///
/// # Returns
/// A parsed [`Stmt`] node.
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Stmt>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match tokens.peek() {
        Some((Token::Write, _)) => parse_write(tokens),
        Some((Token::Def, _)) => parse_def(tokens),
        Some((Token::If, _)) => parse_if(tokens),
        Some((Token::While, _)) => parse_while(tokens),
        Some((Token::Return, _)) => parse_return(tokens),
        Some((Token::Identifier(_), _)) => parse_call_or_assignment(tokens),
        Some((token, line)) => {
            Err(ParseError::UnexpectedToken { token: token.text().to_string(),
                                              line:  *line, })
        },
        None => Err(ParseError::UnexpectedEndOfInput { line: 0 }),
    }
}

/// Parses an output statement.
///
/// Grammar: `"write" "(" write_arg ("," write_arg)* ")"`
///
/// At least one argument is required.
fn parse_write<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Stmt>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    tokens.next();
    expect(tokens, &Token::LParen)?;

    let mut args = vec![parse_write_arg(tokens)?];
    while let Some((Token::Comma, _)) = tokens.peek() {
        tokens.next();
        args.push(parse_write_arg(tokens)?);
    }

    expect(tokens, &Token::RParen)?;
    Ok(Stmt::Write { args })
}

/// Parses one `write` argument: `cr`, a string literal, or any
/// expression.
///
/// Grammar: `write_arg := "cr" | STRING | expression`
fn parse_write_arg<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<WriteArg>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match tokens.peek() {
        Some((Token::Cr, _)) => {
            tokens.next();
            Ok(WriteArg::Newline)
        },
        Some((Token::Str(raw), _)) => {
            let raw = raw.clone();
            tokens.next();
            Ok(WriteArg::Literal { raw })
        },
        _ => Ok(WriteArg::Value { expr: parse_expression(tokens)? }),
    }
}

/// Parses a function definition.
///
/// Grammar: `"def" ID "(" ")" stmt_list "end"`
///
/// Functions take no parameters; the empty parentheses are still
/// required.
fn parse_def<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Stmt>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    tokens.next();

    let name = match tokens.next() {
        Some((Token::Identifier(name), _)) => name.clone(),
        Some((token, line)) => {
            return Err(ParseError::UnexpectedToken { token: format!("Expected function name, found '{}'",
                                                                    token.text()),
                                                     line:  *line, });
        },
        None => return Err(ParseError::UnexpectedEndOfInput { line: 0 }),
    };

    expect(tokens, &Token::LParen)?;
    expect(tokens, &Token::RParen)?;

    let body = parse_stmt_list(tokens)?;
    expect(tokens, &Token::End)?;
    Ok(Stmt::FuncDef { name, body })
}

/// Parses a conditional statement.
///
/// Grammar:
/// ```text
///     "if" expression stmt_list
///     ("elseif" expression stmt_list)*
///     ("else" stmt_list)?
///     "end"
/// ```
fn parse_if<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Stmt>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    tokens.next();

    let mut arms = vec![parse_if_arm(tokens)?];
    while let Some((Token::Elseif, _)) = tokens.peek() {
        tokens.next();
        arms.push(parse_if_arm(tokens)?);
    }

    let else_body = if let Some((Token::Else, _)) = tokens.peek() {
        tokens.next();
        Some(parse_stmt_list(tokens)?)
    } else {
        None
    };

    expect(tokens, &Token::End)?;
    Ok(Stmt::If { arms, else_body })
}

/// Parses one condition/body pair of a conditional.
fn parse_if_arm<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<IfArm>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let cond = parse_expression(tokens)?;
    let body = parse_stmt_list(tokens)?;
    Ok(IfArm { cond, body })
}

/// Parses a loop statement.
///
/// Grammar: `"while" expression stmt_list "end"`
fn parse_while<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Stmt>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    tokens.next();
    let cond = parse_expression(tokens)?;
    let body = parse_stmt_list(tokens)?;
    expect(tokens, &Token::End)?;
    Ok(Stmt::While { cond, body })
}

/// Parses an early return.
///
/// Grammar: `"return" expression`
fn parse_return<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Stmt>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    tokens.next();
    let value = parse_expression(tokens)?;
    Ok(Stmt::Return { value })
}

/// Parses an identifier-led statement.
///
/// The token after the identifier decides the form:
///
/// - `(` `)`: a function call,
/// - `[` expr `]` `=` expr: an array-element assignment,
/// - `=` expr: a simple assignment.
///
/// Grammar: `ID ("(" ")" | ("[" expression "]")? "=" expression)`
///
/// # Errors
/// Returns a `ParseError` when none of the three forms follows the
/// identifier.
fn parse_call_or_assignment<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Stmt>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let (name, line) = match tokens.next() {
        Some((Token::Identifier(name), line)) => (name.clone(), *line),
        _ => unreachable!("caller checked for an identifier"),
    };

    match tokens.peek() {
        Some((Token::LParen, _)) => {
            tokens.next();
            expect(tokens, &Token::RParen)?;
            Ok(Stmt::FuncCall { name })
        },
        Some((Token::LBracket, _)) => {
            tokens.next();
            let index = parse_expression(tokens)?;
            expect(tokens, &Token::RBracket)?;
            expect(tokens, &Token::Equals)?;
            let value = parse_expression(tokens)?;
            Ok(Stmt::Assign { target: Target::Element { name, index },
                              value })
        },
        Some((Token::Equals, _)) => {
            tokens.next();
            let value = parse_expression(tokens)?;
            Ok(Stmt::Assign { target: Target::Simple { name },
                              value })
        },
        Some((token, line)) => {
            Err(ParseError::UnexpectedToken { token: format!("Expected '(', '[' or '=' after '{name}', found '{}'",
                                                             token.text()),
                                              line:  *line, })
        },
        None => Err(ParseError::UnexpectedEndOfInput { line }),
    }
}
