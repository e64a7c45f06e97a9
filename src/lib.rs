//! # jerboa
//!
//! jerboa is a tree-walking interpreter for the Jerboa programming
//! language, a small imperative language with integer arithmetic,
//! arrays, parameterless functions, and interactive input.
//!
//! Source text flows strictly forward: the lexer produces a token
//! stream, the parser builds an abstract syntax tree from it, and the
//! interpreter walks that tree against a mutable global environment,
//! performing input and output through caller-supplied callbacks.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    ast::Program,
    error::ParseError,
    interpreter::{
        evaluator::core::Interpreter,
        lexer::{Lexeme, Lexer, Token},
        parser::core::parse_program,
        state::State,
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the `Program`, `Stmt` and `Expr` types that
/// represent the syntactic structure of source code as a tree. The AST
/// is built by the parser, is immutable afterwards, and is traversed by
/// the evaluator.
///
/// # Responsibilities
/// - Defines statement and expression types for all language
///   constructs.
/// - Provides the canonical printer that turns a tree back into
///   re-parseable source.
pub mod ast;
/// Provides the error types for parsing.
///
/// This module defines all errors that can be raised while turning
/// source text into a program. Execution has no error type of its own:
/// the language is total, so every parsed program runs to completion or
/// loops.
///
/// # Responsibilities
/// - Defines the parse error enum with line information.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation, the run-time
/// environment, and all supporting infrastructure to provide a complete
/// runtime for Jerboa programs.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, and
///   state.
/// - Provides the building blocks behind the crate-level entry points.
pub mod interpreter;
/// General utilities for numeric coercion.
///
/// This module provides the conversion routines behind the integer
/// value model, shared by the parser and the evaluator.
///
/// # Responsibilities
/// - Coerce literal and input text to integers, truncating toward
///   zero.
pub mod util;

/// Returns the lazy token stream for a source string.
///
/// Each [`Lexeme`] pairs the verbatim source text of one token with its
/// lexical category and line. The stream is total: no input makes it
/// fail, and concatenating the texts of all lexemes reproduces the
/// source with whitespace and comments removed.
///
/// # Examples
/// ```
/// use jerboa::interpreter::lexer::Category;
///
/// let lexemes: Vec<_> = jerboa::lex("b = a -1").collect();
/// let texts: Vec<&str> = lexemes.iter().map(|l| l.text.as_str()).collect();
///
/// // After the identifier `a`, the `-` is an operator of its own even
/// // though digits follow it directly.
/// assert_eq!(texts, ["b", "=", "a", "-", "1"]);
/// assert_eq!(lexemes[3].category, Category::Operator);
/// ```
pub fn lex(source: &str) -> impl Iterator<Item = Lexeme> + '_ {
    Lexer::new(source).map(|(token, line)| {
                          Lexeme { text: token.text().to_string(),
                                   category: token.category(),
                                   line }
                      })
}

/// Parses a source string into a program.
///
/// Parsing succeeds when the whole token stream forms one valid
/// statement list. A grammar mismatch fails with the offending token;
/// a valid statement list followed by leftover input fails with
/// [`ParseError::UnexpectedTrailingTokens`].
///
/// # Errors
/// Returns a [`ParseError`] describing the first mismatch; there is no
/// error recovery.
///
/// # Examples
/// ```
/// let program = jerboa::parse("i = 0  while i < 3  i = i + 1  end").unwrap();
/// assert_eq!(program.statements.len(), 2);
///
/// assert!(jerboa::parse("while").is_err());
/// assert!(jerboa::parse("a = 1 end").is_err());
/// ```
pub fn parse(source: &str) -> Result<Program, ParseError> {
    let tokens: Vec<(Token, usize)> = Lexer::new(source).collect();
    let mut iter = tokens.iter().peekable();
    parse_program(&mut iter)
}

/// Executes a parsed program against a caller-owned environment.
///
/// The environment may be empty or preloaded; it is mutated in place.
/// `input_line` supplies one line of input (line terminator removed)
/// per `readnum` evaluation, and `output_text` receives every written
/// chunk verbatim, with newlines only where the program writes `cr`.
/// Execution itself cannot fail.
///
/// # Examples
/// ```
/// use jerboa::interpreter::state::State;
///
/// let program = jerboa::parse("write(\"Hello, world!\", cr)").unwrap();
/// let mut state = State::new();
/// let mut out = String::new();
/// jerboa::interp(&program, &mut state, String::new, |s| out.push_str(s));
///
/// assert_eq!(out, "Hello, world!\n");
/// ```
pub fn interp<R, W>(program: &Program, state: &mut State, input_line: R, output_text: W)
    where R: FnMut() -> String,
          W: FnMut(&str)
{
    Interpreter::new(state, input_line, output_text).run(program);
}

/// Parses and executes a source string against a fresh environment.
///
/// This is the convenience entry point used by the command-line driver
/// and the test suite.
///
/// # Errors
/// Returns a [`ParseError`] when the source does not parse; execution
/// itself cannot fail.
///
/// # Examples
/// ```
/// let mut out = String::new();
/// let state = jerboa::run("a = 3 + 4 * 2  write(a, cr)", String::new, |s| out.push_str(s))
///     .unwrap();
///
/// assert_eq!(out, "11\n");
/// assert_eq!(state.vars["a"], 11);
/// ```
pub fn run<R, W>(source: &str, input_line: R, output_text: W) -> Result<State, ParseError>
    where R: FnMut() -> String,
          W: FnMut(&str)
{
    let program = parse(source)?;
    let mut state = State::new();
    interp(&program, &mut state, input_line, output_text);
    Ok(state)
}
