/// The evaluator module executes AST nodes and produces effects.
///
/// The evaluator traverses the AST, executes statements and evaluates
/// expressions, manages the global environment, and performs input and
/// output through caller-supplied callbacks. It is the core execution
/// engine of the interpreter.
///
/// # Responsibilities
/// - Executes AST nodes, performing all supported operations.
/// - Handles variables, arrays, functions, and control flow.
/// - Keeps execution total: unassigned names read as zero and division
///   by zero yields zero.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces a stream of tokens,
/// each corresponding to a meaningful language element such as a
/// number, identifier, operator, delimiter, or keyword. This is the
/// first stage of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with category and
///   source line.
/// - Handles numeric and string literals, identifiers, and operators,
///   including the context-sensitive handling of signed literals.
/// - Classifies invalid input as malformed tokens instead of failing.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer and
/// constructs an AST that represents the syntactic structure of
/// statements and expressions. This enables the evaluator to execute
/// user code.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes (statements,
///   expressions).
/// - Validates grammar and syntax, reporting errors with line
///   information.
/// - Enforces operator precedence and left-associativity.
pub mod parser;
/// The state module defines the run-time environment.
///
/// This module declares the environment that holds all program-visible
/// data: simple variables, array variables, and user-defined functions.
/// The environment is owned by the caller and mutated in place by the
/// evaluator.
///
/// # Responsibilities
/// - Defines the `State` struct with its three namespaces.
/// - Provides the canonical, deterministic dump format.
pub mod state;
