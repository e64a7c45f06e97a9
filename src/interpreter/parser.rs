/// Entry points and shared plumbing for the parser.
///
/// Declares the `ParseResult` alias, the whole-program entry point, the
/// expression entry point, and the token-expectation helper the other
/// parser modules share.
pub mod core;

/// Binary expression parsing.
///
/// One function per precedence level, from logical operators at the
/// bottom down to multiplication at the top. Every level folds its
/// operator chain left-associatively.
pub mod binary;

/// Statement parsing.
///
/// Handles statement lists and each statement form: `write`, `def`,
/// `if`/`elseif`/`else`, `while`, `return`, and the identifier-led
/// statements (function calls and assignments).
pub mod statement;

/// Factor and unary-operator parsing.
///
/// The innermost expression level: literals, `readnum()`, variables,
/// array elements, function calls, parenthesized expressions, and
/// prefix `+`/`-`.
pub mod unary;
