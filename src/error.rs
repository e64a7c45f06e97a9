/// Parsing errors.
///
/// Defines all error types that can occur while turning source text into
/// a program. Parse errors include syntax mistakes, unexpected tokens,
/// and input left over after a complete statement list. Execution itself
/// has no error type: the language is total, so every parsed program
/// runs to an ordinary result.
pub mod parse_error;

pub use parse_error::ParseError;
