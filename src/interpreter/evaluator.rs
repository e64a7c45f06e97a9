/// The execution engine: statement execution and control flow.
///
/// Declares the [`Interpreter`](core::Interpreter) walking the tree, the
/// [`Flow`](core::Flow) value that models `return` as a typed non-local
/// exit, and the execution of every statement form.
pub mod core;

/// Expression evaluation.
///
/// Every expression evaluates to an integer, and evaluation cannot
/// fail: unassigned names read as zero and division by zero yields
/// zero.
pub mod expression;
