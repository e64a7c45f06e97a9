use crate::{
    ast::{Expr, IfArm, Program, Stmt, Target, WriteArg},
    interpreter::state::State,
};

/// The result of executing a statement: either fall through to the next
/// statement, or unwind to the nearest function-call frame.
///
/// A `return` inside nested `if`/`while` blocks unwinds those blocks,
/// but a function call converts the unwind into an ordinary value, so
/// the caller's own loops keep running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Continue with the next statement.
    Normal,
    /// A `return` was executed; carries the returned value.
    Return(i64),
}

/// Walks a parsed program, mutating the caller's [`State`] and
/// performing all input and output through the two callbacks.
///
/// Execution is synchronous and single-threaded: statements run in
/// source order, `readnum` blocks on the input callback, and the output
/// callback receives one call per written chunk (one per string
/// literal, one per `cr`, one per written value).
///
/// Execution never fails. Unassigned variables and array slots read as
/// zero, undefined functions are no-ops, and division by zero yields
/// zero.
pub struct Interpreter<'st, R, W>
    where R: FnMut() -> String,
          W: FnMut(&str)
{
    pub(in crate::interpreter::evaluator) state: &'st mut State,
    pub(in crate::interpreter::evaluator) input_line: R,
    pub(in crate::interpreter::evaluator) output_text: W,
}

impl<'st, R, W> Interpreter<'st, R, W>
    where R: FnMut() -> String,
          W: FnMut(&str)
{
    /// Creates an interpreter over the given environment and callbacks.
    ///
    /// The environment may be empty or preloaded with variables and
    /// function definitions; it is mutated in place.
    pub fn new(state: &'st mut State, input_line: R, output_text: W) -> Self {
        Self { state,
               input_line,
               output_text }
    }

    /// Executes the whole program.
    ///
    /// A `return` at the top level terminates the program; its value is
    /// discarded.
    pub fn run(&mut self, program: &Program) {
        let _ = self.exec_block(&program.statements);
    }

    /// Executes statements in order until one of them unwinds.
    pub(in crate::interpreter::evaluator) fn exec_block(&mut self, statements: &[Stmt]) -> Flow {
        for statement in statements {
            if let Flow::Return(value) = self.exec_statement(statement) {
                return Flow::Return(value);
            }
        }
        Flow::Normal
    }

    /// Executes a single statement.
    fn exec_statement(&mut self, statement: &Stmt) -> Flow {
        match statement {
            Stmt::Write { args } => {
                self.exec_write(args);
                Flow::Normal
            },
            Stmt::FuncDef { name, body } => {
                self.state.functions.insert(name.clone(), body.clone());
                Flow::Normal
            },
            Stmt::FuncCall { name } => {
                self.call_function(name);
                Flow::Normal
            },
            Stmt::If { arms, else_body } => self.exec_if(arms, else_body.as_deref()),
            Stmt::While { cond, body } => self.exec_while(cond, body),
            Stmt::Return { value } => Flow::Return(self.eval(value)),
            Stmt::Assign { target, value } => {
                self.exec_assign(target, value);
                Flow::Normal
            },
        }
    }

    /// Writes each argument in order: `cr` becomes a newline, string
    /// literals lose their surrounding quotes, and expressions are
    /// written as decimal integers.
    fn exec_write(&mut self, args: &[WriteArg]) {
        for arg in args {
            match arg {
                WriteArg::Newline => (self.output_text)("\n"),
                WriteArg::Literal { raw } => (self.output_text)(&raw[1..raw.len() - 1]),
                WriteArg::Value { expr } => {
                    let value = self.eval(expr);
                    (self.output_text)(&value.to_string());
                },
            }
        }
    }

    /// Runs the first arm whose guard is nonzero, or the `else` body
    /// when no guard matches.
    fn exec_if(&mut self, arms: &[IfArm], else_body: Option<&[Stmt]>) -> Flow {
        for arm in arms {
            if self.eval(&arm.cond) != 0 {
                return self.exec_block(&arm.body);
            }
        }
        match else_body {
            Some(body) => self.exec_block(body),
            None => Flow::Normal,
        }
    }

    /// Re-evaluates the condition before every iteration and runs the
    /// body while it is nonzero.
    fn exec_while(&mut self, cond: &Expr, body: &[Stmt]) -> Flow {
        while self.eval(cond) != 0 {
            if let Flow::Return(value) = self.exec_block(body) {
                return Flow::Return(value);
            }
        }
        Flow::Normal
    }

    /// Stores an evaluated value in a simple variable or an array slot.
    ///
    /// For an array target the index is evaluated before the assigned
    /// expression, and the array mapping is created on first use.
    fn exec_assign(&mut self, target: &Target, value: &Expr) {
        match target {
            Target::Simple { name } => {
                let value = self.eval(value);
                self.state.vars.insert(name.clone(), value);
            },
            Target::Element { name, index } => {
                let index = self.eval(index);
                let value = self.eval(value);
                self.state
                    .arrays
                    .entry(name.clone())
                    .or_default()
                    .insert(index, value);
            },
        }
    }

    /// Runs a function body and converts its unwind into the return
    /// value.
    ///
    /// An undefined name executes as an empty body; a body that finishes
    /// without `return` yields 0. Functions have no private scope, so
    /// the body reads and writes the same global environment as the
    /// caller.
    pub(in crate::interpreter::evaluator) fn call_function(&mut self, name: &str) -> i64 {
        let Some(body) = self.state.functions.get(name).cloned() else {
            return 0;
        };
        match self.exec_block(&body) {
            Flow::Return(value) => value,
            Flow::Normal => 0,
        }
    }
}
