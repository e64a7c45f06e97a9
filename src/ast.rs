use std::fmt;

/// A complete parsed program.
///
/// A program is the top-level statement list; it is immutable once built
/// and can be executed any number of times against fresh or preloaded
/// environments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Program {
    /// The statements executed in order.
    pub statements: Vec<Stmt>,
}

/// An abstract syntax tree (AST) node representing a statement.
///
/// `Stmt` covers every construct that can appear in a statement list:
/// output, function definitions and calls, conditionals, loops, early
/// returns, and assignments. Each variant models a distinct syntactic
/// construct.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stmt {
    /// An output statement: `write(arg, arg, …)`.
    Write {
        /// The arguments, written in order.
        args: Vec<WriteArg>,
    },
    /// A function definition: `def name() … end`.
    ///
    /// Functions take no parameters and run against the global
    /// environment; redefining a name replaces the previous body.
    FuncDef {
        /// The function name.
        name: String,
        /// The statements forming the body.
        body: Vec<Stmt>,
    },
    /// A function call in statement position: `name()`.
    FuncCall {
        /// The name of the function being called.
        name: String,
    },
    /// A conditional: `if … elseif … else … end`.
    If {
        /// The `if` arm followed by any `elseif` arms, tried in order.
        arms:      Vec<IfArm>,
        /// The `else` body, when present.
        else_body: Option<Vec<Stmt>>,
    },
    /// A loop: `while cond … end`.
    While {
        /// The loop condition, re-evaluated before every iteration.
        cond: Expr,
        /// The loop body.
        body: Vec<Stmt>,
    },
    /// An early return: `return expr`.
    Return {
        /// The returned expression.
        value: Expr,
    },
    /// An assignment to a variable or an array element.
    Assign {
        /// The assignment target.
        target: Target,
        /// The assigned expression.
        value:  Expr,
    },
}

/// One `cond`/`body` pair of a conditional statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IfArm {
    /// The guard; the arm runs when it evaluates to nonzero.
    pub cond: Expr,
    /// The statements executed when the guard holds.
    pub body: Vec<Stmt>,
}

/// One argument of a `write` statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteArg {
    /// `cr`: a newline.
    Newline,
    /// A string literal, stored with its surrounding quotes.
    Literal {
        /// The verbatim lexeme, quotes included.
        raw: String,
    },
    /// Any expression; its integer value is written in decimal form.
    Value {
        /// The expression to evaluate and write.
        expr: Expr,
    },
}

/// An assignment target: a bare name or one element of an array.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    /// `name = …`
    Simple {
        /// The variable name.
        name: String,
    },
    /// `name[index] = …`
    Element {
        /// The array name.
        name:  String,
        /// The element index expression.
        index: Expr,
    },
}

/// An abstract syntax tree (AST) node representing an expression.
///
/// All expressions evaluate to integers. Booleans are the integers 1 and
/// 0, and reads of names that were never assigned yield 0, so expression
/// evaluation cannot fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// A numeric literal, already coerced to its integer value.
    Number {
        /// The literal value.
        value: i64,
    },
    /// A boolean literal: `true` or `false`.
    Bool {
        /// The literal value.
        value: bool,
    },
    /// A read from the input callback: `readnum()`.
    ReadNum,
    /// A reference to a simple variable by name.
    Variable {
        /// The variable name.
        name: String,
    },
    /// A read of one array element: `name[index]`.
    Element {
        /// The array name.
        name:  String,
        /// The element index expression.
        index: Box<Expr>,
    },
    /// A function call in expression position: `name()`.
    ///
    /// The value is whatever the body's `return` produced, or 0 when the
    /// body finishes without returning or the name is undefined.
    Call {
        /// The name of the function being called.
        name: String,
    },
    /// A unary operation (e.g. negation).
    Unary {
        /// The unary operator to apply.
        op:   UnaryOperator,
        /// The operand expression.
        expr: Box<Expr>,
    },
    /// A binary operation (addition, comparison, etc.).
    Binary {
        /// Left operand.
        left:  Box<Expr>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Expr>,
    },
}

/// Represents a binary operator.
///
/// Binary operators include arithmetic, comparisons, and logic.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`), truncating toward zero
    Div,
    /// Modulo (`%`), truncating toward zero
    Mod,
    /// Equal to (`==`)
    Equal,
    /// Not equal to (`!=`)
    NotEqual,
    /// Less than (`<`)
    Less,
    /// Less than or equal (`<=`)
    LessEqual,
    /// Greater than (`>`)
    Greater,
    /// Greater than or equal (`>=`)
    GreaterEqual,
    /// Logical and (`&&`)
    And,
    /// Logical or (`||`)
    Or,
}

/// Represents a unary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Identity (e.g. `+x`).
    Plus,
    /// Arithmetic negation (e.g. `-x`).
    Negate,
    /// Logical NOT (e.g. `!x`).
    Not,
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use BinaryOperator::{
            Add, And, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mod, Mul, NotEqual, Or,
            Sub,
        };
        let operator = match self {
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
            Mod => "%",
            Equal => "==",
            NotEqual => "!=",
            Less => "<",
            LessEqual => "<=",
            Greater => ">",
            GreaterEqual => ">=",
            And => "&&",
            Or => "||",
        };
        write!(f, "{operator}")
    }
}

impl fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let operator = match self {
            Self::Plus => "+",
            Self::Negate => "-",
            Self::Not => "!",
        };
        write!(f, "{operator}")
    }
}

impl fmt::Display for Program {
    /// Prints the program as re-parseable source, one top-level statement
    /// per line.
    ///
    /// Parsing the printed form reproduces the tree: the printer fully
    /// parenthesizes nested expressions, so the shape survives the round
    /// trip regardless of the surrounding precedence level.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, statement) in self.statements.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{statement}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Stmt {
    /// Prints the statement as one line of re-parseable source. Block
    /// bodies are printed inline; whitespace is all the separation the
    /// grammar needs.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Write { args } => {
                write!(f, "write(")?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{arg}")?;
                }
                write!(f, ")")
            },
            Self::FuncDef { name, body } => {
                write!(f, "def {name}()")?;
                fmt_body(f, body)?;
                write!(f, " end")
            },
            Self::FuncCall { name } => write!(f, "{name}()"),
            Self::If { arms, else_body } => {
                for (i, arm) in arms.iter().enumerate() {
                    let keyword = if i == 0 { "if" } else { " elseif" };
                    write!(f, "{keyword} {}", arm.cond)?;
                    fmt_body(f, &arm.body)?;
                }
                if let Some(body) = else_body {
                    write!(f, " else")?;
                    fmt_body(f, body)?;
                }
                write!(f, " end")
            },
            Self::While { cond, body } => {
                write!(f, "while {cond}")?;
                fmt_body(f, body)?;
                write!(f, " end")
            },
            Self::Return { value } => write!(f, "return {value}"),
            Self::Assign { target, value } => write!(f, "{target} = {value}"),
        }
    }
}

/// Prints each statement of a block body preceded by a single space.
fn fmt_body(f: &mut fmt::Formatter<'_>, body: &[Stmt]) -> fmt::Result {
    for statement in body {
        write!(f, " {statement}")?;
    }
    Ok(())
}

impl fmt::Display for WriteArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Newline => write!(f, "cr"),
            Self::Literal { raw } => write!(f, "{raw}"),
            Self::Value { expr } => write!(f, "{expr}"),
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Simple { name } => write!(f, "{name}"),
            Self::Element { name, index } => write!(f, "{name}[{index}]"),
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number { value } => write!(f, "{value}"),
            Self::Bool { value } => write!(f, "{value}"),
            Self::ReadNum => write!(f, "readnum()"),
            Self::Variable { name } => write!(f, "{name}"),
            Self::Element { name, index } => write!(f, "{name}[{index}]"),
            Self::Call { name } => write!(f, "{name}()"),
            Self::Unary { op, expr } => write!(f, "{op}({expr})"),
            Self::Binary { left, op, right } => write!(f, "({left} {op} {right})"),
        }
    }
}
