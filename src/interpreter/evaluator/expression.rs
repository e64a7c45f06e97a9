use crate::{
    ast::{BinaryOperator, Expr, UnaryOperator},
    interpreter::evaluator::core::Interpreter,
    util::num::number_from_str,
};

impl<R, W> Interpreter<'_, R, W>
    where R: FnMut() -> String,
          W: FnMut(&str)
{
    /// Evaluates an expression to its integer value.
    ///
    /// Evaluation cannot fail: a variable or array slot that was never
    /// assigned reads as 0, `readnum` coerces unparseable input to 0,
    /// and a call to an undefined function yields 0.
    ///
    /// Evaluation order is left to right; side effects (input reads and
    /// function calls) happen in source order, except that `&&` and
    /// `||` skip their right operand when the left one already decides
    /// the result.
    pub(in crate::interpreter::evaluator) fn eval(&mut self, expr: &Expr) -> i64 {
        match expr {
            Expr::Number { value } => *value,
            Expr::Bool { value } => i64::from(*value),
            Expr::ReadNum => number_from_str(&(self.input_line)()),
            Expr::Variable { name } => self.state.vars.get(name).copied().unwrap_or(0),
            Expr::Element { name, index } => {
                let index = self.eval(index);
                self.state
                    .arrays
                    .get(name)
                    .and_then(|slots| slots.get(&index))
                    .copied()
                    .unwrap_or(0)
            },
            Expr::Call { name } => self.call_function(name),
            Expr::Unary { op, expr } => self.eval_unary(*op, expr),
            Expr::Binary { left, op, right } => self.eval_binary(left, *op, right),
        }
    }

    /// Applies a unary operator: `+` is the identity, `-` negates, and
    /// `!` maps 0 to 1 and everything else to 0.
    fn eval_unary(&mut self, op: UnaryOperator, expr: &Expr) -> i64 {
        let value = self.eval(expr);
        match op {
            UnaryOperator::Plus => value,
            UnaryOperator::Negate => value.wrapping_neg(),
            UnaryOperator::Not => i64::from(value == 0),
        }
    }

    /// Applies a binary operator to two operand expressions.
    ///
    /// Arithmetic wraps on overflow; `/` and `%` truncate toward zero
    /// and yield 0 instead of trapping when the divisor is 0.
    /// Comparisons produce 1 or 0. `&&` and `||` treat operands as
    /// booleans under the 0/non-zero convention, short-circuit, and
    /// normalize their result to 1 or 0.
    fn eval_binary(&mut self, left: &Expr, op: BinaryOperator, right: &Expr) -> i64 {
        // The logical operators decide on the left operand before the
        // right one is touched.
        match op {
            BinaryOperator::And => {
                if self.eval(left) == 0 {
                    return 0;
                }
                return i64::from(self.eval(right) != 0);
            },
            BinaryOperator::Or => {
                if self.eval(left) != 0 {
                    return 1;
                }
                return i64::from(self.eval(right) != 0);
            },
            _ => {},
        }

        let lhs = self.eval(left);
        let rhs = self.eval(right);
        match op {
            BinaryOperator::Add => lhs.wrapping_add(rhs),
            BinaryOperator::Sub => lhs.wrapping_sub(rhs),
            BinaryOperator::Mul => lhs.wrapping_mul(rhs),
            // checked_div also covers i64::MIN / -1, which would trap.
            BinaryOperator::Div => lhs.checked_div(rhs).unwrap_or(0),
            BinaryOperator::Mod => lhs.checked_rem(rhs).unwrap_or(0),
            BinaryOperator::Equal => i64::from(lhs == rhs),
            BinaryOperator::NotEqual => i64::from(lhs != rhs),
            BinaryOperator::Less => i64::from(lhs < rhs),
            BinaryOperator::LessEqual => i64::from(lhs <= rhs),
            BinaryOperator::Greater => i64::from(lhs > rhs),
            BinaryOperator::GreaterEqual => i64::from(lhs >= rhs),
            BinaryOperator::And | BinaryOperator::Or => unreachable!("handled above"),
        }
    }
}
