//! Expression trees and their evaluation.

use std::fmt;
use std::mem;

use thiserror::Error;

use super::token::Operator;

/// Ways evaluating an [`Expr`] can fail.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EvalError {
    /// A node holds a symbol that isn't `+ - * /`.
    #[error("Unknown operator: {0}")]
    UnknownOperator(char),

    /// The right operand of a `/` evaluated to zero.
    #[error("division by zero")]
    DivisionByZero,

    /// An intermediate result doesn't fit in an `i64`.
    #[error("integer overflow")]
    Overflow,
}

/// An arithmetic expression tree. Internal nodes own exactly two operands.
#[derive(Debug, PartialEq, Eq)]
pub enum Expr {
    /// A literal.
    Value(i64),
    /// `left symbol right`.
    Binary {
        /// The operator, checked when evaluated.
        symbol: char,
        /// The left operand.
        left: Box<Expr>,
        /// The right operand.
        right: Box<Expr>,
    },
}

impl Expr {
    /// A leaf holding `n`.
    pub fn value(n: i64) -> Self {
        Self::Value(n)
    }

    /// An internal node applying `symbol` to the two operands.
    pub fn binary(symbol: char, left: Expr, right: Expr) -> Self {
        Self::Binary {
            symbol,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// Evaluates both operands and then applies the operator, bottom-up. The walk keeps its own
    /// stack so a long chain like `1 + 1 + ... + 1` can't overflow the thread's stack.
    ///
    /// ```
    /// use dsperf::expr::{EvalError, Expr};
    ///
    /// let tree = Expr::binary('+', Expr::value(3), Expr::value(4));
    /// assert_eq!(tree.evaluate(), Ok(7));
    ///
    /// let tree = Expr::binary('%', Expr::value(3), Expr::value(4));
    /// assert_eq!(tree.evaluate(), Err(EvalError::UnknownOperator('%')));
    /// ```
    pub fn evaluate(&self) -> Result<i64, EvalError> {
        enum Step<'a> {
            Visit(&'a Expr),
            Apply(char),
        }

        let mut steps = vec![Step::Visit(self)];
        let mut values: Vec<i64> = Vec::new();
        while let Some(step) = steps.pop() {
            match step {
                Step::Visit(Self::Value(n)) => values.push(*n),
                Step::Visit(Self::Binary {
                    symbol,
                    left,
                    right,
                }) => {
                    steps.push(Step::Apply(*symbol));
                    steps.push(Step::Visit(right));
                    steps.push(Step::Visit(left));
                }
                Step::Apply(symbol) => {
                    let (right, left) = match (values.pop(), values.pop()) {
                        (Some(right), Some(left)) => (right, left),
                        _ => unreachable!("both operands are visited before their operator"),
                    };
                    let op = Operator::from_symbol(symbol)
                        .ok_or(EvalError::UnknownOperator(symbol))?;
                    values.push(op.apply(left, right)?);
                }
            }
        }

        match values.pop() {
            Some(value) => Ok(value),
            None => unreachable!("the root leaves exactly one value"),
        }
    }
}

impl Drop for Expr {
    // The default drop recurses once per level which blows the stack on long chains.
    fn drop(&mut self) {
        let mut stack = Vec::new();
        if let Self::Binary { left, right, .. } = self {
            stack.push(mem::replace(&mut **left, Self::Value(0)));
            stack.push(mem::replace(&mut **right, Self::Value(0)));
        }
        while let Some(mut expr) = stack.pop() {
            if let Self::Binary { left, right, .. } = &mut expr {
                stack.push(mem::replace(&mut **left, Self::Value(0)));
                stack.push(mem::replace(&mut **right, Self::Value(0)));
            }
        }
    }
}

impl fmt::Display for Expr {
    /// Fully parenthesized infix, e.g. `((2 * 3) + 4)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        enum Piece<'a> {
            Expr(&'a Expr),
            Symbol(char),
            Close,
        }

        let mut stack = vec![Piece::Expr(self)];
        while let Some(piece) = stack.pop() {
            match piece {
                Piece::Expr(Self::Value(n)) => write!(f, "{}", n)?,
                Piece::Expr(Self::Binary {
                    symbol,
                    left,
                    right,
                }) => {
                    f.write_str("(")?;
                    stack.push(Piece::Close);
                    stack.push(Piece::Expr(right));
                    stack.push(Piece::Symbol(*symbol));
                    stack.push(Piece::Expr(left));
                }
                Piece::Symbol(symbol) => write!(f, " {} ", symbol)?,
                Piece::Close => f.write_str(")")?,
            }
        }
        Ok(())
    }
}
