//! Builds an [`Expr`] out of postfix tokens.

use thiserror::Error;

use super::ast::Expr;
use super::token::Token;
use super::ExprError;

/// Ways a postfix sequence can be malformed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BuildError {
    /// An operator came up with fewer than two operands on the stack.
    #[error("malformed expression: `{operator}` at position {position} is missing an operand")]
    MissingOperand {
        /// The operator that was short.
        operator: char,
        /// Its index in the postfix sequence.
        position: usize,
    },

    /// Nothing was left on the stack at the end.
    #[error("malformed expression: no value to evaluate")]
    Empty,

    /// More than one value was left on the stack at the end.
    #[error("malformed expression: {count} values left without an operator to join them")]
    DanglingOperands {
        /// How many values were left.
        count: usize,
    },

    /// Postfix sequences don't have parentheses.
    #[error("malformed expression: parenthesis at position {position}")]
    Parenthesis {
        /// Its index in the postfix sequence.
        position: usize,
    },
}

/// Builds a tree from postfix tokens with a stack of subtrees. An operator pops its right
/// operand and then its left one, and pushes the combined node.
///
/// ```
/// use dsperf::expr::{build_tree, to_postfix};
///
/// let postfix = to_postfix(&["2", "*", "3", "+", "4"]).unwrap();
/// let tree = build_tree(&postfix).unwrap();
///
/// assert_eq!(tree.to_string(), "((2 * 3) + 4)");
/// ```
pub fn build_tree(postfix: &[Token]) -> Result<Expr, BuildError> {
    let mut stack = Vec::new();

    for (position, token) in postfix.iter().enumerate() {
        match *token {
            Token::Number(n) => stack.push(Expr::value(n)),
            Token::Operator(op) => {
                let (Some(right), Some(left)) = (stack.pop(), stack.pop()) else {
                    return Err(BuildError::MissingOperand {
                        operator: op.symbol(),
                        position,
                    });
                };
                stack.push(Expr::binary(op.symbol(), left, right));
            }
            Token::Open | Token::Close => return Err(BuildError::Parenthesis { position }),
        }
    }

    let root = stack.pop().ok_or(BuildError::Empty)?;
    if !stack.is_empty() {
        return Err(BuildError::DanglingOperands {
            count: stack.len() + 1,
        });
    }
    Ok(root)
}

/// Classifies raw postfix tokens and builds their tree, for input that is already in postfix
/// order.
///
/// ```
/// use dsperf::expr::parse_postfix;
///
/// let tree = parse_postfix(&["3", "4", "+"]).unwrap();
/// assert_eq!(tree.evaluate(), Ok(7));
/// ```
pub fn parse_postfix<S: AsRef<str>>(tokens: &[S]) -> Result<Expr, ExprError> {
    let postfix = tokens
        .iter()
        .map(|raw| Token::classify(raw.as_ref()))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(build_tree(&postfix)?)
}
