//! Infix to postfix conversion with an operator stack (shunting-yard).

use thiserror::Error;

use super::token::Token;

/// Ways the infix to postfix conversion can fail.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConversionError {
    /// Not a number, operator or parenthesis.
    #[error("unexpected token `{0}`")]
    UnexpectedToken(String),

    /// Too many digits for an `i64`.
    #[error("number `{0}` does not fit in a 64-bit integer")]
    NumberOutOfRange(String),

    /// A `)` with nothing to close.
    #[error("`)` without a matching `(`")]
    UnmatchedClose,

    /// A `(` that is never closed.
    #[error("`(` without a matching `)`")]
    UnmatchedOpen,
}

/// Converts infix tokens to postfix order.
///
/// Numbers go straight to the output. An operator first pops every stacked operator that binds
/// at least as tightly, which makes equal precedence left-associative. Parentheses group and
/// never appear in the output.
///
/// ```
/// use dsperf::expr::{format_tokens, to_postfix};
///
/// let postfix = to_postfix(&["2", "*", "3", "+", "4"]).unwrap();
/// assert_eq!(format_tokens(&postfix), "2 3 * 4 +");
/// ```
pub fn to_postfix<S: AsRef<str>>(tokens: &[S]) -> Result<Vec<Token>, ConversionError> {
    let mut output = Vec::with_capacity(tokens.len());
    let mut stack = Vec::new();

    for raw in tokens {
        match Token::classify(raw.as_ref())? {
            number @ Token::Number(_) => output.push(number),
            Token::Operator(op) => {
                while let Some(&Token::Operator(top)) = stack.last() {
                    if top.precedence() < op.precedence() {
                        break;
                    }
                    output.push(Token::Operator(top));
                    stack.pop();
                }
                stack.push(Token::Operator(op));
            }
            Token::Open => stack.push(Token::Open),
            Token::Close => loop {
                match stack.pop() {
                    Some(Token::Open) => break,
                    Some(token) => output.push(token),
                    None => return Err(ConversionError::UnmatchedClose),
                }
            },
        }
    }

    while let Some(token) = stack.pop() {
        if token == Token::Open {
            return Err(ConversionError::UnmatchedOpen);
        }
        output.push(token);
    }

    Ok(output)
}
