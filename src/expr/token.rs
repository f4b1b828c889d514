//! Tokens and the operators they name.

use std::fmt;

use super::ast::EvalError;
use super::postfix::ConversionError;

/// The four supported arithmetic operators.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Operator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`, truncating toward zero.
    Div,
}

impl Operator {
    /// Looks up the operator written as `symbol`.
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '+' => Some(Self::Add),
            '-' => Some(Self::Sub),
            '*' => Some(Self::Mul),
            '/' => Some(Self::Div),
            _ => None,
        }
    }

    /// The character this operator is written as.
    pub fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
        }
    }

    /// Binding strength. Higher binds tighter.
    pub fn precedence(self) -> u8 {
        match self {
            Self::Add | Self::Sub => 1,
            Self::Mul | Self::Div => 2,
        }
    }

    /// Applies the operator with checked `i64` arithmetic. Division truncates toward zero so
    /// `-7 / 2` is `-3`.
    pub fn apply(self, left: i64, right: i64) -> Result<i64, EvalError> {
        let result = match self {
            Self::Add => left.checked_add(right),
            Self::Sub => left.checked_sub(right),
            Self::Mul => left.checked_mul(right),
            Self::Div => {
                if right == 0 {
                    return Err(EvalError::DivisionByZero);
                }
                left.checked_div(right)
            }
        };
        result.ok_or(EvalError::Overflow)
    }
}

/// One whitespace-separated piece of an expression.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Token {
    /// An unsigned run of decimal digits.
    Number(i64),
    /// One of `+ - * /`.
    Operator(Operator),
    /// `(`
    Open,
    /// `)`
    Close,
}

impl Token {
    /// Works out what kind of token `raw` is.
    ///
    /// ```
    /// use dsperf::expr::{Operator, Token};
    ///
    /// assert_eq!(Token::classify("42"), Ok(Token::Number(42)));
    /// assert_eq!(Token::classify("*"), Ok(Token::Operator(Operator::Mul)));
    /// assert!(Token::classify("-3").is_err());
    /// ```
    pub fn classify(raw: &str) -> Result<Self, ConversionError> {
        match raw {
            "(" => return Ok(Self::Open),
            ")" => return Ok(Self::Close),
            _ => {}
        }

        let mut chars = raw.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            if let Some(op) = Operator::from_symbol(c) {
                return Ok(Self::Operator(op));
            }
        }

        if !raw.is_empty() && raw.bytes().all(|b| b.is_ascii_digit()) {
            return raw
                .parse()
                .map(Self::Number)
                .map_err(|_| ConversionError::NumberOutOfRange(raw.to_string()));
        }

        Err(ConversionError::UnexpectedToken(raw.to_string()))
    }
}

impl fmt::Display for Token {
    /// Numbers are written in canonical decimal, so `007` shows up as `7`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}", n),
            Self::Operator(op) => write!(f, "{}", op.symbol()),
            Self::Open => f.write_str("("),
            Self::Close => f.write_str(")"),
        }
    }
}

/// Renders tokens separated by single spaces, e.g. `2 3 * 4 +`.
pub fn format_tokens(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(Token::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
