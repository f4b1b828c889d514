//! An integer arithmetic evaluator for whitespace-separated infix expressions like
//! `( 2 + 3 ) * 4`.
//!
//! Evaluation happens in three stages, each with its own error type so a caller can tell which
//! one failed:
//!
//! 1. [`to_postfix`] reorders infix tokens into postfix with an operator stack.
//! 2. [`build_tree`] turns postfix tokens into an [`Expr`] tree.
//! 3. [`Expr::evaluate`] walks the tree bottom-up.
//!
//! # Examples
//!
//! ```
//! use dsperf::expr::{evaluate_str, Stage};
//!
//! assert_eq!(evaluate_str("2 * 3 + 4"), Ok(10));
//! assert_eq!(evaluate_str("( 2 + 3 ) * 4"), Ok(20));
//!
//! let err = evaluate_str("8 / 0").unwrap_err();
//! assert_eq!(err.stage(), Stage::Evaluation);
//! ```

mod ast;
mod builder;
mod postfix;
mod token;

use std::fmt;

use thiserror::Error;
use tracing::{debug, instrument};

pub use ast::{EvalError, Expr};
pub use builder::{build_tree, parse_postfix, BuildError};
pub use postfix::{to_postfix, ConversionError};
pub use token::{format_tokens, Operator, Token};

/// The stage of evaluation an [`ExprError`] came from.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Stage {
    /// Infix to postfix.
    Conversion,
    /// Postfix to tree.
    Build,
    /// Tree to integer.
    Evaluation,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Conversion => "conversion",
            Self::Build => "build",
            Self::Evaluation => "evaluation",
        })
    }
}

/// An error from any stage of [`evaluate`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExprError {
    /// The infix tokens couldn't be converted to postfix.
    #[error("Error converting to postfix: {0}")]
    Conversion(#[from] ConversionError),

    /// The postfix tokens don't form a single expression.
    #[error("Error parsing expression: {0}")]
    Build(#[from] BuildError),

    /// The tree couldn't be evaluated.
    #[error("Error evaluating expression: {0}")]
    Evaluation(#[from] EvalError),
}

impl ExprError {
    /// Which stage failed.
    pub fn stage(&self) -> Stage {
        match self {
            Self::Conversion(_) => Stage::Conversion,
            Self::Build(_) => Stage::Build,
            Self::Evaluation(_) => Stage::Evaluation,
        }
    }
}

/// Evaluates infix tokens, running all three stages.
#[instrument(level = "debug", skip_all, fields(tokens = tokens.len()))]
pub fn evaluate<S: AsRef<str>>(tokens: &[S]) -> Result<i64, ExprError> {
    let postfix = to_postfix(tokens)?;
    debug!(postfix = %format_tokens(&postfix), "converted to postfix");

    let tree = build_tree(&postfix)?;
    debug!(tree = %tree, "built expression tree");

    let value = tree.evaluate()?;
    debug!(value, "evaluated");
    Ok(value)
}

/// Splits `expression` on whitespace and [`evaluate`]s the tokens.
pub fn evaluate_str(expression: &str) -> Result<i64, ExprError> {
    let tokens: Vec<_> = expression.split_whitespace().collect();
    evaluate(&tokens)
}
