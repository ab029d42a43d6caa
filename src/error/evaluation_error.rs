use thiserror::Error;

use crate::error::{EvalError, LexError, ParseError};

/// Any failure from [`crate::evaluate_expression`].
///
/// The `Display` output is the user-facing message; [`Self::position`] gives
/// the character offset to underline, when the failing phase knows it.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvaluationError {
    /// The text could not be tokenized.
    #[error(transparent)]
    Lex(#[from] LexError),
    /// The tokens do not form an expression.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The expression could not be evaluated.
    #[error(transparent)]
    Eval(#[from] EvalError),
}

impl EvaluationError {
    /// Returns the character offset of the failure, if known.
    ///
    /// # Example
    /// ```
    /// use calcx::evaluate_expression;
    ///
    /// let err = evaluate_expression("1 + $").unwrap_err();
    /// assert_eq!(err.position(), Some(4));
    /// ```
    #[must_use]
    pub const fn position(&self) -> Option<usize> {
        match self {
            Self::Lex(e) => Some(e.position()),
            Self::Parse(e) => e.position(),
            Self::Eval(_) => None,
        }
    }
}
