use thiserror::Error;

use crate::interpreter::{
    lexer::Token,
    parser::core::{MAX_DEPTH, MAX_OPERATORS},
};

/// Represents all errors that can occur during parsing.
///
/// Every parse error is terminal: no partial tree is ever returned.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    /// Found a token that cannot extend the current production.
    #[error("Unexpected token '{0}' at position {1}.")]
    UnexpectedToken(Token, usize),
    /// A parenthesis without a matching partner.
    #[error("Unbalanced parenthesis at position {0}.")]
    UnbalancedParens(usize),
    /// Reached the end of input in the middle of an expression.
    #[error("Unexpected end of input.")]
    UnexpectedEnd,
    /// Nesting exceeded the parser's depth limit, or the expression has too
    /// many operators.
    #[error("Expression is nested more than {} levels deep or has more than {} operators.",
            MAX_DEPTH,
            MAX_OPERATORS)]
    TooDeep,
}

impl ParseError {
    /// Returns the character offset of the error, when it has one.
    #[must_use]
    pub const fn position(&self) -> Option<usize> {
        match self {
            Self::UnexpectedToken(_, position) | Self::UnbalancedParens(position) => {
                Some(*position)
            },
            Self::UnexpectedEnd | Self::TooDeep => None,
        }
    }
}
