use thiserror::Error;

/// Represents all errors that can occur during lexing.
///
/// Positions are 0-based character offsets into the source text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    /// A character that does not start any token.
    #[error("Unexpected character '{0}' at position {1}.")]
    UnexpectedChar(char, usize),
    /// A numeric literal with two decimal points, a dangling exponent marker,
    /// or a value too large for a finite `f64`.
    #[error("Malformed number at position {0}.")]
    MalformedNumber(usize),
}

impl LexError {
    /// Returns the character offset where lexing failed.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::UnexpectedChar(_, position) | Self::MalformedNumber(position) => *position,
        }
    }
}
