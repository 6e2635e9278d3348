// ============================================================================
// Big Integer Errors
// Error types for decimal big-integer construction and mutation
// ============================================================================

use std::fmt;

/// Errors that can occur while building or mutating a [`crate::BigInt`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BigIntError {
    /// A mutating digit write was given a position at or beyond the stored
    /// length. Reads beyond the length are defined to be zero; writes are a
    /// programming error and carry the offending position.
    InvalidPosition { position: usize, len: usize },
    /// The parser met a character that is neither a decimal digit, a leading
    /// `-`, nor a `_` separator.
    InvalidDigit { character: char, position: usize },
    /// The literal contained no digits at all (empty, or only a sign and/or
    /// separators).
    EmptyLiteral,
}

impl fmt::Display for BigIntError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BigIntError::InvalidPosition { position, len } => {
                write!(f, "invalid digit position: {} (length {})", position, len)
            },
            BigIntError::InvalidDigit {
                character,
                position,
            } => {
                write!(
                    f,
                    "invalid character {:?} at byte {} in big integer literal",
                    character, position
                )
            },
            BigIntError::EmptyLiteral => write!(f, "big integer literal contains no digits"),
        }
    }
}

impl std::error::Error for BigIntError {}

/// Result type alias for big-integer operations
pub type BigIntResult<T> = Result<T, BigIntError>;
