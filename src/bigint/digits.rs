// ============================================================================
// Digit Storage
// Least-significant-first base-10 digit sequence
// ============================================================================

use super::errors::{BigIntError, BigIntResult};
use smallvec::SmallVec;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The numeric base of the digit representation.
pub(crate) const BASE: u8 = 10;

/// Digit sequences up to this length live inline, without a heap allocation.
const INLINE_DIGITS: usize = 16;

/// Growable sequence of decimal digits, one digit (0–9) per element,
/// index 0 = least significant.
///
/// An empty sequence is the canonical magnitude of zero. Reading past the
/// stored length yields 0 (digits beyond the length are implicitly zero,
/// which the variable-length arithmetic loops rely on); writing past the
/// stored length is a programming error reported through
/// [`BigIntError::InvalidPosition`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub(crate) struct DigitBuf {
    digits: SmallVec<[u8; INLINE_DIGITS]>,
}

impl DigitBuf {
    /// Empty sequence (the zero magnitude).
    #[inline]
    pub(crate) const fn new() -> Self {
        Self {
            digits: SmallVec::new_const(),
        }
    }

    /// Number of stored digits.
    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.digits.len()
    }

    /// True when no digits are stored (the value is zero).
    #[inline]
    pub(crate) fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    /// Digit at `position`, or 0 when `position` is at or beyond the length.
    #[inline]
    pub(crate) fn digit(&self, position: usize) -> u8 {
        self.digits.get(position).copied().unwrap_or(0)
    }

    /// Overwrite the digit at `position`.
    ///
    /// # Errors
    /// Returns [`BigIntError::InvalidPosition`] when `position` is at or
    /// beyond the stored length. Unlike reads, an out-of-range write is not
    /// given implicit-zero semantics.
    #[inline]
    pub(crate) fn set(&mut self, position: usize, value: u8) -> BigIntResult<()> {
        debug_assert!(value < BASE);
        let len = self.digits.len();
        match self.digits.get_mut(position) {
            Some(digit) => {
                *digit = value;
                Ok(())
            },
            None => Err(BigIntError::InvalidPosition { position, len }),
        }
    }

    /// Append a new most-significant digit.
    #[inline]
    pub(crate) fn push(&mut self, value: u8) {
        debug_assert!(value < BASE);
        self.digits.push(value);
    }

    /// Strip non-significant leading (most-significant) zero digits.
    pub(crate) fn normalize(&mut self) {
        while self.digits.last() == Some(&0) {
            self.digits.pop();
        }
    }

    /// The digits as a slice, least significant first.
    #[inline]
    pub(crate) fn as_slice(&self) -> &[u8] {
        &self.digits
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_past_length_is_zero() {
        let mut buf = DigitBuf::new();
        buf.push(7);
        assert_eq!(buf.digit(0), 7);
        assert_eq!(buf.digit(1), 0);
        assert_eq!(buf.digit(1000), 0);
    }

    #[test]
    fn test_write_past_length_is_an_error() {
        let mut buf = DigitBuf::new();
        buf.push(1);
        buf.push(2);

        assert_eq!(buf.set(1, 5), Ok(()));
        assert_eq!(
            buf.set(2, 5),
            Err(BigIntError::InvalidPosition { position: 2, len: 2 })
        );
        assert_eq!(
            buf.set(9, 5),
            Err(BigIntError::InvalidPosition { position: 9, len: 2 })
        );
    }

    #[test]
    fn test_normalize_strips_leading_zeros() {
        let mut buf = DigitBuf::new();
        for digit in [3, 0, 0, 0] {
            buf.push(digit);
        }
        buf.normalize();
        assert_eq!(buf.as_slice(), &[3]);
    }

    #[test]
    fn test_normalize_all_zeros_empties_the_sequence() {
        let mut buf = DigitBuf::new();
        for _ in 0..4 {
            buf.push(0);
        }
        buf.normalize();
        assert!(buf.is_empty());
        assert_eq!(buf.len(), 0);
    }

    #[test]
    fn test_normalize_keeps_interior_zeros() {
        let mut buf = DigitBuf::new();
        for digit in [0, 0, 1, 0] {
            buf.push(digit);
        }
        buf.normalize();
        assert_eq!(buf.as_slice(), &[0, 0, 1]);
    }
}
