// ============================================================================
// Decimal Big Integer Library
// Arbitrary-precision signed integer arithmetic over base-10 digits
// ============================================================================

//! # decimal-bigint
//!
//! Arbitrary-precision signed integers stored as decimal digit sequences.
//!
//! ## Features
//!
//! - **Sign-and-magnitude representation** — one decimal digit per element,
//!   least significant first, no leading zeros
//! - **Schoolbook arithmetic** — sign-aware addition, subtraction, and long
//!   multiplication, plus a scalar fast path for factors up to the base
//! - **Total ordering** consistent with signed magnitude
//! - **Textual round-trip** — parsing with `_` digit grouping, canonical
//!   decimal rendering
//!
//! ## Example
//!
//! ```rust
//! use decimal_bigint::bigint::BigInt;
//!
//! let x: BigInt = "100_200_100".parse().unwrap();
//! let y: BigInt = "300_200_100".parse().unwrap();
//!
//! assert_eq!((&x + &y).to_string(), "400400200");
//! assert_eq!((&x - &y).to_string(), "-200000000");
//! assert_eq!((&x * &y).to_string(), "30080080040010000");
//!
//! // Values grow past any native width
//! let mut factorial = BigInt::from(1);
//! for n in 1i64..=30 {
//!     factorial *= n;
//! }
//! assert_eq!(
//!     factorial.to_string(),
//!     "265252859812191058636308480000000"
//! );
//! ```

pub mod bigint;

// Re-exports for convenience
pub mod prelude {
    pub use crate::bigint::{BigInt, BigIntError, BigIntResult, Sign};
}
