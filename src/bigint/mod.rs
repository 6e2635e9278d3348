// ============================================================================
// Big Integer Module
// Arbitrary-precision signed arithmetic over a decimal digit representation
// ============================================================================
//
// This module provides:
// - BigInt: sign-and-magnitude big integer, one decimal digit per element
// - Sign: the positive/negative flag (zero is canonically positive)
// - BigIntError: error types for parsing and digit mutation
//
// Design principles:
// - Value semantics throughout; every instance owns its digit sequence
// - Schoolbook arithmetic only, no limb packing and no sub-quadratic multiply
// - Normalized representation: no leading zero digits, zero is the empty
//   sequence with a positive sign

mod big_integer;
mod digits;
mod errors;

pub use big_integer::{BigInt, Sign};
pub use errors::{BigIntError, BigIntResult};
