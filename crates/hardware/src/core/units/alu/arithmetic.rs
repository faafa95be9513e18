//! ALU arithmetic operations.
//!
//! Implements 64-bit addition and subtraction with two's complement overflow
//! detection. Operands are read as signed; the result wraps modulo 2^64.

/// Whether the sign bit of `val` is set.
#[inline(always)]
const fn negative(val: u64) -> bool {
    (val as i64) < 0
}

/// Computes `b + a`.
///
/// # Returns
///
/// The wrapped result and whether signed overflow occurred: both operands share
/// a sign and the result's sign differs from it.
pub const fn add(a: u64, b: u64) -> (u64, bool) {
    let res = b.wrapping_add(a);
    let overflow = negative(a) == negative(b) && negative(res) != negative(a);
    (res, overflow)
}

/// Computes `b - a`.
///
/// # Returns
///
/// The wrapped result and whether signed overflow occurred: the operands have
/// different signs and the result's sign differs from `b`'s.
pub const fn sub(a: u64, b: u64) -> (u64, bool) {
    let res = b.wrapping_sub(a);
    let overflow = negative(a) != negative(b) && negative(res) != negative(b);
    (res, overflow)
}
