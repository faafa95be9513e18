//! ALU bitwise operations.
//!
//! AND and XOR never overflow; the overflow flag is cleared for both.

/// Computes `b & a`.
pub const fn and(a: u64, b: u64) -> u64 {
    b & a
}

/// Computes `b ^ a`.
pub const fn xor(a: u64, b: u64) -> u64 {
    b ^ a
}
