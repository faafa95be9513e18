//! Condition codes.
//!
//! Three independent flags set only by ALU operations and read by
//! conditional moves and conditional jumps. They persist across cycles.

/// The Zero, Sign, and Overflow flags.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ConditionCodes {
    /// Result was zero.
    pub zf: bool,
    /// Result was negative when read as signed.
    pub sf: bool,
    /// Signed two's complement overflow occurred.
    pub of: bool,
}

impl ConditionCodes {
    /// Builds the flags from their individual values.
    pub const fn new(zf: bool, sf: bool, of: bool) -> Self {
        Self { zf, sf, of }
    }
}

impl Default for ConditionCodes {
    /// The reset state: `ZF=1, SF=0, OF=0`.
    fn default() -> Self {
        Self::new(true, false, false)
    }
}
