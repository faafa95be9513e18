//! Arithmetic Logic Unit (ALU).
//!
//! This module implements the integer ALU used in the Execute stage by `OPq`
//! instructions. Every operation also produces the new condition codes.
//!
//! Operations are organized into submodules by category:
//! - [`arithmetic`]: Add, Sub (with overflow detection)
//! - [`logic`]:      And, Xor

/// Integer arithmetic operations (add, subtract).
pub mod arithmetic;

/// Bitwise logical operations (and, xor).
pub mod logic;

use crate::core::arch::ConditionCodes;
use crate::isa::AluOp;

/// Arithmetic Logic Unit (ALU) for integer operations.
#[derive(Debug)]
pub struct Alu;

impl Alu {
    /// Executes an integer ALU operation on `b OP a`.
    ///
    /// # Arguments
    ///
    /// * `op` - The ALU operation to perform
    /// * `a`  - The A operand (value of `rA`)
    /// * `b`  - The B operand (value of `rB`)
    ///
    /// # Returns
    ///
    /// The wrapped 64-bit result and the condition codes it produces.
    ///
    /// # Examples
    ///
    /// ```
    /// use y86sim_core::core::units::alu::Alu;
    /// use y86sim_core::isa::AluOp;
    ///
    /// let (res, cc) = Alu::execute(AluOp::Sub, 5, 5);
    /// assert_eq!(res, 0);
    /// assert!(cc.zf && !cc.sf && !cc.of);
    ///
    /// let (res, cc) = Alu::execute(AluOp::Add, 1, i64::MAX as u64);
    /// assert_eq!(res, i64::MIN as u64);
    /// assert!(cc.sf && cc.of);
    /// ```
    pub const fn execute(op: AluOp, a: u64, b: u64) -> (u64, ConditionCodes) {
        let (res, of) = match op {
            AluOp::Add => arithmetic::add(a, b),
            AluOp::Sub => arithmetic::sub(a, b),
            AluOp::And => (logic::and(a, b), false),
            AluOp::Xor => (logic::xor(a, b), false),
        };
        (res, ConditionCodes::new(res == 0, (res as i64) < 0, of))
    }
}
