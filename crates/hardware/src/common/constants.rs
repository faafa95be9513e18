//! Global Machine Constants.
//!
//! This module defines machine-wide constants used across the simulator. It includes:
//! 1. **Word Constants:** Word width and the stack adjustment applied by push/pop/call/ret.
//! 2. **Encoding Constants:** Nibble masks and instruction field sizes for decoding.
//! 3. **Status Codes:** The integer codes reported for each machine status.

/// Size of a machine word in bytes.
pub const WORD_SIZE: u64 = 8;

/// Amount the stack pointer moves for every push, pop, call, and return.
pub const STACK_STEP: i64 = 8;

/// Number of named (writable) registers.
pub const NAMED_REGS: usize = 15;

/// Encoding of the reserved "no register" specifier.
pub const REG_NONE: u8 = 0xF;

/// Bit mask for a single 4-bit field.
pub const NIBBLE_MASK: u8 = 0xF;

/// Bit shift for the high nibble of a byte.
pub const NIBBLE_SHIFT: u8 = 4;

/// Size of the opcode (icode:ifun) byte.
pub const OPCODE_BYTES: u64 = 1;

/// Size of the register specifier (rA:rB) byte.
pub const REGID_BYTES: u64 = 1;

/// Size of the constant word (valC).
pub const CONSTANT_BYTES: u64 = 8;

/// Status code for normal operation (AOK).
pub const STAT_AOK: u8 = 1;

/// Status code for an executed `halt` instruction (HLT).
pub const STAT_HLT: u8 = 2;

/// Status code for an invalid memory address (ADR).
pub const STAT_ADR: u8 = 3;

/// Status code for an invalid instruction (INS).
pub const STAT_INS: u8 = 4;
