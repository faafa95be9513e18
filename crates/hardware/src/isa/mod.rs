//! Instruction Set Architecture (ISA) Definitions.
//!
//! Contains the register encodings, instruction classes and function codes,
//! the byte-stream decoder, and the disassembler.

/// Register names and encodings.
pub mod abi;

/// Instruction decoding from memory.
pub mod decode;

/// Instruction disassembler for debug tracing and listings.
pub mod disasm;

/// Instruction classes, function codes, and the decoded instruction record.
pub mod instruction;

pub use abi::Reg;
pub use instruction::{AluOp, Condition, Decoded, Icode};
