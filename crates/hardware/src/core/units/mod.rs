//! Execution units and functional components.
//!
//! This module contains the integer ALU used by `OPq` instructions and the
//! branch resolution unit that evaluates `cmovXX` / `jXX` conditions.

/// Arithmetic Logic Unit for integer operations.
pub mod alu;

/// Branch Resolution Unit: condition evaluation for moves and jumps.
pub mod bru;
