//! Inter-stage records for a single cycle.
//!
//! Data flows strictly forward: fetch → decode → execute → memory →
//! write-back → PC update. Fetch produces a [`Decoded`](crate::isa::Decoded);
//! the structures below carry what the remaining stages add.

use crate::isa::Reg;

/// Output of the decode stage: selected source registers and their values.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct IdExEntry {
    /// Register feeding the A operand, if any.
    pub src_a: Option<Reg>,
    /// Register feeding the B operand, if any.
    pub src_b: Option<Reg>,
    /// A operand (zero when `src_a` is `None`).
    pub val_a: u64,
    /// B operand (zero when `src_b` is `None`).
    pub val_b: u64,
}

/// Output of the execute stage.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ExMemEntry {
    /// ALU result: computed value, effective address, or adjusted stack pointer.
    pub val_e: u64,
    /// Condition outcome for `cmovXX` / `jXX`; `false` for every other class.
    pub cnd: bool,
}

/// Output of the memory stage.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MemWbEntry {
    /// Word loaded from memory (zero when nothing was read).
    pub val_m: u64,
}

/// Register targets chosen by the write-back stage.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WbTargets {
    /// Destination of `val_e`.
    pub dst_e: Option<Reg>,
    /// Destination of `val_m`.
    pub dst_m: Option<Reg>,
}
