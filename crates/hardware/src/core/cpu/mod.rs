//! CPU Core Definition and Initialization.
//!
//! This module defines the central `Cpu` structure, which owns the entire
//! machine state. It coordinates the following:
//! 1. **State Management:** Registers, program counter, condition codes, and status.
//! 2. **Memory:** The sparse byte-addressable memory the program runs in.
//! 3. **Diagnostics:** The fault that stopped the machine, if any.
//!
//! Every `Cpu` is independent; several can be constructed and run side by side.

/// Instruction execution orchestration: the per-cycle driver.
pub mod execution;

pub use execution::{Retired, StepOutcome};

use crate::common::{Fault, RegisterFile};
use crate::core::arch::{ConditionCodes, Status};
use crate::soc::SparseMemory;

/// Main CPU structure containing all architectural state.
#[derive(Clone, Debug)]
pub struct Cpu {
    /// General-purpose registers.
    pub regs: RegisterFile,
    /// Program counter.
    pub pc: u64,
    /// Condition codes.
    pub cc: ConditionCodes,
    /// Machine status.
    pub status: Status,
    /// Machine memory.
    pub mem: SparseMemory,
    /// Fault that terminated execution, if any.
    pub last_fault: Option<Fault>,
}

impl Cpu {
    /// Creates a CPU at PC 0 over the given memory, with reset flags and zeroed registers.
    pub fn new(mem: SparseMemory) -> Self {
        Self::with_pc(mem, 0)
    }

    /// Creates a CPU that starts executing at `pc`.
    pub fn with_pc(mem: SparseMemory, pc: u64) -> Self {
        Self {
            regs: RegisterFile::new(),
            pc,
            cc: ConditionCodes::default(),
            status: Status::Running,
            mem,
            last_fault: None,
        }
    }

    /// Whether the machine can still execute cycles.
    pub const fn is_running(&self) -> bool {
        self.status.is_running()
    }

    /// Dumps a human-readable view of the architectural state to stderr.
    pub fn dump_state(&self) {
        eprintln!(
            "pc={:#x} stat={} ZF={} SF={} OF={}",
            self.pc,
            self.status,
            u8::from(self.cc.zf),
            u8::from(self.cc.sf),
            u8::from(self.cc.of)
        );
        if let Some(fault) = &self.last_fault {
            eprintln!("fault: {fault}");
        }
        self.regs.dump();
    }
}
