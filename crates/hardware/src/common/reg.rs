//! Register File.
//!
//! This module provides the `RegisterFile` struct holding the fifteen named 64-bit
//! registers. It provides:
//! 1. **Storage:** One word per named register, all starting at zero.
//! 2. **Absent-Register Handling:** The reserved "no register" specifier is modeled as
//!    `None`; reading it yields zero and writing it does nothing.
//! 3. **Observability:** Iteration over every named register for tracing and dumps.

use crate::common::constants::NAMED_REGS;
use crate::isa::abi::Reg;

/// The machine's general-purpose registers.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegisterFile {
    regs: [u64; NAMED_REGS],
}

impl RegisterFile {
    /// Creates a register file with every register set to zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads a named register.
    pub const fn read(&self, reg: Reg) -> u64 {
        self.regs[reg.index()]
    }

    /// Writes a named register.
    pub const fn write(&mut self, reg: Reg, val: u64) {
        self.regs[reg.index()] = val;
    }

    /// Reads an optional register specifier; the absent register reads as zero.
    pub fn read_opt(&self, reg: Option<Reg>) -> u64 {
        reg.map_or(0, |r| self.read(r))
    }

    /// Writes an optional register specifier; writing the absent register is a no-op.
    ///
    /// # Returns
    ///
    /// `true` if a register was actually written.
    pub fn write_opt(&mut self, reg: Option<Reg>, val: u64) -> bool {
        match reg {
            Some(r) => {
                self.write(r, val);
                true
            }
            None => false,
        }
    }

    /// Iterates over every named register in encoding order with its value.
    pub fn iter(&self) -> impl Iterator<Item = (Reg, u64)> + '_ {
        Reg::ALL.iter().map(move |&r| (r, self.read(r)))
    }

    /// Dumps the contents of all registers to stderr.
    ///
    /// Displays registers in pairs with hexadecimal formatting for debugging purposes.
    pub fn dump(&self) {
        for pair in Reg::ALL.chunks(2) {
            let line: Vec<String> = pair
                .iter()
                .map(|&r| format!("%{:<4}={:#018x}", r.name(), self.read(r)))
                .collect();
            eprintln!("{}", line.join(" "));
        }
    }
}
