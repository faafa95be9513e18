//! Simulation statistics collection and reporting.
//!
//! This module tracks execution counters for a run. It provides:
//! 1. **Cycles:** Total cycles and retired instructions.
//! 2. **Instruction mix:** Counts per instruction class.
//! 3. **Control flow:** Taken/not-taken conditional jumps and moves.

use std::fmt::Write;

use crate::core::cpu::StepOutcome;
use crate::isa::Icode;

/// Simulation statistics structure.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SimStats {
    /// Total cycles executed (including an aborted final cycle).
    pub cycles: u64,
    /// Number of instructions that completed every stage.
    pub instructions_retired: u64,
    /// Retired instruction counts, indexed by class code.
    pub class_counts: [u64; Icode::ALL.len()],
    /// Conditional jumps that were taken.
    pub jumps_taken: u64,
    /// Conditional jumps that fell through.
    pub jumps_not_taken: u64,
    /// Conditional moves whose condition held.
    pub moves_taken: u64,
    /// Conditional moves whose condition failed.
    pub moves_skipped: u64,
    /// Cycles aborted by a fault.
    pub faults: u64,
}

impl SimStats {
    /// Creates zeroed statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Accounts for one call to the cycle driver.
    pub const fn record(&mut self, outcome: &StepOutcome) {
        match outcome {
            StepOutcome::Idle => {}
            StepOutcome::Faulted(_) => {
                self.cycles += 1;
                self.faults += 1;
            }
            StepOutcome::Retired(r) => {
                self.cycles += 1;
                self.instructions_retired += 1;
                self.class_counts[r.inst.icode.code() as usize] += 1;
                match (r.inst.icode, r.cnd) {
                    (Icode::Jxx, true) => self.jumps_taken += 1,
                    (Icode::Jxx, false) => self.jumps_not_taken += 1,
                    (Icode::Cmov, true) => self.moves_taken += 1,
                    (Icode::Cmov, false) => self.moves_skipped += 1,
                    _ => {}
                }
            }
        }
    }

    /// Retired instruction count for one class.
    pub const fn count(&self, icode: Icode) -> u64 {
        self.class_counts[icode.code() as usize]
    }

    /// Renders a plain-text summary.
    pub fn report(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "==========================================================");
        let _ = writeln!(out, "Y86-64 SIMULATION STATISTICS");
        let _ = writeln!(out, "==========================================================");
        let _ = writeln!(out, "sim_cycles               {}", self.cycles);
        let _ = writeln!(out, "sim_insts                {}", self.instructions_retired);
        let _ = writeln!(out, "sim_faults               {}", self.faults);
        let _ = writeln!(out, "----------------------------------------------------------");
        let _ = writeln!(out, "INSTRUCTION MIX");
        for icode in Icode::ALL {
            let n = self.count(icode);
            if n > 0 {
                let _ = writeln!(out, "  {:<22} {}", icode.mnemonic(), n);
            }
        }
        let _ = writeln!(out, "----------------------------------------------------------");
        let _ = writeln!(out, "CONTROL FLOW");
        let _ = writeln!(out, "  jumps.taken            {}", self.jumps_taken);
        let _ = writeln!(out, "  jumps.not_taken        {}", self.jumps_not_taken);
        let _ = writeln!(out, "  cmov.taken             {}", self.moves_taken);
        let _ = writeln!(out, "  cmov.skipped           {}", self.moves_skipped);
        out
    }
}
