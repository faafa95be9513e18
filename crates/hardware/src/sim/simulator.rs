//! Simulator: owns a CPU together with its trace and statistics.
//!
//! The driver issues cycles until the machine stops (or a configured cycle
//! limit is hit). Snapshot `N` is captured right after cycle `N` finishes
//! and before cycle `N + 1` begins.

use tracing::{info, warn};

use crate::common::Fault;
use crate::config::Config;
use crate::core::Cpu;
use crate::core::arch::Status;
use crate::core::cpu::StepOutcome;
use crate::isa::disasm::disassemble;
use crate::soc::SparseMemory;
use crate::stats::SimStats;
use crate::trace::{Snapshot, Trace};

/// How a run ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunSummary {
    /// Cycles executed.
    pub cycles: u64,
    /// Final machine status (`Running` only if the cycle limit was reached).
    pub status: Status,
    /// Fault that stopped the machine, if any.
    pub fault: Option<Fault>,
}

/// Top-level simulator: CPU state + trace recorder + statistics.
#[derive(Debug)]
pub struct Simulator {
    /// CPU architectural state.
    pub cpu: Cpu,
    /// Recorded per-cycle snapshots.
    pub trace: Trace,
    /// Execution counters.
    pub stats: SimStats,
    trace_instructions: bool,
    record: bool,
    max_cycles: Option<u64>,
}

impl Simulator {
    /// Creates a simulator over `mem` configured by `config`.
    pub fn new(mem: SparseMemory, config: &Config) -> Self {
        Self {
            cpu: Cpu::with_pc(mem, config.general.start_pc),
            trace: Trace::new(),
            stats: SimStats::new(),
            trace_instructions: config.general.trace_instructions,
            record: config.trace.record,
            max_cycles: config.general.max_cycles,
        }
    }

    /// Advances the simulator by one cycle and records its snapshot.
    ///
    /// Returns [`StepOutcome::Idle`] without recording anything once the machine has stopped.
    pub fn step(&mut self) -> StepOutcome {
        let pc = self.cpu.pc;
        let outcome = self.cpu.step();
        if outcome == StepOutcome::Idle {
            return outcome;
        }
        self.stats.record(&outcome);
        if self.trace_instructions {
            match &outcome {
                StepOutcome::Retired(r) => info!("{:#06x}: {}", pc, disassemble(&r.inst)),
                StepOutcome::Faulted(fault) => info!("{:#06x}: {}", pc, fault),
                StepOutcome::Idle => {}
            }
        }
        if self.record {
            self.trace.push(Snapshot::capture(&self.cpu));
        }
        outcome
    }

    /// Runs until the status is terminal or the cycle limit is reached.
    pub fn run(&mut self) -> RunSummary {
        while self.cpu.is_running() {
            if let Some(max) = self.max_cycles {
                if self.stats.cycles >= max {
                    warn!("cycle limit of {max} reached at pc={:#x}", self.cpu.pc);
                    break;
                }
            }
            let _ = self.step();
        }
        RunSummary {
            cycles: self.stats.cycles,
            status: self.cpu.status,
            fault: self.cpu.last_fault,
        }
    }
}
