//! Instruction Execution Orchestration.
//!
//! Runs the six stages of one cycle in order. A stage that raises a
//! [`Fault`] ends the cycle right there: no later stage runs, and the fault
//! becomes the machine's terminal status. Effects of earlier stages in the
//! same cycle are kept.

use tracing::debug;

use crate::common::Fault;
use crate::core::Cpu;
use crate::core::pipeline::stages::{
    decode_stage, execute_stage, fetch_stage, mem_stage, pc_update_stage, wb_stage,
};
use crate::isa::Decoded;

/// An instruction that ran through every stage of its cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Retired {
    /// The instruction.
    pub inst: Decoded,
    /// Condition outcome (`cmovXX` / `jXX` only; otherwise `false`).
    pub cnd: bool,
}

/// What a call to [`Cpu::step`] did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    /// The machine was already stopped; nothing changed.
    Idle,
    /// A full cycle completed.
    Retired(Retired),
    /// The cycle was aborted by a fault.
    Faulted(Fault),
}

impl Cpu {
    /// Executes one machine cycle.
    ///
    /// Does nothing once the status is terminal, so a stopped machine is never
    /// mutated by further calls.
    pub fn step(&mut self) -> StepOutcome {
        if !self.is_running() {
            return StepOutcome::Idle;
        }
        match self.cycle() {
            Ok(retired) => StepOutcome::Retired(retired),
            Err(fault) => {
                debug!("cycle aborted: {fault}");
                self.status = fault.status();
                self.last_fault = Some(fault);
                StepOutcome::Faulted(fault)
            }
        }
    }

    /// Runs the stages in order, propagating the first fault.
    fn cycle(&mut self) -> Result<Retired, Fault> {
        let inst = fetch_stage(self)?;
        let id = decode_stage(self, &inst);
        let ex = execute_stage(self, &inst, &id)?;
        let mem = mem_stage(self, &inst, &id, &ex)?;
        wb_stage(self, &inst, &ex, &mem);
        pc_update_stage(self, &inst, &ex, &mem);
        Ok(Retired { inst, cnd: ex.cnd })
    }
}
