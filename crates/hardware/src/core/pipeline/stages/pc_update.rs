//! Program Counter Update Stage.
//!
//! The last decision of a cycle: `halt` stops the machine with the PC left
//! on the halt instruction, taken jumps and calls go to `val_c`, `ret` goes
//! to the loaded return address, and everything else falls through.

use tracing::trace;

use crate::core::Cpu;
use crate::core::arch::Status;
use crate::core::pipeline::latches::{ExMemEntry, MemWbEntry};
use crate::isa::{Decoded, Icode};

/// Executes the PC update stage.
pub fn pc_update_stage(cpu: &mut Cpu, inst: &Decoded, ex: &ExMemEntry, mem: &MemWbEntry) {
    match inst.icode {
        Icode::Halt => {
            cpu.status = Status::Halted;
            trace!("PC  pc={:#x} HALT", cpu.pc);
            return;
        }
        Icode::Jxx if ex.cnd => cpu.pc = inst.val_c,
        Icode::Call => cpu.pc = inst.val_c,
        Icode::Ret => cpu.pc = mem.val_m,
        _ => cpu.pc = inst.val_p,
    }
    trace!("PC  pc={:#x}", cpu.pc);
}
