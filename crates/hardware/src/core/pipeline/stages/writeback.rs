//! Writeback (WB) Stage.
//!
//! Commits `val_e` and `val_m` to their destination registers. The two
//! targets are chosen independently; `val_m` is written second, so it wins
//! when both name the same register (e.g. `popq %rsp`).

use tracing::trace;

use crate::core::Cpu;
use crate::core::pipeline::latches::{ExMemEntry, MemWbEntry, WbTargets};
use crate::isa::abi::REG_SP;
use crate::isa::{Decoded, Icode};

/// Chooses the destination registers for an instruction.
///
/// A conditional move only targets `rB` when its condition held.
pub const fn select_targets(inst: &Decoded, ex: &ExMemEntry) -> WbTargets {
    let dst_e = match inst.icode {
        Icode::Cmov => {
            if ex.cnd {
                inst.rb
            } else {
                None
            }
        }
        Icode::Irmov | Icode::Op => inst.rb,
        Icode::Call | Icode::Ret | Icode::Push | Icode::Pop => Some(REG_SP),
        Icode::Halt | Icode::Nop | Icode::Rmmov | Icode::Mrmov | Icode::Jxx => None,
    };
    let dst_m = match inst.icode {
        Icode::Mrmov | Icode::Pop => inst.ra,
        _ => None,
    };
    WbTargets { dst_e, dst_m }
}

/// Executes the writeback stage.
///
/// # Arguments
///
/// * `cpu` - CPU state; the register file is written.
/// * `inst` - The instruction produced by fetch.
/// * `ex` - Result produced by execute.
/// * `mem` - Result produced by the memory stage.
pub fn wb_stage(cpu: &mut Cpu, inst: &Decoded, ex: &ExMemEntry, mem: &MemWbEntry) {
    let WbTargets { dst_e, dst_m } = select_targets(inst, ex);
    let wrote_e = cpu.regs.write_opt(dst_e, ex.val_e);
    let wrote_m = cpu.regs.write_opt(dst_m, mem.val_m);
    if wrote_e || wrote_m {
        trace!(
            "WB  pc={:#x} dstE={:?} valE={:#x} dstM={:?} valM={:#x}",
            inst.pc, dst_e, ex.val_e, dst_m, mem.val_m
        );
    } else {
        trace!("WB  pc={:#x}", inst.pc);
    }
}
