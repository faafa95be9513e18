//! Instruction Execute (EX) Stage.
//!
//! Produces `val_e` for every class: the ALU result for `OPq` (also setting
//! the condition codes), the effective address for memory moves, and the
//! adjusted stack pointer for stack operations. For `cmovXX` / `jXX` it
//! evaluates the condition against the current flags.

use tracing::trace;

use crate::common::Fault;
use crate::common::constants::STACK_STEP;
use crate::core::Cpu;
use crate::core::pipeline::latches::{ExMemEntry, IdExEntry};
use crate::core::units::alu::Alu;
use crate::core::units::bru;
use crate::isa::{Decoded, Icode};

/// Executes the execute stage.
///
/// # Arguments
///
/// * `cpu` - CPU state; the condition codes are updated by `OPq`.
/// * `inst` - The instruction produced by fetch.
/// * `id` - Operands produced by decode.
///
/// # Returns
///
/// The execute result, or [`Fault::InvalidFunction`] for an `OPq` with an
/// unknown function code. The flags are left untouched in that case.
pub fn execute_stage(cpu: &mut Cpu, inst: &Decoded, id: &IdExEntry) -> Result<ExMemEntry, Fault> {
    let mut cnd = false;
    let val_e = match inst.icode {
        Icode::Op => {
            let op = inst.alu_op().ok_or(Fault::InvalidFunction {
                pc: inst.pc,
                icode: inst.icode.code(),
                ifun: inst.ifun,
            })?;
            let (res, cc) = Alu::execute(op, id.val_a, id.val_b);
            cpu.cc = cc;
            res
        }
        Icode::Cmov | Icode::Jxx => {
            cnd = bru::evaluate_opt(inst.condition(), cpu.cc);
            id.val_a
        }
        Icode::Irmov => inst.val_c,
        Icode::Rmmov | Icode::Mrmov => (id.val_b as i64).wrapping_add(inst.val_c as i64) as u64,
        Icode::Call | Icode::Push => (id.val_b as i64).wrapping_sub(STACK_STEP) as u64,
        Icode::Ret | Icode::Pop => (id.val_b as i64).wrapping_add(STACK_STEP) as u64,
        Icode::Halt | Icode::Nop => 0,
    };
    trace!(
        "EX  pc={:#x} valE={:#x} cnd={} ZF={} SF={} OF={}",
        inst.pc, val_e, cnd, cpu.cc.zf, cpu.cc.sf, cpu.cc.of
    );
    Ok(ExMemEntry { val_e, cnd })
}
