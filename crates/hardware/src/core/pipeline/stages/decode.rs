//! Instruction Decode (ID) Stage.
//!
//! Chooses which registers feed the A and B operands and reads them. The
//! stack-based classes read the stack pointer implicitly. This stage cannot fail.

use tracing::trace;

use crate::core::Cpu;
use crate::core::pipeline::latches::IdExEntry;
use crate::isa::abi::REG_SP;
use crate::isa::{Decoded, Icode, Reg};

/// Register feeding the A operand.
const fn src_a(inst: &Decoded) -> Option<Reg> {
    match inst.icode {
        Icode::Cmov | Icode::Rmmov | Icode::Op | Icode::Push => inst.ra,
        Icode::Ret | Icode::Pop => Some(REG_SP),
        Icode::Halt | Icode::Nop | Icode::Irmov | Icode::Mrmov | Icode::Jxx | Icode::Call => None,
    }
}

/// Register feeding the B operand.
const fn src_b(inst: &Decoded) -> Option<Reg> {
    match inst.icode {
        Icode::Rmmov | Icode::Mrmov | Icode::Op => inst.rb,
        Icode::Call | Icode::Ret | Icode::Push | Icode::Pop => Some(REG_SP),
        Icode::Halt | Icode::Nop | Icode::Cmov | Icode::Irmov | Icode::Jxx => None,
    }
}

/// Executes the decode stage.
///
/// # Arguments
///
/// * `cpu` - CPU state; only the register file is read.
/// * `inst` - The instruction produced by fetch.
pub fn decode_stage(cpu: &Cpu, inst: &Decoded) -> IdExEntry {
    let src_a = src_a(inst);
    let src_b = src_b(inst);
    let entry = IdExEntry {
        src_a,
        src_b,
        val_a: cpu.regs.read_opt(src_a),
        val_b: cpu.regs.read_opt(src_b),
    };
    trace!(
        "ID  pc={:#x} srcA={:?} valA={:#x} srcB={:?} valB={:#x}",
        inst.pc, entry.src_a, entry.val_a, entry.src_b, entry.val_b
    );
    entry
}
