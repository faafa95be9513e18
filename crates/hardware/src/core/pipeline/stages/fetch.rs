//! Instruction Fetch (IF) Stage.
//!
//! Reads the opcode byte at the current PC, then the register specifier
//! byte and constant word the class requires, and computes the fall-through
//! address. An unrecognized class aborts the cycle.

use tracing::trace;

use crate::common::Fault;
use crate::core::Cpu;
use crate::isa::Decoded;
use crate::isa::decode::decode;

/// Executes the instruction fetch stage.
///
/// # Arguments
///
/// * `cpu` - CPU state; only the PC and memory are read.
///
/// # Returns
///
/// The decoded instruction, or [`Fault::InvalidInstruction`] for a class above `0xB`.
pub fn fetch_stage(cpu: &Cpu) -> Result<Decoded, Fault> {
    let inst = decode(&cpu.mem, cpu.pc)?;
    trace!(
        "IF  pc={:#x} icode={:?} ifun={:#x} ra={:?} rb={:?} valC={:#x} valP={:#x}",
        inst.pc,
        inst.icode,
        inst.ifun,
        inst.ra,
        inst.rb,
        inst.val_c,
        inst.val_p
    );
    Ok(inst)
}
