//! Instruction Decoder.
//!
//! Reads the opcode byte at a program counter and, depending on the class,
//! the register specifier byte and the little-endian constant word that
//! follow it, producing a [`Decoded`] record with the fall-through address.

use crate::common::Fault;
use crate::common::constants::{CONSTANT_BYTES, OPCODE_BYTES, REGID_BYTES};
use crate::isa::abi::Reg;
use crate::isa::instruction::{Decoded, Icode, split_nibbles};
use crate::soc::memory::SparseMemory;

/// Decodes the instruction located at `pc`.
///
/// # Arguments
///
/// * `mem` - Memory holding the instruction bytes. Unset bytes read as zero.
/// * `pc` - Address of the opcode byte.
///
/// # Returns
///
/// The decoded instruction, or [`Fault::InvalidInstruction`] when the class
/// nibble is above `0xB`. Function codes are not validated here.
pub fn decode(mem: &SparseMemory, pc: u64) -> Result<Decoded, Fault> {
    let (class, ifun) = split_nibbles(mem.read_byte(pc));
    let icode = Icode::from_nibble(class).ok_or(Fault::InvalidInstruction { pc, icode: class })?;

    let mut val_p = pc.wrapping_add(OPCODE_BYTES);
    let mut ra = None;
    let mut rb = None;
    let mut val_c = 0;

    if icode.needs_regids() {
        let (a, b) = split_nibbles(mem.read_byte(val_p));
        ra = Reg::from_nibble(a);
        rb = Reg::from_nibble(b);
        val_p = val_p.wrapping_add(REGID_BYTES);
    }

    if icode.needs_val_c() {
        val_c = mem.read_u64(val_p);
        val_p = val_p.wrapping_add(CONSTANT_BYTES);
    }

    Ok(Decoded {
        pc,
        icode,
        ifun,
        ra,
        rb,
        val_c,
        val_p,
    })
}
