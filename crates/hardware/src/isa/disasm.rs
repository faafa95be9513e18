//! Instruction disassembler for debug tracing and listings.
//!
//! Renders a [`Decoded`] instruction in AT&T syntax, e.g. `irmovq $10, %rbx`
//! or `mrmovq 8(%rsp), %rax`. Unknown function codes render as `<class>?<ifun>`.

use crate::isa::abi::Reg;
use crate::isa::decode::decode;
use crate::isa::instruction::{Decoded, Icode};
use crate::soc::memory::SparseMemory;

fn reg(r: Option<Reg>) -> String {
    r.map_or_else(|| "%none".to_owned(), |r| r.to_string())
}

fn mem_operand(disp: u64, base: Option<Reg>) -> String {
    let disp = disp as i64;
    match base {
        Some(b) => format!("{disp}({b})"),
        None => format!("{disp}"),
    }
}

/// Disassembles a single decoded instruction.
pub fn disassemble(inst: &Decoded) -> String {
    let unknown = || format!("{}?{:x}", inst.icode.mnemonic(), inst.ifun);
    match inst.icode {
        Icode::Halt | Icode::Nop | Icode::Ret => inst.icode.mnemonic().to_owned(),
        Icode::Cmov => match inst.condition() {
            Some(c) if c.suffix().is_empty() => {
                format!("rrmovq {}, {}", reg(inst.ra), reg(inst.rb))
            }
            Some(c) => format!("cmov{} {}, {}", c.suffix(), reg(inst.ra), reg(inst.rb)),
            None => unknown(),
        },
        Icode::Irmov => format!("irmovq ${}, {}", inst.val_c as i64, reg(inst.rb)),
        Icode::Rmmov => format!(
            "rmmovq {}, {}",
            reg(inst.ra),
            mem_operand(inst.val_c, inst.rb)
        ),
        Icode::Mrmov => format!(
            "mrmovq {}, {}",
            mem_operand(inst.val_c, inst.rb),
            reg(inst.ra)
        ),
        Icode::Op => match inst.alu_op() {
            Some(op) => format!("{} {}, {}", op.mnemonic(), reg(inst.ra), reg(inst.rb)),
            None => unknown(),
        },
        Icode::Jxx => match inst.condition() {
            Some(c) if c.suffix().is_empty() => format!("jmp {:#x}", inst.val_c),
            Some(c) => format!("j{} {:#x}", c.suffix(), inst.val_c),
            None => unknown(),
        },
        Icode::Call => format!("call {:#x}", inst.val_c),
        Icode::Push | Icode::Pop => format!("{} {}", inst.icode.mnemonic(), reg(inst.ra)),
    }
}

/// Produces a listing of every instruction in a loaded image.
///
/// The sweep starts at the lowest loaded address and follows fall-through
/// addresses, jumping over gaps of unloaded bytes. It ends after the last
/// loaded byte, at the first undecodable byte (rendered as `.byte`), or when
/// an instruction runs past the top of the address space.
pub fn listing(mem: &SparseMemory) -> Vec<String> {
    let mut lines = Vec::new();
    let mut next = mem.next_address(0);
    while let Some(pc) = next {
        match decode(mem, pc) {
            Ok(inst) => {
                lines.push(format!("{pc:#06x}: {}", disassemble(&inst)));
                next = if inst.val_p > pc {
                    mem.next_address(inst.val_p)
                } else {
                    None
                };
            }
            Err(fault) => {
                lines.push(format!("{pc:#06x}: .byte {:#04x}    # {fault}", mem.read_byte(pc)));
                next = None;
            }
        }
    }
    lines
}
