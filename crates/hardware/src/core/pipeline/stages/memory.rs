//! Memory Access (MEM) Stage.
//!
//! Decides, per class, whether the instruction reads or writes a word and at
//! which address. The address is validated before anything is touched: an
//! address that is negative when read as signed raises an address fault and
//! the access does not happen.

use tracing::trace;

use crate::common::Fault;
use crate::core::Cpu;
use crate::core::pipeline::latches::{ExMemEntry, IdExEntry, MemWbEntry};
use crate::isa::{Decoded, Icode};

/// The memory operation an instruction performs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MemAccess {
    /// No memory access (and no address check).
    None,
    /// Load a word from `addr`.
    Read {
        /// Address of the word.
        addr: u64,
    },
    /// Store `data` as a word at `addr`.
    Write {
        /// Address of the word.
        addr: u64,
        /// Value to store.
        data: u64,
    },
}

impl MemAccess {
    /// The address the access touches, if any.
    pub const fn addr(self) -> Option<u64> {
        match self {
            Self::None => None,
            Self::Read { addr } | Self::Write { addr, .. } => Some(addr),
        }
    }
}

/// Selects the memory operation for an instruction.
///
/// `ret` and `popq` read through the unadjusted stack pointer (`val_a`), while
/// `call` and `pushq` write through the decremented one (`val_e`).
pub const fn select_access(inst: &Decoded, id: &IdExEntry, ex: &ExMemEntry) -> MemAccess {
    match inst.icode {
        Icode::Rmmov | Icode::Push => MemAccess::Write {
            addr: ex.val_e,
            data: id.val_a,
        },
        Icode::Call => MemAccess::Write {
            addr: ex.val_e,
            data: inst.val_p,
        },
        Icode::Mrmov => MemAccess::Read { addr: ex.val_e },
        Icode::Ret | Icode::Pop => MemAccess::Read { addr: id.val_a },
        Icode::Halt | Icode::Nop | Icode::Cmov | Icode::Irmov | Icode::Op | Icode::Jxx => {
            MemAccess::None
        }
    }
}

/// Executes the memory stage of the pipeline.
///
/// # Arguments
///
/// * `cpu` - CPU state; memory is read or written.
/// * `inst` - The instruction produced by fetch.
/// * `id` - Operands produced by decode.
/// * `ex` - Result produced by execute.
///
/// # Returns
///
/// The loaded word (zero if nothing was read), or [`Fault::AddressError`].
pub fn mem_stage(
    cpu: &mut Cpu,
    inst: &Decoded,
    id: &IdExEntry,
    ex: &ExMemEntry,
) -> Result<MemWbEntry, Fault> {
    let access = select_access(inst, id, ex);

    if let Some(addr) = access.addr() {
        if (addr as i64) < 0 {
            return Err(Fault::AddressError { pc: inst.pc, addr });
        }
    }

    let val_m = match access {
        MemAccess::None => {
            trace!("MEM pc={:#x}", inst.pc);
            0
        }
        MemAccess::Read { addr } => {
            let val = cpu.mem.read_u64(addr);
            trace!("MEM pc={:#x} LOAD addr={:#x} data={:#x}", inst.pc, addr, val);
            val
        }
        MemAccess::Write { addr, data } => {
            trace!("MEM pc={:#x} STORE addr={:#x} data={:#x}", inst.pc, addr, data);
            cpu.mem.write_u64(addr, data);
            0
        }
    };

    Ok(MemWbEntry { val_m })
}
