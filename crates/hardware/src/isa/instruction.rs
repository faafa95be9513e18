//! Instruction classes, function codes, and the decoded instruction record.
//!
//! The opcode byte splits into a class nibble (`icode`) and a function nibble
//! (`ifun`). The class fixes the operand layout; the function selects the ALU
//! operation or the condition for the classes that have one.

use crate::common::constants::{CONSTANT_BYTES, NIBBLE_MASK, NIBBLE_SHIFT, OPCODE_BYTES, REGID_BYTES};
use crate::isa::abi::Reg;

/// Instruction class (the high nibble of the opcode byte).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Icode {
    /// `halt`: stop the machine.
    Halt = 0x0,
    /// `nop`: no operation.
    Nop = 0x1,
    /// `rrmovq` / `cmovXX`: conditional register-to-register move.
    Cmov = 0x2,
    /// `irmovq`: immediate-to-register move.
    Irmov = 0x3,
    /// `rmmovq`: register-to-memory move.
    Rmmov = 0x4,
    /// `mrmovq`: memory-to-register move.
    Mrmov = 0x5,
    /// `OPq`: integer ALU operation.
    Op = 0x6,
    /// `jmp` / `jXX`: conditional jump.
    Jxx = 0x7,
    /// `call`: push the return address and jump.
    Call = 0x8,
    /// `ret`: pop the return address and jump to it.
    Ret = 0x9,
    /// `pushq`: push a register.
    Push = 0xA,
    /// `popq`: pop into a register.
    Pop = 0xB,
}

impl Icode {
    /// Every recognized class in encoding order.
    pub const ALL: [Self; 12] = [
        Self::Halt,
        Self::Nop,
        Self::Cmov,
        Self::Irmov,
        Self::Rmmov,
        Self::Mrmov,
        Self::Op,
        Self::Jxx,
        Self::Call,
        Self::Ret,
        Self::Push,
        Self::Pop,
    ];

    /// Decodes a class nibble; classes above `0xB` are not recognized.
    pub const fn from_nibble(nibble: u8) -> Option<Self> {
        let n = nibble & NIBBLE_MASK;
        if (n as usize) < Self::ALL.len() {
            Some(Self::ALL[n as usize])
        } else {
            None
        }
    }

    /// Returns the raw class nibble.
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Whether the class is followed by a register specifier byte.
    pub const fn needs_regids(self) -> bool {
        matches!(
            self,
            Self::Cmov | Self::Irmov | Self::Rmmov | Self::Mrmov | Self::Op | Self::Push | Self::Pop
        )
    }

    /// Whether the class carries an 8-byte constant word.
    pub const fn needs_val_c(self) -> bool {
        matches!(
            self,
            Self::Irmov | Self::Rmmov | Self::Mrmov | Self::Jxx | Self::Call
        )
    }

    /// Encoded length in bytes of an instruction of this class.
    pub const fn length(self) -> u64 {
        let mut len = OPCODE_BYTES;
        if self.needs_regids() {
            len += REGID_BYTES;
        }
        if self.needs_val_c() {
            len += CONSTANT_BYTES;
        }
        len
    }

    /// Base mnemonic used by the disassembler.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Halt => "halt",
            Self::Nop => "nop",
            Self::Cmov => "cmov",
            Self::Irmov => "irmovq",
            Self::Rmmov => "rmmovq",
            Self::Mrmov => "mrmovq",
            Self::Op => "op",
            Self::Jxx => "j",
            Self::Call => "call",
            Self::Ret => "ret",
            Self::Push => "pushq",
            Self::Pop => "popq",
        }
    }
}

/// ALU function codes for [`Icode::Op`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AluOp {
    /// `addq`: B + A.
    Add,
    /// `subq`: B - A.
    Sub,
    /// `andq`: B & A.
    And,
    /// `xorq`: B ^ A.
    Xor,
}

impl AluOp {
    /// Decodes an ALU function nibble.
    pub const fn from_ifun(ifun: u8) -> Option<Self> {
        match ifun {
            0 => Some(Self::Add),
            1 => Some(Self::Sub),
            2 => Some(Self::And),
            3 => Some(Self::Xor),
            _ => None,
        }
    }

    /// Assembler mnemonic.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Add => "addq",
            Self::Sub => "subq",
            Self::And => "andq",
            Self::Xor => "xorq",
        }
    }
}

/// Condition function codes shared by [`Icode::Cmov`] and [`Icode::Jxx`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Condition {
    /// Unconditional (`rrmovq`, `jmp`).
    Always,
    /// Less or equal: `(SF ^ OF) | ZF`.
    Le,
    /// Less: `SF ^ OF`.
    L,
    /// Equal: `ZF`.
    E,
    /// Not equal: `!ZF`.
    Ne,
    /// Greater or equal: `!(SF ^ OF)`.
    Ge,
    /// Greater: `!(SF ^ OF) & !ZF`.
    G,
}

impl Condition {
    /// Decodes a condition function nibble.
    pub const fn from_ifun(ifun: u8) -> Option<Self> {
        match ifun {
            0 => Some(Self::Always),
            1 => Some(Self::Le),
            2 => Some(Self::L),
            3 => Some(Self::E),
            4 => Some(Self::Ne),
            5 => Some(Self::Ge),
            6 => Some(Self::G),
            _ => None,
        }
    }

    /// Condition suffix used in `cmovXX` / `jXX` mnemonics (empty for `Always`).
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::Always => "",
            Self::Le => "le",
            Self::L => "l",
            Self::E => "e",
            Self::Ne => "ne",
            Self::Ge => "ge",
            Self::G => "g",
        }
    }
}

/// Splits an opcode or register byte into its (high, low) nibbles.
#[inline]
pub const fn split_nibbles(byte: u8) -> (u8, u8) {
    ((byte >> NIBBLE_SHIFT) & NIBBLE_MASK, byte & NIBBLE_MASK)
}

/// A fetched and decoded instruction.
///
/// Only the fields the class uses are populated: register fields the class does
/// not consume are `None`, and `val_c` is zero when no constant word is present.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Decoded {
    /// Address of the opcode byte.
    pub pc: u64,
    /// Instruction class.
    pub icode: Icode,
    /// Raw function nibble.
    pub ifun: u8,
    /// First register specifier (high nibble of the register byte).
    pub ra: Option<Reg>,
    /// Second register specifier (low nibble of the register byte).
    pub rb: Option<Reg>,
    /// Constant word (immediate, displacement, or target address).
    pub val_c: u64,
    /// Fall-through address of the next sequential instruction.
    pub val_p: u64,
}

impl Decoded {
    /// ALU operation selected by `ifun`, for [`Icode::Op`] instructions.
    pub const fn alu_op(&self) -> Option<AluOp> {
        match self.icode {
            Icode::Op => AluOp::from_ifun(self.ifun),
            _ => None,
        }
    }

    /// Condition selected by `ifun`, for [`Icode::Cmov`] and [`Icode::Jxx`] instructions.
    pub const fn condition(&self) -> Option<Condition> {
        match self.icode {
            Icode::Cmov | Icode::Jxx => Condition::from_ifun(self.ifun),
            _ => None,
        }
    }

    /// Encoded length in bytes.
    pub const fn length(&self) -> u64 {
        self.val_p.wrapping_sub(self.pc)
    }
}
