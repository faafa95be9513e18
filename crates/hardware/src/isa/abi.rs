//! Register names and encodings.
//!
//! Defines the fifteen named registers, their 4-bit encodings, and the
//! assembler names used in traces and disassembly. The sixteenth encoding
//! (`0xF`) means "no register" and has no variant here: it decodes to `None`.

use crate::common::constants::REG_NONE;

/// A named register.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
#[allow(missing_docs)]
pub enum Reg {
    Rax = 0,
    Rcx = 1,
    Rdx = 2,
    Rbx = 3,
    Rsp = 4,
    Rbp = 5,
    Rsi = 6,
    Rdi = 7,
    R8 = 8,
    R9 = 9,
    R10 = 10,
    R11 = 11,
    R12 = 12,
    R13 = 13,
    R14 = 14,
}

/// The stack pointer, implicitly used by push, pop, call, and ret.
pub const REG_SP: Reg = Reg::Rsp;

impl Reg {
    /// Every named register in encoding order.
    pub const ALL: [Self; 15] = [
        Self::Rax,
        Self::Rcx,
        Self::Rdx,
        Self::Rbx,
        Self::Rsp,
        Self::Rbp,
        Self::Rsi,
        Self::Rdi,
        Self::R8,
        Self::R9,
        Self::R10,
        Self::R11,
        Self::R12,
        Self::R13,
        Self::R14,
    ];

    /// Decodes a 4-bit register specifier.
    ///
    /// Returns `None` for the reserved `0xF` encoding. Only the low nibble is considered.
    pub const fn from_nibble(nibble: u8) -> Option<Self> {
        let n = nibble & 0xF;
        if n == REG_NONE {
            None
        } else {
            Some(Self::ALL[n as usize])
        }
    }

    /// Returns the register's index into the register file.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the assembler name without the `%` sigil.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Rax => "rax",
            Self::Rcx => "rcx",
            Self::Rdx => "rdx",
            Self::Rbx => "rbx",
            Self::Rsp => "rsp",
            Self::Rbp => "rbp",
            Self::Rsi => "rsi",
            Self::Rdi => "rdi",
            Self::R8 => "r8",
            Self::R9 => "r9",
            Self::R10 => "r10",
            Self::R11 => "r11",
            Self::R12 => "r12",
            Self::R13 => "r13",
            Self::R14 => "r14",
        }
    }
}

impl std::fmt::Display for Reg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "%{}", self.name())
    }
}
