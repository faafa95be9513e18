//! Machine status.

use serde::Serialize;

use crate::common::constants::{STAT_ADR, STAT_AOK, STAT_HLT, STAT_INS};

/// Execution status of the machine.
///
/// Every value other than [`Status::Running`] is terminal: once reached, no
/// further cycle executes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Status {
    /// Normal operation (AOK).
    #[default]
    Running,
    /// A `halt` instruction executed (HLT).
    Halted,
    /// A memory access used an invalid address (ADR).
    AddressError,
    /// An invalid instruction was encountered (INS).
    InvalidInstruction,
}

impl Status {
    /// Integer status code as reported in traces (1-4).
    pub const fn code(self) -> u8 {
        match self {
            Self::Running => STAT_AOK,
            Self::Halted => STAT_HLT,
            Self::AddressError => STAT_ADR,
            Self::InvalidInstruction => STAT_INS,
        }
    }

    /// Whether the machine can still execute cycles.
    pub const fn is_running(self) -> bool {
        matches!(self, Self::Running)
    }

    /// Short mnemonic (`AOK`, `HLT`, `ADR`, `INS`).
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Running => "AOK",
            Self::Halted => "HLT",
            Self::AddressError => "ADR",
            Self::InvalidInstruction => "INS",
        }
    }
}

impl Serialize for Status {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.code())
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.mnemonic())
    }
}
