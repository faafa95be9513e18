//! Fault and Error definitions.
//!
//! This module defines the error handling mechanisms for the simulator. It provides:
//! 1. **Machine Faults:** The fatal conditions a cycle can raise (invalid instruction,
//!    invalid function code, bad address), each mapping to a terminal status.
//! 2. **Host Errors:** Failures outside the machine (image I/O, configuration parsing,
//!    trace serialization) reported through [`SimError`].

use std::io;

use thiserror::Error;

use crate::core::arch::status::Status;

/// Fatal machine conditions raised by a pipeline stage.
///
/// A fault aborts the current cycle. Writes performed by earlier stages of the
/// same cycle stay in effect; no later stage runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum Fault {
    /// The opcode byte carries an instruction class outside the recognized set.
    #[error("InvalidInstruction(pc={pc:#x}, icode={icode:#x})")]
    InvalidInstruction {
        /// Address of the offending opcode byte.
        pc: u64,
        /// The unrecognized class nibble.
        icode: u8,
    },

    /// A recognized class was paired with a function code it does not define.
    #[error("InvalidFunction(pc={pc:#x}, icode={icode:#x}, ifun={ifun:#x})")]
    InvalidFunction {
        /// Address of the offending opcode byte.
        pc: u64,
        /// The instruction class nibble.
        icode: u8,
        /// The unrecognized function nibble.
        ifun: u8,
    },

    /// A memory access computed an address that is negative when read as signed.
    #[error("AddressError(pc={pc:#x}, addr={addr:#x})")]
    AddressError {
        /// Address of the instruction performing the access.
        pc: u64,
        /// The rejected effective address.
        addr: u64,
    },
}

impl Fault {
    /// Returns the terminal status this fault drives the machine into.
    pub const fn status(&self) -> Status {
        match self {
            Self::InvalidInstruction { .. } | Self::InvalidFunction { .. } => {
                Status::InvalidInstruction
            }
            Self::AddressError { .. } => Status::AddressError,
        }
    }

    /// Returns the address of the instruction that raised the fault.
    pub const fn pc(&self) -> u64 {
        match self {
            Self::InvalidInstruction { pc, .. }
            | Self::InvalidFunction { pc, .. }
            | Self::AddressError { pc, .. } => *pc,
        }
    }
}

/// Host-side failures: anything that goes wrong outside the simulated machine.
#[derive(Debug, Error)]
pub enum SimError {
    /// Reading a memory image or configuration file failed.
    #[error("I/O error on '{path}': {source}")]
    Io {
        /// Path (or `-` for standard input) being read.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The configuration document could not be parsed.
    #[error("invalid configuration: {0}")]
    Config(#[source] serde_json::Error),

    /// The execution trace could not be serialized.
    #[error("trace serialization failed: {0}")]
    Trace(#[source] serde_json::Error),

    /// The rendered trace was not valid UTF-8.
    #[error("trace encoding failed: {0}")]
    TraceEncoding(#[source] std::string::FromUtf8Error),
}

impl SimError {
    /// Wraps an I/O error with the path that produced it.
    pub fn io(path: impl Into<String>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
