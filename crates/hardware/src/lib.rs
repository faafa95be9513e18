//! Y86-64 instruction set simulator library.
//!
//! This crate implements a functional simulator for the Y86-64 teaching ISA:
//! 1. **Core:** Single-cycle pipeline (fetch, decode, execute, memory, writeback,
//!    PC update), register file, condition codes, and machine status.
//! 2. **Memory:** Sparse byte-addressable memory with little-endian word access.
//! 3. **ISA:** Instruction classes, decoding, and disassembly.
//! 4. **Simulation:** Memory image loader, configuration, trace recording, and statistics.
//!
//! # Examples
//!
//! ```
//! use y86sim_core::{Config, Simulator, Status};
//! use y86sim_core::sim::loader::parse_image;
//!
//! let mem = parse_image("0x000: 30f30a00000000000000\n0x00a: 00\n");
//! let mut sim = Simulator::new(mem, &Config::default());
//! let summary = sim.run();
//! assert_eq!(summary.status, Status::Halted);
//! assert_eq!(sim.trace.len(), 2);
//! ```

/// Common types and constants (faults, errors, registers).
pub mod common;
/// Simulator configuration.
pub mod config;
/// CPU core (state, pipeline, execution units).
pub mod core;
/// Instruction set (registers, classes, decode, disassembly).
pub mod isa;
/// Memory image loader and simulator driver.
pub mod sim;
/// Machine memory.
pub mod soc;
/// Simulation statistics collection and reporting.
pub mod stats;
/// Per-cycle snapshots and the JSON trace.
pub mod trace;

/// Root configuration type; use `Config::default()` or load it from JSON.
pub use crate::config::Config;
/// Main CPU type; holds registers, flags, status, and memory.
pub use crate::core::Cpu;
/// Machine status.
pub use crate::core::arch::Status;
/// Cycle driver with trace recording; construct with `Simulator::new`.
pub use crate::sim::Simulator;
/// Sparse machine memory.
pub use crate::soc::SparseMemory;
