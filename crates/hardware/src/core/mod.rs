//! Core processor implementation.
//!
//! This module contains the CPU state, the single-cycle pipeline, the
//! execution units, and the architectural state elements they update.

/// Architectural state (condition codes, status).
pub mod arch;

/// CPU state and the per-cycle driver.
pub mod cpu;

/// Single-cycle pipeline (stages, latches).
pub mod pipeline;

/// Execution units (ALU, branch resolution).
pub mod units;

pub use self::cpu::Cpu;
