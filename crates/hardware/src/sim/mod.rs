//! Simulation utilities and program loading.
//!
//! Provides the memory image loader and the simulator driver that runs a
//! CPU while recording its trace and statistics.

pub mod loader;

pub mod simulator;

pub use simulator::{RunSummary, Simulator};
