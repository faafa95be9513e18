//! System components outside the CPU core.
//!
//! The machine attaches exactly one component to the core: its memory.
//! See [`memory::SparseMemory`].

/// Sparse byte-addressable memory.
pub mod memory;

pub use memory::SparseMemory;
