//! Machine memory.
//!
//! The simulated machine has a single flat, sparse, byte-addressable store.

/// Sparse byte-addressable memory.
pub mod sparse;

pub use sparse::SparseMemory;
