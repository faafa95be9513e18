//! Single-cycle instruction pipeline.
//!
//! This module contains the six sequential stages of one machine cycle and
//! the records they hand forward:
//! 1. **Latches:** The values each stage produces for the ones after it.
//! 2. **Stages:** Fetch, decode, execute, memory, write-back, and PC update.
//!
//! One instruction completes all six stages before the next one is fetched,
//! so there are no hazards, stalls, or forwarding paths.

/// Inter-stage records.
pub mod latches;

/// Pipeline stage implementations.
pub mod stages;
