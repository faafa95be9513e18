//! Common utilities and types used throughout the simulator.
//!
//! This module provides the building blocks shared by every component. It includes:
//! 1. **Constants:** Word size, encoding field widths, and status codes.
//! 2. **Error Handling:** Machine faults and host-side error types.
//! 3. **Register Management:** The named register file.

/// Common constants used throughout the simulator.
pub mod constants;

/// Fault and error definitions.
pub mod error;

/// Register file implementation.
pub mod reg;

pub use error::{Fault, SimError};
pub use reg::RegisterFile;
