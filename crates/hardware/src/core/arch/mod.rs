//! Architectural state definitions.
//!
//! Holds the state elements beyond the register file that are visible in
//! every trace snapshot: the condition codes and the machine status.

/// Zero/Sign/Overflow condition codes.
pub mod cc;

/// Machine status and its reported codes.
pub mod status;

pub use cc::ConditionCodes;
pub use status::Status;
