//! Pipeline stage implementations.
//!
//! This module contains the individual implementations for the six stages of
//! a machine cycle. It includes:
//! 1. **Fetch:** Reads and decodes the instruction at the PC.
//! 2. **Decode:** Selects and reads the operand registers.
//! 3. **Execute:** Performs ALU operations and evaluates conditions.
//! 4. **Memory:** Validates the address and performs the load or store.
//! 5. **Writeback:** Commits results to the register file.
//! 6. **PC Update:** Selects the next program counter or halts.

/// Operand read stage implementation.
pub mod decode;

/// ALU and condition stage implementation.
pub mod execute;

/// Instruction fetch stage implementation.
pub mod fetch;

/// Memory access stage implementation.
pub mod memory;

/// Program counter update stage implementation.
pub mod pc_update;

/// Writeback stage implementation.
pub mod writeback;

/// Decode stage entry point (ID stage).
pub use decode::decode_stage;
/// Execute stage entry point (EX stage).
pub use execute::execute_stage;
/// Fetch stage entry point (IF stage).
pub use fetch::fetch_stage;
/// Memory stage entry point (MEM stage).
pub use memory::mem_stage;
/// PC update stage entry point.
pub use pc_update::pc_update_stage;
/// Writeback stage entry point (WB stage).
pub use writeback::wb_stage;
