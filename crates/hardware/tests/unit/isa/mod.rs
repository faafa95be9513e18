
/// Disassembly rendering.
pub mod disasm;
