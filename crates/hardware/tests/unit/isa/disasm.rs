//! Disassembler output tests.

use rstest::rstest;
use y86sim_core::SparseMemory;
use y86sim_core::isa::decode::decode;
use y86sim_core::isa::disasm::{disassemble, listing};
use y86sim_core::sim::loader::parse_image;
use y86sim_core::isa::Reg;

use crate::common::builder::{alu, cond};
use crate::common::Program;

fn render(program: Program) -> String {
    let mut mem = SparseMemory::new();
    mem.load_bytes(0, program.bytes());
    disassemble(&decode(&mem, 0).unwrap())
}

#[rstest]
#[case(Program::new().halt(), "halt")]
#[case(Program::new().nop(), "nop")]
#[case(Program::new().ret(), "ret")]
#[case(Program::new().rrmovq(Reg::Rsp, Reg::Rbp), "rrmovq %rsp, %rbp")]
#[case(Program::new().cmov(cond::LE, Reg::Rax, Reg::Rbx), "cmovle %rax, %rbx")]
#[case(Program::new().cmov(cond::G, Reg::Rcx, Reg::Rdx), "cmovg %rcx, %rdx")]
#[case(Program::new().irmovq(10, Reg::Rbx), "irmovq $10, %rbx")]
#[case(Program::new().irmovq(-1, Reg::R8), "irmovq $-1, %r8")]
#[case(Program::new().rmmovq(Reg::Rsi, 8, Reg::Rsp), "rmmovq %rsi, 8(%rsp)")]
#[case(Program::new().mrmovq(-16, Reg::Rbp, Reg::Rax), "mrmovq -16(%rbp), %rax")]
#[case(Program::new().op(alu::ADD, Reg::Rax, Reg::Rbx), "addq %rax, %rbx")]
#[case(Program::new().op(alu::XOR, Reg::R9, Reg::R10), "xorq %r9, %r10")]
#[case(Program::new().jxx(cond::ALWAYS, 0x40), "jmp 0x40")]
#[case(Program::new().jxx(cond::NE, 0x1c), "jne 0x1c")]
#[case(Program::new().call(0x100), "call 0x100")]
#[case(Program::new().pushq(Reg::Rax), "pushq %rax")]
#[case(Program::new().popq(Reg::R14), "popq %r14")]
fn test_disassembly(#[case] program: Program, #[case] expected: &str) {
    assert_eq!(render(program), expected);
}

#[test]
fn test_unknown_condition_is_marked() {
    let text = render(Program::new().jxx(0x9, 0));
    assert!(text.ends_with("?9"), "{text}");
}

#[test]
fn test_listing_skips_unloaded_gaps() {
    let mem = parse_image("0x000: 10\n0x004: 30f30a00000000000000\n0x00e: 00\n");
    assert_eq!(
        listing(&mem),
        vec!["0x0000: nop", "0x0004: irmovq $10, %rbx", "0x000e: halt"]
    );
}

#[test]
fn test_listing_stops_at_undecodable_byte() {
    let mem = parse_image("0x000: 10c010\n");
    let lines = listing(&mem);
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], "0x0000: nop");
    assert!(lines[1].starts_with("0x0001: .byte 0xc0"), "{}", lines[1]);
}

#[test]
fn test_listing_ends_at_top_of_address_space() {
    let mem = parse_image("0x000: 10\nffffffffffffffff: 10\n");
    assert_eq!(
        listing(&mem),
        vec!["0x0000: nop", "0xffffffffffffffff: nop"]
    );

    // An instruction whose bytes run past the top is listed once.
    let mut mem = SparseMemory::new();
    mem.write_byte(u64::MAX, 0x30);
    assert_eq!(listing(&mem).len(), 1);
}

#[test]
fn test_listing_of_empty_image() {
    assert!(listing(&SparseMemory::new()).is_empty());
}
