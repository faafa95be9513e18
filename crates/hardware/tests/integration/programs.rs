//! End-to-End Program Tests.
//!
//! Small Y86-64 programs run from reset to termination, checking the final
//! architectural state.

use pretty_assertions::assert_eq;
use y86sim_core::Status;
use y86sim_core::common::Fault;
use y86sim_core::isa::Reg;

use crate::common::builder::{alu, cond};
use crate::common::{Program, TestContext};

#[test]
fn test_irmovq_then_halt() {
    let mut ctx = TestContext::from_image("0x000: 30f30a00000000000000\n0x00a: 00\n");
    let summary = ctx.run_to_end();
    assert_eq!(summary.status, Status::Halted);
    assert_eq!(summary.cycles, 2);
    assert_eq!(ctx.get_reg(Reg::Rbx), 10);
    assert_eq!(ctx.cpu().pc, 10);
}

#[test]
fn test_sub_equal_extremes_sets_zero_flag() {
    let program = Program::new()
        .irmovq(i64::MIN, Reg::Rax)
        .irmovq(i64::MIN, Reg::Rbx)
        .op(alu::SUB, Reg::Rax, Reg::Rbx)
        .halt();
    let mut ctx = TestContext::with_program(&program);
    let _ = ctx.run_to_end();
    let cc = ctx.cpu().cc;
    assert_eq!(ctx.get_reg(Reg::Rbx), 0);
    assert!(cc.zf && !cc.sf && !cc.of);
}

#[test]
fn test_add_overflow_flags() {
    let program = Program::new()
        .irmovq(1, Reg::Rax)
        .irmovq(i64::MAX, Reg::Rbx)
        .op(alu::ADD, Reg::Rax, Reg::Rbx)
        .halt();
    let mut ctx = TestContext::with_program(&program);
    let _ = ctx.run_to_end();
    assert_eq!(ctx.get_reg_signed(Reg::Rbx), i64::MIN);
    let cc = ctx.cpu().cc;
    assert!(!cc.zf && cc.sf && cc.of);
}

#[test]
fn test_push_pop_round_trip() {
    let program = Program::new()
        .irmovq(0x100, Reg::Rsp)
        .irmovq(0x1234, Reg::Rax)
        .pushq(Reg::Rax)
        .popq(Reg::Rbx)
        .halt();
    let mut ctx = TestContext::with_program(&program);
    let _ = ctx.run_to_end();
    assert_eq!(ctx.get_reg(Reg::Rbx), 0x1234);
    assert_eq!(ctx.get_reg(Reg::Rsp), 0x100);
    assert_eq!(ctx.cpu().mem.read_u64(0xF8), 0x1234);
}

#[test]
fn test_push_stack_pointer_stores_old_value() {
    let program = Program::new()
        .irmovq(0x100, Reg::Rsp)
        .pushq(Reg::Rsp)
        .halt();
    let mut ctx = TestContext::with_program(&program);
    let _ = ctx.run_to_end();
    assert_eq!(ctx.cpu().mem.read_u64(0xF8), 0x100);
    assert_eq!(ctx.get_reg(Reg::Rsp), 0xF8);
}

#[test]
fn test_pop_into_stack_pointer_loads_value() {
    let program = Program::new()
        .irmovq(0x100, Reg::Rsp)
        .irmovq(0x5A, Reg::Rax)
        .rmmovq(Reg::Rax, 0, Reg::Rsp)
        .popq(Reg::Rsp)
        .halt();
    let mut ctx = TestContext::with_program(&program);
    let _ = ctx.run_to_end();
    assert_eq!(ctx.get_reg(Reg::Rsp), 0x5A);
}

#[test]
fn test_call_and_return() {
    // 0x00 irmovq $0x200, %rsp
    // 0x0a call  0x20
    // 0x13 halt
    // 0x20 irmovq $7, %rax
    // 0x2a ret
    let program = Program::new()
        .irmovq(0x200, Reg::Rsp)
        .call(0x20)
        .halt()
        .raw(&[0; 12])
        .irmovq(7, Reg::Rax)
        .ret();
    let mut ctx = TestContext::with_program(&program);
    let summary = ctx.run_to_end();
    assert_eq!(summary.status, Status::Halted);
    assert_eq!(ctx.get_reg(Reg::Rax), 7);
    assert_eq!(ctx.get_reg(Reg::Rsp), 0x200);
    assert_eq!(ctx.cpu().pc, 0x13);
    assert_eq!(ctx.cpu().mem.read_u64(0x1F8), 0x13);
}

#[test]
fn test_countdown_loop() {
    // Sum 5 + 4 + 3 + 2 + 1 into %rax.
    //
    // 0x00 irmovq $5, %rcx
    // 0x0a irmovq $1, %rdx
    // 0x14 addq   %rcx, %rax     <- loop
    // 0x16 subq   %rdx, %rcx
    // 0x18 jne    0x14
    // 0x21 halt
    let program = Program::new()
        .irmovq(5, Reg::Rcx)
        .irmovq(1, Reg::Rdx)
        .op(alu::ADD, Reg::Rcx, Reg::Rax)
        .op(alu::SUB, Reg::Rdx, Reg::Rcx)
        .jxx(cond::NE, 0x14)
        .halt();
    let mut ctx = TestContext::with_program(&program);
    let summary = ctx.run_to_end();
    assert_eq!(summary.status, Status::Halted);
    assert_eq!(ctx.get_reg(Reg::Rax), 15);
    assert_eq!(ctx.get_reg(Reg::Rcx), 0);
    assert_eq!(summary.cycles, 2 + 5 * 3 + 1);
    assert_eq!(ctx.sim.stats.jumps_taken, 4);
    assert_eq!(ctx.sim.stats.jumps_not_taken, 1);
}

#[test]
fn test_conditional_move_by_sign() {
    // max(%rax, %rbx) into %rbx via `cmovl`.
    let program = Program::new()
        .irmovq(-3, Reg::Rax)
        .irmovq(8, Reg::Rbx)
        .rrmovq(Reg::Rbx, Reg::Rsi)
        .op(alu::SUB, Reg::Rax, Reg::Rsi) // rsi = 8 - (-3) > 0
        .cmov(cond::L, Reg::Rax, Reg::Rbx)
        .cmov(cond::G, Reg::Rax, Reg::Rdi)
        .halt();
    let mut ctx = TestContext::with_program(&program);
    let _ = ctx.run_to_end();
    assert_eq!(ctx.get_reg(Reg::Rbx), 8);
    assert_eq!(ctx.get_reg_signed(Reg::Rdi), -3);
}

#[test]
fn test_memory_round_trip_through_displacement() {
    let program = Program::new()
        .irmovq(0x300, Reg::Rbp)
        .irmovq(-42, Reg::Rax)
        .rmmovq(Reg::Rax, -8, Reg::Rbp)
        .mrmovq(-8, Reg::Rbp, Reg::R12)
        .halt();
    let mut ctx = TestContext::with_program(&program);
    let _ = ctx.run_to_end();
    assert_eq!(ctx.get_reg_signed(Reg::R12), -42);
    assert_eq!(ctx.cpu().mem.read_u64(0x2F8), -42i64 as u64);
}

#[test]
fn test_rsp_image_halts_at_first_zero_byte() {
    // Byte 10 is never loaded and reads as `halt`.
    let mut ctx = TestContext::from_image("0x000: 30f40a00000000000000\n0x00b: 00\n");
    let summary = ctx.run_to_end();
    assert_eq!(summary.status, Status::Halted);
    assert_eq!(ctx.get_reg(Reg::Rsp), 10);
    assert_eq!(ctx.cpu().pc, 10);
}

#[test]
fn test_ret_through_negative_stack_pointer_faults() {
    // `ret` loads through the unadjusted stack pointer.
    let program = Program::new().irmovq(-8, Reg::Rsp).ret();
    let mut ctx = TestContext::with_program(&program);
    let summary = ctx.run_to_end();
    assert_eq!(summary.status, Status::AddressError);
    assert_eq!(
        summary.fault,
        Some(Fault::AddressError {
            pc: 10,
            addr: -8i64 as u64
        })
    );
    assert_eq!(ctx.get_reg_signed(Reg::Rsp), -8);
}

#[test]
fn test_running_off_into_unknown_opcode() {
    let program = Program::new().nop().nop().raw(&[0xD0]);
    let mut ctx = TestContext::with_program(&program);
    let summary = ctx.run_to_end();
    assert_eq!(summary.status, Status::InvalidInstruction);
    assert_eq!(ctx.cpu().pc, 2);
    assert_eq!(summary.cycles, 3);
}
