//! Statistics Counter Tests.

use y86sim_core::isa::{Icode, Reg};

use crate::common::builder::{alu, cond};
use crate::common::{Program, TestContext};

#[test]
fn test_counts_per_class() {
    let program = Program::new()
        .irmovq(1, Reg::Rax)
        .irmovq(2, Reg::Rbx)
        .op(alu::ADD, Reg::Rax, Reg::Rbx)
        .nop()
        .halt();
    let mut ctx = TestContext::with_program(&program);
    let _ = ctx.run_to_end();
    let stats = &ctx.sim.stats;
    assert_eq!(stats.cycles, 5);
    assert_eq!(stats.instructions_retired, 5);
    assert_eq!(stats.count(Icode::Irmov), 2);
    assert_eq!(stats.count(Icode::Op), 1);
    assert_eq!(stats.count(Icode::Halt), 1);
    assert_eq!(stats.count(Icode::Ret), 0);
    assert_eq!(stats.faults, 0);
}

#[test]
fn test_conditional_outcomes() {
    // Reset flags have ZF=1: `cmove` moves, `cmovne` does not, `jne` falls through.
    let program = Program::new()
        .cmov(cond::E, Reg::Rax, Reg::Rbx)
        .cmov(cond::NE, Reg::Rax, Reg::Rbx)
        .jxx(cond::NE, 0x100)
        .jxx(cond::E, 0x100);
    let mut ctx = TestContext::with_program(&program);
    let _ = ctx.run_to_end();
    let stats = &ctx.sim.stats;
    assert_eq!(stats.moves_taken, 1);
    assert_eq!(stats.moves_skipped, 1);
    assert_eq!(stats.jumps_not_taken, 1);
    assert_eq!(stats.jumps_taken, 1);
    assert_eq!(ctx.cpu().pc, 0x100);
}

#[test]
fn test_fault_counts_as_a_cycle() {
    let mut ctx = TestContext::with_program(&Program::new().nop().raw(&[0xE0]));
    let _ = ctx.run_to_end();
    let stats = &ctx.sim.stats;
    assert_eq!(stats.cycles, 2);
    assert_eq!(stats.instructions_retired, 1);
    assert_eq!(stats.faults, 1);
}

#[test]
fn test_report_lists_executed_classes() {
    let mut ctx = TestContext::with_program(&Program::new().nop().halt());
    let _ = ctx.run_to_end();
    let report = ctx.sim.stats.report();
    assert!(report.contains("sim_cycles               2"));
    assert!(report.contains("nop"));
    assert!(!report.contains("pushq"));
}
