//! Trace Document Tests.
//!
//! Runs complete images and compares the rendered JSON against the
//! expected per-cycle snapshots.

use pretty_assertions::assert_eq;
use serde_json::{Value, json};

use crate::common::TestContext;

fn regs_with(overrides: &[(&str, i64)]) -> Value {
    let mut regs = serde_json::Map::new();
    for name in [
        "rax", "rcx", "rdx", "rbx", "rsp", "rbp", "rsi", "rdi", "r8", "r9", "r10", "r11", "r12",
        "r13", "r14",
    ] {
        let _ = regs.insert(name.to_owned(), json!(0));
    }
    for (name, val) in overrides {
        let _ = regs.insert((*name).to_owned(), json!(val));
    }
    Value::Object(regs)
}

#[test]
fn test_rsp_image_trace() {
    let mut ctx = TestContext::from_image("0x000: 30f40a00000000000000\n0x00b: 00\n");
    let _ = ctx.run_to_end();
    let text = ctx.sim.trace.to_json(4).unwrap();
    let value: Value = serde_json::from_str(&text).unwrap();

    // Bytes 30 f4 0a at 0..3 form the little-endian word 0x0af430.
    let expected = json!([
        {
            "CC": { "OF": 0, "SF": 0, "ZF": 1 },
            "MEM": { "0": 717872 },
            "PC": 10,
            "REG": regs_with(&[("rsp", 10)]),
            "STAT": 1
        },
        {
            "CC": { "OF": 0, "SF": 0, "ZF": 1 },
            "MEM": { "0": 717872 },
            "PC": 10,
            "REG": regs_with(&[("rsp", 10)]),
            "STAT": 2
        }
    ]);
    assert_eq!(value, expected);
}

#[test]
fn test_pretty_layout() {
    let mut ctx = TestContext::from_image("0x000: 00\n");
    let _ = ctx.run_to_end();
    let text = ctx.sim.trace.to_json(4).unwrap();
    assert!(text.starts_with(
        "[\n    {\n        \"CC\": {\n            \"OF\": 0,\n            \"SF\": 0,\n            \"ZF\": 1\n        },\n        \"MEM\": {},\n        \"PC\": 0,"
    ));
    assert!(text.trim_end().ends_with("\"STAT\": 2\n    }\n]"));
}

#[test]
fn test_store_shows_up_in_memory_map() {
    // irmovq $0x40, %rbx ; irmovq $-2, %rax ; rmmovq %rax, 0(%rbx) ; halt
    let image = "\
0x000: 30f34000000000000000 | irmovq $0x40, %rbx
0x00a: 30f0feffffffffffffff | irmovq $-2, %rax
0x014: 40030000000000000000 | rmmovq %rax, 0(%rbx)
0x01e: 00                   | halt
";
    let mut ctx = TestContext::from_image(image);
    let _ = ctx.run_to_end();
    let value: Value = serde_json::from_str(&ctx.sim.trace.to_json(0).unwrap()).unwrap();
    assert_eq!(value.as_array().map(Vec::len), Some(4));
    assert_eq!(value[1]["MEM"].get("64"), None);
    assert_eq!(value[2]["MEM"]["64"], json!(-2));
    assert_eq!(value[3]["REG"]["rax"], json!(-2));
    assert_eq!(value[3]["PC"], json!(0x1e));
}
