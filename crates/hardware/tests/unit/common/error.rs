//! # Fault and Error Tests

use y86sim_core::Status;
use y86sim_core::common::{Fault, SimError};
use y86sim_core::config::Config;

#[test]
fn test_fault_invalid_instruction_maps_to_ins() {
    let fault = Fault::InvalidInstruction { pc: 0x10, icode: 0xC };
    assert_eq!(fault.status(), Status::InvalidInstruction);
    assert_eq!(fault.status().code(), 4);
    assert_eq!(fault.pc(), 0x10);
}

#[test]
fn test_fault_invalid_function_maps_to_ins() {
    let fault = Fault::InvalidFunction {
        pc: 0,
        icode: 6,
        ifun: 7,
    };
    assert_eq!(fault.status(), Status::InvalidInstruction);
}

#[test]
fn test_fault_address_error_maps_to_adr() {
    let fault = Fault::AddressError {
        pc: 0x20,
        addr: u64::MAX,
    };
    assert_eq!(fault.status(), Status::AddressError);
    assert_eq!(fault.status().code(), 3);
}

#[test]
fn test_fault_display() {
    let fault = Fault::AddressError {
        pc: 0x20,
        addr: 0xffff_ffff_ffff_fff8,
    };
    let text = format!("{fault}");
    assert!(text.contains("AddressError"));
    assert!(text.contains("0xfffffffffffffff8"));
}

#[test]
fn test_status_codes() {
    assert_eq!(Status::Running.code(), 1);
    assert_eq!(Status::Halted.code(), 2);
    assert_eq!(Status::AddressError.code(), 3);
    assert_eq!(Status::InvalidInstruction.code(), 4);
    assert!(Status::Running.is_running());
    assert!(!Status::Halted.is_running());
}

#[test]
fn test_sim_error_config_display() {
    let err = Config::from_json_str("{ not json").unwrap_err();
    assert!(matches!(err, SimError::Config(_)));
    assert!(err.to_string().starts_with("invalid configuration"));
}
