//! Memory Image Loader.
//!
//! This module reads textual memory images into a [`SparseMemory`]. It performs:
//! 1. **Record parsing:** Each line is `ADDR:HEXBYTES`, optionally followed by `| comment`.
//!    `ADDR` is hexadecimal (an `0x` prefix is accepted) and the bytes are stored from
//!    `ADDR` upward.
//! 2. **Lenient skipping:** A record with no colon, no bytes, any non-hex digit, or bytes
//!    that would run past the top of the address space is skipped as a whole.
//!    Comment-only and blank lines are skipped too.
//! 3. **Sources:** Strings, buffered readers, and files (`-` is standard input for the CLI).

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::debug;

use crate::common::SimError;
use crate::soc::SparseMemory;

fn parse_hex_u64(field: &str) -> Option<u64> {
    let digits = field
        .strip_prefix("0x")
        .or_else(|| field.strip_prefix("0X"))
        .unwrap_or(field);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    u64::from_str_radix(digits, 16).ok()
}

fn parse_hex_bytes(field: &str) -> Option<Vec<u8>> {
    let raw = field.as_bytes();
    if raw.is_empty() || raw.len() % 2 != 0 || !raw.iter().all(u8::is_ascii_hexdigit) {
        return None;
    }
    raw.chunks(2)
        .map(|pair| {
            let hi = (pair[0] as char).to_digit(16)?;
            let lo = (pair[1] as char).to_digit(16)?;
            Some((hi * 16 + lo) as u8)
        })
        .collect()
}

/// Parses one image record.
///
/// # Returns
///
/// The start address and the bytes to store, or `None` if the record is to be skipped.
///
/// # Examples
///
/// ```
/// use y86sim_core::sim::loader::parse_record;
///
/// assert_eq!(
///     parse_record("0x00a: 30f4 | irmovq"),
///     Some((0xa, vec![0x30, 0xf4]))
/// );
/// assert_eq!(parse_record("0x014:      | label:"), None);
/// assert_eq!(parse_record("ffffffffffffffff: 1122"), None);
/// ```
pub fn parse_record(line: &str) -> Option<(u64, Vec<u8>)> {
    let body = line.split_once('|').map_or(line, |(body, _)| body);
    let (addr, data) = body.split_once(':')?;
    let addr = parse_hex_u64(addr.trim())?;
    let bytes = parse_hex_bytes(data.trim())?;
    // The last byte must still fit below 2^64.
    if addr.checked_add(bytes.len() as u64 - 1).is_none() {
        return None;
    }
    Some((addr, bytes))
}

/// Builds a memory from the records of an image.
pub fn parse_image(text: &str) -> SparseMemory {
    let mut mem = SparseMemory::new();
    for (n, line) in text.lines().enumerate() {
        apply_line(&mut mem, n + 1, line);
    }
    mem
}

fn apply_line(mem: &mut SparseMemory, line_no: usize, line: &str) {
    match parse_record(line) {
        Some((addr, bytes)) => mem.load_bytes(addr, &bytes),
        None => {
            if !line.trim().is_empty() {
                debug!("loader: skipping record at line {line_no}: {line:?}");
            }
        }
    }
}

/// Builds a memory from an image read line by line.
///
/// # Arguments
///
/// * `reader` - Source of the image.
/// * `name` - Name reported in I/O errors (a path, or `-` for standard input).
pub fn load_image_reader<R: BufRead>(reader: R, name: &str) -> Result<SparseMemory, SimError> {
    let mut mem = SparseMemory::new();
    for (n, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| SimError::io(name, e))?;
        apply_line(&mut mem, n + 1, &line);
    }
    Ok(mem)
}

/// Builds a memory from an image file.
pub fn load_image_file(path: impl AsRef<Path>) -> Result<SparseMemory, SimError> {
    let path = path.as_ref();
    let name = path.display().to_string();
    let file = File::open(path).map_err(|e| SimError::io(name.clone(), e))?;
    load_image_reader(BufReader::new(file), &name)
}
