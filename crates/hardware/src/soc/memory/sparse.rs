//! Sparse byte-addressable memory.
//!
//! Storage is a `BTreeMap<u64, u8>` keyed by byte address. Bytes that were
//! never written read as zero, so the address space is effectively unbounded
//! and only touched bytes cost space. Word accessors are little-endian and
//! enforce no alignment; address validity is the memory stage's concern.

use std::collections::BTreeMap;

use crate::common::constants::WORD_SIZE;

/// Sparse memory backing the whole machine address space.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SparseMemory {
    bytes: BTreeMap<u64, u8>,
}

impl SparseMemory {
    /// Creates an empty memory; every address reads as zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads one byte, returning zero for addresses never written.
    #[inline]
    pub fn read_byte(&self, addr: u64) -> u8 {
        self.bytes.get(&addr).copied().unwrap_or(0)
    }

    /// Writes one byte.
    #[inline]
    pub fn write_byte(&mut self, addr: u64, val: u8) {
        let _ = self.bytes.insert(addr, val);
    }

    /// Reads eight consecutive bytes starting at `addr` as a little-endian word.
    ///
    /// Each byte defaults to zero independently; the address wraps at `u64::MAX`.
    pub fn read_u64(&self, addr: u64) -> u64 {
        let mut buf = [0u8; WORD_SIZE as usize];
        for (i, b) in buf.iter_mut().enumerate() {
            *b = self.read_byte(addr.wrapping_add(i as u64));
        }
        u64::from_le_bytes(buf)
    }

    /// Writes `val` as eight little-endian bytes starting at `addr`.
    pub fn write_u64(&mut self, addr: u64, val: u64) {
        for (i, b) in val.to_le_bytes().into_iter().enumerate() {
            self.write_byte(addr.wrapping_add(i as u64), b);
        }
    }

    /// Copies `data` into memory starting at `base`.
    pub fn load_bytes(&mut self, base: u64, data: &[u8]) {
        for (i, &b) in data.iter().enumerate() {
            self.write_byte(base.wrapping_add(i as u64), b);
        }
    }

    /// Number of bytes that have ever been written.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Whether no byte has ever been written.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Highest address that has been written, if any.
    pub fn highest_address(&self) -> Option<u64> {
        self.bytes.keys().next_back().copied()
    }

    /// Iterates over the written byte addresses in ascending order.
    pub fn addresses(&self) -> impl Iterator<Item = u64> + '_ {
        self.bytes.keys().copied()
    }

    /// Lowest written address at or above `from`.
    pub fn next_address(&self, from: u64) -> Option<u64> {
        self.bytes.range(from..).next().map(|(&addr, _)| addr)
    }

    /// Every 8-byte-aligned word that contains a written byte and is non-zero.
    ///
    /// # Returns
    ///
    /// `(base, word)` pairs in ascending base order.
    pub fn nonzero_words(&self) -> Vec<(u64, u64)> {
        let mut words = Vec::new();
        let mut last_base = None;
        for addr in self.addresses() {
            let base = addr - (addr % WORD_SIZE);
            if last_base == Some(base) {
                continue;
            }
            last_base = Some(base);
            let word = self.read_u64(base);
            if word != 0 {
                words.push((base, word));
            }
        }
        words
    }
}

impl FromIterator<(u64, u8)> for SparseMemory {
    fn from_iter<I: IntoIterator<Item = (u64, u8)>>(iter: I) -> Self {
        Self {
            bytes: iter.into_iter().collect(),
        }
    }
}
