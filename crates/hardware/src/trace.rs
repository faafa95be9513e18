//! Per-cycle state snapshots and the JSON execution trace.
//!
//! A [`Snapshot`] captures everything visible after one cycle: condition
//! codes, every non-zero aligned memory word, the PC, all named registers,
//! and the status code. Values are reported as signed decimals. Map keys and
//! field names serialize in sorted order, so the document layout is stable.

use std::collections::BTreeMap;
use std::io::Write;

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::common::SimError;
use crate::core::Cpu;
use crate::core::arch::{ConditionCodes, Status};

/// Condition codes as 0/1 integers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct CcSnapshot {
    /// Overflow flag.
    #[serde(rename = "OF")]
    pub of: u8,
    /// Sign flag.
    #[serde(rename = "SF")]
    pub sf: u8,
    /// Zero flag.
    #[serde(rename = "ZF")]
    pub zf: u8,
}

impl From<ConditionCodes> for CcSnapshot {
    fn from(cc: ConditionCodes) -> Self {
        Self {
            of: u8::from(cc.of),
            sf: u8::from(cc.sf),
            zf: u8::from(cc.zf),
        }
    }
}

/// Machine state after one cycle.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    /// Condition codes.
    #[serde(rename = "CC")]
    pub cc: CcSnapshot,
    /// Non-zero 8-byte-aligned words, keyed by decimal base address.
    #[serde(rename = "MEM")]
    pub mem: BTreeMap<String, i64>,
    /// Program counter.
    #[serde(rename = "PC")]
    pub pc: u64,
    /// Every named register, keyed by name.
    #[serde(rename = "REG")]
    pub reg: BTreeMap<&'static str, i64>,
    /// Status code (1-4).
    #[serde(rename = "STAT")]
    pub stat: Status,
}

impl Snapshot {
    /// Captures the current state of `cpu`.
    pub fn capture(cpu: &Cpu) -> Self {
        let mem = cpu
            .mem
            .nonzero_words()
            .into_iter()
            .map(|(base, word)| (base.to_string(), word as i64))
            .collect();
        let reg = cpu
            .regs
            .iter()
            .map(|(r, val)| (r.name(), val as i64))
            .collect();
        Self {
            cc: cpu.cc.into(),
            mem,
            pc: cpu.pc,
            reg,
            stat: cpu.status,
        }
    }
}

/// Ordered list of snapshots, one per executed cycle.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Trace {
    snapshots: Vec<Snapshot>,
}

impl Trace {
    /// Creates an empty trace.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends the snapshot for the cycle that just completed.
    pub fn push(&mut self, snapshot: Snapshot) {
        self.snapshots.push(snapshot);
    }

    /// Recorded snapshots in cycle order.
    pub fn snapshots(&self) -> &[Snapshot] {
        &self.snapshots
    }

    /// Number of recorded snapshots.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Whether nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// The most recent snapshot.
    pub fn last(&self) -> Option<&Snapshot> {
        self.snapshots.last()
    }

    /// Writes the trace as a JSON array.
    ///
    /// # Arguments
    ///
    /// * `writer` - Destination of the document.
    /// * `indent` - Spaces per nesting level; `0` writes a single line.
    pub fn write_json<W: Write>(&self, writer: W, indent: usize) -> Result<(), SimError> {
        if indent == 0 {
            serde_json::to_writer(writer, &self.snapshots).map_err(SimError::Trace)
        } else {
            let pad = vec![b' '; indent];
            let mut ser = Serializer::with_formatter(writer, PrettyFormatter::with_indent(&pad));
            self.snapshots.serialize(&mut ser).map_err(SimError::Trace)
        }
    }

    /// Renders the trace as a JSON string.
    pub fn to_json(&self, indent: usize) -> Result<String, SimError> {
        let mut buf = Vec::new();
        self.write_json(&mut buf, indent)?;
        String::from_utf8(buf).map_err(SimError::TraceEncoding)
    }
}
