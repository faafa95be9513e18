//! Configuration system for the simulator.
//!
//! This module defines the configuration structures used to parameterize a
//! run. It provides:
//! 1. **Defaults:** Baseline values used when a field is omitted.
//! 2. **Structures:** `general` (start PC, cycle limit, instruction tracing) and
//!    `trace` (snapshot recording and JSON layout) sections.
//! 3. **Loading:** Parsing from a JSON string or file.
//!
//! Every field is optional; `Config::default()` is what the CLI uses without `--config`.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::common::SimError;

/// Default configuration constants for the simulator.
mod defaults {
    /// Address of the first instruction fetched.
    pub const START_PC: u64 = 0;

    /// Indent width of the rendered JSON trace.
    pub const TRACE_INDENT: usize = 4;
}

/// Root configuration structure containing all simulator settings.
///
/// # Examples
///
/// ```
/// use y86sim_core::config::Config;
///
/// let config = Config::from_json_str(r#"{ "general": { "max_cycles": 1000 } }"#).unwrap();
/// assert_eq!(config.general.max_cycles, Some(1000));
/// assert_eq!(config.general.start_pc, 0);
/// assert!(config.trace.record);
/// assert_eq!(config.trace.indent, 4);
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// General simulation settings.
    #[serde(default)]
    pub general: GeneralConfig,
    /// Trace recording settings.
    #[serde(default)]
    pub trace: TraceConfig,
}

impl Config {
    /// Parses a configuration from a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self, SimError> {
        serde_json::from_str(json).map_err(SimError::Config)
    }

    /// Reads and parses a JSON configuration file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, SimError> {
        let path = path.as_ref();
        let text =
            fs::read_to_string(path).map_err(|e| SimError::io(path.display().to_string(), e))?;
        Self::from_json_str(&text)
    }
}

/// General simulation settings.
#[derive(Debug, Clone, Deserialize)]
pub struct GeneralConfig {
    /// Log every executed instruction (disassembled) at `info` level.
    #[serde(default)]
    pub trace_instructions: bool,

    /// Initial PC value.
    #[serde(default = "GeneralConfig::default_start_pc")]
    pub start_pc: u64,

    /// Stop after this many cycles even if the machine is still running.
    #[serde(default)]
    pub max_cycles: Option<u64>,
}

impl GeneralConfig {
    const fn default_start_pc() -> u64 {
        defaults::START_PC
    }
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            trace_instructions: false,
            start_pc: Self::default_start_pc(),
            max_cycles: None,
        }
    }
}

/// Trace recording settings.
#[derive(Debug, Clone, Deserialize)]
pub struct TraceConfig {
    /// Record a state snapshot after every cycle.
    #[serde(default = "TraceConfig::default_record")]
    pub record: bool,

    /// JSON indent width; `0` renders the trace on a single line.
    #[serde(default = "TraceConfig::default_indent")]
    pub indent: usize,
}

impl TraceConfig {
    const fn default_record() -> bool {
        true
    }

    const fn default_indent() -> usize {
        defaults::TRACE_INDENT
    }
}

impl Default for TraceConfig {
    fn default() -> Self {
        Self {
            record: Self::default_record(),
            indent: Self::default_indent(),
        }
    }
}
