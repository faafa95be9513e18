/// Whole programs run to completion.
pub mod programs;

/// Trace documents produced by complete runs.
pub mod trace_json;
