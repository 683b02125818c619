//! Single-file JSON loading shared by both pipelines
//!
//! # Error Handling Strategy
//!
//! This module follows a **graceful degradation** approach suitable for CLI tools:
//!
//! - **Per-source failures**: an `Err` from [`load_json`] is the "no data" signal.
//!   Callers log the diagnostic, record the failure in their run report, and skip
//!   that one source; a bad file never aborts the rest of the run.
//!
//! - **Error propagation**: uses `anyhow::Result` with the file path attached as
//!   context. Since this is a binary/CLI tool (not a public library), errors are
//!   boxed and consumers don't match on error types.
//!
//! - **Empty payloads**: the export format treats an empty payload as "nothing to
//!   contribute", distinct from a load failure. [`is_empty_payload`] captures that
//!   distinction so callers can tag the outcome accordingly.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde_json::Value;

/// Load and parse one JSON file in full.
///
/// An `Err` is the "skip this source" signal for the run, never a fatal error.
pub fn load_json(path: &Path) -> Result<Value> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("Failed to parse {}", path.display()))
}

/// JSON "emptiness" as the export convention uses it: `null`, `false`, `0`,
/// `""`, `[]` and `{}` all count as empty, and an empty payload contributes
/// nothing to the aggregate.
pub fn is_empty_payload(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(fields) => fields.is_empty(),
    }
}
