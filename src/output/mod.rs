//! Pretty-printed JSON output with atomic writes.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::Serialize;

/// Serialize `value` with 4-space indentation (non-ASCII left unescaped) and
/// write it atomically (temp file + rename), so a failed run never leaves a
/// torn output document behind.
pub fn write_pretty_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value
        .serialize(&mut ser)
        .with_context(|| format!("Failed to serialize output for {}", path.display()))?;

    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        bail!("Output path has no file name: {}", path.display());
    };
    let temp_path = path.with_file_name(format!("{name}.tmp"));
    fs::write(&temp_path, &buf)
        .with_context(|| format!("Failed to write {}", temp_path.display()))?;
    fs::rename(&temp_path, path)
        .with_context(|| format!("Failed to move {} into place", temp_path.display()))?;

    Ok(())
}
