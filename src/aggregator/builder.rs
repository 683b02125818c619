//! Aggregation of per-user export files into combined records.
//!
//! # Error Handling Strategy
//!
//! This module follows a **graceful degradation** approach suitable for CLI tools:
//!
//! - **Index-level errors**: a missing or unparseable `index.json` yields an
//!   empty aggregation with the failure recorded, so the caller can report
//!   "no data" instead of writing an empty document
//! - **File-level errors**: an unreadable or malformed export file is logged,
//!   recorded in the run report, and skipped; the user's remaining files and
//!   all other users still process
//! - **User feedback**: failures go to stderr as warnings, and every touched
//!   file gets a tagged outcome in the returned [`RunReport`]

use std::path::Path;

use anyhow::{Context, Result};
use indexmap::IndexMap;
use serde_json::Value;

use crate::aggregator::classify::{FileKind, classify};
use crate::loader::{is_empty_payload, load_json};
use crate::models::{FileStatus, RunReport, UserRecord};

/// Parsed contents of `index.json`: user identifier -> export filenames, in
/// the file's own key order.
pub type UserIndex = IndexMap<String, Vec<String>>;

/// Result of one aggregator run: the records to serialize, plus the per-file
/// outcomes that produced them.
#[derive(Debug)]
pub struct Aggregation {
    pub records: Vec<UserRecord>,
    pub report: RunReport,
}

/// Load and shape-check the index file. Key order is the file's own order
/// (serde_json's `preserve_order` feature keeps it through the `Value` step).
pub fn load_index(path: &Path) -> Result<UserIndex> {
    let value = load_json(path)?;
    serde_json::from_value(value)
        .with_context(|| format!("Unexpected index shape in {}", path.display()))
}

/// Build one record per index entry, in index order.
///
/// Export files live at `<base_dir>/data/<user>/<file>`. A missing or
/// unparseable index yields an empty aggregation; the caller reports
/// "no data" rather than writing an empty document.
pub fn aggregate_users(base_dir: &Path) -> Aggregation {
    let mut report = RunReport::default();

    let index_path = base_dir.join("index.json");
    let index = match load_index(&index_path) {
        Ok(index) => index,
        Err(e) => {
            eprintln!("Warning: Failed to load index: {e:#}");
            report.record("index.json", FileStatus::Failed(format!("{e:#}")));
            return Aggregation { records: Vec::new(), report };
        }
    };

    let mut records = Vec::with_capacity(index.len());
    for (user, files) in &index {
        records.push(aggregate_user(base_dir, user, files, &mut report));
    }

    Aggregation { records, report }
}

/// Fold one user's export files into a record. Per-file failures are
/// isolated: the remaining files for this user still process.
fn aggregate_user(
    base_dir: &Path,
    user: &str,
    files: &[String],
    report: &mut RunReport,
) -> UserRecord {
    let user_dir = base_dir.join("data").join(user);
    let mut record = UserRecord::new(user);

    for file in files {
        let path = user_dir.join(file);
        let payload = match load_json(&path) {
            Ok(payload) => payload,
            Err(e) => {
                eprintln!("Warning: Skipping {}: {e:#}", path.display());
                report.record(file.clone(), FileStatus::Failed(format!("{e:#}")));
                continue;
            }
        };

        let status = apply_payload(&mut record, classify(file), payload);
        report.record(file.clone(), status);
    }

    record
}

/// Route a loaded payload into the record per its classification.
fn apply_payload(record: &mut UserRecord, kind: FileKind, payload: Value) -> FileStatus {
    match kind {
        FileKind::Music => extend_history(&mut record.streaming_history.music, payload),
        FileKind::Podcast => extend_history(&mut record.streaming_history.podcast, payload),
        FileKind::Playlists => match payload.get("playlists").and_then(Value::as_array) {
            Some(playlists) if !playlists.is_empty() => {
                record.playlists.extend(playlists.iter().cloned());
                FileStatus::Merged
            }
            // A playlist file without a `playlists` field contributes nothing
            _ => FileStatus::Empty,
        },
        FileKind::Extra(key) => {
            if is_empty_payload(&payload) {
                FileStatus::Empty
            } else {
                // Last write wins for extras sharing a derived key
                record.extras.insert(key, payload);
                FileStatus::Merged
            }
        }
    }
}

fn extend_history(target: &mut Vec<Value>, payload: Value) -> FileStatus {
    match payload {
        Value::Array(events) if !events.is_empty() => {
            target.extend(events);
            FileStatus::Merged
        }
        _ => FileStatus::Empty,
    }
}
