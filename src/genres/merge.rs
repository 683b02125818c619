//! Merge per-user genre files into one keyed document.
//!
//! Filenames follow the pattern `<anything>_<user_identifier>.json`. Entries
//! are sorted by name before processing so the run is deterministic on every
//! platform, and identifier collisions resolve first-wins with the later file
//! recorded as a failure instead of silently overwriting.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde_json::Value;

use crate::loader::load_json;
use crate::models::{FileStatus, RunReport};

/// Result of one merger run: user identifier -> genre payload, plus the
/// per-file outcomes that produced it.
#[derive(Debug)]
pub struct GenreMerge {
    pub merged: BTreeMap<String, Value>,
    pub report: RunReport,
}

/// Derive the user identifier from a genre filename: everything after the
/// first `_`, with the `.json` suffix stripped. `None` when there is no `_`
/// to split on (or nothing after it).
pub fn user_id_from_filename(filename: &str) -> Option<&str> {
    let stem = filename.strip_suffix(".json").unwrap_or(filename);
    let (_, id) = stem.split_once('_')?;
    if id.is_empty() { None } else { Some(id) }
}

/// Merge every `.json` file in `genre_dir` into one keyed document.
///
/// `output_name` is the merge's own output file, excluded from the scan so a
/// re-run never ingests its previous result. Returns an error only when the
/// directory itself cannot be listed; per-file failures are logged, recorded,
/// and skipped.
pub fn merge_genre_dir(genre_dir: &Path, output_name: &str) -> Result<GenreMerge> {
    let entries = fs::read_dir(genre_dir)
        .with_context(|| format!("Failed to read genre directory {}", genre_dir.display()))?;

    let mut filenames = Vec::new();
    for entry in entries {
        let entry = entry.context("Failed to read directory entry")?;
        let name = entry.file_name();
        let Some(name) = name.to_str() else {
            eprintln!("Warning: Skipping non-UTF-8 filename in {}", genre_dir.display());
            continue;
        };
        if name.ends_with(".json") && name != output_name {
            filenames.push(name.to_string());
        }
    }
    // Platform listing order is unspecified; sort for a deterministic merge
    filenames.sort();

    let mut merged = BTreeMap::new();
    let mut report = RunReport::default();
    for name in filenames {
        let status = merge_one(genre_dir, &name, &mut merged);
        if let FileStatus::Failed(reason) = &status {
            eprintln!("Warning: Skipping {name}: {reason}");
        }
        report.record(name, status);
    }

    Ok(GenreMerge { merged, report })
}

fn merge_one(genre_dir: &Path, name: &str, merged: &mut BTreeMap<String, Value>) -> FileStatus {
    let Some(user) = user_id_from_filename(name) else {
        return FileStatus::Failed("no `_` delimiter to derive a user id from".to_string());
    };
    if merged.contains_key(user) {
        return FileStatus::Failed(format!("duplicate user id `{user}`"));
    }
    match load_json(&genre_dir.join(name)) {
        Ok(payload) => {
            merged.insert(user.to_string(), payload);
            FileStatus::Merged
        }
        Err(e) => FileStatus::Failed(format!("{e:#}")),
    }
}
