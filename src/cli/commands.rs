use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use clap::{Parser, Subcommand};
use serde_json::Value;

use crate::aggregator::aggregate_users;
use crate::genres::merge_genre_dir;
use crate::models::UserRecord;
use crate::output::write_pretty_json;

/// Default output filename of the genre merger, excluded from its own scan.
pub const MERGED_GENRE_FILENAME: &str = "merged_genre_data.json";

/// Timestamp format of play-event `endTime` fields in the export.
const END_TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

#[derive(Parser)]
#[command(name = "spotify-data-prep")]
#[command(version = "0.1.0")]
#[command(about = "Consolidate per-user Spotify export files into aggregate JSON documents", long_about = None)]
pub struct Cli {
    /// Base directory holding index.json and data/ (defaults to the working directory)
    #[arg(long, global = true)]
    pub dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Aggregate the per-user export files listed in index.json into data.json
    Aggregate,
    /// Merge per-user genre files into one keyed document
    MergeGenres {
        /// Source directory of per-user genre files (default: <dir>/data/genre)
        #[arg(long)]
        genre_dir: Option<PathBuf>,
        /// Output path for the merged document (default: inside the source directory)
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Summarize a previously written data.json
    Stats,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let base_dir = resolve_base_dir(cli.dir.as_deref())?;

    match &cli.command {
        Some(Commands::Aggregate) => run_aggregate(&base_dir),
        Some(Commands::MergeGenres { genre_dir, output }) => {
            run_merge_genres(&base_dir, genre_dir.as_deref(), output.as_deref());
        }
        Some(Commands::Stats) => return show_stats(&base_dir),
        None => {
            // The default invocation runs both pipelines in sequence; a failed
            // phase is logged and the other still runs
            run_aggregate(&base_dir);
            run_merge_genres(&base_dir, None, None);
        }
    }

    Ok(())
}

fn resolve_base_dir(dir: Option<&Path>) -> Result<PathBuf> {
    match dir {
        Some(dir) => Ok(dir.to_path_buf()),
        None => env::current_dir().context("Failed to resolve the working directory"),
    }
}

/// Aggregator phase: write data.json, or report there is nothing to save.
/// Failures are log lines, never a process error.
fn run_aggregate(base_dir: &Path) {
    let aggregation = aggregate_users(base_dir);
    if aggregation.records.is_empty() {
        println!("No data to save.");
        return;
    }

    let out_path = base_dir.join("data.json");
    match write_pretty_json(&out_path, &aggregation.records) {
        Ok(()) => println!(
            "Aggregated {} users ({} files merged, {} failed) into {}",
            aggregation.records.len(),
            aggregation.report.merged(),
            aggregation.report.failed(),
            out_path.display()
        ),
        Err(e) => eprintln!("Warning: Failed to write {}: {e:#}", out_path.display()),
    }
}

/// Genre merger phase. Failures are log lines, never a process error.
fn run_merge_genres(base_dir: &Path, genre_dir: Option<&Path>, output: Option<&Path>) {
    let genre_dir = genre_dir
        .map(Path::to_path_buf)
        .unwrap_or_else(|| base_dir.join("data").join("genre"));
    let out_path =
        output.map(Path::to_path_buf).unwrap_or_else(|| genre_dir.join(MERGED_GENRE_FILENAME));
    let output_name =
        out_path.file_name().and_then(|n| n.to_str()).unwrap_or(MERGED_GENRE_FILENAME);

    let merge = match merge_genre_dir(&genre_dir, output_name) {
        Ok(merge) => merge,
        Err(e) => {
            eprintln!("Warning: Skipping genre merge: {e:#}");
            return;
        }
    };

    match write_pretty_json(&out_path, &merge.merged) {
        Ok(()) => println!(
            "Merged genre data for {} users ({} files failed) into {}",
            merge.merged.len(),
            merge.report.failed(),
            out_path.display()
        ),
        Err(e) => eprintln!("Warning: Failed to write {}: {e:#}", out_path.display()),
    }
}

fn show_stats(base_dir: &Path) -> Result<()> {
    let data_path = base_dir.join("data.json");
    let raw = fs::read_to_string(&data_path).with_context(|| {
        format!("Failed to read {} (run the aggregator first)", data_path.display())
    })?;
    let records: Vec<UserRecord> = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse {}", data_path.display()))?;

    let playlists: usize = records.iter().map(|r| r.playlists.len()).sum();
    let music: usize = records.iter().map(|r| r.streaming_history.music.len()).sum();
    let podcast: usize = records.iter().map(|r| r.streaming_history.podcast.len()).sum();

    println!("Spotify Export Statistics");
    println!("=========================");
    println!("Users: {}", records.len());
    println!("  Playlists: {}", playlists);
    println!("  Music plays: {}", music);
    println!("  Podcast plays: {}", podcast);

    if let Some((first, last)) = play_date_range(&records) {
        println!();
        println!(
            "Covered range: {} to {}",
            first.format(END_TIME_FORMAT),
            last.format(END_TIME_FORMAT)
        );
    }

    Ok(())
}

/// Earliest and latest play-event `endTime` across all users. Events without
/// a parseable timestamp are ignored.
fn play_date_range(records: &[UserRecord]) -> Option<(NaiveDateTime, NaiveDateTime)> {
    let mut range: Option<(NaiveDateTime, NaiveDateTime)> = None;
    let events = records
        .iter()
        .flat_map(|r| r.streaming_history.music.iter().chain(&r.streaming_history.podcast));
    for event in events {
        let Some(raw) = event.get("endTime").and_then(Value::as_str) else {
            continue;
        };
        let Ok(ts) = NaiveDateTime::parse_from_str(raw, END_TIME_FORMAT) else {
            continue;
        };
        range = Some(match range {
            None => (ts, ts),
            Some((first, last)) => (first.min(ts), last.max(ts)),
        });
    }
    range
}
