//! spotify-data-prep - Consolidate Spotify export data into aggregate JSON documents
//!
//! This library ingests per-user Spotify export files (streaming history,
//! playlists, genre tags) laid out on disk under an `index.json` convention
//! and merges them into unified aggregate documents. It supports:
//!
//! - Index-driven aggregation of per-user export files into one record per user
//! - Prefix-rule classification of export filenames (first match wins)
//! - Directory-driven merging of per-user genre files into one keyed document
//! - Structured per-file run reports alongside best-effort logging
//!
//! # Example
//!
//! ```no_run
//! use spotify_data_prep::aggregate_users;
//! use std::path::PathBuf;
//!
//! let base_dir = PathBuf::from("/home/alice/exports");
//! let aggregation = aggregate_users(&base_dir);
//! println!("Aggregated {} users", aggregation.records.len());
//! ```

pub mod aggregator;
pub mod cli;
pub mod genres;
pub mod loader;
pub mod models;
pub mod output;

// Re-export commonly used types
pub use aggregator::{Aggregation, aggregate_users, load_index};
pub use genres::{GenreMerge, merge_genre_dir};
pub use loader::load_json;
pub use models::{FileOutcome, FileStatus, RunReport, UserRecord};
