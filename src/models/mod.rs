//! Data models for aggregated Spotify export data.
//!
//! This module defines the data structures used throughout the application:
//!
//! - [`UserRecord`] - One aggregated record per user from the index
//! - [`StreamingHistory`] - Ordered music/podcast play-event sequences
//! - [`RunReport`] / [`FileOutcome`] - Tagged per-file outcomes of a pipeline run
//!
//! The record models use serde for JSON (de)serialization, with the wire names
//! of the original export format (`streamingHistory`) and an open map for the
//! dynamically-named extra fields unrecognized export files produce.

pub mod record;
pub mod report;

pub use record::{StreamingHistory, UserRecord};
pub use report::{FileOutcome, FileStatus, RunReport};
