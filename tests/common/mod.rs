//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Builder for scratch export-directory trees
pub struct ExportDirBuilder {
    temp_dir: TempDir,
}

impl ExportDirBuilder {
    /// Create a new builder with an empty base directory
    pub fn new() -> Self {
        Self { temp_dir: TempDir::new().expect("Failed to create temp dir") }
    }

    /// Get the path to the base directory
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Write index.json from (user, files) pairs, preserving the given order
    pub fn with_index(self, entries: &[(&str, &[&str])]) -> Self {
        let body = entries
            .iter()
            .map(|(user, files)| {
                let list =
                    files.iter().map(|f| format!("\"{f}\"")).collect::<Vec<_>>().join(",");
                format!("\"{user}\":[{list}]")
            })
            .collect::<Vec<_>>()
            .join(",");
        self.with_raw_index(&format!("{{{body}}}"))
    }

    /// Write index.json content verbatim
    pub fn with_raw_index(self, content: &str) -> Self {
        fs::write(self.temp_dir.path().join("index.json"), content)
            .expect("Failed to write index.json");
        self
    }

    /// Write one export file under data/<user>/
    pub fn with_user_file(self, user: &str, file: &str, content: &str) -> Self {
        let dir = self.temp_dir.path().join("data").join(user);
        fs::create_dir_all(&dir).expect("Failed to create user dir");
        fs::write(dir.join(file), content).expect("Failed to write user file");
        self
    }

    /// Write one genre file under data/genre/
    pub fn with_genre_file(self, file: &str, content: &str) -> Self {
        let dir = self.genre_dir();
        fs::create_dir_all(&dir).expect("Failed to create genre dir");
        fs::write(dir.join(file), content).expect("Failed to write genre file");
        self
    }

    /// Path of the default genre source directory
    pub fn genre_dir(&self) -> PathBuf {
        self.temp_dir.path().join("data").join("genre")
    }

    /// Build and return the temp directory (consumes self)
    pub fn build(self) -> TempDir {
        self.temp_dir
    }
}

impl Default for ExportDirBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Helper: a realistic two-user export tree with history, playlists, genres
pub fn realistic_export_dir() -> TempDir {
    ExportDirBuilder::new()
        .with_index(&[
            ("alice", &["StreamingHistory_music_0.json", "Playlist1.json", "Inferences.json"]),
            ("bob", &["StreamingHistory_podcast_0.json"]),
        ])
        .with_user_file(
            "alice",
            "StreamingHistory_music_0.json",
            r#"[{"endTime": "2020-01-01 09:30", "trackName": "One"},
                {"endTime": "2020-01-02 10:00", "trackName": "Two"}]"#,
        )
        .with_user_file("alice", "Playlist1.json", r#"{"playlists": [{"name": "Mix"}]}"#)
        .with_user_file("alice", "Inferences.json", r#"["1L_Gamer"]"#)
        .with_user_file(
            "bob",
            "StreamingHistory_podcast_0.json",
            r#"[{"endTime": "2020-02-01 08:00", "podcastName": "Daily"}]"#,
        )
        .with_genre_file("genre_alice.json", r#"{"pop": 10}"#)
        .with_genre_file("genre_bob.json", r#"{"rock": 3}"#)
        .build()
}
