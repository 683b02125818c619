//! Tagged per-file outcomes for a pipeline run.
//!
//! Log lines report failures to the user; these types report them to callers
//! and tests, so outcome assertions never have to parse log text.

/// What became of one input file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileStatus {
    /// The payload contributed data to the output document.
    Merged,
    /// Loaded cleanly but contributed nothing (empty payload, or a playlist
    /// file without a `playlists` field).
    Empty,
    /// Unreadable, unparseable, or otherwise rejected, with the reason.
    Failed(String),
}

/// One input file paired with its outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileOutcome {
    pub file: String,
    pub status: FileStatus,
}

/// Ordered outcomes for every input file a pipeline touched.
#[derive(Debug, Clone, Default)]
pub struct RunReport {
    pub outcomes: Vec<FileOutcome>,
}

impl RunReport {
    pub fn record(&mut self, file: impl Into<String>, status: FileStatus) {
        self.outcomes.push(FileOutcome { file: file.into(), status });
    }

    /// Count of files that contributed data.
    pub fn merged(&self) -> usize {
        self.outcomes.iter().filter(|o| o.status == FileStatus::Merged).count()
    }

    /// Count of files that were rejected.
    pub fn failed(&self) -> usize {
        self.outcomes.iter().filter(|o| matches!(o.status, FileStatus::Failed(_))).count()
    }

    /// Outcome of the first entry recorded for `file`, if any.
    pub fn status_of(&self, file: &str) -> Option<&FileStatus> {
        self.outcomes.iter().find(|o| o.file == file).map(|o| &o.status)
    }
}
