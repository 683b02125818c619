//! Filename classification for user export files.
//!
//! The export convention encodes the payload kind in the filename. Rules are
//! an explicit ordered prefix table, evaluated in sequence: the first matching
//! prefix wins, and anything unmatched falls through to [`FileKind::Extra`].

/// What a filename contributes to the user record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileKind {
    /// Play events appended to `streamingHistory.music`.
    Music,
    /// Play events appended to `streamingHistory.podcast`.
    Podcast,
    /// The payload's `playlists` field appended to the record's playlists.
    Playlists,
    /// Anything unrecognized: stored verbatim as an extra field named by the
    /// filename with its `.json` suffix stripped.
    Extra(String),
}

/// Ordered prefix rules; first match wins, no fallthrough between rules.
const PREFIX_RULES: &[(&str, FileKind)] = &[
    ("StreamingHistory_music", FileKind::Music),
    ("StreamingHistory_podcast", FileKind::Podcast),
    ("Playlist", FileKind::Playlists),
];

/// Classify one export filename.
pub fn classify(filename: &str) -> FileKind {
    for (prefix, kind) in PREFIX_RULES {
        if filename.starts_with(prefix) {
            return kind.clone();
        }
    }
    let key = filename.strip_suffix(".json").unwrap_or(filename);
    FileKind::Extra(key.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_streaming_history_prefixes() {
        assert_eq!(classify("StreamingHistory_music_0.json"), FileKind::Music);
        assert_eq!(classify("StreamingHistory_music_12.json"), FileKind::Music);
        assert_eq!(classify("StreamingHistory_podcast_0.json"), FileKind::Podcast);
    }

    #[test]
    fn test_playlist_prefix() {
        assert_eq!(classify("Playlist1.json"), FileKind::Playlists);
        assert_eq!(classify("Playlists.json"), FileKind::Playlists);
    }

    #[test]
    fn test_unrecognized_names_become_extras() {
        assert_eq!(classify("Inferences.json"), FileKind::Extra("Inferences".to_string()));
        assert_eq!(classify("foo"), FileKind::Extra("foo".to_string()));
        // Only the final `.json` suffix is stripped
        assert_eq!(classify("foo.json.json"), FileKind::Extra("foo.json".to_string()));
    }

    #[test]
    fn test_prefix_match_is_case_sensitive() {
        assert_eq!(
            classify("streaminghistory_music_0.json"),
            FileKind::Extra("streaminghistory_music_0".to_string())
        );
    }
}
