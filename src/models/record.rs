use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Ordered play-event sequences, split by kind. Events are kept verbatim as
/// parsed; concatenation across files preserves index order and duplicates.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StreamingHistory {
    pub music: Vec<Value>,
    pub podcast: Vec<Value>,
}

/// One aggregated record per user: a fixed shape plus an open map of extra
/// fields, one per unrecognized export file, keyed by the filename with its
/// `.json` suffix stripped (last write wins per key).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRecord {
    pub user: String,
    pub playlists: Vec<Value>,
    #[serde(rename = "streamingHistory")]
    pub streaming_history: StreamingHistory,
    #[serde(flatten)]
    pub extras: Map<String, Value>,
}

impl UserRecord {
    /// An empty record for `user`: no playlists, no plays, no extra fields.
    pub fn new(user: &str) -> Self {
        Self {
            user: user.to_string(),
            playlists: Vec::new(),
            streaming_history: StreamingHistory::default(),
            extras: Map::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_empty_record_wire_shape() {
        let record = UserRecord::new("alice");
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(
            value,
            json!({
                "user": "alice",
                "playlists": [],
                "streamingHistory": {"music": [], "podcast": []}
            })
        );
    }

    #[test]
    fn test_extras_flatten_onto_the_record() {
        let mut record = UserRecord::new("alice");
        record.extras.insert("Inferences".to_string(), json!({"a": 1}));
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value.get("Inferences"), Some(&json!({"a": 1})));
    }

    #[test]
    fn test_roundtrip_captures_unknown_fields_as_extras() {
        let raw = json!({
            "user": "bob",
            "playlists": [{"name": "mix"}],
            "streamingHistory": {"music": [{"trackName": "x"}], "podcast": []},
            "Inferences": ["label"]
        });
        let record: UserRecord = serde_json::from_value(raw).unwrap();
        assert_eq!(record.user, "bob");
        assert_eq!(record.playlists.len(), 1);
        assert_eq!(record.streaming_history.music.len(), 1);
        assert_eq!(record.extras.get("Inferences"), Some(&json!(["label"])));
    }
}
