use serde::{Deserialize, Serialize};

/// One completed sleep-tracking session
///
/// Serialized with the same camelCase keys as the persisted blob.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SleepRecord {
    /// Millisecond Unix timestamp at creation, unique across the collection
    pub id: String,

    /// RFC 3339 creation time
    pub timestamp: String,

    /// Whole hours slept, floored from the elapsed recording seconds
    pub duration_hours: u32,

    /// Path of the stored audio file
    pub audio_file_ref: String,
}

impl SleepRecord {
    /// Check the shape invariants enforced on load: non-empty id,
    /// timestamp and audio path. `duration_hours` being numeric is already
    /// guaranteed by deserialization.
    pub fn is_valid(&self) -> bool {
        !self.id.is_empty() && !self.timestamp.is_empty() && !self.audio_file_ref.is_empty()
    }

    /// Parse a raw JSON entry, returning `None` for anything that fails
    /// the shape checks. Invalid entries are dropped from views, never
    /// deleted from storage.
    pub fn from_value(value: &serde_json::Value) -> Option<Self> {
        serde_json::from_value::<Self>(value.clone())
            .ok()
            .filter(Self::is_valid)
    }
}
