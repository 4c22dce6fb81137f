use anyhow::{Context, Result};
use chrono::DateTime;
use std::cmp::Ordering;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use super::record::SleepRecord;

/// Flat JSON-blob store for sleep records
///
/// The whole collection is read, modified and rewritten on every call.
/// Writes are not atomic across concurrent callers (last writer wins).
pub struct RecordStore {
    path: PathBuf,
}

impl RecordStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the collection, dropping structurally invalid entries.
    ///
    /// A missing file, unreadable file, malformed JSON or non-array blob
    /// all yield an empty collection. Never fails.
    pub async fn load(&self) -> Vec<SleepRecord> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) => {
                debug!("No readable record blob at {}: {}", self.path.display(), e);
                return Vec::new();
            }
        };

        let value: serde_json::Value = match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(e) => {
                warn!("Record blob is not valid JSON, treating as empty: {}", e);
                return Vec::new();
            }
        };

        let entries = match value.as_array() {
            Some(entries) => entries,
            None => {
                warn!("Record blob is not an array, treating as empty");
                return Vec::new();
            }
        };

        let records: Vec<SleepRecord> = entries
            .iter()
            .filter_map(|entry| {
                let record = SleepRecord::from_value(entry);
                if record.is_none() {
                    warn!("Dropping invalid record entry from view: {}", entry);
                }
                record
            })
            .collect();

        debug!(
            "Loaded {} valid records ({} entries in blob)",
            records.len(),
            entries.len()
        );

        records
    }

    /// Load the collection sorted by timestamp, newest first.
    ///
    /// Entries whose timestamps fail to parse keep their relative order.
    pub async fn load_sorted(&self) -> Vec<SleepRecord> {
        let mut records = self.load().await;
        records.sort_by(|a, b| match (parse_ts(&a.timestamp), parse_ts(&b.timestamp)) {
            (Some(a), Some(b)) => b.cmp(&a),
            _ => Ordering::Equal,
        });
        records
    }

    /// Append one record and rewrite the blob.
    ///
    /// Entries already present are preserved as-is, including ones that
    /// would fail validation on load.
    pub async fn append(&self, record: &SleepRecord) -> Result<()> {
        let mut entries = self.read_raw().await;
        entries.push(serde_json::to_value(record).context("Failed to serialize record")?);
        self.write_raw(&entries).await
    }

    /// Remove every entry matching `id` and rewrite the blob.
    ///
    /// The referenced audio file is deleted best-effort: a failure is
    /// logged and swallowed. Removing an unknown id rewrites an identical
    /// collection.
    pub async fn remove(&self, id: &str) -> Result<()> {
        let entries = self.read_raw().await;

        let mut kept = Vec::with_capacity(entries.len());
        for entry in entries {
            if entry.get("id").and_then(|v| v.as_str()) == Some(id) {
                self.delete_audio_file(&entry).await;
            } else {
                kept.push(entry);
            }
        }

        self.write_raw(&kept).await
    }

    async fn delete_audio_file(&self, entry: &serde_json::Value) {
        let Some(path) = entry.get("audioFileRef").and_then(|v| v.as_str()) else {
            return;
        };

        match tokio::fs::remove_file(path).await {
            Ok(()) => debug!("Deleted audio file {}", path),
            Err(e) => warn!("Failed to delete audio file {}: {}", path, e),
        }
    }

    /// Read the raw entry array without validation. Read failures fall
    /// back to an empty collection so a corrupted blob never blocks a new
    /// recording.
    async fn read_raw(&self) -> Vec<serde_json::Value> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(_) => return Vec::new(),
        };

        match serde_json::from_str::<serde_json::Value>(&raw) {
            Ok(serde_json::Value::Array(entries)) => entries,
            Ok(_) | Err(_) => {
                warn!("Record blob unusable, starting a fresh collection");
                Vec::new()
            }
        }
    }

    async fn write_raw(&self, entries: &[serde_json::Value]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .context("Failed to create record store directory")?;
        }

        let blob = serde_json::to_string(entries).context("Failed to serialize record blob")?;

        tokio::fs::write(&self.path, blob)
            .await
            .with_context(|| format!("Failed to write record blob: {}", self.path.display()))
    }
}

fn parse_ts(timestamp: &str) -> Option<DateTime<chrono::FixedOffset>> {
    DateTime::parse_from_rfc3339(timestamp).ok()
}
