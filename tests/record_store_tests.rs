// Integration tests for the JSON-blob record store
//
// These tests verify the load/append/remove contract: malformed storage
// degrades to an empty collection, invalid entries are hidden from views
// but never deleted, and mutations rewrite the whole blob.

use anyhow::Result;
use tempfile::TempDir;
use uyku_takip::{RecordStore, SleepRecord};

fn sample_record(id: &str, timestamp: &str, hours: u32) -> SleepRecord {
    SleepRecord {
        id: id.to_string(),
        timestamp: timestamp.to_string(),
        duration_hours: hours,
        audio_file_ref: format!("/tmp/uyku_kaydi_{}.wav", id),
    }
}

#[tokio::test]
async fn test_load_absent_blob_yields_empty() {
    let temp_dir = TempDir::new().unwrap();
    let store = RecordStore::new(temp_dir.path().join("kayitlar.json"));

    assert!(store.load().await.is_empty());
}

#[tokio::test]
async fn test_load_malformed_blob_yields_empty() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("kayitlar.json");
    std::fs::write(&path, "{{{ not json")?;

    let store = RecordStore::new(&path);
    assert!(store.load().await.is_empty());

    Ok(())
}

#[tokio::test]
async fn test_load_non_array_blob_yields_empty() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("kayitlar.json");
    std::fs::write(&path, r#"{"id":"1"}"#)?;

    let store = RecordStore::new(&path);
    assert!(store.load().await.is_empty());

    Ok(())
}

#[tokio::test]
async fn test_invalid_entries_dropped_from_view_but_kept_in_storage() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("kayitlar.json");
    std::fs::write(
        &path,
        r#"[
            {"id":"1700000000000","timestamp":"2024-01-01T00:00:00.000Z","durationHours":7,"audioFileRef":"/x/a.m4a"},
            {"timestamp":"2024-01-02T00:00:00.000Z","durationHours":6,"audioFileRef":"/x/b.m4a"},
            {"id":"","timestamp":"2024-01-03T00:00:00.000Z","durationHours":5,"audioFileRef":"/x/c.m4a"},
            "not-an-object"
        ]"#,
    )?;

    let store = RecordStore::new(&path);
    let records = store.load().await;

    // Only the structurally valid entry is visible
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].id, "1700000000000");

    // Loading must not mutate the underlying blob
    let raw: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(&path)?)?;
    assert_eq!(raw.as_array().unwrap().len(), 4);

    Ok(())
}

#[tokio::test]
async fn test_non_integer_duration_is_invalid() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("kayitlar.json");
    std::fs::write(
        &path,
        r#"[{"id":"1","timestamp":"2024-01-01T00:00:00.000Z","durationHours":"yedi","audioFileRef":"/x/a.m4a"}]"#,
    )?;

    let store = RecordStore::new(&path);
    assert!(store.load().await.is_empty());

    Ok(())
}

#[tokio::test]
async fn test_append_then_load_roundtrip() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let store = RecordStore::new(temp_dir.path().join("kayitlar.json"));

    let record = SleepRecord {
        id: "1700000000000".to_string(),
        timestamp: "2024-01-01T00:00:00.000Z".to_string(),
        duration_hours: 7,
        audio_file_ref: "/x/a.m4a".to_string(),
    };

    store.append(&record).await?;

    let records = store.load().await;
    assert_eq!(records, vec![record]);

    Ok(())
}

#[tokio::test]
async fn test_append_grows_collection_by_one() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let store = RecordStore::new(temp_dir.path().join("kayitlar.json"));

    store
        .append(&sample_record("1", "2024-01-01T00:00:00.000Z", 6))
        .await?;
    store
        .append(&sample_record("2", "2024-01-02T00:00:00.000Z", 8))
        .await?;

    let before = store.load().await.len();
    store
        .append(&sample_record("3", "2024-01-03T00:00:00.000Z", 7))
        .await?;

    let records = store.load().await;
    assert_eq!(records.len(), before + 1);
    assert!(records.iter().any(|r| r.id == "3"));

    Ok(())
}

#[tokio::test]
async fn test_append_preserves_invalid_entries() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("kayitlar.json");
    std::fs::write(&path, r#"[{"durationHours":3}]"#)?;

    let store = RecordStore::new(&path);
    store
        .append(&sample_record("1", "2024-01-01T00:00:00.000Z", 6))
        .await?;

    let raw: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(&path)?)?;
    let entries = raw.as_array().unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0], serde_json::json!({"durationHours": 3}));

    Ok(())
}

#[tokio::test]
async fn test_remove_known_id_drops_record_and_audio_file() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let store = RecordStore::new(temp_dir.path().join("kayitlar.json"));

    let audio_path = temp_dir.path().join("uyku_kaydi_1.wav");
    std::fs::write(&audio_path, b"fake wav")?;

    let mut record = sample_record("1", "2024-01-01T00:00:00.000Z", 6);
    record.audio_file_ref = audio_path.to_string_lossy().into_owned();

    store.append(&record).await?;
    store
        .append(&sample_record("2", "2024-01-02T00:00:00.000Z", 8))
        .await?;

    store.remove("1").await?;

    let records = store.load().await;
    assert_eq!(records.len(), 1);
    assert!(records.iter().all(|r| r.id != "1"));
    assert!(!audio_path.exists(), "Audio file should have been deleted");

    Ok(())
}

#[tokio::test]
async fn test_remove_unknown_id_is_noop() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let store = RecordStore::new(temp_dir.path().join("kayitlar.json"));

    store
        .append(&sample_record("1", "2024-01-01T00:00:00.000Z", 6))
        .await?;

    let before = store.load().await;
    store.remove("does-not-exist").await?;

    assert_eq!(store.load().await, before);

    Ok(())
}

#[tokio::test]
async fn test_remove_survives_missing_audio_file() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let store = RecordStore::new(temp_dir.path().join("kayitlar.json"));

    // audio_file_ref points at a path that was never created
    store
        .append(&sample_record("1", "2024-01-01T00:00:00.000Z", 6))
        .await?;

    store.remove("1").await?;
    assert!(store.load().await.is_empty());

    Ok(())
}

#[tokio::test]
async fn test_load_sorted_newest_first() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let store = RecordStore::new(temp_dir.path().join("kayitlar.json"));

    store
        .append(&sample_record("1", "2024-01-01T00:00:00.000Z", 6))
        .await?;
    store
        .append(&sample_record("3", "2024-03-01T00:00:00.000Z", 7))
        .await?;
    store
        .append(&sample_record("2", "2024-02-01T00:00:00.000Z", 8))
        .await?;

    let ids: Vec<String> = store
        .load_sorted()
        .await
        .into_iter()
        .map(|r| r.id)
        .collect();

    assert_eq!(ids, vec!["3", "2", "1"]);

    Ok(())
}
