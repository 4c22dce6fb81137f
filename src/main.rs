use anyhow::Result;
use chrono::Utc;
use tracing::info;
use uyku_takip::{stats, tips, Config, RecordStore};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let cfg = Config::load("config/uyku-takip").unwrap_or_else(|e| {
        info!("No config file found ({}), using defaults", e);
        Config::default()
    });

    info!("Uyku Takip v0.1.0");
    info!("Record store: {}", cfg.storage.records_file.display());
    info!("Recordings dir: {}", cfg.storage.recordings_dir.display());

    let store = RecordStore::new(&cfg.storage.records_file);
    let records = store.load_sorted().await;

    info!("{} sleep records on file", records.len());
    for record in records.iter().take(3) {
        info!(
            "  {} - {} h ({})",
            record.timestamp, record.duration_hours, record.audio_file_ref
        );
    }

    let summary = stats::weekly_summary(&records, Utc::now());
    info!(
        "This week: {} sessions, {} h total, {:.1} h average",
        summary.record_count, summary.total_hours, summary.average_hours
    );

    info!("Günün uyku tavsiyesi: {}", tips::tip_of_the_day());

    Ok(())
}
