use anyhow::{bail, Context, Result};
use chrono::{SecondsFormat, Utc};
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tracing::{info, warn};

use crate::audio::{AudioBackend, CaptureInfo, SessionWriter};
use crate::config::AudioConfig;
use crate::store::{RecordStore, SleepRecord};

/// Records one sleep session at a time
///
/// Start/stop is guarded by a single boolean flag; there is no timeout and
/// no cancellation beyond stopping the backend.
pub struct Recorder {
    store: Arc<RecordStore>,
    audio: AudioConfig,
    recordings_dir: PathBuf,

    /// Whether a capture is currently active
    is_recording: Arc<AtomicBool>,

    /// Wall-clock start of the active capture
    started_at: Mutex<Option<Instant>>,

    /// The backend driving the active capture
    backend: Mutex<Option<Box<dyn AudioBackend>>>,

    /// Handle for the spool writer task
    writer_task: Mutex<Option<JoinHandle<Result<CaptureInfo>>>>,
}

impl Recorder {
    pub fn new(store: Arc<RecordStore>, audio: AudioConfig, recordings_dir: PathBuf) -> Self {
        Self {
            store,
            audio,
            recordings_dir,
            is_recording: Arc::new(AtomicBool::new(false)),
            started_at: Mutex::new(None),
            backend: Mutex::new(None),
            writer_task: Mutex::new(None),
        }
    }

    /// Start recording through the given backend
    pub async fn start(&self, mut backend: Box<dyn AudioBackend>) -> Result<()> {
        if self.is_recording.load(Ordering::SeqCst) {
            warn!("Recording already started");
            return Ok(());
        }

        info!("Starting sleep recording ({})", backend.name());

        tokio::fs::create_dir_all(&self.recordings_dir)
            .await
            .context("Failed to create recordings directory")?;

        let spool_path = self
            .recordings_dir
            .join(format!("capture-{}.wav", uuid::Uuid::new_v4()));

        let mut frame_rx = backend
            .start()
            .await
            .context("Failed to start audio capture")?;

        let mut writer =
            SessionWriter::create(spool_path, self.audio.sample_rate, self.audio.channels);

        let writer_task = tokio::spawn(async move {
            while let Some(frame) = frame_rx.recv().await {
                writer.write_frame(&frame)?;
            }
            writer.finish()
        });

        {
            let mut handle = self.writer_task.lock().await;
            *handle = Some(writer_task);
        }
        {
            let mut slot = self.backend.lock().await;
            *slot = Some(backend);
        }
        {
            let mut started = self.started_at.lock().await;
            *started = Some(Instant::now());
        }

        self.is_recording.store(true, Ordering::SeqCst);

        info!("Sleep recording started");

        Ok(())
    }

    /// Stop recording, move the audio file into place and persist the
    /// session record
    pub async fn stop(&self) -> Result<SleepRecord> {
        if !self.is_recording.load(Ordering::SeqCst) {
            warn!("Stop requested without an active recording");
            bail!("No active recording");
        }

        info!("Stopping sleep recording");

        self.is_recording.store(false, Ordering::SeqCst);

        // Stopping the backend closes the frame channel, which lets the
        // writer task run to completion.
        if let Some(mut backend) = self.backend.lock().await.take() {
            backend
                .stop()
                .await
                .context("Failed to stop audio capture")?;
        }

        let capture = {
            let task = self.writer_task.lock().await.take();
            match task {
                Some(task) => task.await.context("Writer task panicked")??,
                None => bail!("No capture in progress"),
            }
        };

        let elapsed_secs = {
            let mut started = self.started_at.lock().await;
            started
                .take()
                .map(|t| t.elapsed().as_secs())
                .unwrap_or_default()
        };

        let now = Utc::now();
        let id = now.timestamp_millis().to_string();

        let destination = self.recordings_dir.join(format!("uyku_kaydi_{}.wav", id));
        tokio::fs::rename(&capture.path, &destination)
            .await
            .context("Failed to move recording into place")?;

        let record = SleepRecord {
            id,
            timestamp: now.to_rfc3339_opts(SecondsFormat::Millis, true),
            duration_hours: (elapsed_secs / 3600) as u32,
            audio_file_ref: destination.to_string_lossy().into_owned(),
        };

        self.store
            .append(&record)
            .await
            .context("Failed to persist session record")?;

        info!(
            "Sleep recording saved: {} ({:.1}s of audio, {} h logged)",
            record.audio_file_ref,
            capture.duration_seconds(),
            record.duration_hours
        );

        Ok(record)
    }

    pub fn is_recording(&self) -> bool {
        self.is_recording.load(Ordering::SeqCst)
    }
}
