use anyhow::{Context, Result};
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;
use tracing::{info, warn};

use super::backend::AudioFrame;

/// Capture output for one finished session spool file
#[derive(Debug, Clone)]
pub struct CaptureInfo {
    /// Path of the spooled WAV file
    pub path: PathBuf,
    /// Sample rate the file was written at
    pub sample_rate: u32,
    /// Number of channels
    pub channels: u16,
    /// Total samples written
    pub sample_count: usize,
}

impl CaptureInfo {
    pub fn duration_seconds(&self) -> f64 {
        if self.sample_rate == 0 {
            return 0.0;
        }
        self.sample_count as f64 / (self.sample_rate as f64 * self.channels as f64)
    }
}

/// Writes one session to disk as a WAV file
///
/// The file is opened lazily on the first frame so the WAV header carries
/// the format the backend actually delivers. Frames in a different format
/// than the first are dropped with a warning.
pub struct SessionWriter {
    /// Fallback format for a capture that produced no frames
    default_spec: hound::WavSpec,
    writer: Option<hound::WavWriter<BufWriter<File>>>,
    info: CaptureInfo,
}

impl SessionWriter {
    pub fn create(path: PathBuf, sample_rate: u32, channels: u16) -> Self {
        Self {
            default_spec: hound::WavSpec {
                channels,
                sample_rate,
                bits_per_sample: 16,
                sample_format: hound::SampleFormat::Int,
            },
            writer: None,
            info: CaptureInfo {
                path,
                sample_rate,
                channels,
                sample_count: 0,
            },
        }
    }

    pub fn write_frame(&mut self, frame: &AudioFrame) -> Result<()> {
        if self.writer.is_none() {
            // First frame decides the file format
            let spec = hound::WavSpec {
                channels: frame.channels,
                sample_rate: frame.sample_rate,
                bits_per_sample: 16,
                sample_format: hound::SampleFormat::Int,
            };

            let writer = hound::WavWriter::create(&self.info.path, spec)
                .with_context(|| format!("Failed to create WAV file: {:?}", self.info.path))?;

            info!(
                "Session spool file created: {} ({} Hz, {} ch)",
                self.info.path.display(),
                frame.sample_rate,
                frame.channels
            );

            self.info.sample_rate = frame.sample_rate;
            self.info.channels = frame.channels;
            self.writer = Some(writer);
        }

        if frame.sample_rate != self.info.sample_rate || frame.channels != self.info.channels {
            warn!(
                "Dropping frame with mismatched format: {} Hz / {} ch (file is {} Hz / {} ch)",
                frame.sample_rate, frame.channels, self.info.sample_rate, self.info.channels
            );
            return Ok(());
        }

        if let Some(writer) = &mut self.writer {
            for &sample in &frame.samples {
                writer
                    .write_sample(sample)
                    .context("Failed to write sample to WAV")?;
            }

            self.info.sample_count += frame.samples.len();
        }

        Ok(())
    }

    pub fn finish(mut self) -> Result<CaptureInfo> {
        // A capture with no frames still leaves a valid, empty file behind
        let writer = match self.writer.take() {
            Some(writer) => writer,
            None => hound::WavWriter::create(&self.info.path, self.default_spec)
                .with_context(|| format!("Failed to create WAV file: {:?}", self.info.path))?,
        };

        writer.finalize().context("Failed to finalize WAV file")?;

        info!(
            "Session spool complete: {:.1}s ({} samples)",
            self.info.duration_seconds(),
            self.info.sample_count
        );

        Ok(self.info.clone())
    }
}

impl Drop for SessionWriter {
    fn drop(&mut self) {
        if let Some(writer) = self.writer.take() {
            if let Err(e) = writer.finalize() {
                warn!("Failed to finalize WAV writer on drop: {}", e);
            }
        }
    }
}
