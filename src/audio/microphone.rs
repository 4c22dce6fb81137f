// Microphone capture backend using cpal

use anyhow::{bail, Context, Result};
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{error, info, warn};

use super::backend::{AudioBackend, AudioFrame};
use crate::config::AudioConfig;

/// Default-input-device capture
///
/// cpal streams are not `Send`, so the stream lives on a dedicated worker
/// thread for the whole capture. The callback converts the device's f32
/// samples to mono i16 at the configured rate and pushes frames over a
/// tokio channel.
pub struct MicrophoneBackend {
    config: AudioConfig,
    capturing: Arc<AtomicBool>,
    worker: Option<std::thread::JoinHandle<()>>,
}

impl MicrophoneBackend {
    pub fn new(config: AudioConfig) -> Result<Self> {
        info!(
            "Microphone backend initialized ({}Hz, {} channels)",
            config.sample_rate, config.channels
        );

        Ok(Self {
            config,
            capturing: Arc::new(AtomicBool::new(false)),
            worker: None,
        })
    }
}

#[async_trait::async_trait]
impl AudioBackend for MicrophoneBackend {
    async fn start(&mut self) -> Result<mpsc::Receiver<AudioFrame>> {
        if self.capturing.load(Ordering::SeqCst) {
            bail!("Already capturing");
        }

        let (frame_tx, frame_rx) = mpsc::channel(100);
        let (ready_tx, ready_rx) = tokio::sync::oneshot::channel();

        let capturing = Arc::clone(&self.capturing);
        capturing.store(true, Ordering::SeqCst);

        let target_rate = self.config.sample_rate;

        let worker = std::thread::spawn(move || {
            run_capture(target_rate, Arc::clone(&capturing), frame_tx, ready_tx);
            // Clear the flag on every exit path so stop() never hangs.
            capturing.store(false, Ordering::SeqCst);
        });

        match ready_rx.await.context("Capture worker died during setup")? {
            Ok(()) => {}
            Err(e) => {
                self.capturing.store(false, Ordering::SeqCst);
                let _ = worker.join();
                return Err(e.context("Failed to start microphone capture"));
            }
        }

        self.worker = Some(worker);

        info!("Microphone capture started");

        Ok(frame_rx)
    }

    async fn stop(&mut self) -> Result<()> {
        if !self.capturing.load(Ordering::SeqCst) {
            return Ok(());
        }

        info!("Stopping microphone capture");

        self.capturing.store(false, Ordering::SeqCst);

        if let Some(worker) = self.worker.take() {
            let joined = tokio::task::spawn_blocking(move || worker.join()).await;
            if !matches!(joined, Ok(Ok(()))) {
                warn!("Capture worker did not shut down cleanly");
            }
        }

        info!("Microphone capture stopped");

        Ok(())
    }

    fn is_capturing(&self) -> bool {
        self.capturing.load(Ordering::SeqCst)
    }

    fn name(&self) -> &str {
        "cpal microphone"
    }
}

impl Drop for MicrophoneBackend {
    fn drop(&mut self) {
        self.capturing.store(false, Ordering::SeqCst);
    }
}

/// Build and run the input stream until the stop flag clears.
///
/// Signals setup success or failure exactly once over `ready_tx` before
/// entering the capture loop.
fn run_capture(
    target_rate: u32,
    capturing: Arc<AtomicBool>,
    frame_tx: mpsc::Sender<AudioFrame>,
    ready_tx: tokio::sync::oneshot::Sender<Result<()>>,
) {
    let stream = match build_stream(target_rate, &capturing, frame_tx) {
        Ok(stream) => stream,
        Err(e) => {
            let _ = ready_tx.send(Err(e));
            return;
        }
    };

    if let Err(e) = stream.play() {
        let _ = ready_tx.send(Err(anyhow::anyhow!("Failed to start input stream: {}", e)));
        return;
    }

    let _ = ready_tx.send(Ok(()));

    while capturing.load(Ordering::SeqCst) {
        std::thread::sleep(Duration::from_millis(50));
    }

    drop(stream);
}

fn build_stream(
    target_rate: u32,
    capturing: &Arc<AtomicBool>,
    frame_tx: mpsc::Sender<AudioFrame>,
) -> Result<cpal::Stream> {
    let host = cpal::default_host();
    let device = host
        .default_input_device()
        .context("No input device available")?;

    let device_name = device.name().unwrap_or_else(|_| "Unknown".to_string());
    let supported = device
        .default_input_config()
        .context("Failed to get input config")?;

    let stream_config: cpal::StreamConfig = supported.into();
    let device_rate = stream_config.sample_rate.0;
    let device_channels = stream_config.channels as usize;

    info!(
        "Capturing from {} ({}Hz, {} channels)",
        device_name, device_rate, device_channels
    );

    // Decimation ratio for the naive downsample; 1 keeps the device rate.
    let ratio = (device_rate / target_rate).max(1) as usize;
    let out_rate = device_rate / ratio as u32;

    let samples_sent = Arc::new(AtomicU64::new(0));
    let callback_flag = Arc::clone(capturing);

    let stream = device
        .build_input_stream(
            &stream_config,
            move |data: &[f32], _: &cpal::InputCallbackInfo| {
                if !callback_flag.load(Ordering::SeqCst) {
                    return;
                }

                let samples: Vec<i16> = data
                    .chunks(device_channels)
                    .step_by(ratio)
                    .map(|frame| {
                        let mono =
                            frame.iter().sum::<f32>() / device_channels as f32;
                        (mono.clamp(-1.0, 1.0) * i16::MAX as f32) as i16
                    })
                    .collect();

                if samples.is_empty() {
                    return;
                }

                let sent = samples_sent.fetch_add(samples.len() as u64, Ordering::Relaxed);
                let frame = AudioFrame {
                    samples,
                    sample_rate: out_rate,
                    channels: 1,
                    timestamp_ms: sent * 1000 / out_rate as u64,
                };

                if frame_tx.try_send(frame).is_err() {
                    warn!("Dropping audio frame: channel full or closed");
                }
            },
            |err| {
                error!("Audio input stream error: {}", err);
            },
            None,
        )
        .context("Failed to build input stream")?;

    Ok(stream)
}
