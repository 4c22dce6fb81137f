pub mod advisor;
pub mod analysis;
pub mod audio;
pub mod config;
pub mod recording;
pub mod stats;
pub mod store;
pub mod tips;

pub use advisor::AdvisoryClient;
pub use analysis::{AnalysisResult, RandomAnalyzer, SleepAnalyzer};
pub use audio::{AudioBackend, AudioBackendFactory, AudioFrame, CaptureInfo, SessionWriter};
pub use config::Config;
pub use recording::Recorder;
pub use stats::{weekly_summary, WeeklySummary};
pub use store::{RecordStore, SleepRecord};
