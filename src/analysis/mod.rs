//! Sleep audio analysis
//!
//! `SleepAnalyzer` is the seam for plugging in a real classifier later.
//! The shipped `RandomAnalyzer` is a stub: it validates that the audio
//! file exists and then samples every field independently, with no
//! relationship to the audio content.

mod random;

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub use random::RandomAnalyzer;

/// Classification of one session's audio
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    /// Whether snoring was detected
    pub snoring: bool,

    /// Snoring intensity, 1 (light) to 3 (heavy)
    pub snoring_level: u8,

    /// Whether breathing problems were detected
    pub breathing_problem: bool,

    /// Overall sleep quality, 1 (poor) to 5 (good)
    pub quality_score: u8,
}

/// Pluggable audio analysis capability
#[async_trait::async_trait]
pub trait SleepAnalyzer: Send + Sync {
    /// Analyze the audio file of one session
    async fn analyze(&self, audio_path: &Path) -> Result<AnalysisResult>;

    /// Get analyzer name for logging
    fn name(&self) -> &str;
}
