use anyhow::{bail, Result};
use rand::Rng;
use std::path::Path;
use tracing::info;

use super::{AnalysisResult, SleepAnalyzer};

/// Placeholder analyzer returning uniformly sampled classifications
pub struct RandomAnalyzer;

#[async_trait::async_trait]
impl SleepAnalyzer for RandomAnalyzer {
    async fn analyze(&self, audio_path: &Path) -> Result<AnalysisResult> {
        if !tokio::fs::try_exists(audio_path).await.unwrap_or(false) {
            bail!("Audio file not found: {}", audio_path.display());
        }

        let mut rng = rand::thread_rng();

        let result = AnalysisResult {
            snoring: rng.gen_bool(0.5),
            snoring_level: rng.gen_range(1..=3),
            breathing_problem: rng.gen_bool(0.3),
            quality_score: rng.gen_range(1..=5),
        };

        info!(
            "Stub analysis for {}: quality {}/5",
            audio_path.display(),
            result.quality_score
        );

        Ok(result)
    }

    fn name(&self) -> &str {
        "random stub"
    }
}
