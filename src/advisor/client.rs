use anyhow::{bail, Context, Result};
use tracing::{info, warn};

use super::{fallback, prompt};
use crate::analysis::AnalysisResult;
use crate::config::GeminiConfig;

/// Client for the Gemini generateContent endpoint
///
/// Remote failures never propagate: both operations fall back to the
/// deterministic templates and always return some text. No retry, no
/// request timeout.
pub struct AdvisoryClient {
    http: reqwest::Client,
    config: GeminiConfig,
}

impl AdvisoryClient {
    pub fn new(config: GeminiConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    /// Generate a detailed assessment of one session
    pub async fn analyze_session(&self, analysis: &AnalysisResult, duration_hours: u32) -> String {
        let prompt = prompt::analysis_prompt(analysis, duration_hours);

        match self.generate(&prompt).await {
            Ok(text) => text,
            Err(e) => {
                warn!("Gemini analysis call failed, using fallback: {:#}", e);
                fallback::default_analysis(analysis, duration_hours)
            }
        }
    }

    /// Answer a free-form question about one session
    pub async fn answer(
        &self,
        question: &str,
        analysis: &AnalysisResult,
        duration_hours: u32,
    ) -> String {
        let prompt = prompt::question_prompt(question, analysis, duration_hours);

        match self.generate(&prompt).await {
            Ok(text) => text,
            Err(e) => {
                warn!("Gemini answer call failed, using fallback: {:#}", e);
                fallback::default_answer(question, analysis, duration_hours)
            }
        }
    }

    async fn generate(&self, prompt: &str) -> Result<String> {
        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.config.endpoint, self.config.model, self.config.api_key
        );

        info!("Requesting advisory text from {}", self.config.model);

        let response = self
            .http
            .post(&url)
            .header("Content-Type", "application/json")
            .json(&serde_json::json!({
                "contents": [{
                    "role": "user",
                    "parts": [{"text": prompt}]
                }],
                "generationConfig": {
                    "temperature": 0.7,
                    "topK": 40,
                    "topP": 0.95,
                    "maxOutputTokens": 1024
                }
            }))
            .send()
            .await
            .context("Gemini request failed")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            bail!("Gemini API error ({}): {}", status, body);
        }

        let result: serde_json::Value = response
            .json()
            .await
            .context("Failed to parse Gemini response")?;

        result["candidates"][0]["content"]["parts"][0]["text"]
            .as_str()
            .map(str::to_string)
            .context("Gemini response carried no text candidate")
    }
}
