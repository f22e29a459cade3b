//! Google Gemini analysis client.
//!
//! One `generateContent` call per analysis, constrained to JSON output by a
//! fixed `responseSchema`. The API key travels in the `x-goog-api-key` header.

use super::http_client::{build_analysis_client, build_analysis_client_with_timeout};
use super::prompt::build_prompt;
use super::schema::response_schema;
use super::scrub::sanitize_api_error;
use super::{AnalysisFuture, Analyzer, MindsetResponse};
use crate::config::Config;
use crate::error::AnalysisError;
use reqwest::Client;
use serde::Deserialize;
use zeroize::Zeroizing;

mod types;
use types::{Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig, Part};

pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";

/// Gemini-backed `Analyzer`.
pub struct GeminiAnalyzer {
    api_key: Option<Zeroizing<String>>,
    api_base: String,
    model: String,
    temperature: Option<f64>,
    client: Client,
}

/// Error envelope Gemini returns with non-2xx statuses.
#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: types::ApiError,
}

impl GeminiAnalyzer {
    /// Create an analyzer with default endpoint, model and timeout.
    pub fn new(api_key: Option<&str>) -> Self {
        Self {
            api_key: api_key
                .filter(|key| !key.is_empty())
                .map(|key| Zeroizing::new(key.to_string())),
            api_base: DEFAULT_API_BASE.to_string(),
            model: DEFAULT_MODEL.to_string(),
            temperature: None,
            client: build_analysis_client(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.api_key.as_deref())
            .with_timeout(config.gemini.timeout_secs)
            .with_api_base(&config.gemini.api_base)
            .with_model(&config.gemini.model)
            .with_temperature(config.gemini.temperature)
    }

    pub fn with_timeout(mut self, timeout_secs: u64) -> Self {
        self.client = build_analysis_client_with_timeout(timeout_secs);
        self
    }

    pub fn with_api_base(mut self, api_base: &str) -> Self {
        self.api_base = api_base.trim_end_matches('/').to_string();
        self
    }

    pub fn with_model(mut self, model: &str) -> Self {
        self.model = model.to_string();
        self
    }

    pub fn with_temperature(mut self, temperature: Option<f64>) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn model_name(model: &str) -> String {
        if model.starts_with("models/") {
            model.to_string()
        } else {
            format!("models/{model}")
        }
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/{}:generateContent",
            self.api_base,
            Self::model_name(&self.model)
        )
    }

    fn api_key(&self) -> Result<&str, AnalysisError> {
        self.api_key
            .as_deref()
            .map(String::as_str)
            .ok_or(AnalysisError::MissingApiKey)
    }

    fn build_request(scenario: &str, temperature: Option<f64>) -> GenerateContentRequest {
        GenerateContentRequest {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part {
                    text: build_prompt(scenario),
                }],
            }],
            generation_config: GenerationConfig {
                temperature,
                response_mime_type: "application/json",
                response_schema: response_schema(),
            },
        }
    }

    async fn send_request(
        &self,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, AnalysisError> {
        let api_key = self.api_key()?;

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", api_key)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ErrorEnvelope>(&body)
                .map_or(body, |envelope| envelope.error.message);
            return Err(AnalysisError::Api {
                status: status.as_u16(),
                message: sanitize_api_error(&message, Some(api_key)),
            });
        }

        let result: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| AnalysisError::Decode(e.without_url().to_string()))?;

        if let Some(err) = result.error.as_ref() {
            return Err(AnalysisError::Api {
                status: err.code.unwrap_or(status.as_u16()),
                message: sanitize_api_error(&err.message, Some(api_key)),
            });
        }

        Ok(result)
    }

    /// Concatenate the first candidate's text parts. No text is a failure.
    fn extract_text(result: &GenerateContentResponse) -> Result<String, AnalysisError> {
        let Some(candidate) = result.candidates.as_ref().and_then(|c| c.first()) else {
            return Err(AnalysisError::MissingBody);
        };

        let text: String = candidate
            .content
            .as_ref()
            .map(|content| {
                content
                    .parts
                    .iter()
                    .filter_map(|part| part.text.as_deref())
                    .collect()
            })
            .unwrap_or_default();

        if text.trim().is_empty() {
            tracing::debug!(
                finish_reason = candidate.finish_reason.as_deref().unwrap_or("unknown"),
                "Gemini candidate carried no text"
            );
            return Err(AnalysisError::MissingBody);
        }

        Ok(text)
    }

    async fn analyze_impl(&self, scenario: &str) -> Result<MindsetResponse, AnalysisError> {
        tracing::debug!(
            model = %self.model,
            scenario_chars = scenario.chars().count(),
            "requesting mindset analysis"
        );

        let request = Self::build_request(scenario, self.temperature);
        let result = self.send_request(&request).await?;
        let text = Self::extract_text(&result)?;
        let analysis = MindsetResponse::from_json(&text)?;

        if let Some(usage) = result.usage_metadata.as_ref() {
            tracing::info!(
                model = result.model_version.as_deref().unwrap_or(self.model.as_str()),
                input_tokens = usage.prompt_token_count,
                output_tokens = usage.candidates_token_count,
                "mindset analysis received"
            );
        } else {
            tracing::info!(model = %self.model, "mindset analysis received");
        }

        Ok(analysis)
    }
}

impl Analyzer for GeminiAnalyzer {
    fn name(&self) -> &str {
        "gemini"
    }

    fn analyze<'a>(&'a self, scenario: &'a str) -> AnalysisFuture<'a> {
        Box::pin(self.analyze_impl(scenario))
    }
}
