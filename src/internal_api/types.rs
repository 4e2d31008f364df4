//! Internal API Types
//!
//! Request and response bodies shared by the HTTP handlers and the use cases.
//! Field names are snake_case on the wire.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::{Language, Summary, SummaryId, SummaryType};

/// Request body for summarizing a text
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[schema(example = json!({
    "text": "Rust is a general-purpose programming language emphasizing performance, type safety, and concurrency.",
    "max_tokens": 500,
    "temperature": 0.3,
    "summary_type": "concise",
    "language": "english"
}))]
pub struct SummaryRequest {
    /// Text to summarize. Surrounding whitespace is removed before validation.
    #[serde(deserialize_with = "trimmed")]
    #[validate(length(
        min = 10,
        max = 50000,
        message = "Text must be between 10 and 50000 characters"
    ))]
    #[schema(min_length = 10, max_length = 50000)]
    pub text: String,

    /// Maximum number of tokens to generate
    #[serde(default)]
    #[validate(range(min = 50, max = 4000, message = "max_tokens must be between 50 and 4000"))]
    #[schema(example = 1000, minimum = 50, maximum = 4000)]
    pub max_tokens: Option<u32>,

    /// Sampling temperature
    #[serde(default)]
    #[validate(range(min = 0.0, max = 2.0, message = "temperature must be between 0.0 and 2.0"))]
    #[schema(example = 0.3, minimum = 0.0, maximum = 2.0)]
    pub temperature: Option<f32>,

    #[serde(default)]
    pub summary_type: Option<SummaryType>,

    #[serde(default)]
    pub language: Option<Language>,
}

impl SummaryRequest {
    /// Request carrying only `text`; every parameter takes the service default
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into().trim().to_string(),
            max_tokens: None,
            temperature: None,
            summary_type: None,
            language: None,
        }
    }
}

fn trimmed<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let text = String::deserialize(deserializer)?;
    Ok(text.trim().to_string())
}

/// Response body for a completed summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SummaryResponse {
    pub id: SummaryId,
    pub original_text: String,
    pub summary_text: String,
    pub created_at: DateTime<Utc>,
    #[schema(example = "qwen/qwen3-4b")]
    pub model_name: String,
    /// Character count of the summary; absent when the summary is empty
    pub summary_length: Option<usize>,
    /// Character count of the original text
    pub original_length: usize,
    /// `summary_length / original_length`, rounded to three decimals
    #[schema(example = 0.125)]
    pub compression_ratio: f64,
}

impl From<Summary> for SummaryResponse {
    fn from(summary: Summary) -> Self {
        let original_length = summary.original_length();
        let summary_length = summary.summary_length();

        Self {
            id: summary.id().clone(),
            original_text: summary.original_text().to_string(),
            summary_text: summary.summary_text().to_string(),
            created_at: summary.created_at(),
            model_name: summary.model_name().to_string(),
            summary_length,
            original_length,
            compression_ratio: compression_ratio(summary_length.unwrap_or(0), original_length),
        }
    }
}

/// Ratio of summary to original length, rounded to three decimals.
/// Zero when the original is empty.
pub fn compression_ratio(summary_length: usize, original_length: usize) -> f64 {
    if original_length == 0 {
        return 0.0;
    }
    let ratio = summary_length as f64 / original_length as f64;
    (ratio * 1000.0).round() / 1000.0
}

/// Health state of a dependency
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Unhealthy,
}

impl HealthStatus {
    pub fn is_healthy(&self) -> bool {
        matches!(self, HealthStatus::Healthy)
    }
}

/// Response body of the summary service health check
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct HealthCheckResponse {
    pub status: HealthStatus,
    #[schema(example = "llmplan")]
    pub service_name: String,
    pub timestamp: DateTime<Utc>,
    #[schema(example = "LLM service is responding correctly")]
    pub details: Option<String>,
}

/// Response body of the static application health endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AppHealthResponse {
    #[schema(example = "healthy")]
    pub status: String,
    pub app_name: String,
    pub version: String,
    pub author: String,
    #[schema(example = "2025-08-11")]
    pub start_date: String,
}

/// Error body returned for every failed request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    #[schema(example = "VALIDATION_ERROR")]
    pub error_code: String,
    pub details: Option<String>,
    pub timestamp: DateTime<Utc>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, error_code: impl Into<String>) -> Self {
        Self { error: error.into(), error_code: error_code.into(), details: None, timestamp: Utc::now() }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}
