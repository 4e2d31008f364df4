//! Model-backed [`SummaryRepository`]

use std::time::Instant;

use async_trait::async_trait;
use tracing::{debug, instrument, warn};

use super::client::{ChatClient, ChatMessage, ChatRequest};
use super::prompts;
use crate::domain::{Summary, SummaryConfig, SummaryRepository};
use crate::errors::SummaryError;
use crate::observability::metrics;

const HEALTH_CHECK_MAX_TOKENS: u32 = 50;
const HEALTH_CHECK_TEMPERATURE: f32 = 0.1;

/// Summarizes text by prompting an OpenAI-compatible chat model
#[derive(Debug, Clone)]
pub struct LlmSummaryRepository {
    client: ChatClient,
    health_check_model: String,
}

impl LlmSummaryRepository {
    pub fn new(client: ChatClient) -> Self {
        Self { client, health_check_model: crate::domain::summary_config::DEFAULT_MODEL_NAME.into() }
    }

    /// Model used by [`SummaryRepository::health_check`]
    pub fn with_health_check_model(mut self, model: impl Into<String>) -> Self {
        self.health_check_model = model.into();
        self
    }
}

#[async_trait]
impl SummaryRepository for LlmSummaryRepository {
    #[instrument(
        skip(self, text, config),
        fields(model = %config.model_name(), summary_type = %config.summary_type())
    )]
    async fn summarize(&self, text: &str, config: &SummaryConfig) -> Result<Summary, SummaryError> {
        let request = ChatRequest::new(
            config.model_name(),
            vec![
                ChatMessage::system(prompts::system_prompt(config)),
                ChatMessage::user(prompts::user_prompt(text)),
            ],
        )
        .max_tokens(config.max_tokens())
        .temperature(config.temperature());

        let started = Instant::now();
        let result = self.client.complete(&request).await;
        let elapsed = started.elapsed().as_secs_f64();

        match result {
            Ok(content) => {
                metrics::record_llm_request(config.model_name(), "success", elapsed).await;
                debug!(response_length = content.chars().count(), "Model responded");
                Ok(Summary::new(text, content.trim(), config.model_name()))
            }
            Err(e) => {
                metrics::record_llm_request(config.model_name(), "error", elapsed).await;
                Err(SummaryError::summarization_failed(e))
            }
        }
    }

    async fn health_check(&self) -> bool {
        let request = ChatRequest::new(
            self.health_check_model.as_str(),
            vec![ChatMessage::user(prompts::HEALTH_CHECK_PROMPT)],
        )
        .max_tokens(HEALTH_CHECK_MAX_TOKENS)
        .temperature(HEALTH_CHECK_TEMPERATURE);

        match self.client.complete(&request).await {
            Ok(content) if !content.trim().is_empty() => true,
            Ok(_) => {
                warn!(endpoint = %self.client.endpoint(), "LLM health check got an empty reply");
                false
            }
            Err(e) => {
                warn!(error = %e, endpoint = %self.client.endpoint(), "LLM health check failed");
                false
            }
        }
    }
}
