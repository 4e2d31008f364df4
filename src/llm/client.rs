//! OpenAI-compatible chat completion client
//!
//! Talks to `{base_url}/chat/completions` (LM Studio, vLLM, OpenAI, ...).
//! One client is built per process and shared; it keeps no per-request
//! state. Transient failures (transport errors, timeouts, HTTP 429 and 5xx)
//! are retried up to `max_retries` extra times with linear backoff.

use std::time::Duration;

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::domain::ConnectionConfig;
use crate::errors::{Error, Result};

const RETRY_DELAY_MS: u64 = 500;
const MAX_ERROR_BODY_CHARS: usize = 512;

/// Role of a chat message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    System,
    User,
}

/// A single chat message
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self { role: ChatRole::System, content: content.into() }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self { role: ChatRole::User, content: content.into() }
    }
}

/// Chat completion request body
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub max_tokens: u32,
    pub temperature: f32,
    pub stream: bool,
}

impl ChatRequest {
    pub fn new(model: impl Into<String>, messages: Vec<ChatMessage>) -> Self {
        Self { model: model.into(), messages, max_tokens: 1000, temperature: 0.3, stream: false }
    }

    pub fn max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    pub fn temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

/// Failure talking to the model endpoint
#[derive(thiserror::Error, Debug)]
pub enum ChatClientError {
    /// The request never produced a response (connect error, timeout, ...)
    #[error("request to model endpoint failed: {source}")]
    Request {
        #[source]
        source: reqwest::Error,
    },

    /// The endpoint answered with a non-success status
    #[error("model endpoint returned {status}: {body}")]
    Status { status: StatusCode, body: String },

    /// The response body did not have the expected shape
    #[error("malformed model response: {0}")]
    MalformedResponse(String),
}

impl ChatClientError {
    /// Check if this error should be retried
    pub fn is_retryable(&self) -> bool {
        match self {
            ChatClientError::Request { .. } => true,
            ChatClientError::Status { status, .. } => {
                *status == StatusCode::TOO_MANY_REQUESTS || status.is_server_error()
            }
            ChatClientError::MalformedResponse(_) => false,
        }
    }
}

/// Client for an OpenAI-compatible chat completion endpoint
#[derive(Debug, Clone)]
pub struct ChatClient {
    http: reqwest::Client,
    endpoint: String,
    api_key: String,
    max_retries: u32,
    retry_delay: Duration,
}

impl ChatClient {
    /// Build a client bound to `connection`
    pub fn new(connection: &ConnectionConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(connection.timeout())
            .build()
            .map_err(|e| Error::transport(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            endpoint: format!("{}/chat/completions", connection.base_url().trim_end_matches('/')),
            api_key: connection.api_key().to_string(),
            max_retries: connection.max_retries(),
            retry_delay: Duration::from_millis(RETRY_DELAY_MS),
        })
    }

    /// Override the base retry delay (the n-th retry waits `n * delay`)
    pub fn with_retry_delay(mut self, retry_delay: Duration) -> Self {
        self.retry_delay = retry_delay;
        self
    }

    /// Full URL of the completion endpoint
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Send `request` and return the content of the first choice.
    ///
    /// A `null` content is returned as an empty string; callers decide
    /// whether that is acceptable.
    pub async fn complete(
        &self,
        request: &ChatRequest,
    ) -> std::result::Result<String, ChatClientError> {
        let max_attempts = self.max_retries + 1;
        let mut attempt = 1;

        loop {
            match self.send(request).await {
                Ok(content) => {
                    debug!(
                        endpoint = %self.endpoint,
                        model = %request.model,
                        attempt,
                        "Chat completion succeeded"
                    );
                    return Ok(content);
                }
                Err(e) if e.is_retryable() && attempt < max_attempts => {
                    warn!(
                        endpoint = %self.endpoint,
                        model = %request.model,
                        error = %e,
                        attempt,
                        max_attempts,
                        "Chat completion failed, retrying"
                    );
                    tokio::time::sleep(self.retry_delay * attempt).await;
                    attempt += 1;
                }
                Err(e) => return Err(e),
            }
        }
    }

    async fn send(&self, request: &ChatRequest) -> std::result::Result<String, ChatClientError> {
        let response = self
            .http
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(request)
            .send()
            .await
            .map_err(|source| ChatClientError::Request { source })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ChatClientError::Status { status, body: truncate(&body) });
        }

        let body: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| ChatClientError::MalformedResponse(e.to_string()))?;

        body.choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content.unwrap_or_default())
            .ok_or_else(|| ChatClientError::MalformedResponse("response has no choices".into()))
    }
}

fn truncate(body: &str) -> String {
    if body.chars().count() <= MAX_ERROR_BODY_CHARS {
        body.to_string()
    } else {
        let mut truncated: String = body.chars().take(MAX_ERROR_BODY_CHARS).collect();
        truncated.push_str("...");
        truncated
    }
}
