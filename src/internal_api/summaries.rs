//! Summary Operations for Internal API
//!
//! Use cases between the HTTP handlers and the [`SummaryService`]: building a
//! generation config from a request, running the summarization, and turning
//! the service health probe into a response body.

use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use chrono::Utc;
use futures::FutureExt;
use tracing::{info, instrument, warn};

use crate::domain::SummaryConfig;
use crate::errors::{ConfigurationError, SummaryError};
use crate::internal_api::types::{
    HealthCheckResponse, HealthStatus, SummaryRequest, SummaryResponse,
};
use crate::services::SummaryService;

const HEALTHY_DETAILS: &str = "LLM service is responding correctly";
const UNHEALTHY_DETAILS: &str = "LLM service is not responding";

/// Summarize a text on behalf of a request
pub struct SummarizeTextUseCase {
    service: Arc<SummaryService>,
}

impl SummarizeTextUseCase {
    pub fn new(service: Arc<SummaryService>) -> Self {
        Self { service }
    }

    /// Run the summarization described by `request`.
    ///
    /// Parameters missing from the request take the service defaults.
    /// Service errors are returned unchanged.
    #[instrument(skip(self, request), fields(text_length = request.text.chars().count()))]
    pub async fn execute(&self, request: SummaryRequest) -> Result<SummaryResponse, SummaryError> {
        let config = self.build_config(&request)?;

        if !self.service.validate_config(&config) {
            return Err(ConfigurationError::new("config", "failed business validation").into());
        }

        let summary = self.service.summarize_text(&request.text, Some(config)).await?;
        let response = SummaryResponse::from(summary);

        info!(
            summary_id = %response.id,
            compression_ratio = response.compression_ratio,
            "Summary request completed"
        );

        Ok(response)
    }

    fn build_config(&self, request: &SummaryRequest) -> Result<SummaryConfig, SummaryError> {
        let mut builder = self.service.default_config().to_builder();

        if let Some(max_tokens) = request.max_tokens {
            builder = builder.max_tokens(max_tokens);
        }
        if let Some(temperature) = request.temperature {
            builder = builder.temperature(temperature);
        }
        if let Some(summary_type) = request.summary_type {
            builder = builder.summary_type(summary_type.as_str());
        }
        if let Some(language) = request.language {
            builder = builder.language(language.as_str());
        }

        Ok(builder.build()?)
    }
}

/// Report the availability of the model endpoint
pub struct HealthCheckUseCase {
    service: Arc<SummaryService>,
    service_name: String,
}

impl HealthCheckUseCase {
    pub fn new(service: Arc<SummaryService>, service_name: impl Into<String>) -> Self {
        Self { service, service_name: service_name.into() }
    }

    /// Probe the service. Never fails; every problem is reported as unhealthy.
    pub async fn execute(&self) -> HealthCheckResponse {
        let (status, details) =
            match AssertUnwindSafe(self.service.check_health()).catch_unwind().await {
                Ok(true) => (HealthStatus::Healthy, HEALTHY_DETAILS.to_string()),
                Ok(false) => (HealthStatus::Unhealthy, UNHEALTHY_DETAILS.to_string()),
                Err(panic) => {
                    let message = panic_message(panic.as_ref());
                    warn!(error = %message, "Health check panicked");
                    (HealthStatus::Unhealthy, format!("Health check failed: {}", message))
                }
            };

        HealthCheckResponse {
            status,
            service_name: self.service_name.clone(),
            timestamp: Utc::now(),
            details: Some(details),
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown error".to_string()
    }
}
