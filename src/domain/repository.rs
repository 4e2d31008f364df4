//! Summary repository capability
//!
//! The domain talks to the model endpoint only through this trait. The
//! production implementation is [`crate::llm::LlmSummaryRepository`]; tests use
//! [`crate::api::test_utils::InMemorySummaryRepository`].

use async_trait::async_trait;

use super::summary::Summary;
use super::summary_config::SummaryConfig;
use crate::errors::SummaryError;

#[async_trait]
pub trait SummaryRepository: Send + Sync {
    /// Summarize `text` with the given generation parameters.
    ///
    /// Any downstream failure is reported as
    /// [`SummaryError::SummarizationFailed`]; no partial summary is returned.
    async fn summarize(&self, text: &str, config: &SummaryConfig) -> Result<Summary, SummaryError>;

    /// Probe the model endpoint. Never fails: every problem maps to `false`.
    async fn health_check(&self) -> bool;
}
