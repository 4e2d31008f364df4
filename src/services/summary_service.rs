//! Summary domain service
//!
//! Business rules around a single summarization: input bounds, default
//! configuration, and result validation. The model call itself is delegated
//! to a [`SummaryRepository`].

use std::sync::Arc;
use std::time::Instant;

use tracing::{info, instrument, warn};

use crate::domain::{Summary, SummaryConfig, SummaryRepository};
use crate::errors::SummaryError;

/// Minimum number of characters after trimming
pub const MIN_TEXT_LENGTH: usize = 10;

/// Maximum number of characters of the raw input
pub const MAX_TEXT_LENGTH: usize = 50_000;

/// Domain service for text summarization
#[derive(Clone)]
pub struct SummaryService {
    repository: Arc<dyn SummaryRepository>,
    default_config: SummaryConfig,
}

impl SummaryService {
    /// Create a service using the built-in default generation parameters
    pub fn new(repository: Arc<dyn SummaryRepository>) -> Self {
        Self { repository, default_config: SummaryConfig::default() }
    }

    /// Replace the configuration used when a caller supplies none
    pub fn with_default_config(mut self, default_config: SummaryConfig) -> Self {
        self.default_config = default_config;
        self
    }

    /// Configuration used when a caller supplies none
    pub fn default_config(&self) -> &SummaryConfig {
        &self.default_config
    }

    /// Summarize `text` after validating its length.
    ///
    /// Checks run in a fixed order: blank input, too short (trimmed), too
    /// long (raw). A blank result from the repository is rejected.
    #[instrument(skip(self, text, config), fields(text_length = text.len()))]
    pub async fn summarize_text(
        &self,
        text: &str,
        config: Option<SummaryConfig>,
    ) -> Result<Summary, SummaryError> {
        validate_text(text)?;

        let config = config.unwrap_or_else(|| self.default_config.clone());
        let started = Instant::now();

        let summary = self.repository.summarize(text, &config).await.inspect_err(|e| {
            warn!(error = %e, model = %config.model_name(), "Summarization failed");
        })?;

        if summary.is_blank() {
            warn!(model = %config.model_name(), "Model returned an empty summary");
            return Err(SummaryError::EmptyResult);
        }

        info!(
            summary_id = %summary.id(),
            model = %summary.model_name(),
            original_length = summary.original_length(),
            summary_length = ?summary.summary_length(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Summary generated"
        );

        Ok(summary)
    }

    /// Check whether the model endpoint is available. Never fails.
    pub async fn check_health(&self) -> bool {
        let healthy = self.repository.health_check().await;
        if !healthy {
            warn!("Model endpoint health check failed");
        }
        healthy
    }

    /// Cross-field business rules for a configuration.
    ///
    /// Field-level rules are enforced when the configuration is built, so
    /// every constructed configuration currently passes.
    pub fn validate_config(&self, _config: &SummaryConfig) -> bool {
        true
    }
}

/// Apply the input length rules to `text`
pub fn validate_text(text: &str) -> Result<(), SummaryError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(SummaryError::EmptyInput);
    }

    let trimmed_length = trimmed.chars().count();
    if trimmed_length < MIN_TEXT_LENGTH {
        return Err(SummaryError::TooShort { min: MIN_TEXT_LENGTH, actual: trimmed_length });
    }

    let raw_length = text.chars().count();
    if raw_length > MAX_TEXT_LENGTH {
        return Err(SummaryError::TooLong { max: MAX_TEXT_LENGTH, actual: raw_length });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::test_utils::InMemorySummaryRepository;
    use crate::domain::{Language, SummaryType};
    use chrono::Utc;
    use proptest::prelude::*;

    fn service_with(repository: InMemorySummaryRepository) -> (SummaryService, Arc<InMemorySummaryRepository>) {
        let repository = Arc::new(repository);
        (SummaryService::new(repository.clone()), repository)
    }

    #[tokio::test]
    async fn empty_text_is_rejected_before_length_checks() {
        let (service, repository) = service_with(InMemorySummaryRepository::returning("X"));

        for text in ["", "   ", "\n\t  "] {
            let err = service.summarize_text(text, None).await.unwrap_err();
            assert!(matches!(err, SummaryError::EmptyInput), "{text:?} gave {err:?}");
        }
        assert_eq!(repository.summarize_calls(), 0);
    }

    #[tokio::test]
    async fn short_text_is_rejected() {
        let (service, _) = service_with(InMemorySummaryRepository::returning("X"));

        let err = service.summarize_text("   short   ", None).await.unwrap_err();
        assert!(matches!(err, SummaryError::TooShort { min: 10, actual: 5 }));
    }

    #[tokio::test]
    async fn boundary_lengths_are_accepted() {
        let (service, repository) = service_with(InMemorySummaryRepository::returning("X"));

        assert!(service.summarize_text(&"a".repeat(10), None).await.is_ok());
        assert!(service.summarize_text(&"a".repeat(50_000), None).await.is_ok());
        assert_eq!(repository.summarize_calls(), 2);
    }

    #[tokio::test]
    async fn over_long_text_is_rejected() {
        let (service, repository) = service_with(InMemorySummaryRepository::returning("X"));

        let err = service.summarize_text(&"a".repeat(50_001), None).await.unwrap_err();
        assert!(matches!(err, SummaryError::TooLong { max: 50_000, actual: 50_001 }));
        assert_eq!(repository.summarize_calls(), 0);
    }

    #[tokio::test]
    async fn mocked_downstream_result_is_returned() {
        let (service, _) = service_with(InMemorySummaryRepository::returning("X"));
        let started = Utc::now();

        let summary = service.summarize_text("This text is long enough.", None).await.unwrap();

        assert_eq!(summary.summary_text(), "X");
        assert_eq!(summary.summary_length(), Some(1));
        assert!(!summary.id().as_str().is_empty());
        assert!(summary.created_at() >= started);
    }

    #[tokio::test]
    async fn default_config_is_used_when_none_given() {
        let custom =
            SummaryConfig::new(321, 0.9, "custom-model", SummaryType::Detailed, Language::English)
                .unwrap();
        let repository = Arc::new(InMemorySummaryRepository::returning("X"));
        let service = SummaryService::new(repository.clone()).with_default_config(custom.clone());

        let summary = service.summarize_text("This text is long enough.", None).await.unwrap();

        assert_eq!(summary.model_name(), "custom-model");
        assert_eq!(repository.last_config(), Some(custom));
    }

    #[tokio::test]
    async fn explicit_config_overrides_default() {
        let (service, repository) = service_with(InMemorySummaryRepository::returning("X"));
        let config = SummaryConfig::builder().max_tokens(64).build().unwrap();

        service.summarize_text("This text is long enough.", Some(config.clone())).await.unwrap();

        assert_eq!(repository.last_config(), Some(config));
    }

    #[tokio::test]
    async fn blank_result_is_rejected() {
        for reply in ["", "   \n"] {
            let (service, _) = service_with(InMemorySummaryRepository::returning(reply));
            let err = service.summarize_text("This text is long enough.", None).await.unwrap_err();
            assert!(matches!(err, SummaryError::EmptyResult));
        }
    }

    #[tokio::test]
    async fn repository_failure_propagates_unchanged() {
        let (service, _) = service_with(InMemorySummaryRepository::failing("connection refused"));

        let err = service.summarize_text("This text is long enough.", None).await.unwrap_err();
        assert!(matches!(err, SummaryError::SummarizationFailed { .. }));
        assert!(err.to_string().contains("connection refused"));
    }

    #[tokio::test]
    async fn health_check_reflects_repository() {
        let (healthy, _) = service_with(InMemorySummaryRepository::returning("X"));
        assert!(healthy.check_health().await);

        let (unhealthy, _) = service_with(InMemorySummaryRepository::returning("X").unhealthy());
        assert!(!unhealthy.check_health().await);
    }

    #[test]
    fn every_constructed_config_is_valid() {
        let (service, _) = service_with(InMemorySummaryRepository::returning("X"));
        assert!(service.validate_config(&SummaryConfig::default()));
    }

    proptest! {
        #[test]
        fn trimmed_text_below_minimum_is_too_short(
            core in "[a-z]{1,9}",
            padding in " {0,20}",
        ) {
            let text = format!("{padding}{core}{padding}");
            let rejected = matches!(validate_text(&text), Err(SummaryError::TooShort { .. }));
            prop_assert!(rejected);
        }

        #[test]
        fn whitespace_only_text_is_empty(text in "[ \t\n]{0,40}") {
            prop_assert!(matches!(validate_text(&text), Err(SummaryError::EmptyInput)));
        }

        #[test]
        fn text_above_maximum_is_too_long(extra in 1usize..500) {
            let text = "가".repeat(MAX_TEXT_LENGTH + extra);
            let rejected = matches!(validate_text(&text), Err(SummaryError::TooLong { .. }));
            prop_assert!(rejected);
        }

        #[test]
        fn text_within_bounds_is_accepted(length in MIN_TEXT_LENGTH..2_000usize) {
            prop_assert!(validate_text(&"x".repeat(length)).is_ok());
        }
    }
}
