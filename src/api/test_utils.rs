//! Test utilities for API handler testing
//!
//! - [`InMemorySummaryRepository`]: a scriptable [`SummaryRepository`] that
//!   never touches the network and records what it was asked
//! - [`TestApiStateBuilder`]: builds an [`ApiState`] around any repository
//!
//! The module is compiled into the library so that integration tests under
//! `tests/` can use it as well.
//!
//! ```ignore
//! use llmplan::api::test_utils::{InMemorySummaryRepository, TestApiStateBuilder};
//! let state = TestApiStateBuilder::new()
//!     .with_repository(InMemorySummaryRepository::returning("summary"))
//!     .build();
//! ```

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::api::routes::ApiState;
use crate::config::Settings;
use crate::domain::{Summary, SummaryConfig, SummaryRepository};
use crate::errors::SummaryError;

#[derive(Debug, Clone)]
enum Reply {
    Text(String),
    Failure(String),
}

/// In-memory stand-in for the model-backed repository
#[derive(Debug)]
pub struct InMemorySummaryRepository {
    reply: Reply,
    healthy: bool,
    panic_on_health_check: bool,
    summarize_calls: AtomicUsize,
    last_config: Mutex<Option<SummaryConfig>>,
}

impl InMemorySummaryRepository {
    fn with_reply(reply: Reply) -> Self {
        Self {
            reply,
            healthy: true,
            panic_on_health_check: false,
            summarize_calls: AtomicUsize::new(0),
            last_config: Mutex::new(None),
        }
    }

    /// Every summarization yields `summary_text`
    pub fn returning(summary_text: &str) -> Self {
        Self::with_reply(Reply::Text(summary_text.to_string()))
    }

    /// Every summarization fails with `message` as the downstream cause
    pub fn failing(message: &str) -> Self {
        Self::with_reply(Reply::Failure(message.to_string()))
    }

    /// Health checks report `false`
    pub fn unhealthy(mut self) -> Self {
        self.healthy = false;
        self
    }

    /// Health checks panic
    pub fn panicking_health_check(mut self) -> Self {
        self.panic_on_health_check = true;
        self
    }

    /// Number of `summarize` calls received
    pub fn summarize_calls(&self) -> usize {
        self.summarize_calls.load(Ordering::SeqCst)
    }

    /// Configuration of the most recent `summarize` call
    pub fn last_config(&self) -> Option<SummaryConfig> {
        self.last_config.lock().unwrap_or_else(|poisoned| poisoned.into_inner()).clone()
    }
}

#[async_trait]
impl SummaryRepository for InMemorySummaryRepository {
    async fn summarize(&self, text: &str, config: &SummaryConfig) -> Result<Summary, SummaryError> {
        self.summarize_calls.fetch_add(1, Ordering::SeqCst);
        *self.last_config.lock().unwrap_or_else(|poisoned| poisoned.into_inner()) =
            Some(config.clone());

        match &self.reply {
            Reply::Text(summary_text) => {
                Ok(Summary::new(text, summary_text.trim(), config.model_name()))
            }
            Reply::Failure(message) => Err(SummaryError::summarization_failed(message.clone())),
        }
    }

    async fn health_check(&self) -> bool {
        if self.panic_on_health_check {
            panic!("health probe exploded");
        }
        self.healthy
    }
}

/// Builder for creating test API state with configurable dependencies
#[derive(Default)]
pub struct TestApiStateBuilder {
    repository: Option<Arc<dyn SummaryRepository>>,
    settings: Option<Settings>,
}

impl TestApiStateBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use `repository` instead of the default one (which returns "summary")
    pub fn with_repository<R: SummaryRepository + 'static>(mut self, repository: R) -> Self {
        self.repository = Some(Arc::new(repository));
        self
    }

    /// Use a repository the caller keeps a handle to
    pub fn with_shared_repository(mut self, repository: Arc<dyn SummaryRepository>) -> Self {
        self.repository = Some(repository);
        self
    }

    pub fn with_settings(mut self, settings: Settings) -> Self {
        self.settings = Some(settings);
        self
    }

    /// Build the API state. Generation defaults come from the settings when
    /// they are valid and from [`SummaryConfig::default`] otherwise.
    pub fn build(self) -> ApiState {
        let settings = self.settings.unwrap_or_default();
        let repository = self
            .repository
            .unwrap_or_else(|| Arc::new(InMemorySummaryRepository::returning("summary")));
        let default_config = settings.default_summary_config().unwrap_or_default();

        ApiState::new(repository, default_config, Arc::new(settings))
    }
}
