//! # Structured Logging
//!
//! Subscriber setup and logging helpers built on the tracing ecosystem.
//!
//! In JSON mode every event is emitted as one JSON line with its span
//! context, which keeps `request_id` searchable in log aggregation.

use tracing::Subscriber;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::Settings;

/// Create a tracing span for request tracking.
///
/// ```rust,ignore
/// let span = request_span!("POST", "/api/v1/summary/", text_length = 512);
/// ```
#[macro_export]
macro_rules! request_span {
    ($method:expr, $path:expr) => {
        tracing::info_span!(
            "http_request",
            method = %$method,
            path = %$path,
            request_id = %uuid::Uuid::new_v4()
        )
    };
    ($method:expr, $path:expr, $($field:tt)*) => {
        tracing::info_span!(
            "http_request",
            method = %$method,
            path = %$path,
            request_id = %uuid::Uuid::new_v4(),
            $($field)*
        )
    };
}

/// Build the subscriber described by `settings` without installing it.
///
/// `DEBUG=true` forces the `debug` level; otherwise `RUST_LOG` wins over
/// `LOG_LEVEL`.
pub fn build_subscriber(settings: &Settings) -> impl Subscriber + Send + Sync + 'static {
    let filter = if settings.debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(settings.log_filter()))
    };

    let json_layer = settings.json_logging.then(|| fmt::layer().json().with_current_span(true));
    let text_layer = (!settings.json_logging).then(|| fmt::layer().with_target(true));

    tracing_subscriber::registry().with(filter).with(json_layer).with(text_layer)
}

/// Install the global tracing subscriber.
///
/// A subscriber that is already installed is left in place.
pub fn init_logging(settings: &Settings) {
    if let Err(e) = build_subscriber(settings).try_init() {
        tracing::debug!(error = %e, "Tracing subscriber already installed");
    }
}

/// Log configuration at startup. The API key is never logged.
pub fn log_config_info(settings: &Settings) {
    tracing::info!(
        app_name = %settings.app_name,
        version = %settings.app_version,
        server_address = %settings.bind_address(),
        api_prefix = %settings.api_prefix(),
        llm_base_url = %settings.lmstudio_base_url,
        llm_timeout_seconds = settings.lmstudio_timeout,
        llm_max_retries = settings.lmstudio_max_retries,
        default_model = %settings.default_model_name,
        default_summary_type = %settings.default_summary_type,
        default_language = %settings.default_language,
        metrics_enabled = settings.enable_metrics,
        json_logging = settings.json_logging,
        "llmplan configuration"
    );
}
