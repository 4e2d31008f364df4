//! # Observability Infrastructure
//!
//! Structured logging, HTTP request tracing, and Prometheus metrics for
//! llmplan.

pub mod http_tracing;
pub mod logging;
pub mod metrics;

pub use http_tracing::trace_http_requests;
pub use logging::{init_logging, log_config_info};
pub use metrics::{init_metrics, MetricsRecorder};

use crate::config::Settings;
use crate::errors::Result;
use ::tracing::info;

/// Initialize logging and, when enabled, metrics
pub async fn init_observability(settings: &Settings) -> Result<()> {
    init_logging(settings);

    if settings.enable_metrics {
        init_metrics(settings).await?;
    }

    info!(
        service_name = %settings.app_name,
        log_level = %settings.log_filter(),
        metrics_enabled = settings.enable_metrics,
        json_logging = settings.json_logging,
        "Observability initialized successfully"
    );

    Ok(())
}

