//! # Metrics Collection
//!
//! Prometheus metrics for the HTTP surface and the outbound model calls.
//! Recording is a no-op until [`init_metrics`] has installed the exporter.

use std::net::SocketAddr;
use std::sync::Arc;

use ::tracing::info;
use metrics::{counter, describe_counter, describe_histogram, histogram, Unit};
use metrics_exporter_prometheus::PrometheusBuilder;
use tokio::sync::RwLock;

use crate::config::Settings;
use crate::errors::{Error, Result};

/// Outcomes recorded for model calls
pub const LLM_OUTCOMES: [&str; 2] = ["success", "error"];

/// Metrics recorder that tracks application metrics
#[derive(Debug, Clone, Default)]
pub struct MetricsRecorder;

impl MetricsRecorder {
    /// Create a new metrics recorder instance
    pub fn new() -> Self {
        Self
    }

    /// Record an HTTP request
    pub fn record_http_request(&self, method: &str, path: &str, status: u16, duration: f64) {
        counter!(
            "http_requests_total",
            "method" => method.to_string(),
            "path" => path.to_string(),
            "status" => status.to_string()
        )
        .increment(1);

        histogram!(
            "http_request_duration_seconds",
            "method" => method.to_string(),
            "path" => path.to_string()
        )
        .record(duration);
    }

    /// Record one model call (after retries) and its wall-clock duration
    pub fn record_llm_request(&self, model: &str, outcome: &str, duration: f64) {
        let labels = [("model", model.to_string()), ("outcome", outcome.to_string())];
        counter!("llm_requests_total", &labels).increment(1);

        let duration_labels = [("model", model.to_string())];
        histogram!("llm_request_duration_seconds", &duration_labels).record(duration);
    }

    /// Register metric descriptions so exports appear before the first event
    pub fn register_metrics(&self, default_model: &str) {
        describe_counter!("http_requests_total", Unit::Count, "HTTP requests by route and status");
        describe_histogram!(
            "http_request_duration_seconds",
            Unit::Seconds,
            "HTTP request latency"
        );
        describe_counter!("llm_requests_total", Unit::Count, "Model calls grouped by outcome");
        describe_histogram!(
            "llm_request_duration_seconds",
            Unit::Seconds,
            "Model call latency including retries"
        );

        for outcome in LLM_OUTCOMES {
            counter!(
                "llm_requests_total",
                "model" => default_model.to_string(),
                "outcome" => outcome
            )
            .absolute(0);
        }
    }
}

/// Global metrics recorder instance
static METRICS: once_cell::sync::Lazy<Arc<RwLock<Option<MetricsRecorder>>>> =
    once_cell::sync::Lazy::new(|| Arc::new(RwLock::new(None)));

/// Initialize metrics collection and the Prometheus exporter
pub async fn init_metrics(settings: &Settings) -> Result<()> {
    let Some(metrics_addr) = settings.metrics_bind_address() else {
        return Ok(());
    };

    let socket_addr: SocketAddr = metrics_addr.parse().map_err(|e| {
        Error::config(format!("Invalid metrics bind address '{}': {}", metrics_addr, e))
    })?;

    PrometheusBuilder::new()
        .with_http_listener(socket_addr)
        .add_global_label("service", &settings.app_name)
        .install()
        .map_err(|e| Error::config(format!("Failed to initialize metrics exporter: {}", e)))?;

    let recorder = MetricsRecorder::new();
    recorder.register_metrics(&settings.default_model_name);
    *METRICS.write().await = Some(recorder);

    info!(metrics_addr = %metrics_addr, service_name = %settings.app_name, "Metrics collection initialized");

    Ok(())
}

/// Get the global metrics recorder
pub async fn get_metrics() -> Option<MetricsRecorder> {
    METRICS.read().await.clone()
}

/// Record an HTTP request using the global metrics recorder
pub async fn record_http_request(method: &str, path: &str, status: u16, duration: f64) {
    if let Some(metrics) = get_metrics().await {
        metrics.record_http_request(method, path, status, duration);
    }
}

/// Record a model call using the global metrics recorder
pub async fn record_llm_request(model: &str, outcome: &str, duration: f64) {
    if let Some(metrics) = get_metrics().await {
        metrics.record_llm_request(model, outcome, duration);
    }
}
