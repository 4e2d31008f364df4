use std::sync::Arc;

use axum::{
    http::{HeaderValue, Method},
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::{
    catch_panic::CatchPanicLayer,
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
};
use tracing::warn;

use crate::config::Settings;
use crate::domain::{SummaryConfig, SummaryRepository};
use crate::internal_api::{HealthCheckUseCase, SummarizeTextUseCase};
use crate::observability::trace_http_requests;
use crate::services::SummaryService;

use super::{
    docs,
    error::panic_response,
    handlers::{app_health_handler, summarize_handler, summary_health_handler},
};

/// Shared state handed to every handler
#[derive(Clone)]
pub struct ApiState {
    pub summarize: Arc<SummarizeTextUseCase>,
    pub health: Arc<HealthCheckUseCase>,
    pub settings: Arc<Settings>,
}

impl ApiState {
    /// Wire the service and use cases around `repository`
    pub fn new(
        repository: Arc<dyn SummaryRepository>,
        default_config: SummaryConfig,
        settings: Arc<Settings>,
    ) -> Self {
        let service = Arc::new(SummaryService::new(repository).with_default_config(default_config));

        Self {
            summarize: Arc::new(SummarizeTextUseCase::new(service.clone())),
            health: Arc::new(HealthCheckUseCase::new(service, settings.app_name.clone())),
            settings,
        }
    }
}

pub fn build_router(state: ApiState) -> Router {
    let prefix = state.settings.api_prefix().to_string();
    let cors = cors_layer(&state.settings);

    let api = Router::new()
        .route("/summary/", post(summarize_handler))
        .route("/summary", post(summarize_handler))
        .route("/summary/health", get(summary_health_handler))
        .route("/health", get(app_health_handler))
        .with_state(state);

    let app = if prefix == "/" { api } else { Router::new().nest(&prefix, api) };

    app.merge(docs::docs_router())
        .layer(middleware::from_fn(trace_http_requests))
        .layer(CompressionLayer::new())
        .layer(cors)
        .layer(CatchPanicLayer::custom(panic_response))
}

fn cors_layer(settings: &Settings) -> CorsLayer {
    let layer = CorsLayer::new().allow_methods([Method::GET, Method::POST]).allow_headers(Any);

    if settings.cors_allows_any_origin() {
        return layer.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = settings
        .cors_allow_origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(e) => {
                warn!(origin = %origin, error = %e, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    layer.allow_origin(origins)
}
