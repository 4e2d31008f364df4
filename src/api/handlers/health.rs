//! Health check endpoints for monitoring and readiness probes

use axum::{extract::State, http::StatusCode, Json};

use crate::api::routes::ApiState;
use crate::internal_api::{AppHealthResponse, HealthCheckResponse};

pub const APP_AUTHOR: &str = "eun2ce";
pub const APP_START_DATE: &str = "2025-08-11";

/// Application health check
///
/// Always 200 while the server is up. Does not touch the model endpoint, so
/// it is suitable for liveness probes.
#[utoipa::path(
    get,
    path = "/api/v1/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is running", body = AppHealthResponse)
    )
)]
pub async fn app_health_handler(State(state): State<ApiState>) -> Json<AppHealthResponse> {
    Json(AppHealthResponse {
        status: "healthy".to_string(),
        app_name: state.settings.app_name.clone(),
        version: state.settings.app_version.clone(),
        author: APP_AUTHOR.to_string(),
        start_date: APP_START_DATE.to_string(),
    })
}

/// Summary service health check
///
/// Sends a minimal prompt to the model endpoint. Returns 503 when the
/// endpoint does not answer, which makes it a readiness probe.
#[utoipa::path(
    get,
    path = "/api/v1/summary/health",
    tag = "health",
    responses(
        (status = 200, description = "Model endpoint is responding", body = HealthCheckResponse),
        (status = 503, description = "Model endpoint is not responding", body = HealthCheckResponse)
    )
)]
pub async fn summary_health_handler(
    State(state): State<ApiState>,
) -> (StatusCode, Json<HealthCheckResponse>) {
    let response = state.health.execute().await;
    let status = if response.status.is_healthy() {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (status, Json(response))
}
