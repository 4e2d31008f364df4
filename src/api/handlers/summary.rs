//! Text summarization endpoint

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use tracing::instrument;
use validator::Validate;

use crate::api::error::ApiError;
use crate::api::routes::ApiState;
use crate::internal_api::{ErrorResponse, SummaryRequest, SummaryResponse};

#[utoipa::path(
    post,
    path = "/api/v1/summary/",
    request_body = SummaryRequest,
    responses(
        (status = 200, description = "Summary generated", body = SummaryResponse),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 500, description = "Model call failed", body = ErrorResponse)
    ),
    tag = "summary"
)]
#[instrument(skip(state, payload))]
pub async fn summarize_handler(
    State(state): State<ApiState>,
    payload: Result<Json<SummaryRequest>, JsonRejection>,
) -> Result<Json<SummaryResponse>, ApiError> {
    let Json(request) = payload?;
    request.validate()?;

    let response = state.summarize.execute(request).await?;
    Ok(Json(response))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::test_utils::{InMemorySummaryRepository, TestApiStateBuilder};
    use axum::http::StatusCode;
    use axum::response::IntoResponse;

    #[tokio::test]
    async fn summarize_returns_response() {
        let state = TestApiStateBuilder::new()
            .with_repository(InMemorySummaryRepository::returning("short"))
            .build();

        let Json(response) =
            summarize_handler(State(state), Ok(Json(SummaryRequest::new("a long enough text"))))
                .await
                .unwrap();

        assert_eq!(response.summary_text, "short");
        assert_eq!(response.original_length, 18);
    }

    #[tokio::test]
    async fn invalid_request_is_rejected_before_the_use_case() {
        let repository = std::sync::Arc::new(InMemorySummaryRepository::returning("X"));
        let state = TestApiStateBuilder::new().with_shared_repository(repository.clone()).build();

        let err = summarize_handler(State(state), Ok(Json(SummaryRequest::new("tiny"))))
            .await
            .unwrap_err();

        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
        assert_eq!(repository.summarize_calls(), 0);
    }
}
