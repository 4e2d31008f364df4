use std::any::Any;

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::{error, warn};

use crate::errors::{types::describe_validation_errors, SummaryError};
use crate::internal_api::ErrorResponse;

pub const VALIDATION_ERROR: &str = "VALIDATION_ERROR";
pub const INTERNAL_ERROR: &str = "INTERNAL_ERROR";

/// Every failure an HTTP handler can return
#[derive(Debug)]
pub enum ApiError {
    /// Domain failure from the summarization pipeline
    Summary(SummaryError),
    /// Request body could not be parsed or failed field validation
    BadRequest { error: String, details: Option<String> },
    /// Anything unanticipated
    Internal(String),
}

impl ApiError {
    pub fn bad_request<S: Into<String>>(error: S, details: Option<String>) -> Self {
        ApiError::BadRequest { error: error.into(), details }
    }

    pub fn internal<S: Into<String>>(msg: S) -> Self {
        ApiError::Internal(msg.into())
    }

    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Summary(err) => StatusCode::from_u16(err.status_code())
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            ApiError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            ApiError::Summary(err) => err.error_code(),
            ApiError::BadRequest { .. } => VALIDATION_ERROR,
            ApiError::Internal(_) => INTERNAL_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let error_code = self.error_code();

        let body = match self {
            ApiError::Summary(err) => ErrorResponse::new(err.to_string(), error_code),
            ApiError::BadRequest { error, details } => {
                let body = ErrorResponse::new(error, error_code);
                match details {
                    Some(details) => body.with_details(details),
                    None => body,
                }
            }
            ApiError::Internal(msg) => {
                ErrorResponse::new("Internal server error", error_code).with_details(msg)
            }
        };

        if status.is_server_error() {
            error!(status = status.as_u16(), error_code, error = %body.error, "Request failed");
        } else {
            warn!(status = status.as_u16(), error_code, error = %body.error, "Request rejected");
        }

        (status, Json(body)).into_response()
    }
}

impl From<SummaryError> for ApiError {
    fn from(err: SummaryError) -> Self {
        ApiError::Summary(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::bad_request("Invalid request body", Some(rejection.body_text()))
    }
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(errors: validator::ValidationErrors) -> Self {
        ApiError::bad_request(
            "Request validation failed",
            Some(describe_validation_errors(&errors)),
        )
    }
}

/// Response for a handler panic caught by `CatchPanicLayer`
pub fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let details = if let Some(message) = panic.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = panic.downcast_ref::<String>() {
        message.clone()
    } else {
        "handler panicked".to_string()
    };

    ApiError::internal(details).into_response()
}
