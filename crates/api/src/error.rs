//! API error types with HTTP response mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use submissions::{SubmissionError, SubmissionKind};

const INVALID_FORM_DATA: &str = "Invalid form data";

/// API-level error type that maps to HTTP responses.
#[derive(Debug)]
pub enum ApiError {
    /// The request body could not be read as a form payload.
    BadRequest(String),
    /// The submission was rejected or could not be completed.
    Submission(SubmissionError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::BadRequest(detail) => {
                tracing::debug!(%detail, "unreadable form payload");
                (
                    StatusCode::BAD_REQUEST,
                    serde_json::json!({ "error": INVALID_FORM_DATA }),
                )
            }
            ApiError::Submission(err) => submission_error_to_response(err),
        };

        (status, axum::Json(body)).into_response()
    }
}

fn submission_error_to_response(err: SubmissionError) -> (StatusCode, serde_json::Value) {
    match err {
        SubmissionError::Validation(err) => (
            StatusCode::BAD_REQUEST,
            serde_json::json!({ "error": INVALID_FORM_DATA, "fields": err.fields }),
        ),
        SubmissionError::Failed { kind, .. } => {
            let message = match kind {
                SubmissionKind::DemoRequest => "Failed to book demo",
                SubmissionKind::Waitlist => "Failed to join waitlist",
            };
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                serde_json::json!({ "error": message }),
            )
        }
        err @ SubmissionError::InvalidTransition { .. } => {
            tracing::error!(error = %err, "internal server error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                serde_json::json!({ "error": "Internal server error" }),
            )
        }
    }
}

impl From<SubmissionError> for ApiError {
    fn from(err: SubmissionError) -> Self {
        ApiError::Submission(err)
    }
}
