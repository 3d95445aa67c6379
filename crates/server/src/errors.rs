use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;
use tracing::error;

use service::errors::ServiceError;

/// HTTP-facing error. Addressed-id misses carry a single `error` message;
/// validation and signup reference failures carry an `errors` array.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    NotFound(String),
    #[error("{0:?}")]
    Validation(Vec<String>),
    #[error("{0}")]
    MissingReference(String),
    #[error("internal error: {0}")]
    Internal(String),
}

/// A body axum could not deserialize is a write validation failure: 400
/// with the `errors` array, never axum's plain-text default.
impl From<JsonRejection> for ApiError {
    fn from(rej: JsonRejection) -> Self {
        Self::Validation(vec![rej.body_text()])
    }
}

impl From<ServiceError> for ApiError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::Validation(msg) => Self::Validation(vec![msg]),
            ServiceError::NotFound(msg) => Self::NotFound(msg),
            ServiceError::MissingReference(msg) => Self::MissingReference(msg),
            ServiceError::Db(msg) => Self::Internal(msg),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::NotFound(msg) => {
                (StatusCode::NOT_FOUND, Json(serde_json::json!({ "error": msg }))).into_response()
            }
            ApiError::Validation(msgs) => {
                (StatusCode::BAD_REQUEST, Json(serde_json::json!({ "errors": msgs }))).into_response()
            }
            // A signup naming an absent camper/activity is 404, but keeps
            // the `errors` array shape of a write failure.
            ApiError::MissingReference(msg) => {
                (StatusCode::NOT_FOUND, Json(serde_json::json!({ "errors": [msg] }))).into_response()
            }
            ApiError::Internal(msg) => {
                error!(error = %msg, "request failed on storage");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(serde_json::json!({ "error": "internal server error" })),
                )
                    .into_response()
            }
        }
    }
}
