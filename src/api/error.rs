use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::core::GridwireError;

/// API-specific errors with HTTP status code mapping.
#[derive(Debug)]
pub enum ApiError {
    InvalidRequest(String),
    Internal(String),
}

/// Error body for non-envelope failures (bad payloads, server bugs).
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

impl From<GridwireError> for ApiError {
    fn from(err: GridwireError) -> Self {
        match &err {
            GridwireError::ParseError(msg) => ApiError::InvalidRequest(msg.clone()),
            _ => ApiError::Internal(err.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            ApiError::InvalidRequest(msg) => (StatusCode::BAD_REQUEST, "INVALID_REQUEST", msg),
            ApiError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR", msg),
        };

        let body = ErrorResponse {
            error: message,
            code: code.to_string(),
        };

        (status, Json(body)).into_response()
    }
}
