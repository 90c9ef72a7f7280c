//! Application Error Types
//!
//! Centralized error handling with Axum integration. Every error renders as
//! the uniform response envelope, so no failure escapes the API boundary in
//! any other shape.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::application::dto::response::ApiResponse;
use crate::shared::messages;

/// Application error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message, error) = match self {
            AppError::NotFound(detail) => (StatusCode::NOT_FOUND, messages::NOT_FOUND, detail),
            AppError::BadRequest(detail) => {
                (StatusCode::BAD_REQUEST, messages::BAD_REQUEST, detail)
            }
            AppError::Validation(detail) => {
                (StatusCode::BAD_REQUEST, messages::VALIDATION_ERROR, detail)
            }
            AppError::Internal(detail) => {
                tracing::error!("Internal error: {}", detail);
                (StatusCode::INTERNAL_SERVER_ERROR, messages::SERVER_ERROR, detail)
            }
        };

        let body = ApiResponse::<()>::error(error, message);
        (status, Json(body)).into_response()
    }
}
