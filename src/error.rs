// src/error.rs
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::message::ErrorResponse;
use crate::services::completion::CompletionError;

pub const MISSING_FIELDS_MSG: &str =
    "Either 'message' or both 'city' and 'num_days' are required";
pub const METHOD_NOT_ALLOWED_MSG: &str = "Method not allowed";
pub const INVALID_BODY_MSG: &str = "Invalid JSON in request body";

/// User-safe texts for the three upstream failure classes. The raw error
/// never leaves the server.
pub const CONFIGURATION_MSG: &str = "There's an issue with our API configuration.";
pub const QUOTA_MSG: &str = "We've reached our API limit. Please try again later.";
pub const CONNECTIVITY_MSG: &str = "I'm having trouble connecting right now. Please try again later.";

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    BadRequest(String),
    #[error("Method not allowed")]
    MethodNotAllowed,
    #[error(transparent)]
    Completion(#[from] CompletionError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::MethodNotAllowed => (
                StatusCode::METHOD_NOT_ALLOWED,
                METHOD_NOT_ALLOWED_MSG.to_string(),
            ),
            AppError::Completion(err) => {
                tracing::error!(error = %err, "chat completion failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    classify_completion_error(&err).to_string(),
                )
            }
        };
        (status, Json(ErrorResponse { error: message })).into_response()
    }
}

/// Pick the user-safe reply for an upstream failure. Typed variants are
/// matched first; everything else falls back to substring matching on the
/// error text, which tracks the upstream wording and may drift.
pub fn classify_completion_error(err: &CompletionError) -> &'static str {
    match err {
        CompletionError::MissingKey | CompletionError::Unauthorized { .. } => CONFIGURATION_MSG,
        CompletionError::RateLimited { .. } => QUOTA_MSG,
        other => {
            let text = other.to_string().to_lowercase();
            if text.contains("key") {
                CONFIGURATION_MSG
            } else if text.contains("quota") {
                QUOTA_MSG
            } else {
                CONNECTIVITY_MSG
            }
        }
    }
}
