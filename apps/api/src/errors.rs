#![allow(dead_code)]

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// The generation path collapses to a single normalized error per request:
/// nothing is retried automatically and no partial-success state leaks out.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    /// A required credential or setting is missing at the server boundary.
    /// Deliberately distinct from a provider failure so operators can tell
    /// a broken deploy from a broken model.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The external job reported failed/canceled, or the HTTP exchange with
    /// the provider itself errored or returned a non-2xx status.
    #[error("Generation failed: {0}")]
    Remote(String),

    /// Terminal `succeeded` status but no recognizable URL shape in the
    /// output. A remote-failure variant with its own code for diagnosis.
    #[error("Could not extract an image URL from the provider output: {0}")]
    Extraction(String),

    /// Poll attempts exceeded the configured bound without a terminal state.
    #[error("Generation timed out after {attempts} poll attempts")]
    Timeout { attempts: u32 },

    /// The per-day usage cap was hit before submission.
    #[error("Daily generation limit of {limit} reached")]
    LimitReached { limit: u32 },

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::Configuration(msg) => {
                tracing::error!("Configuration error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "CONFIGURATION_ERROR",
                    msg.clone(),
                )
            }
            AppError::Remote(msg) => {
                tracing::error!("Remote generation failure: {msg}");
                (StatusCode::BAD_GATEWAY, "REMOTE_FAILURE", msg.clone())
            }
            AppError::Extraction(msg) => {
                tracing::error!("Output extraction failure: {msg}");
                (StatusCode::BAD_GATEWAY, "EXTRACTION_ERROR", msg.clone())
            }
            AppError::Timeout { attempts } => (
                StatusCode::GATEWAY_TIMEOUT,
                "TIMEOUT",
                format!("Generation timed out after {attempts} poll attempts"),
            ),
            AppError::LimitReached { limit } => (
                StatusCode::TOO_MANY_REQUESTS,
                "LIMIT_REACHED",
                format!("Daily generation limit of {limit} reached"),
            ),
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
