//! Application error type mapping to HTTP status codes and body format.
//!
//! All request failures funnel through [`AppError`] and are converted to a
//! response in exactly one place. Validation failures keep the
//! `{"response": ...}` body shape of a successful chat reply; everything
//! else uses the `{"error": ...}` envelope.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use tracing::{debug, error};

use superior_types::error::ChatError;

/// Application-level error that maps to HTTP responses.
#[derive(Debug)]
pub enum AppError {
    /// Chat pipeline errors: validation, storage, completion.
    Chat(ChatError),
    /// Failures outside the typed pipeline, e.g. an unreadable request body.
    Internal(String),
}

impl From<ChatError> for AppError {
    fn from(e: ChatError) -> Self {
        AppError::Chat(e)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            AppError::Chat(ChatError::InvalidInput(msg)) => {
                debug!(reason = %msg, "rejected chat request");
                (StatusCode::BAD_REQUEST, json!({ "response": msg }))
            }
            AppError::Chat(e) => {
                error!(error = %e, "chat request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, internal_error(e))
            }
            AppError::Internal(msg) => {
                error!(error = %msg, "request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, internal_error(msg))
            }
        };

        (
            status,
            [(axum::http::header::CONTENT_TYPE, "application/json")],
            body.to_string(),
        )
            .into_response()
    }
}

/// The generic 500 body, cause included.
fn internal_error(cause: impl std::fmt::Display) -> serde_json::Value {
    json!({ "error": format!("An internal error occurred: {cause}") })
}
