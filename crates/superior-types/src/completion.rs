//! Completion service result and error types.
//!
//! These are the provider-agnostic shapes the rest of the system sees.
//! The concrete wire structures for a given completion API live in
//! `superior-infra`, next to the HTTP client that speaks them.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A normalized completion result.
///
/// `content` is guaranteed non-blank by the client; an empty generation
/// surfaces as [`CompletionError::EmptyCompletion`] instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Completion {
    pub content: String,
    pub model: String,
    pub usage: CompletionUsage,
}

/// Token usage reported by the completion service.
///
/// Logged for visibility, never persisted. Defaults to zeros when the
/// service omits the usage block.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompletionUsage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
}

/// Errors from the completion service.
///
/// Every variant is fatal for the request: nothing is retried and nothing
/// is persisted once the completion call has failed.
#[derive(Debug, Error)]
pub enum CompletionError {
    #[error("completion request failed: {message}")]
    Http { message: String },

    #[error("completion service returned HTTP {status}: {message}")]
    Api { status: u16, message: String },

    #[error("deserialization error: {0}")]
    Deserialization(String),

    #[error("completion contained no text")]
    EmptyCompletion,
}
