//! Error types shared across the Superior Chatbot crates.

use thiserror::Error;

use crate::completion::CompletionError;

/// Errors from history store operations (used by trait definitions in superior-core).
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("storage connection error: {0}")]
    Connection(String),

    #[error("query error: {0}")]
    Query(String),
}

/// Errors from the chat pipeline, mapped to HTTP exactly once at the API boundary.
///
/// `InvalidInput` carries the exact user-facing message for the 400 body.
/// Everything else maps to a 500 with the cause embedded.
#[derive(Debug, Error)]
pub enum ChatError {
    #[error("{0}")]
    InvalidInput(String),

    #[error("storage error: {0}")]
    Storage(#[from] RepositoryError),

    #[error("completion error: {0}")]
    Completion(#[from] CompletionError),
}
