//! CompletionClient trait definition.

use superior_types::completion::{Completion, CompletionError};

/// Trait for completion service backends.
///
/// The client owns the fixed generation parameters (model identifier,
/// output-length bound, temperature); callers send only the prompt text.
/// Uses native async fn in traits (RPITIT, Rust 2024 edition).
///
/// Implementations live in superior-infra (e.g., `OpenAiChatClient`).
pub trait CompletionClient: Send + Sync {
    /// Human-readable client name (e.g., "openai").
    fn name(&self) -> &str;

    /// Send a prompt and receive the generated reply.
    fn complete(
        &self,
        prompt: &str,
    ) -> impl std::future::Future<Output = Result<Completion, CompletionError>> + Send;
}
