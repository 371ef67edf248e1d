//! OpenAI Chat Completions API types.
//!
//! These are OpenAI-specific request/response structures used for HTTP
//! communication with the Chat Completions endpoint. They are NOT the
//! provider-agnostic completion types from superior-types.

use serde::{Deserialize, Serialize};

/// Request body for the Chat Completions endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatCompletionMessage>,
    pub max_tokens: u32,
    pub temperature: f64,
}

/// A single message in a Chat Completions request.
#[derive(Debug, Clone, Serialize)]
pub struct ChatCompletionMessage {
    pub role: String,
    pub content: String,
}

/// Response body for a non-streaming chat completion.
///
/// Lenient everywhere it can be: `usage` is sometimes omitted, `content`
/// can be null, and unknown fields (id, object, created, ...) are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatCompletionResponse {
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub choices: Vec<ChatCompletionChoice>,
    #[serde(default)]
    pub usage: Option<ChatCompletionUsage>,
}

/// One generated choice; only the first is ever used.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatCompletionChoice {
    pub message: ChatCompletionChoiceMessage,
}

/// The assistant message inside a choice.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatCompletionChoiceMessage {
    #[serde(default)]
    pub content: Option<String>,
}

/// Token accounting block.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChatCompletionUsage {
    #[serde(default)]
    pub prompt_tokens: u32,
    #[serde(default)]
    pub completion_tokens: u32,
}
