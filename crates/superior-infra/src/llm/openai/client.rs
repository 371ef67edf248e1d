//! OpenAiChatClient -- concrete [`CompletionClient`] implementation for the
//! OpenAI Chat Completions API.
//!
//! Sends the composed prompt as a single user message with fixed generation
//! parameters (model, output bound, temperature). No streaming, no retries:
//! a failed call fails the request.
//!
//! The API key is wrapped in [`secrecy::SecretString`] and is never logged
//! or included in `Debug` output.

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use tracing::debug;

use superior_core::completion::client::CompletionClient;
use superior_types::completion::{Completion, CompletionError, CompletionUsage};

use super::types::{ChatCompletionMessage, ChatCompletionRequest, ChatCompletionResponse};

/// OpenAI Chat Completions client.
///
/// # API Key Security
///
/// The API key is stored as a [`SecretString`] and is only exposed when
/// constructing the authorization header. It never appears in Debug
/// output, Display output, or tracing logs.
pub struct OpenAiChatClient {
    client: reqwest::Client,
    api_key: SecretString,
    base_url: String,
    model: String,
    max_tokens: u32,
    temperature: f64,
}

impl OpenAiChatClient {
    /// Model identifier used for every request.
    pub const DEFAULT_MODEL: &'static str = "gpt-4";

    /// Output-length bound per reply, in tokens.
    pub const DEFAULT_MAX_TOKENS: u32 = 150;

    /// Fixed sampling temperature.
    pub const DEFAULT_TEMPERATURE: f64 = 0.7;

    /// Create a new client with the default generation parameters.
    pub fn new(api_key: SecretString) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("failed to create reqwest client");

        Self {
            client,
            api_key,
            base_url: "https://api.openai.com".to_string(),
            model: Self::DEFAULT_MODEL.to_string(),
            max_tokens: Self::DEFAULT_MAX_TOKENS,
            temperature: Self::DEFAULT_TEMPERATURE,
        }
    }

    /// The model this client requests.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Override the base URL (useful for testing or proxies).
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }

    /// Override the model identifier.
    pub fn with_model(mut self, model: String) -> Self {
        self.model = model;
        self
    }

    /// Build the full API URL for a given path.
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// The whole composed prompt travels as one user message.
    fn to_wire_request(&self, prompt: &str) -> ChatCompletionRequest {
        ChatCompletionRequest {
            model: self.model.clone(),
            messages: vec![ChatCompletionMessage {
                role: "user".to_string(),
                content: prompt.to_string(),
            }],
            max_tokens: self.max_tokens,
            temperature: self.temperature,
        }
    }
}

impl CompletionClient for OpenAiChatClient {
    fn name(&self) -> &str {
        "openai"
    }

    async fn complete(&self, prompt: &str) -> Result<Completion, CompletionError> {
        let body = self.to_wire_request(prompt);
        let url = self.url("/v1/chat/completions");
        debug!(model = %body.model, prompt_chars = prompt.len(), "sending completion request");

        let response = self
            .client
            .post(&url)
            .bearer_auth(self.api_key.expose_secret())
            .header("content-type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| CompletionError::Http {
                message: format!("HTTP request failed: {e}"),
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            return Err(CompletionError::Api {
                status: status.as_u16(),
                message: error_body,
            });
        }

        let wire: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| CompletionError::Deserialization(format!("failed to parse response: {e}")))?;

        extract_completion(wire, &self.model)
    }
}

/// Pull the reply text and usage out of a wire response.
///
/// No choices, a null content, or whitespace-only text all count as an
/// empty completion; the service echoing no model falls back to the one
/// we requested.
fn extract_completion(
    response: ChatCompletionResponse,
    fallback_model: &str,
) -> Result<Completion, CompletionError> {
    let choice = response
        .choices
        .into_iter()
        .next()
        .ok_or(CompletionError::EmptyCompletion)?;

    let content = choice.message.content.unwrap_or_default();
    if content.trim().is_empty() {
        return Err(CompletionError::EmptyCompletion);
    }

    let usage = response
        .usage
        .map(|u| CompletionUsage {
            prompt_tokens: u.prompt_tokens,
            completion_tokens: u.completion_tokens,
        })
        .unwrap_or_default();

    Ok(Completion {
        content,
        model: response.model.unwrap_or_else(|| fallback_model.to_string()),
        usage,
    })
}
