//! Chat service orchestrating the request pipeline.
//!
//! One linear path per request: validate, load history, build the prompt,
//! call the completion service, persist the exchange. The service is
//! generic over its two ports so the API can inject the SQLite repository
//! and HTTP client while tests inject fakes.

use tracing::{debug, info};

use superior_types::chat::{ChatRequest, ConversationTurn, NewConversationTurn};
use superior_types::error::ChatError;

use crate::chat::repository::{HistoryRepository, context_window};
use crate::completion::client::CompletionClient;
use crate::persona::persona_for;
use crate::prompt::{LEAD_QUALIFICATION_PROMPT, PromptBuilder};
use crate::validate::validate_request;

/// Runs the chat pipeline over injected ports.
///
/// Generic over `HistoryRepository` and `CompletionClient` to maintain
/// clean architecture (superior-core never depends on superior-infra).
pub struct ChatService<H: HistoryRepository, C: CompletionClient> {
    history: H,
    completions: C,
}

impl<H: HistoryRepository, C: CompletionClient> ChatService<H, C> {
    /// Create a new chat service with the given ports.
    pub fn new(history: H, completions: C) -> Self {
        Self {
            history,
            completions,
        }
    }

    /// Access the history repository.
    pub fn history(&self) -> &H {
        &self.history
    }

    /// Access the completion client.
    pub fn completions(&self) -> &C {
        &self.completions
    }

    /// Handle one chat request end to end.
    ///
    /// Validation failures short-circuit before either port is touched.
    /// A completion failure leaves nothing persisted; an append failure
    /// discards the completed reply. On success the stored turn comes
    /// back, its `response` being the text for the 200 body.
    pub async fn handle_message(
        &self,
        request: ChatRequest,
    ) -> Result<ConversationTurn, ChatError> {
        let valid = validate_request(request)?;

        // The read and the append below are not atomic: two concurrent
        // requests for the same email can each load a window missing the
        // other's turn. With a five-turn window the skew heals on the next
        // request, so the race is accepted rather than serialized.
        let history = self.history.fetch_recent(&valid.user_email).await?;
        let window = context_window(history);

        let persona = persona_for(&valid.business_type);
        let prompt =
            PromptBuilder::build(persona, LEAD_QUALIFICATION_PROMPT, &window, &valid.message);
        debug!(
            user_email = %valid.user_email,
            turns_in_context = window.len(),
            "prompt built"
        );

        let completion = self.completions.complete(&prompt).await?;
        debug!(
            client = self.completions.name(),
            model = %completion.model,
            prompt_tokens = completion.usage.prompt_tokens,
            completion_tokens = completion.usage.completion_tokens,
            "completion received"
        );

        let turn = self
            .history
            .append(NewConversationTurn {
                user_email: valid.user_email,
                message: valid.message,
                response: completion.content,
                business_type: valid.business_type,
            })
            .await?;

        info!(business_type = %turn.business_type, "chat exchange stored");
        Ok(turn)
    }
}
