//! Prompt assembly for the chat pipeline.
//!
//! The whole conversation goes to the completion service as one flat text
//! block; there is no separate system message. The builder is pure and
//! deterministic so it can be tested without any service in the loop.

use superior_types::chat::ConversationTurn;

/// Fixed lead-qualification instruction block, included in every prompt.
pub const LEAD_QUALIFICATION_PROMPT: &str = "\
You are an advanced AI chatbot that helps businesses qualify leads.
When a user asks about services, do the following:
- Ask about their budget
- Ask what services they need
- Ask for their preferred timeline
- If they answer all, confirm their details and say a representative will contact them.";

/// Builds the completion prompt from persona, instructions, and history.
///
/// Layout:
/// ```text
/// {persona}
/// {instructions}
/// Previous conversation:
/// User: {prior message}
/// Chatbot: {prior response}
/// ...
/// User: {new message}
/// Chatbot:
/// ```
///
/// `history` must already be windowed and ordered oldest-first; the
/// builder renders it verbatim. The `Previous conversation:` header is
/// always present, even when the history is empty. The trailing
/// `Chatbot:` line is the generation cue.
pub struct PromptBuilder;

impl PromptBuilder {
    /// Assemble the full prompt text.
    pub fn build(
        persona: &str,
        instructions: &str,
        history: &[ConversationTurn],
        user_message: &str,
    ) -> String {
        let mut sections = Vec::with_capacity(history.len() + 4);

        sections.push(persona.to_string());
        sections.push(instructions.to_string());

        sections.push("Previous conversation:".to_string());
        for turn in history {
            sections.push(format!("User: {}\nChatbot: {}", turn.message, turn.response));
        }

        sections.push(format!("User: {user_message}"));
        sections.push("Chatbot:".to_string());

        sections.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    fn turn(message: &str, response: &str) -> ConversationTurn {
        ConversationTurn {
            id: Uuid::now_v7(),
            user_email: "a@b.com".to_string(),
            message: message.to_string(),
            response: response.to_string(),
            business_type: "General Business".to_string(),
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn test_build_section_order() {
        let history = vec![turn("first question", "first answer")];
        let prompt = PromptBuilder::build(
            "You are an AI assistant for a business.",
            LEAD_QUALIFICATION_PROMPT,
            &history,
            "new question",
        );

        let persona_pos = prompt.find("You are an AI assistant for a business.").unwrap();
        let instructions_pos = prompt.find("qualify leads").unwrap();
        let header_pos = prompt.find("Previous conversation:").unwrap();
        let history_pos = prompt.find("User: first question").unwrap();
        let new_message_pos = prompt.find("User: new question").unwrap();

        assert!(persona_pos < instructions_pos);
        assert!(instructions_pos < header_pos);
        assert!(header_pos < history_pos);
        assert!(history_pos < new_message_pos);
        assert!(prompt.ends_with("Chatbot:"));
    }

    #[test]
    fn test_build_renders_history_pairs() {
        let history = vec![turn("Hi", "Hello!"), turn("Need a lawyer", "What for?")];
        let prompt = PromptBuilder::build("Persona.", "Instructions.", &history, "Divorce");

        assert!(prompt.contains("User: Hi\nChatbot: Hello!"));
        assert!(prompt.contains("User: Need a lawyer\nChatbot: What for?"));
        let first = prompt.find("User: Hi").unwrap();
        let second = prompt.find("User: Need a lawyer").unwrap();
        assert!(first < second, "history must render in the order given");
    }

    #[test]
    fn test_build_empty_history_keeps_header() {
        let prompt = PromptBuilder::build("Persona.", "Instructions.", &[], "Hi");

        assert!(prompt.contains("Previous conversation:"));
        assert!(prompt.contains("Previous conversation:\nUser: Hi\nChatbot:"));
    }

    #[test]
    fn test_build_is_deterministic() {
        let history = vec![turn("Hi", "Hello!")];
        let a = PromptBuilder::build("P", "I", &history, "m");
        let b = PromptBuilder::build("P", "I", &history, "m");
        assert_eq!(a, b);
    }

    #[test]
    fn test_lead_qualification_prompt_lists_all_steps() {
        assert!(LEAD_QUALIFICATION_PROMPT.contains("- Ask about their budget"));
        assert!(LEAD_QUALIFICATION_PROMPT.contains("- Ask what services they need"));
        assert!(LEAD_QUALIFICATION_PROMPT.contains("- Ask for their preferred timeline"));
        assert!(LEAD_QUALIFICATION_PROMPT.contains("a representative will contact them."));
    }
}
