//! Conversation turn types for Superior Chatbot.
//!
//! A turn is one stored user-message/reply pair with metadata. Turns are
//! immutable once written: there are no update or delete operations
//! anywhere in the system.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Business label substituted when a request omits `business_type`.
pub const DEFAULT_BUSINESS_TYPE: &str = "General Business";

/// One persisted conversation exchange.
///
/// `id` and `timestamp` are assigned by the store on write. The `id` is
/// storage identity only; nothing else in the system references it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversationTurn {
    pub id: Uuid,
    pub user_email: String,
    pub message: String,
    pub response: String,
    pub business_type: String,
    pub timestamp: DateTime<Utc>,
}

/// A turn as handed to the store, before `id` and `timestamp` are stamped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewConversationTurn {
    pub user_email: String,
    pub message: String,
    pub response: String,
    pub business_type: String,
}

/// Inbound chat request body.
///
/// All fields are optional at the wire so that missing fields surface as
/// validation errors with user-facing messages instead of deserialization
/// failures. `business_type` defaults to [`DEFAULT_BUSINESS_TYPE`] only
/// when the key is absent; an explicit empty string is kept as-is.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub user_email: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub business_type: Option<String>,
}
