//! HistoryRepository trait definition.
//!
//! Provides append and fetch for conversation turns, keyed by user email.

use superior_types::chat::{ConversationTurn, NewConversationTurn};
use superior_types::error::RepositoryError;

/// Number of prior turns rendered into the prompt.
pub const HISTORY_WINDOW: usize = 5;

/// Repository trait for conversation turn persistence.
///
/// Implementations live in superior-infra (e.g., `SqliteHistoryRepository`).
/// Uses native async fn in traits (RPITIT, Rust 2024 edition).
pub trait HistoryRepository: Send + Sync {
    /// All turns for a user, newest first. An unknown user yields an
    /// empty vec, not an error. The caller truncates to the window.
    fn fetch_recent(
        &self,
        user_email: &str,
    ) -> impl std::future::Future<Output = Result<Vec<ConversationTurn>, RepositoryError>> + Send;

    /// Write one new turn. The store stamps `id` and `timestamp` and
    /// returns the stored record. Turns are never updated or deleted.
    fn append(
        &self,
        turn: NewConversationTurn,
    ) -> impl std::future::Future<Output = Result<ConversationTurn, RepositoryError>> + Send;
}

/// Reduce a newest-first history to the prompt window.
///
/// Keeps the [`HISTORY_WINDOW`] most recent turns and flips them to
/// chronological order for rendering, so the prompt reads oldest to
/// newest. Anything older than the window never reaches the prompt.
pub fn context_window(mut turns: Vec<ConversationTurn>) -> Vec<ConversationTurn> {
    turns.truncate(HISTORY_WINDOW);
    turns.reverse();
    turns
}
