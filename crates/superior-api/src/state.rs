//! Application state wiring the chat service to its infrastructure.
//!
//! The chat service is generic over its history repository and completion
//! client; AppState pins it to the SQLite repository and a boxed
//! completion-service client.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use superior_core::chat::service::ChatService;
use superior_core::completion::BoxCompletionClient;
use superior_infra::llm::openai::OpenAiChatClient;
use superior_infra::sqlite::history::SqliteHistoryRepository;
use superior_infra::sqlite::pool::DatabasePool;

use crate::config::ApiConfig;

/// Concrete type alias for the service generics pinned to infra implementations.
pub type ConcreteChatService = ChatService<SqliteHistoryRepository, BoxCompletionClient>;

/// Shared application state handed to every request handler.
#[derive(Clone)]
pub struct AppState {
    pub chat_service: Arc<ConcreteChatService>,
}

impl AppState {
    /// Initialize the application state: connect to the database, wire the service.
    pub async fn init(config: &ApiConfig) -> anyhow::Result<Self> {
        if let Some(dir) = database_parent_dir(&config.database_url) {
            tokio::fs::create_dir_all(&dir).await?;
        }

        let pool = DatabasePool::new(&config.database_url).await?;
        let history = SqliteHistoryRepository::new(pool);

        let client = OpenAiChatClient::new(config.openai_api_key.clone());
        let chat_service = ChatService::new(history, BoxCompletionClient::new(client));

        Ok(Self {
            chat_service: Arc::new(chat_service),
        })
    }
}

/// Directory that must exist before SQLite can create the database file.
///
/// Returns `None` for in-memory databases and non-file URLs.
fn database_parent_dir(url: &str) -> Option<PathBuf> {
    let path = url.strip_prefix("sqlite://")?;
    let path = match path.split_once('?') {
        Some((path, _)) => path,
        None => path,
    };
    if path.is_empty() || path == ":memory:" {
        return None;
    }
    Path::new(path).parent().map(Path::to_path_buf)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_url_yields_parent_directory() {
        let dir = database_parent_dir("sqlite:///tmp/superior/chat.db?mode=rwc");
        assert_eq!(dir, Some(PathBuf::from("/tmp/superior")));
    }

    #[test]
    fn memory_url_yields_nothing() {
        assert_eq!(database_parent_dir("sqlite://:memory:"), None);
        assert_eq!(database_parent_dir("postgres://localhost/db"), None);
    }
}
