//! SQLite history repository implementation.
//!
//! Implements `HistoryRepository` from `superior-core` using sqlx with
//! split read/write pools: raw queries, a private Row struct, RFC 3339
//! text timestamps.

use chrono::{DateTime, Utc};
use sqlx::Row;
use uuid::Uuid;

use superior_core::chat::repository::HistoryRepository;
use superior_types::chat::{ConversationTurn, NewConversationTurn};
use superior_types::error::RepositoryError;

use super::pool::DatabasePool;

/// SQLite-backed implementation of `HistoryRepository`.
pub struct SqliteHistoryRepository {
    pool: DatabasePool,
}

impl SqliteHistoryRepository {
    /// Create a new repository backed by the given database pool.
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }
}

// ---------------------------------------------------------------------------
// Private Row type for SQLite-to-domain mapping
// ---------------------------------------------------------------------------

/// Internal row type for mapping SQLite rows to domain ConversationTurn.
struct TurnRow {
    id: String,
    user_email: String,
    message: String,
    response: String,
    business_type: String,
    timestamp: String,
}

impl TurnRow {
    fn from_row(row: &sqlx::sqlite::SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            user_email: row.try_get("user_email")?,
            message: row.try_get("message")?,
            response: row.try_get("response")?,
            business_type: row.try_get("business_type")?,
            timestamp: row.try_get("timestamp")?,
        })
    }

    fn into_turn(self) -> Result<ConversationTurn, RepositoryError> {
        let id = Uuid::parse_str(&self.id)
            .map_err(|e| RepositoryError::Query(format!("invalid turn id: {e}")))?;
        let timestamp = parse_datetime(&self.timestamp)?;

        Ok(ConversationTurn {
            id,
            user_email: self.user_email,
            message: self.message,
            response: self.response,
            business_type: self.business_type,
            timestamp,
        })
    }
}

fn parse_datetime(s: &str) -> Result<DateTime<Utc>, RepositoryError> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| RepositoryError::Query(format!("invalid datetime: {e}")))
}

fn format_datetime(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339()
}

/// Pool exhaustion and transport failures count as the store being
/// unavailable; everything else is a query-level failure.
fn map_sqlx_err(e: sqlx::Error) -> RepositoryError {
    match &e {
        sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) => {
            RepositoryError::Connection(e.to_string())
        }
        _ => RepositoryError::Query(e.to_string()),
    }
}

// ---------------------------------------------------------------------------
// HistoryRepository implementation
// ---------------------------------------------------------------------------

impl HistoryRepository for SqliteHistoryRepository {
    async fn fetch_recent(
        &self,
        user_email: &str,
    ) -> Result<Vec<ConversationTurn>, RepositoryError> {
        // rowid breaks ties between turns written within the same instant.
        let rows = sqlx::query(
            r#"SELECT id, user_email, message, response, business_type, timestamp
               FROM conversation_turns
               WHERE user_email = ?
               ORDER BY timestamp DESC, rowid DESC"#,
        )
        .bind(user_email)
        .fetch_all(&self.pool.reader)
        .await
        .map_err(map_sqlx_err)?;

        let mut turns = Vec::with_capacity(rows.len());
        for row in &rows {
            let turn_row = TurnRow::from_row(row).map_err(|e| RepositoryError::Query(e.to_string()))?;
            turns.push(turn_row.into_turn()?);
        }
        Ok(turns)
    }

    async fn append(&self, turn: NewConversationTurn) -> Result<ConversationTurn, RepositoryError> {
        let stored = ConversationTurn {
            id: Uuid::now_v7(),
            user_email: turn.user_email,
            message: turn.message,
            response: turn.response,
            business_type: turn.business_type,
            timestamp: Utc::now(),
        };

        sqlx::query(
            r#"INSERT INTO conversation_turns (id, user_email, message, response, business_type, timestamp)
               VALUES (?, ?, ?, ?, ?, ?)"#,
        )
        .bind(stored.id.to_string())
        .bind(&stored.user_email)
        .bind(&stored.message)
        .bind(&stored.response)
        .bind(&stored.business_type)
        .bind(format_datetime(&stored.timestamp))
        .execute(&self.pool.writer)
        .await
        .map_err(map_sqlx_err)?;

        Ok(stored)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sqlite::pool::DatabasePool;

    async fn test_pool() -> DatabasePool {
        let dir = tempfile::tempdir().unwrap();
        let db_path = dir.path().join("test.db");
        let url = format!("sqlite://{}?mode=rwc", db_path.display());
        // Leak tempdir so it lives for the test
        std::mem::forget(dir);
        DatabasePool::new(&url).await.unwrap()
    }

    fn new_turn(user_email: &str, message: &str, response: &str) -> NewConversationTurn {
        NewConversationTurn {
            user_email: user_email.to_string(),
            message: message.to_string(),
            response: response.to_string(),
            business_type: "General Business".to_string(),
        }
    }

    #[tokio::test]
    async fn test_append_then_fetch_round_trip() {
        let repo = SqliteHistoryRepository::new(test_pool().await);

        let before = Utc::now();
        let stored = repo.append(new_turn("a@b.com", "Hi", "Hello!")).await.unwrap();
        let after = Utc::now();

        assert!(!stored.id.is_nil());
        assert!(stored.timestamp >= before && stored.timestamp <= after);

        let fetched = repo.fetch_recent("a@b.com").await.unwrap();
        assert_eq!(fetched.len(), 1);
        assert_eq!(fetched[0], stored);
    }

    #[tokio::test]
    async fn test_fetch_returns_newest_first() {
        let repo = SqliteHistoryRepository::new(test_pool().await);

        for i in 1..=7 {
            repo.append(new_turn("a@b.com", &format!("m{i}"), &format!("r{i}")))
                .await
                .unwrap();
        }

        let fetched = repo.fetch_recent("a@b.com").await.unwrap();
        let messages: Vec<&str> = fetched.iter().map(|t| t.message.as_str()).collect();
        assert_eq!(messages, ["m7", "m6", "m5", "m4", "m3", "m2", "m1"]);
    }

    #[tokio::test]
    async fn test_fetch_unknown_user_is_empty() {
        let repo = SqliteHistoryRepository::new(test_pool().await);

        let fetched = repo.fetch_recent("nobody@b.com").await.unwrap();
        assert!(fetched.is_empty());
    }

    #[tokio::test]
    async fn test_histories_do_not_mix_between_users() {
        let repo = SqliteHistoryRepository::new(test_pool().await);

        repo.append(new_turn("a@b.com", "mine", "ra")).await.unwrap();
        repo.append(new_turn("c@d.com", "theirs", "rc")).await.unwrap();

        let a = repo.fetch_recent("a@b.com").await.unwrap();
        assert_eq!(a.len(), 1);
        assert_eq!(a[0].message, "mine");

        let c = repo.fetch_recent("c@d.com").await.unwrap();
        assert_eq!(c.len(), 1);
        assert_eq!(c[0].message, "theirs");
    }

    #[tokio::test]
    async fn test_append_preserves_business_type() {
        let repo = SqliteHistoryRepository::new(test_pool().await);

        let mut turn = new_turn("a@b.com", "Need legal help", "What for?");
        turn.business_type = "Law Firm".to_string();
        repo.append(turn).await.unwrap();

        let fetched = repo.fetch_recent("a@b.com").await.unwrap();
        assert_eq!(fetched[0].business_type, "Law Firm");
    }

    #[tokio::test]
    async fn test_turn_ids_are_unique() {
        let repo = SqliteHistoryRepository::new(test_pool().await);

        let first = repo.append(new_turn("a@b.com", "one", "r1")).await.unwrap();
        let second = repo.append(new_turn("a@b.com", "two", "r2")).await.unwrap();
        assert_ne!(first.id, second.id);
    }
}
