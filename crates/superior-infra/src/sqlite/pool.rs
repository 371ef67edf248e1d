//! Database pool with split reader/writer connections in WAL mode.
//!
//! SQLite allows only one writer at a time. This module provides a `DatabasePool`
//! with a multi-connection reader pool for concurrent reads and a single-connection
//! writer pool for serialized writes. Both use WAL journal mode.
//!
//! The schema is bootstrapped with idempotent DDL at pool construction.
//! There is no migrations tooling: the single table never changes shape
//! (turns are immutable, append-only records).

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;
use std::time::Duration;

/// Bound on waiting for a pooled connection. Past this the store counts
/// as unavailable and the request fails.
const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(30);

/// Idempotent schema bootstrap, run on the writer at startup.
///
/// `timestamp` is RFC 3339 text; lexicographic order matches chronological
/// order, which the fetch path's ORDER BY relies on.
const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS conversation_turns (
    id            TEXT PRIMARY KEY,
    user_email    TEXT NOT NULL,
    message       TEXT NOT NULL,
    response      TEXT NOT NULL,
    business_type TEXT NOT NULL,
    timestamp     TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_conversation_turns_user_time
    ON conversation_turns (user_email, timestamp DESC);
"#;

/// Split read/write pool for SQLite with WAL mode.
///
/// - `reader`: Multi-connection pool (up to 8) for concurrent SELECT queries.
/// - `writer`: Single-connection pool for serialized INSERTs.
#[derive(Clone)]
pub struct DatabasePool {
    pub reader: SqlitePool,
    pub writer: SqlitePool,
}

impl DatabasePool {
    /// Create a new DatabasePool with split reader/writer connections.
    ///
    /// Bootstraps the schema on the writer pool before the reader opens.
    /// Both pools use WAL journal mode and a 5-second busy timeout.
    pub async fn new(database_url: &str) -> Result<Self, sqlx::Error> {
        let base_opts = SqliteConnectOptions::from_str(database_url)?
            .journal_mode(SqliteJournalMode::Wal)
            .busy_timeout(Duration::from_secs(5))
            .create_if_missing(true);

        let read_opts = base_opts.clone().read_only(true);
        let write_opts = base_opts;

        let writer = SqlitePoolOptions::new()
            .max_connections(1)
            .acquire_timeout(ACQUIRE_TIMEOUT)
            .connect_with(write_opts)
            .await?;

        sqlx::raw_sql(SCHEMA).execute(&writer).await?;

        let reader = SqlitePoolOptions::new()
            .max_connections(8)
            .acquire_timeout(ACQUIRE_TIMEOUT)
            .connect_with(read_opts)
            .await?;

        Ok(Self { reader, writer })
    }
}

/// Returns the default database URL based on `SUPERIOR_DATA_DIR` env var,
/// falling back to `~/.superior-chatbot/superior_chatbot.db`.
pub fn default_database_url() -> String {
    let data_dir = std::env::var("SUPERIOR_DATA_DIR").unwrap_or_else(|_| {
        let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
        format!("{home}/.superior-chatbot")
    });
    format!("sqlite://{data_dir}/superior_chatbot.db")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_pool_creates_schema() {
        let dir = tempfile::tempdir().unwrap();
        let db_path = dir.path().join("test.db");
        let url = format!("sqlite://{}?mode=rwc", db_path.display());

        let pool = DatabasePool::new(&url).await.unwrap();

        let tables: Vec<(String,)> = sqlx::query_as(
            "SELECT name FROM sqlite_master WHERE type='table' AND name NOT LIKE 'sqlite_%' ORDER BY name",
        )
        .fetch_all(&pool.reader)
        .await
        .unwrap();

        let table_names: Vec<&str> = tables.iter().map(|t| t.0.as_str()).collect();
        assert!(
            table_names.contains(&"conversation_turns"),
            "conversation_turns table missing"
        );

        let indexes: Vec<(String,)> =
            sqlx::query_as("SELECT name FROM sqlite_master WHERE type='index' AND name = 'idx_conversation_turns_user_time'")
                .fetch_all(&pool.reader)
                .await
                .unwrap();
        assert_eq!(indexes.len(), 1, "fetch index missing");
    }

    #[tokio::test]
    async fn test_pool_bootstrap_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let db_path = dir.path().join("test_reopen.db");
        let url = format!("sqlite://{}?mode=rwc", db_path.display());

        let first = DatabasePool::new(&url).await.unwrap();
        sqlx::query("INSERT INTO conversation_turns (id, user_email, message, response, business_type, timestamp) VALUES ('t1', 'a@b.com', 'Hi', 'Hello', 'General Business', '2026-01-01T00:00:00+00:00')")
            .execute(&first.writer)
            .await
            .unwrap();
        drop(first);

        // Reopening must keep existing rows.
        let second = DatabasePool::new(&url).await.unwrap();
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM conversation_turns")
            .fetch_one(&second.reader)
            .await
            .unwrap();
        assert_eq!(count.0, 1);
    }

    #[tokio::test]
    async fn test_pool_wal_mode() {
        let dir = tempfile::tempdir().unwrap();
        let db_path = dir.path().join("test_wal.db");
        let url = format!("sqlite://{}?mode=rwc", db_path.display());

        let pool = DatabasePool::new(&url).await.unwrap();

        let result: (String,) = sqlx::query_as("PRAGMA journal_mode")
            .fetch_one(&pool.writer)
            .await
            .unwrap();

        assert_eq!(result.0.to_lowercase(), "wal");
    }

    #[tokio::test]
    async fn test_default_database_url() {
        let url = default_database_url();
        assert!(url.starts_with("sqlite://"));
        assert!(url.ends_with("superior_chatbot.db"));
    }
}
