use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use tracing::{info, instrument};

use crate::application::ports::RepositoryError;

#[instrument(skip(url))]
pub async fn create_pool(url: &str, max_connections: u32) -> Result<SqlitePool, RepositoryError> {
    let options = SqliteConnectOptions::from_str(url)
        .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?
        .create_if_missing(true)
        // Message rows hang off their collection row; deletes cascade.
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await
        .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

    info!("SQLite connection pool established");
    Ok(pool)
}

/// Create the schema if it is not there yet. The UNIQUE constraint on
/// `collections.name` is the authority for duplicate detection; callers must
/// not rely on a separate existence check.
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), RepositoryError> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS collections (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL UNIQUE,
            created_at TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await
    .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS messages (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            collection_id INTEGER NOT NULL
                REFERENCES collections(id) ON DELETE CASCADE,
            seq INTEGER NOT NULL,
            sender_name TEXT NOT NULL,
            timestamp_ms INTEGER,
            timestamp TEXT,
            content TEXT,
            kind TEXT NOT NULL,
            photos TEXT,
            videos TEXT,
            audio_files TEXT,
            share TEXT
        )
        "#,
    )
    .execute(pool)
    .await
    .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?;

    sqlx::query(
        r#"
        CREATE INDEX IF NOT EXISTS idx_messages_collection_order
        ON messages (collection_id, timestamp_ms, seq)
        "#,
    )
    .execute(pool)
    .await
    .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?;

    Ok(())
}
