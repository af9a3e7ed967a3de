use async_trait::async_trait;
use chrono::Utc;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use tracing::instrument;

use crate::application::ports::{CollectionRepository, RepositoryError};
use crate::domain::{CollectionName, MediaAttachment, Message, MessageKind};

pub struct SqliteCollectionRepository {
    pool: SqlitePool,
}

impl SqliteCollectionRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    async fn collection_id(&self, name: &CollectionName) -> Result<i64, RepositoryError> {
        let row = sqlx::query("SELECT id FROM collections WHERE name = ?1")
            .bind(name.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?;

        match row {
            Some(r) => r
                .try_get("id")
                .map_err(|e| RepositoryError::QueryFailed(e.to_string())),
            None => Err(RepositoryError::NotFound(name.to_string())),
        }
    }
}

#[async_trait]
impl CollectionRepository for SqliteCollectionRepository {
    #[instrument(skip(self, messages), fields(collection = %name, message_count = messages.len()))]
    async fn create(
        &self,
        name: &CollectionName,
        messages: &[Message],
    ) -> Result<u64, RepositoryError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?;

        // The UNIQUE constraint on name is the concurrency guard; a racing
        // create loses here, inside the transaction, not at some earlier
        // existence check.
        let inserted = sqlx::query("INSERT INTO collections (name, created_at) VALUES (?1, ?2)")
            .bind(name.as_str())
            .bind(Utc::now())
            .execute(&mut *tx)
            .await;

        let collection_id = match inserted {
            Ok(done) => done.last_insert_rowid(),
            Err(sqlx::Error::Database(db)) if db.is_unique_violation() => {
                return Err(RepositoryError::Conflict(name.to_string()));
            }
            Err(e) => return Err(RepositoryError::QueryFailed(e.to_string())),
        };

        for (seq, message) in messages.iter().enumerate() {
            sqlx::query(
                r#"
                INSERT INTO messages
                    (collection_id, seq, sender_name, timestamp_ms, timestamp,
                     content, kind, photos, videos, audio_files, share)
                VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)
                "#,
            )
            .bind(collection_id)
            .bind(seq as i64)
            .bind(&message.sender_name)
            .bind(message.timestamp_ms)
            .bind(&message.timestamp)
            .bind(&message.content)
            .bind(message.kind.as_str())
            .bind(to_json_column(&message.photos)?)
            .bind(to_json_column(&message.videos)?)
            .bind(to_json_column(&message.audio_files)?)
            .bind(to_json_column(&message.share)?)
            .execute(&mut *tx)
            .await
            .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?;
        }

        tx.commit()
            .await
            .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?;

        Ok(messages.len() as u64)
    }

    #[instrument(skip(self), fields(collection = %name))]
    async fn get_messages(&self, name: &CollectionName) -> Result<Vec<Message>, RepositoryError> {
        let collection_id = self.collection_id(name).await?;

        let rows = sqlx::query(
            r#"
            SELECT sender_name, timestamp_ms, timestamp, content, kind,
                   photos, videos, audio_files, share
            FROM messages
            WHERE collection_id = ?1
            ORDER BY timestamp_ms ASC, seq ASC
            "#,
        )
        .bind(collection_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?;

        rows.iter().map(message_from_row).collect()
    }

    #[instrument(skip(self))]
    async fn list_names(&self) -> Result<Vec<String>, RepositoryError> {
        let rows = sqlx::query("SELECT name FROM collections ORDER BY name ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?;

        rows.iter()
            .map(|r| {
                r.try_get("name")
                    .map_err(|e| RepositoryError::QueryFailed(e.to_string()))
            })
            .collect()
    }

    #[instrument(skip(self), fields(collection = %name))]
    async fn delete(&self, name: &CollectionName) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM collections WHERE name = ?1")
            .bind(name.as_str())
            .execute(&self.pool)
            .await
            .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound(name.to_string()));
        }

        Ok(())
    }

    #[instrument(skip(self), fields(collection = %name))]
    async fn find_photo(
        &self,
        name: &CollectionName,
    ) -> Result<Option<MediaAttachment>, RepositoryError> {
        let collection_id = self.collection_id(name).await?;

        let rows = sqlx::query(
            r#"
            SELECT photos
            FROM messages
            WHERE collection_id = ?1 AND photos IS NOT NULL
            ORDER BY timestamp_ms ASC, seq ASC
            "#,
        )
        .bind(collection_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?;

        for row in &rows {
            let raw: String = row
                .try_get("photos")
                .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?;
            let photos: Vec<MediaAttachment> = serde_json::from_str(&raw)
                .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?;
            if let Some(photo) = photos.into_iter().next() {
                return Ok(Some(photo));
            }
        }

        Ok(None)
    }
}

fn to_json_column<T: serde::Serialize>(value: &Option<T>) -> Result<Option<String>, RepositoryError> {
    value
        .as_ref()
        .map(|v| serde_json::to_string(v).map_err(|e| RepositoryError::QueryFailed(e.to_string())))
        .transpose()
}

fn from_json_column<T: serde::de::DeserializeOwned>(
    raw: Option<String>,
) -> Result<Option<T>, RepositoryError> {
    raw.map(|s| serde_json::from_str(&s).map_err(|e| RepositoryError::QueryFailed(e.to_string())))
        .transpose()
}

fn message_from_row(row: &SqliteRow) -> Result<Message, RepositoryError> {
    let query_failed = |e: sqlx::Error| RepositoryError::QueryFailed(e.to_string());

    let kind: String = row.try_get("kind").map_err(query_failed)?;
    let kind = kind
        .parse::<MessageKind>()
        .map_err(RepositoryError::QueryFailed)?;

    Ok(Message {
        sender_name: row.try_get("sender_name").map_err(query_failed)?,
        timestamp_ms: row.try_get("timestamp_ms").map_err(query_failed)?,
        timestamp: row.try_get("timestamp").map_err(query_failed)?,
        content: row.try_get("content").map_err(query_failed)?,
        photos: from_json_column(row.try_get("photos").map_err(query_failed)?)?,
        videos: from_json_column(row.try_get("videos").map_err(query_failed)?)?,
        audio_files: from_json_column(row.try_get("audio_files").map_err(query_failed)?)?,
        share: from_json_column(row.try_get("share").map_err(query_failed)?)?,
        kind,
    })
}
