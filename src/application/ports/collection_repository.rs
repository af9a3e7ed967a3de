use async_trait::async_trait;

use crate::domain::{CollectionName, MediaAttachment, Message};

use super::RepositoryError;

/// Persistence port for named message collections.
///
/// `create` must be atomic: either the collection exists afterwards with all
/// of its messages, or it does not exist at all. Duplicate names fail with
/// `RepositoryError::Conflict`, enforced by the store's own uniqueness
/// constraint rather than by a separate existence check.
#[async_trait]
pub trait CollectionRepository: Send + Sync {
    /// Persist a new collection. Returns the number of stored messages.
    async fn create(
        &self,
        name: &CollectionName,
        messages: &[Message],
    ) -> Result<u64, RepositoryError>;

    /// All messages of the named collection, ordered by `timestamp_ms`
    /// ascending with insertion order as tie-break. The ordering is
    /// re-asserted at query time; insertion order alone is not trusted.
    async fn get_messages(&self, name: &CollectionName) -> Result<Vec<Message>, RepositoryError>;

    /// All collection names in lexicographic order.
    async fn list_names(&self) -> Result<Vec<String>, RepositoryError>;

    /// Remove the named collection and every message in it.
    async fn delete(&self, name: &CollectionName) -> Result<(), RepositoryError>;

    /// First photo attachment across the collection's messages, in message
    /// order. `Ok(None)` when the collection holds no photos.
    async fn find_photo(
        &self,
        name: &CollectionName,
    ) -> Result<Option<MediaAttachment>, RepositoryError>;
}
