use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::application::ports::{CollectionRepository, RepositoryError};
use crate::domain::{CollectionName, MediaAttachment, Message};

/// Map-backed repository adapter with the same contract as the SQLite one.
/// Used by router tests and handy for running the server without a database
/// file. The BTreeMap keeps `list_names` lexicographic for free.
#[derive(Default)]
pub struct InMemoryCollectionRepository {
    collections: Mutex<BTreeMap<String, Vec<Message>>>,
}

impl InMemoryCollectionRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CollectionRepository for InMemoryCollectionRepository {
    async fn create(
        &self,
        name: &CollectionName,
        messages: &[Message],
    ) -> Result<u64, RepositoryError> {
        let mut collections = self.collections
            .lock()
            .map_err(|_| RepositoryError::QueryFailed("lock poisoned".to_string()))?;
        match collections.entry(name.as_str().to_string()) {
            Entry::Occupied(_) => Err(RepositoryError::Conflict(name.to_string())),
            Entry::Vacant(slot) => {
                slot.insert(messages.to_vec());
                Ok(messages.len() as u64)
            }
        }
    }

    async fn get_messages(&self, name: &CollectionName) -> Result<Vec<Message>, RepositoryError> {
        let collections = self.collections
            .lock()
            .map_err(|_| RepositoryError::QueryFailed("lock poisoned".to_string()))?;
        let mut messages = collections
            .get(name.as_str())
            .cloned()
            .ok_or_else(|| RepositoryError::NotFound(name.to_string()))?;
        // Ordering is re-asserted at query time, same as the SQLite adapter.
        messages.sort_by_key(|m| m.timestamp_ms);
        Ok(messages)
    }

    async fn list_names(&self) -> Result<Vec<String>, RepositoryError> {
        let collections = self.collections
            .lock()
            .map_err(|_| RepositoryError::QueryFailed("lock poisoned".to_string()))?;
        Ok(collections.keys().cloned().collect())
    }

    async fn delete(&self, name: &CollectionName) -> Result<(), RepositoryError> {
        let mut collections = self.collections
            .lock()
            .map_err(|_| RepositoryError::QueryFailed("lock poisoned".to_string()))?;
        collections
            .remove(name.as_str())
            .map(|_| ())
            .ok_or_else(|| RepositoryError::NotFound(name.to_string()))
    }

    async fn find_photo(
        &self,
        name: &CollectionName,
    ) -> Result<Option<MediaAttachment>, RepositoryError> {
        let messages = self.get_messages(name).await?;
        Ok(messages
            .iter()
            .find_map(|m| m.first_photo().cloned()))
    }
}
