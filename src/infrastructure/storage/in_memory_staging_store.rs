use std::collections::HashMap;
use std::sync::Mutex;

use bytes::Bytes;

use crate::application::ports::{StagingStore, StagingStoreError};
use crate::domain::StoragePath;

/// Map-backed staging store for router tests.
#[derive(Default)]
pub struct InMemoryStagingStore {
    objects: Mutex<HashMap<String, Bytes>>,
}

impl InMemoryStagingStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of currently staged objects. Lets tests assert that upload
    /// handlers cleaned up after themselves.
    pub fn staged_count(&self) -> usize {
        self.objects.lock().map(|m| m.len()).unwrap_or(0)
    }
}

#[async_trait::async_trait]
impl StagingStore for InMemoryStagingStore {
    async fn store(&self, path: &StoragePath, data: Bytes) -> Result<u64, StagingStoreError> {
        let size = data.len() as u64;
        let mut objects = self
            .objects
            .lock()
            .map_err(|_| StagingStoreError::UploadFailed("lock poisoned".to_string()))?;
        objects.insert(path.as_str().to_string(), data);
        Ok(size)
    }

    async fn fetch(&self, path: &StoragePath) -> Result<Vec<u8>, StagingStoreError> {
        let objects = self
            .objects
            .lock()
            .map_err(|_| StagingStoreError::DownloadFailed("lock poisoned".to_string()))?;
        objects
            .get(path.as_str())
            .map(|b| b.to_vec())
            .ok_or_else(|| StagingStoreError::NotFound(path.as_str().to_string()))
    }

    async fn delete(&self, path: &StoragePath) -> Result<(), StagingStoreError> {
        let mut objects = self
            .objects
            .lock()
            .map_err(|_| StagingStoreError::DeleteFailed("lock poisoned".to_string()))?;
        objects
            .remove(path.as_str())
            .map(|_| ())
            .ok_or_else(|| StagingStoreError::NotFound(path.as_str().to_string()))
    }
}
