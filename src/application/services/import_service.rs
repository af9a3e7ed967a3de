use std::sync::Arc;

use crate::application::ports::{CollectionRepository, RepositoryError};
use crate::domain::{CollectionName, NameError};
use crate::infrastructure::decoding::{decode_export, merge_conversations, DecodeError, MergeError};

/// Runs the import pipeline for one upload: decode every file, merge them
/// into a single ordered conversation, derive the collection name from the
/// first participant and persist the result. Any failure aborts the whole
/// import; no partial collection is left behind.
pub struct ImportService {
    repository: Arc<dyn CollectionRepository>,
}

#[derive(Debug, Clone)]
pub struct ImportReceipt {
    pub collection_name: String,
    pub message_count: u64,
}

impl ImportService {
    pub fn new(repository: Arc<dyn CollectionRepository>) -> Self {
        Self { repository }
    }

    #[tracing::instrument(skip(self, files), fields(file_count = files.len()))]
    pub async fn import_files(&self, files: &[Vec<u8>]) -> Result<ImportReceipt, ImportError> {
        if files.is_empty() {
            return Err(ImportError::NoFiles);
        }

        let mut conversations = Vec::with_capacity(files.len());
        for data in files {
            conversations.push(decode_export(data)?);
        }

        let merged = merge_conversations(conversations)?;

        // The collection name is the first participant's display name. The
        // merger guarantees at least one participant is present.
        let name = CollectionName::new(&merged.participants[0].name)?;

        let message_count = self
            .repository
            .create(&name, &merged.messages)
            .await
            .map_err(|e| match e {
                RepositoryError::Conflict(existing) => ImportError::DuplicateCollection(existing),
                other => ImportError::Storage(other),
            })?;

        tracing::info!(
            collection = %name,
            message_count,
            "Conversation imported"
        );

        Ok(ImportReceipt {
            collection_name: name.as_str().to_string(),
            message_count,
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error("no files provided")]
    NoFiles,
    #[error("decode: {0}")]
    Decode(#[from] DecodeError),
    #[error("merge: {0}")]
    Merge(#[from] MergeError),
    #[error("invalid collection name: {0}")]
    InvalidName(#[from] NameError),
    #[error("a collection named \"{0}\" already exists")]
    DuplicateCollection(String),
    #[error("storage: {0}")]
    Storage(RepositoryError),
}
