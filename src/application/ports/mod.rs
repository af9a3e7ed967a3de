mod collection_repository;
mod repository_error;
mod staging_store;

pub use collection_repository::CollectionRepository;
pub use repository_error::RepositoryError;
pub use staging_store::{StagingStore, StagingStoreError};
