mod in_memory_staging_store;
mod local_staging_store;

pub use in_memory_staging_store::InMemoryStagingStore;
pub use local_staging_store::LocalStagingStore;
