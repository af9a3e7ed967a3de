mod in_memory_collection_repository;
mod sqlite_collection_repository;
mod sqlite_pool;

pub use in_memory_collection_repository::InMemoryCollectionRepository;
pub use sqlite_collection_repository::SqliteCollectionRepository;
pub use sqlite_pool::{create_pool, run_migrations};
