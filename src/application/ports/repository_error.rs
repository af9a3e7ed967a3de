#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("connection failed: {0}")]
    ConnectionFailed(String),
    #[error("query failed: {0}")]
    QueryFailed(String),
    #[error("collection not found: {0}")]
    NotFound(String),
    #[error("collection already exists: {0}")]
    Conflict(String),
}
