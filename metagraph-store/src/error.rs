//! Error types for the store layer.

use thiserror::Error;

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur in store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Failure reported by the backing repository.
    #[error("repository error: {0}")]
    Backend(String),

    /// Serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// IO error (file system).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The search expression could not be compiled.
    #[error("invalid query: {0}")]
    InvalidQuery(String),

    /// Invalid data.
    #[error("invalid data: {0}")]
    InvalidData(String),
}
