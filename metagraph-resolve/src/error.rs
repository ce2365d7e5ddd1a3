//! Error types for the resolution layer.

use metagraph_model::Guid;
use metagraph_store::StoreError;
use thiserror::Error;

/// Result type for resolution operations.
pub type ResolveResult<T> = Result<T, ResolveError>;

/// Errors that can occur while resolving instances.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// The identifier is absent, or every instance that could represent it
    /// is hidden under the requested flags.
    #[error("no visible instance for {guid}")]
    NotFound { guid: Guid },

    /// A relationship type name or identifier is not defined.
    #[error("unknown relationship type: {0}")]
    UnknownType(String),

    /// The duplicate cluster grew past the configured ceiling.
    #[error("duplicate cluster of {guid} exceeds {limit} members")]
    ClusterTooLarge { guid: Guid, limit: usize },

    /// Store failure.
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// Invalid or unreadable configuration.
    #[error("configuration error: {0}")]
    Config(String),
}

impl ResolveError {
    /// Returns true for the not-found case.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
