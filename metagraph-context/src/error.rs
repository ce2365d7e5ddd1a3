//! Error types for context traversal.

use metagraph_resolve::ResolveError;
use metagraph_store::StoreError;
use thiserror::Error;

/// Result type for context operations.
pub type ContextResult<T> = Result<T, ContextError>;

/// Errors that abort a whole walk.
///
/// Gaps in the data (missing relationships, dangling references) are not
/// errors; they only drop the affected branch.
#[derive(Debug, Error)]
pub enum ContextError {
    #[error("context path has {depth} steps, limit is {limit}")]
    TraversalDepthExceeded { depth: usize, limit: usize },

    #[error("walk fanned out past {limit} branches")]
    FanOutExceeded { limit: usize },

    /// Start not found, unknown relationship type, or a resolution failure
    /// in resolved mode.
    #[error(transparent)]
    Resolve(#[from] ResolveError),

    #[error("store error: {0}")]
    Store(#[from] StoreError),
}
