//! Context graph traversal for the metagraph core.
//!
//! [`ContextGraphWalker`] follows a [`ContextPath`](metagraph_model::ContextPath)
//! from a start instance and returns every complete chain. Missing
//! relationships and dangling references shrink the result instead of
//! failing the call. [`ContextEventBuilder`] runs the column-to-root path
//! and condenses each chain into a serializable [`TableContext`].
//!
//! Walks read raw instances unless [`WalkMode::Resolved`] is requested, in
//! which case each reached instance is replaced by its duplicate-cluster
//! winner.

mod builder;
mod error;
mod walker;

pub use builder::{ColumnContext, ContextEventBuilder, ContextFieldMap, TableContext};
pub use error::{ContextError, ContextResult};
pub use walker::{ContextBranch, ContextGraphWalker, WalkMode};
