//! Store contracts for the metagraph resolution core.
//!
//! The core never owns instance data. Everything it computes is a view over
//! an [`EntityStore`] (entities, relationships, text search) and a
//! [`TypeDefStore`] (relationship type metadata) supplied by the platform.
//!
//! # Architecture
//!
//! - The traits are synchronous; any blocking happens inside the store
//! - Reads are paged with [`PagingOptions`]; [`collect_pages`] drains them
//! - [`InMemoryStore`] is the reference implementation used by tests and
//!   the command-line tool
//! - [`GraphSnapshot`] loads an in-memory store from a JSON document

mod error;
mod memory;
mod paging;
mod snapshot;
mod traits;

pub use error::{StoreError, StoreResult};
pub use memory::InMemoryStore;
pub use paging::{collect_pages, PagingOptions, DEFAULT_PAGE_SIZE};
pub use snapshot::GraphSnapshot;
pub use traits::{EntityStore, TypeDefStore};
