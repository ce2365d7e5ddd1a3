//! Identity resolution for the metagraph core.
//!
//! Answers "which concrete instance should represent this identifier right
//! now?" over an externally owned instance graph.
//!
//! # Components
//!
//! - [`RelationshipTypeRegistry`]: type name ↔ type identifier, cardinalities
//! - [`VisibilityPolicy`]: soft-delete and effectivity rules for one instance
//! - [`DuplicateClusterResolver`]: duplicate clusters and their winners
//! - [`MetadataElementService`]: get-by-GUID and text search façade
//! - [`MetagraphConfig`]: limits and paging, loaded from TOML
//!
//! # Query modes
//!
//! | flags | clustering | Memento | effectivity |
//! |---|---|---|---|
//! | default | yes | hidden | not checked |
//! | `for_lineage` | yes | visible | not checked |
//! | `effective_time = t` | yes | hidden | must contain `t` |
//! | `for_duplicate_processing` | bypassed | per other flags | per other flags |
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use metagraph_model::{Cardinality, CreateTime, Entity, Guid, QueryFlags, RelationshipTypeDef};
//! use metagraph_resolve::{MetadataElementService, RelationshipTypeRegistry, ResolverConfig};
//! use metagraph_store::InMemoryStore;
//!
//! let store = Arc::new(InMemoryStore::new());
//! store.add_typedef(RelationshipTypeDef::new(
//!     "dup", "PeerDuplicateLink", Cardinality::Many, Cardinality::Many,
//! ));
//! let guid = Guid::new();
//! store.add_entity(Entity::new(guid, "Asset", CreateTime::now()));
//!
//! let registry = Arc::new(RelationshipTypeRegistry::new(store.clone()));
//! let service = MetadataElementService::new(store, registry, ResolverConfig::default());
//! let entity = service.get_by_guid(&guid, &QueryFlags::default()).unwrap();
//! assert_eq!(entity.guid, guid);
//! ```

mod cluster;
pub mod config;
mod error;
mod registry;
mod service;
mod visibility;

pub use cluster::DuplicateClusterResolver;
pub use config::{MetagraphConfig, ResolverConfig, WalkerConfig};
pub use error::{ResolveError, ResolveResult};
pub use registry::RelationshipTypeRegistry;
pub use service::MetadataElementService;
pub use visibility::VisibilityPolicy;
