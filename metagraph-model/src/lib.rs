//! Instance model for the metagraph resolution core.
//!
//! Defines the generic instance types every layer above the store works with:
//! - [`Entity`], [`Relationship`], [`Classification`]: the three instance
//!   kinds, each carrying a schema-free property mapping
//! - [`Instance`]: what visibility rules need to know about any instance
//! - [`RelationshipTypeDef`] / [`Cardinality`]: relationship type metadata
//! - [`KnownRelationship`]: the relationship roles the core dispatches on
//! - [`ContextPath`]: a declared chain of relationship steps to walk
//! - [`QueryFlags`]: the per-call query mode
//!
//! A single `Entity` type covers every entity type name;
//! type-specific behaviour is looked up by type name, never by Rust type.

mod classification;
mod entity;
mod flags;
mod instance;
mod path;
mod relationship;
mod roles;
mod typedef;

pub use classification::{Classification, MEMENTO};
pub use entity::{Entity, Properties};
pub use flags::QueryFlags;
pub use instance::Instance;
pub use path::{ContextPath, Direction, PathStep};
pub use relationship::Relationship;
pub use roles::KnownRelationship;
pub use typedef::{Cardinality, EndDef, RelationshipEnd, RelationshipTypeDef};

pub use metagraph_types::{CreateTime, EffectivityWindow, Guid, Instant, TypeId};
