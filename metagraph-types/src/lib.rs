//! Core type definitions for the metagraph resolution core.
//!
//! This crate defines the fundamental, store-agnostic types every other
//! layer builds on:
//! - Instance and relationship-type identifiers
//! - Creation timestamps (totally ordered, assigned once by the store)
//! - Effectivity windows bounding when an instance is considered valid
//!
//! Nothing here knows about entities, relationships or classifications;
//! those live in `metagraph-model`.

mod effectivity;
mod ids;
mod timestamp;

pub use effectivity::EffectivityWindow;
pub use ids::{Guid, TypeId};
pub use timestamp::CreateTime;

/// An instant on the platform clock, used for effectivity checks.
pub type Instant = chrono::DateTime<chrono::Utc>;

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in type operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid effectivity window: start {start} is after end {end}")]
    InvalidWindow { start: Instant, end: Instant },
}
