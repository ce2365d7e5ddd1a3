//! Relationship type registry.
//!
//! Maps between relationship type names and the opaque identifiers carried
//! by relationship instances, and exposes end cardinalities. Lookups are
//! cached after the first hit. Two threads racing to populate the same key
//! write equal values, so the cache needs nothing beyond a `RwLock`.

use crate::{ResolveError, ResolveResult};
use metagraph_model::{Cardinality, KnownRelationship, Relationship, RelationshipEnd, RelationshipTypeDef, TypeId};
use metagraph_store::TypeDefStore;
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};
use tracing::{debug, info};

#[derive(Default)]
struct Cache {
    by_name: HashMap<String, Arc<RelationshipTypeDef>>,
    by_id: HashMap<TypeId, Arc<RelationshipTypeDef>>,
}

/// Cached view of the platform's relationship type definitions.
///
/// Constructed explicitly and shared by `Arc`; there is no global instance.
pub struct RelationshipTypeRegistry {
    store: Arc<dyn TypeDefStore>,
    cache: RwLock<Cache>,
}

impl RelationshipTypeRegistry {
    /// Creates an empty registry over a type definition store.
    pub fn new(store: Arc<dyn TypeDefStore>) -> Self {
        Self {
            store,
            cache: RwLock::new(Cache::default()),
        }
    }

    fn cached_by_name(&self, type_name: &str) -> Option<Arc<RelationshipTypeDef>> {
        let cache = self.cache.read().unwrap_or_else(PoisonError::into_inner);
        cache.by_name.get(type_name).cloned()
    }

    fn cached_by_id(&self, type_id: &TypeId) -> Option<Arc<RelationshipTypeDef>> {
        let cache = self.cache.read().unwrap_or_else(PoisonError::into_inner);
        cache.by_id.get(type_id).cloned()
    }

    fn remember(&self, typedef: RelationshipTypeDef) -> Arc<RelationshipTypeDef> {
        let typedef = Arc::new(typedef);
        let mut cache = self.cache.write().unwrap_or_else(PoisonError::into_inner);
        cache
            .by_name
            .insert(typedef.type_name.clone(), Arc::clone(&typedef));
        cache
            .by_id
            .insert(typedef.type_id.clone(), Arc::clone(&typedef));
        debug!(
            "Cached relationship type {} ({})",
            typedef.type_name, typedef.type_id
        );
        typedef
    }

    /// Returns the definition of a relationship type by name.
    pub fn typedef(&self, type_name: &str) -> ResolveResult<Arc<RelationshipTypeDef>> {
        if let Some(hit) = self.cached_by_name(type_name) {
            return Ok(hit);
        }
        match self.store.typedef_by_name(type_name)? {
            Some(def) => Ok(self.remember(def)),
            None => Err(ResolveError::UnknownType(type_name.to_string())),
        }
    }

    /// Returns the definition of a relationship type by identifier.
    pub fn typedef_for_id(&self, type_id: &TypeId) -> ResolveResult<Arc<RelationshipTypeDef>> {
        if let Some(hit) = self.cached_by_id(type_id) {
            return Ok(hit);
        }
        match self.store.typedef_by_id(type_id)? {
            Some(def) => Ok(self.remember(def)),
            None => Err(ResolveError::UnknownType(type_id.to_string())),
        }
    }

    /// Resolves a type name to its identifier.
    pub fn resolve_type_id(&self, type_name: &str) -> ResolveResult<TypeId> {
        Ok(self.typedef(type_name)?.type_id.clone())
    }

    /// Resolves a type identifier to its name.
    pub fn resolve_type_name(&self, type_id: &TypeId) -> ResolveResult<String> {
        Ok(self.typedef_for_id(type_id)?.type_name.clone())
    }

    /// Cardinality of one end of the named relationship type.
    pub fn cardinality_of(&self, type_name: &str, end: RelationshipEnd) -> ResolveResult<Cardinality> {
        Ok(self.typedef(type_name)?.cardinality(end))
    }

    /// Resolves the role a relationship instance plays.
    pub fn role_of(&self, relationship: &Relationship) -> ResolveResult<KnownRelationship> {
        let name = self.resolve_type_name(&relationship.type_id)?;
        Ok(KnownRelationship::from_type_name(&name))
    }

    /// Drops every cached definition. Call when the platform signals a
    /// type-system change.
    pub fn invalidate(&self) {
        let mut cache = self.cache.write().unwrap_or_else(PoisonError::into_inner);
        let dropped = cache.by_name.len();
        cache.by_name.clear();
        cache.by_id.clear();
        info!("Relationship type cache invalidated ({} entries dropped)", dropped);
    }

    /// Number of cached definitions.
    pub fn cached_len(&self) -> usize {
        self.cache
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .by_name
            .len()
    }
}
