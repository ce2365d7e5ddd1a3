//! In-memory store.
//!
//! Backs tests and the command-line tool. Reads take a shared lock, so the
//! store can serve many concurrent resolution calls.

use crate::{EntityStore, PagingOptions, StoreError, StoreResult, TypeDefStore};
use metagraph_model::{Classification, Entity, Guid, Relationship, RelationshipTypeDef, TypeId};
use regex_lite::{Regex, RegexBuilder};
use serde_json::Value;
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::debug;

#[derive(Default)]
struct Inner {
    entities: BTreeMap<Guid, Entity>,
    relationships: BTreeMap<Guid, Relationship>,
    /// Relationship GUIDs touching each entity GUID.
    adjacency: HashMap<Guid, BTreeSet<Guid>>,
    typedefs: HashMap<String, RelationshipTypeDef>,
    type_names_by_id: HashMap<TypeId, String>,
}

/// Thread-safe in-memory implementation of both store contracts.
///
/// Relationships may reference entities that are not (or no longer)
/// present; such dangling links are returned as-is, just as a federated
/// repository would return them.
#[derive(Default)]
pub struct InMemoryStore {
    inner: RwLock<Inner>,
}

impl InMemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> RwLockReadGuard<'_, Inner> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Inner> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Inserts or replaces an entity.
    pub fn add_entity(&self, entity: Entity) {
        self.write().entities.insert(entity.guid, entity);
    }

    /// Inserts or replaces a relationship.
    pub fn add_relationship(&self, relationship: Relationship) {
        let mut inner = self.write();
        if let Some(previous) = inner.relationships.remove(&relationship.guid) {
            for end in [previous.end1, previous.end2] {
                if let Some(set) = inner.adjacency.get_mut(&end) {
                    set.remove(&previous.guid);
                }
            }
        }
        for end in [relationship.end1, relationship.end2] {
            inner.adjacency.entry(end).or_default().insert(relationship.guid);
        }
        inner.relationships.insert(relationship.guid, relationship);
    }

    /// Registers a relationship type. Re-registering a name replaces it.
    pub fn add_typedef(&self, typedef: RelationshipTypeDef) {
        let mut inner = self.write();
        if let Some(previous) = inner.typedefs.remove(&typedef.type_name) {
            inner.type_names_by_id.remove(&previous.type_id);
        }
        inner
            .type_names_by_id
            .insert(typedef.type_id.clone(), typedef.type_name.clone());
        inner.typedefs.insert(typedef.type_name.clone(), typedef);
    }

    /// Removes an entity but leaves its relationships in place.
    pub fn remove_entity(&self, guid: &Guid) -> Option<Entity> {
        self.write().entities.remove(guid)
    }

    /// Removes a relationship.
    pub fn remove_relationship(&self, guid: &Guid) -> Option<Relationship> {
        let mut inner = self.write();
        let removed = inner.relationships.remove(guid)?;
        for end in [removed.end1, removed.end2] {
            if let Some(set) = inner.adjacency.get_mut(&end) {
                set.remove(guid);
            }
        }
        Some(removed)
    }

    /// Attaches a classification to an existing entity.
    pub fn classify(&self, guid: &Guid, classification: Classification) -> StoreResult<()> {
        let mut inner = self.write();
        let entity = inner
            .entities
            .get_mut(guid)
            .ok_or_else(|| StoreError::InvalidData(format!("no entity {guid} to classify")))?;
        entity.classifications.push(classification);
        Ok(())
    }

    /// Number of stored entities.
    pub fn entity_count(&self) -> usize {
        self.read().entities.len()
    }

    /// Number of stored relationships.
    pub fn relationship_count(&self) -> usize {
        self.read().relationships.len()
    }
}

fn page<T>(items: impl Iterator<Item = T>, paging: PagingOptions) -> Vec<T> {
    items
        .skip(paging.start_from)
        .take(paging.page_size)
        .collect()
}

fn value_matches(pattern: &Regex, value: &Value) -> bool {
    match value {
        Value::String(s) => pattern.is_match(s),
        Value::Array(items) => items.iter().any(|v| value_matches(pattern, v)),
        _ => false,
    }
}

impl EntityStore for InMemoryStore {
    fn get_entity(&self, guid: &Guid) -> StoreResult<Option<Entity>> {
        Ok(self.read().entities.get(guid).cloned())
    }

    fn relationships_for_entity(
        &self,
        guid: &Guid,
        relationship_type: &TypeId,
        paging: PagingOptions,
    ) -> StoreResult<Vec<Relationship>> {
        let inner = self.read();
        let Some(ids) = inner.adjacency.get(guid) else {
            return Ok(Vec::new());
        };
        let matching = ids
            .iter()
            .filter_map(|id| inner.relationships.get(id))
            .filter(|rel| rel.type_id == *relationship_type)
            .cloned();
        Ok(page(matching, paging))
    }

    fn find_entities_by_text(
        &self,
        text: &str,
        type_filter: Option<&str>,
        paging: PagingOptions,
    ) -> StoreResult<Vec<Entity>> {
        let pattern = RegexBuilder::new(text)
            .case_insensitive(true)
            .build()
            .map_err(|e| StoreError::InvalidQuery(format!("{text}: {e}")))?;

        let inner = self.read();
        let matching = inner
            .entities
            .values()
            .filter(|e| type_filter.is_none_or(|t| e.type_name == t))
            .filter(|e| e.properties.values().any(|v| value_matches(&pattern, v)))
            .cloned();
        let found = page(matching, paging);
        debug!("Text search {:?} matched {} entities", text, found.len());
        Ok(found)
    }
}

impl TypeDefStore for InMemoryStore {
    fn typedef_by_name(&self, type_name: &str) -> StoreResult<Option<RelationshipTypeDef>> {
        Ok(self.read().typedefs.get(type_name).cloned())
    }

    fn typedef_by_id(&self, type_id: &TypeId) -> StoreResult<Option<RelationshipTypeDef>> {
        let inner = self.read();
        Ok(inner
            .type_names_by_id
            .get(type_id)
            .and_then(|name| inner.typedefs.get(name))
            .cloned())
    }
}
