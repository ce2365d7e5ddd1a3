use crate::{InMemoryStore, StoreResult};
use metagraph_model::{Entity, Relationship, RelationshipTypeDef};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

/// A serialized instance graph: entities, relationships and the
/// relationship types they use.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GraphSnapshot {
    #[serde(default)]
    pub typedefs: Vec<RelationshipTypeDef>,
    #[serde(default)]
    pub entities: Vec<Entity>,
    #[serde(default)]
    pub relationships: Vec<Relationship>,
}

impl GraphSnapshot {
    /// Parses a snapshot from JSON text.
    pub fn from_json(json: &str) -> StoreResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads a snapshot from a JSON file.
    pub fn load(path: &Path) -> StoreResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        let snapshot = Self::from_json(&contents)?;
        info!(
            "Loaded snapshot {:?}: {} entities, {} relationships, {} relationship types",
            path,
            snapshot.entities.len(),
            snapshot.relationships.len(),
            snapshot.typedefs.len()
        );
        Ok(snapshot)
    }

    /// Builds an in-memory store holding this snapshot.
    pub fn into_store(self) -> InMemoryStore {
        let store = InMemoryStore::new();
        for typedef in self.typedefs {
            store.add_typedef(typedef);
        }
        for entity in self.entities {
            store.add_entity(entity);
        }
        for relationship in self.relationships {
            store.add_relationship(relationship);
        }
        store
    }
}
