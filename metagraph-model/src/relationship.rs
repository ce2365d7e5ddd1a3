use crate::{Properties, RelationshipEnd};
use metagraph_types::{EffectivityWindow, Guid, TypeId};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A typed link between two entities.
///
/// Stores hand relationships back with only the opaque `type_id`; resolve
/// it through the relationship type registry before dispatching on it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Relationship {
    pub guid: Guid,
    pub type_id: TypeId,
    pub end1: Guid,
    pub end2: Guid,
    #[serde(default)]
    pub properties: Properties,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effectivity: Option<EffectivityWindow>,
    /// Relative confidence on duplicate links. Carried, not interpreted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_identifier: Option<i32>,
}

impl Relationship {
    /// Creates a relationship between `end1` and `end2`.
    pub fn new(guid: Guid, type_id: TypeId, end1: Guid, end2: Guid) -> Self {
        Self {
            guid,
            type_id,
            end1,
            end2,
            properties: Properties::new(),
            effectivity: None,
            status_identifier: None,
        }
    }

    /// Sets a property.
    #[must_use]
    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }

    /// Sets the effectivity window.
    #[must_use]
    pub fn with_effectivity(mut self, window: EffectivityWindow) -> Self {
        self.effectivity = Some(window);
        self
    }

    /// Sets the duplicate-link status identifier.
    #[must_use]
    pub fn with_status_identifier(mut self, status: i32) -> Self {
        self.status_identifier = Some(status);
        self
    }

    /// Returns the end `guid` sits at. A self-link reports `End1`.
    pub fn end_of(&self, guid: &Guid) -> Option<RelationshipEnd> {
        if self.end1 == *guid {
            Some(RelationshipEnd::End1)
        } else if self.end2 == *guid {
            Some(RelationshipEnd::End2)
        } else {
            None
        }
    }

    /// Returns the GUID at the given end.
    pub fn guid_at(&self, end: RelationshipEnd) -> Guid {
        match end {
            RelationshipEnd::End1 => self.end1,
            RelationshipEnd::End2 => self.end2,
        }
    }

    /// Returns the end opposite `guid`, treating the link as undirected.
    pub fn other_end(&self, guid: &Guid) -> Option<Guid> {
        self.end_of(guid).map(|end| self.guid_at(end.opposite()))
    }
}
