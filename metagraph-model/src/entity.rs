use crate::Classification;
use metagraph_types::{CreateTime, EffectivityWindow, Guid};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Property mapping carried by every instance kind. Keys are unique.
pub type Properties = serde_json::Map<String, Value>;

/// A typed entity in the instance graph.
///
/// All entity types flow through this one structure. The `properties`
/// mapping holds whatever attributes the entity's type defines; callers
/// look them up by name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pub guid: Guid,
    pub type_name: String,
    #[serde(default)]
    pub properties: Properties,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub classifications: Vec<Classification>,
    pub create_time: CreateTime,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effectivity: Option<EffectivityWindow>,
}

impl Entity {
    /// Creates an entity with no properties, classifications or window.
    pub fn new(guid: Guid, type_name: impl Into<String>, create_time: CreateTime) -> Self {
        Self {
            guid,
            type_name: type_name.into(),
            properties: Properties::new(),
            classifications: Vec::new(),
            create_time,
            effectivity: None,
        }
    }

    /// Sets a property, replacing any previous value under the same key.
    #[must_use]
    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }

    /// Attaches a classification.
    #[must_use]
    pub fn with_classification(mut self, classification: Classification) -> Self {
        self.classifications.push(classification);
        self
    }

    /// Sets the effectivity window.
    #[must_use]
    pub fn with_effectivity(mut self, window: EffectivityWindow) -> Self {
        self.effectivity = Some(window);
        self
    }

    /// Returns the first attached classification with the given type name.
    pub fn classification(&self, type_name: &str) -> Option<&Classification> {
        self.classifications.iter().find(|c| c.type_name == type_name)
    }

    /// Returns true if a Memento classification is attached, regardless of
    /// its effectivity.
    pub fn is_memento(&self) -> bool {
        self.classifications.iter().any(Classification::is_memento)
    }

    /// Extract a string property.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.properties.get(key).and_then(|v| v.as_str())
    }

    /// Extract an integer property. Numeric strings are accepted, since
    /// many catalogues store ports and positions as text.
    pub fn get_i64(&self, key: &str) -> Option<i64> {
        match self.properties.get(key)? {
            Value::Number(n) => n.as_i64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }
}
