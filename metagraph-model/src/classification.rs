use crate::Properties;
use metagraph_types::EffectivityWindow;
use serde::{Deserialize, Serialize};

/// Reserved classification type marking an entity as soft-deleted.
pub const MEMENTO: &str = "Memento";

/// A classification attached to exactly one entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    pub type_name: String,
    #[serde(default)]
    pub properties: Properties,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effectivity: Option<EffectivityWindow>,
}

impl Classification {
    /// Creates a classification with no properties.
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            properties: Properties::new(),
            effectivity: None,
        }
    }

    /// Shorthand for a Memento classification.
    pub fn memento() -> Self {
        Self::new(MEMENTO)
    }

    /// Sets the effectivity window.
    #[must_use]
    pub fn with_effectivity(mut self, window: EffectivityWindow) -> Self {
        self.effectivity = Some(window);
        self
    }

    /// Returns true for the reserved soft-delete classification.
    pub fn is_memento(&self) -> bool {
        self.type_name == MEMENTO
    }
}
