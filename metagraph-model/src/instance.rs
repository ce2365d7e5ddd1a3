use crate::{Classification, Entity, Relationship};
use metagraph_types::EffectivityWindow;

/// The view of an instance that visibility rules work from.
///
/// Entities, relationships and classifications are all filtered by the
/// same rules, so they expose the same two facts.
pub trait Instance {
    /// Classifications attached to this instance.
    fn classifications(&self) -> &[Classification] {
        &[]
    }

    /// The instance's effectivity window, if it has one.
    fn effectivity(&self) -> Option<&EffectivityWindow>;
}

impl Instance for Entity {
    fn classifications(&self) -> &[Classification] {
        &self.classifications
    }

    fn effectivity(&self) -> Option<&EffectivityWindow> {
        self.effectivity.as_ref()
    }
}

impl Instance for Relationship {
    fn effectivity(&self) -> Option<&EffectivityWindow> {
        self.effectivity.as_ref()
    }
}

impl Instance for Classification {
    fn effectivity(&self) -> Option<&EffectivityWindow> {
        self.effectivity.as_ref()
    }
}
