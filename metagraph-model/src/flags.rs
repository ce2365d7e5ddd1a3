use metagraph_types::Instant;
use serde::{Deserialize, Serialize};

/// Query mode consumed by every public resolution call.
///
/// The default applies full deduplication, hides soft-deleted instances and
/// applies no temporal filtering. An absent `effective_time` is not "now":
/// callers pass the current instant explicitly to enable time-based
/// exclusion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct QueryFlags {
    /// Bypass duplicate-cluster resolution; visibility still applies.
    #[serde(default)]
    pub for_duplicate_processing: bool,
    /// Include Memento-classified (soft-deleted) instances.
    #[serde(default)]
    pub for_lineage: bool,
    /// Exclude instances whose effectivity window omits this instant.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effective_time: Option<Instant>,
}

impl QueryFlags {
    /// Flags for duplicate processing.
    pub fn duplicate_processing() -> Self {
        Self {
            for_duplicate_processing: true,
            ..Self::default()
        }
    }

    /// Flags for lineage queries.
    pub fn lineage() -> Self {
        Self {
            for_lineage: true,
            ..Self::default()
        }
    }

    /// Flags with only an effective time set.
    pub fn at(effective_time: Instant) -> Self {
        Self {
            effective_time: Some(effective_time),
            ..Self::default()
        }
    }

    /// Sets `for_lineage`.
    #[must_use]
    pub fn with_lineage(mut self, for_lineage: bool) -> Self {
        self.for_lineage = for_lineage;
        self
    }

    /// Sets `for_duplicate_processing`.
    #[must_use]
    pub fn with_duplicate_processing(mut self, for_duplicate_processing: bool) -> Self {
        self.for_duplicate_processing = for_duplicate_processing;
        self
    }

    /// Sets the effective time.
    #[must_use]
    pub fn with_effective_time(mut self, effective_time: Option<Instant>) -> Self {
        self.effective_time = effective_time;
        self
    }
}
