//! Visibility rules shared by every query mode.

use metagraph_model::{Instance, QueryFlags};

/// Decides whether a single instance is visible under a query mode.
///
/// Only `for_lineage` and `effective_time` are consulted; the duplicate
/// processing flag belongs to cluster resolution.
pub struct VisibilityPolicy;

impl VisibilityPolicy {
    /// Applies the rules in order:
    /// 1. a Memento classification in effect hides the instance unless
    ///    `for_lineage` is set;
    /// 2. with an effective time, an effectivity window that excludes it
    ///    hides the instance;
    /// 3. otherwise the instance is visible.
    pub fn visible<I: Instance + ?Sized>(instance: &I, flags: &QueryFlags) -> bool {
        if !flags.for_lineage && Self::is_soft_deleted(instance, flags) {
            return false;
        }
        Self::in_effect(instance, flags)
    }

    /// True if the instance's window admits the effective time, or either
    /// is absent.
    pub fn in_effect<I: Instance + ?Sized>(instance: &I, flags: &QueryFlags) -> bool {
        match (flags.effective_time, instance.effectivity()) {
            (Some(at), Some(window)) => window.contains(at),
            _ => true,
        }
    }

    /// True if a Memento classification currently applies to the instance.
    /// A Memento whose own window excludes the effective time is ignored.
    pub fn is_soft_deleted<I: Instance + ?Sized>(instance: &I, flags: &QueryFlags) -> bool {
        instance
            .classifications()
            .iter()
            .any(|c| c.is_memento() && Self::in_effect(c, flags))
    }
}
