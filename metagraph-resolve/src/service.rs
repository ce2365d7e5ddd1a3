//! Metadata element service: the public lookup façade.
//!
//! Combines raw store reads with visibility rules and duplicate-cluster
//! resolution to answer "get by identifier" and "search by text".

use crate::{
    DuplicateClusterResolver, RelationshipTypeRegistry, ResolveError, ResolveResult,
    ResolverConfig, VisibilityPolicy,
};
use metagraph_model::{Entity, Guid, QueryFlags};
use metagraph_store::{collect_pages, EntityStore};
use std::collections::HashSet;
use std::sync::Arc;
use tracing::debug;

/// Resolves identifiers and text searches to representative entities.
///
/// Holds no per-request state: every call reads a fresh snapshot from the
/// store, so calls may run concurrently and retries are always safe.
pub struct MetadataElementService {
    store: Arc<dyn EntityStore>,
    resolver: DuplicateClusterResolver,
}

impl MetadataElementService {
    /// Creates the service and its cluster resolver.
    pub fn new(
        store: Arc<dyn EntityStore>,
        registry: Arc<RelationshipTypeRegistry>,
        config: ResolverConfig,
    ) -> Self {
        let resolver = DuplicateClusterResolver::new(Arc::clone(&store), registry, config);
        Self { store, resolver }
    }

    /// Returns the cluster resolver.
    pub fn resolver(&self) -> &DuplicateClusterResolver {
        &self.resolver
    }

    /// Returns the entity that represents `guid` under `flags`.
    ///
    /// - Unknown GUID, or a GUID whose own entity is hidden under `flags`
    ///   → `NotFound`.
    /// - `for_duplicate_processing`: the raw entity itself.
    /// - Otherwise: the visible winner of its duplicate cluster.
    pub fn get_by_guid(&self, guid: &Guid, flags: &QueryFlags) -> ResolveResult<Entity> {
        let Some(raw) = self.store.get_entity(guid)? else {
            return Err(ResolveError::NotFound { guid: *guid });
        };
        if !VisibilityPolicy::visible(&raw, flags) {
            debug!("{} is hidden under {:?}", guid, flags);
            return Err(ResolveError::NotFound { guid: *guid });
        }

        if flags.for_duplicate_processing {
            return Ok(raw);
        }

        let winner = self.resolver.resolve_entity(guid, flags)?;
        if winner.guid != *guid {
            debug!("{} resolved to duplicate {}", guid, winner.guid);
        }
        Ok(winner)
    }

    /// Searches by text and returns at most one entity per duplicate
    /// cluster touched by the raw matches.
    ///
    /// Every cluster with a raw match contributes its visible winner, even
    /// when the matching member itself is hidden. With
    /// `for_duplicate_processing` a cluster is instead represented by its
    /// first visible raw match. Clusters with nothing visible are skipped.
    /// Order follows the first contributing raw match of each cluster.
    pub fn find_by_text(
        &self,
        text: &str,
        type_filter: Option<&str>,
        flags: &QueryFlags,
    ) -> ResolveResult<Vec<Entity>> {
        let config = self.resolver.config();
        let matches = collect_pages(config.page_size, Some(config.max_search_results), |paging| {
            self.store.find_entities_by_text(text, type_filter, paging)
        })?;
        debug!("Text search {:?} returned {} raw matches", text, matches.len());

        let mut covered: HashSet<Guid> = HashSet::new();
        let mut results = Vec::new();

        for raw in matches {
            if covered.contains(&raw.guid) {
                continue;
            }
            if flags.for_duplicate_processing {
                if VisibilityPolicy::visible(&raw, flags) {
                    covered.extend(self.resolver.cluster(&raw.guid)?);
                    results.push(raw);
                }
                continue;
            }

            let members = self.resolver.cluster(&raw.guid)?;
            covered.extend(members.iter().copied());
            match self.resolver.winner_of(&raw.guid, &members, flags) {
                Ok(winner) => results.push(winner),
                Err(e) if e.is_not_found() => {
                    debug!("No visible member in the cluster of search match {}", raw.guid);
                }
                Err(e) => return Err(e),
            }
        }

        Ok(results)
    }
}
