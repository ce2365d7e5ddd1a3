//! Duplicate clusters and winner selection.
//!
//! Entities linked by peer-duplicate relationships describe the same
//! real-world thing. The transitive closure of those links partitions the
//! instance universe into clusters, and each cluster is represented by one
//! winning instance. Which instance wins depends on the query flags, so the
//! apparent representative of an identifier can change with the query mode
//! while the stored data never does.

use crate::{RelationshipTypeRegistry, ResolveError, ResolveResult, ResolverConfig, VisibilityPolicy};
use metagraph_model::{Entity, Guid, KnownRelationship, QueryFlags, TypeId};
use metagraph_store::{collect_pages, EntityStore};
use std::collections::{BTreeSet, VecDeque};
use std::sync::Arc;
use tracing::{debug, warn};

/// Computes duplicate clusters and picks their representative.
pub struct DuplicateClusterResolver {
    store: Arc<dyn EntityStore>,
    registry: Arc<RelationshipTypeRegistry>,
    config: ResolverConfig,
}

/// True if `candidate` should represent the cluster instead of `current`:
/// newest creation time wins, ties go to the smaller GUID.
fn outranks(candidate: &Entity, current: &Entity) -> bool {
    match candidate.create_time.cmp(&current.create_time) {
        std::cmp::Ordering::Greater => true,
        std::cmp::Ordering::Less => false,
        std::cmp::Ordering::Equal => candidate.guid < current.guid,
    }
}

impl DuplicateClusterResolver {
    pub fn new(
        store: Arc<dyn EntityStore>,
        registry: Arc<RelationshipTypeRegistry>,
        config: ResolverConfig,
    ) -> Self {
        Self {
            store,
            registry,
            config,
        }
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    fn duplicate_type_id(&self) -> ResolveResult<TypeId> {
        self.registry
            .resolve_type_id(KnownRelationship::PeerDuplicateLink.type_name())
    }

    /// Returns every GUID reachable from `guid` over peer-duplicate links,
    /// `guid` included.
    ///
    /// Breadth-first with a visited set, so cycles and cliques terminate.
    /// Fails with [`ResolveError::ClusterTooLarge`] once the cluster passes
    /// `max_cluster_size` members.
    pub fn cluster(&self, guid: &Guid) -> ResolveResult<BTreeSet<Guid>> {
        let duplicate_type = self.duplicate_type_id()?;
        let limit = self.config.max_cluster_size;

        let mut members = BTreeSet::from([*guid]);
        let mut queue = VecDeque::from([*guid]);

        while let Some(current) = queue.pop_front() {
            let links = collect_pages(self.config.page_size, None, |paging| {
                self.store
                    .relationships_for_entity(&current, &duplicate_type, paging)
            })?;

            for link in links {
                if !self.registry.role_of(&link)?.is_duplicate_link() {
                    debug!("Ignoring non-duplicate relationship {} on {}", link.guid, current);
                    continue;
                }
                let Some(peer) = link.other_end(&current) else {
                    continue;
                };
                if members.insert(peer) {
                    if members.len() > limit {
                        return Err(ResolveError::ClusterTooLarge { guid: *guid, limit });
                    }
                    queue.push_back(peer);
                }
            }
        }

        debug!("Duplicate cluster of {} has {} members", guid, members.len());
        Ok(members)
    }

    /// Returns the GUID that represents `guid` under `flags`.
    ///
    /// With `for_duplicate_processing` the GUID comes back unchanged and the
    /// caller must check visibility of that one instance itself. Otherwise
    /// the cluster is computed, hidden members are dropped and the newest
    /// remaining member wins.
    pub fn resolve(&self, guid: &Guid, flags: &QueryFlags) -> ResolveResult<Guid> {
        if flags.for_duplicate_processing {
            return Ok(*guid);
        }
        Ok(self.resolve_entity(guid, flags)?.guid)
    }

    /// Like [`resolve`](Self::resolve) in normal mode, but returns the
    /// winning entity itself.
    pub fn resolve_entity(&self, guid: &Guid, flags: &QueryFlags) -> ResolveResult<Entity> {
        let members = self.cluster(guid)?;
        self.winner_of(guid, &members, flags)
    }

    /// Picks the winner among `members` under `flags`.
    ///
    /// Members the store can no longer resolve are logged as dangling and
    /// skipped. Fails with [`ResolveError::NotFound`] (naming `origin`) if
    /// nothing visible remains.
    pub fn winner_of(
        &self,
        origin: &Guid,
        members: &BTreeSet<Guid>,
        flags: &QueryFlags,
    ) -> ResolveResult<Entity> {
        let mut best: Option<Entity> = None;

        for member in members {
            let Some(entity) = self.store.get_entity(member)? else {
                warn!(
                    "Dangling duplicate reference: cluster of {} names missing entity {}",
                    origin, member
                );
                continue;
            };
            if !VisibilityPolicy::visible(&entity, flags) {
                debug!("Cluster member {} hidden under {:?}", member, flags);
                continue;
            }
            best = match best {
                Some(current) if !outranks(&entity, &current) => Some(current),
                _ => Some(entity),
            };
        }

        best.ok_or(ResolveError::NotFound { guid: *origin })
    }
}
