//! Context graph traversal.
//!
//! Follows a declared [`ContextPath`] from a start instance, one relationship
//! type per step. ONE-cardinality steps advance each branch to at most one
//! next instance; MANY steps fan a branch out into one branch per matching
//! relationship. A branch that cannot take a step is dropped, so callers only
//! ever see complete chains.

use crate::{ContextError, ContextResult};
use metagraph_model::{
    Cardinality, ContextPath, Direction, Entity, Guid, PathStep, QueryFlags, Relationship,
    RelationshipEnd, RelationshipTypeDef,
};
use metagraph_resolve::{
    DuplicateClusterResolver, MetagraphConfig, RelationshipTypeRegistry, ResolveError,
    VisibilityPolicy, WalkerConfig,
};
use metagraph_store::{collect_pages, EntityStore};
use serde::Serialize;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, warn};

/// How instances reached by a walk are interpreted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WalkMode {
    /// Follow stored relationships and return instances as stored.
    #[default]
    Raw,
    /// Skip relationships hidden under the flags and replace every reached
    /// instance with its duplicate-cluster winner.
    Resolved(QueryFlags),
}

impl WalkMode {
    fn flags(&self) -> Option<&QueryFlags> {
        match self {
            Self::Raw => None,
            Self::Resolved(flags) => Some(flags),
        }
    }
}

/// One complete chain: the start instance plus one instance per path step.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContextBranch {
    pub start: Entity,
    pub steps: Vec<Entity>,
}

impl ContextBranch {
    fn new(start: Entity) -> Self {
        Self {
            start,
            steps: Vec::new(),
        }
    }

    /// The instance reached after `step` hops (0 is the start).
    pub fn at(&self, step: usize) -> Option<&Entity> {
        match step {
            0 => Some(&self.start),
            n => self.steps.get(n - 1),
        }
    }

    /// The last instance on the branch.
    pub fn tip(&self) -> &Entity {
        self.steps.last().unwrap_or(&self.start)
    }

    /// Number of steps taken.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// GUIDs of every instance on the branch, start first.
    pub fn guids(&self) -> Vec<Guid> {
        std::iter::once(&self.start)
            .chain(&self.steps)
            .map(|e| e.guid)
            .collect()
    }
}

/// A branch under construction and the instances it has already visited.
#[derive(Clone)]
struct Partial {
    branch: ContextBranch,
    visited: HashSet<Guid>,
}

impl Partial {
    fn new(start: Entity) -> Self {
        let visited = HashSet::from([start.guid]);
        Self {
            branch: ContextBranch::new(start),
            visited,
        }
    }

    fn extend(&self, next: Entity) -> Self {
        let mut extended = self.clone();
        extended.visited.insert(next.guid);
        extended.branch.steps.push(next);
        extended
    }
}

/// The end a step moves to, given the end the current instance occupies.
fn target_end(relationship: &Relationship, current: &Guid, direction: Direction) -> Option<RelationshipEnd> {
    [RelationshipEnd::End1, RelationshipEnd::End2]
        .into_iter()
        .find(|end| relationship.guid_at(*end) == *current && direction.admits(*end))
        .map(RelationshipEnd::opposite)
}

/// Cardinality of the end a step moves to. `Both` may land on either end,
/// so the wider of the two applies.
fn step_cardinality(typedef: &RelationshipTypeDef, direction: Direction) -> Cardinality {
    match direction.from_end() {
        Some(from) => typedef.cardinality(from.opposite()),
        None => typedef.end1.cardinality.widest(typedef.end2.cardinality),
    }
}

/// Walks context paths over an [`EntityStore`].
pub struct ContextGraphWalker {
    store: Arc<dyn EntityStore>,
    registry: Arc<RelationshipTypeRegistry>,
    resolver: DuplicateClusterResolver,
    config: WalkerConfig,
}

impl ContextGraphWalker {
    pub fn new(
        store: Arc<dyn EntityStore>,
        registry: Arc<RelationshipTypeRegistry>,
        config: &MetagraphConfig,
    ) -> Self {
        let resolver = DuplicateClusterResolver::new(
            Arc::clone(&store),
            Arc::clone(&registry),
            config.resolver.clone(),
        );
        Self {
            store,
            registry,
            resolver,
            config: config.walker.clone(),
        }
    }

    pub fn store(&self) -> &Arc<dyn EntityStore> {
        &self.store
    }

    pub fn registry(&self) -> &Arc<RelationshipTypeRegistry> {
        &self.registry
    }

    pub fn config(&self) -> &WalkerConfig {
        &self.config
    }

    /// Walks `path` from `start` over raw, undeduplicated instances.
    pub fn walk(&self, start: &Guid, path: &ContextPath) -> ContextResult<Vec<ContextBranch>> {
        self.walk_with(start, path, WalkMode::Raw)
    }

    /// Walks `path` from `start` in the given mode.
    ///
    /// Returns only complete branches. Fails if the path is longer than
    /// `max_depth`, if the live branch count passes `max_branches`, if a
    /// step names an unknown relationship type, or if the start instance
    /// cannot be found.
    pub fn walk_with(
        &self,
        start: &Guid,
        path: &ContextPath,
        mode: WalkMode,
    ) -> ContextResult<Vec<ContextBranch>> {
        if path.len() > self.config.max_depth {
            return Err(ContextError::TraversalDepthExceeded {
                depth: path.len(),
                limit: self.config.max_depth,
            });
        }

        let start = self.start_entity(start, &mode)?;
        let mut frontier = vec![Partial::new(start)];

        for (index, step) in path.steps.iter().enumerate() {
            let typedef = self.registry.typedef(&step.relationship_type)?;
            let mut next = Vec::new();

            for partial in &frontier {
                for entity in self.advance(partial, step, &typedef, &mode)? {
                    next.push(partial.extend(entity));
                }
                if next.len() > self.config.max_branches {
                    return Err(ContextError::FanOutExceeded {
                        limit: self.config.max_branches,
                    });
                }
            }

            debug!(
                "Step {} ({}) of {}: {} -> {} branches",
                index,
                step.relationship_type,
                path.name,
                frontier.len(),
                next.len()
            );
            if next.is_empty() {
                return Ok(Vec::new());
            }
            frontier = next;
        }

        Ok(frontier.into_iter().map(|p| p.branch).collect())
    }

    fn start_entity(&self, guid: &Guid, mode: &WalkMode) -> ContextResult<Entity> {
        let Some(raw) = self.store.get_entity(guid)? else {
            return Err(ResolveError::NotFound { guid: *guid }.into());
        };
        match mode.flags() {
            None => Ok(raw),
            Some(flags) if !VisibilityPolicy::visible(&raw, flags) => {
                Err(ResolveError::NotFound { guid: *guid }.into())
            }
            Some(flags) => Ok(self.resolver.resolve_entity(guid, flags)?),
        }
    }

    /// The instances one branch reaches by taking `step`.
    fn advance(
        &self,
        partial: &Partial,
        step: &PathStep,
        typedef: &RelationshipTypeDef,
        mode: &WalkMode,
    ) -> ContextResult<Vec<Entity>> {
        let current = partial.branch.tip().guid;
        let relationships = collect_pages(self.config.page_size, None, |paging| {
            self.store
                .relationships_for_entity(&current, &typedef.type_id, paging)
        })?;

        let mut candidates: Vec<(Guid, Guid)> = relationships
            .iter()
            .filter(|rel| mode.flags().is_none_or(|flags| VisibilityPolicy::visible(*rel, flags)))
            .filter_map(|rel| {
                target_end(rel, &current, step.direction).map(|end| (rel.guid, rel.guid_at(end)))
            })
            .collect();
        candidates.sort();

        if candidates.is_empty() {
            debug!(
                "No {} relationship from {}; branch dropped",
                typedef.type_name, current
            );
            return Ok(Vec::new());
        }

        let mut reached = Vec::with_capacity(candidates.len());
        for (relationship, target) in candidates {
            let Some(entity) = self.reach(&relationship, &target, mode)? else {
                continue;
            };
            if partial.visited.contains(&entity.guid) {
                debug!("{} already on branch; dropping cycle", entity.guid);
                continue;
            }
            reached.push((relationship, entity));
        }

        // A ONE step follows the lowest relationship that actually resolves.
        if step_cardinality(typedef, step.direction) == Cardinality::One && reached.len() > 1 {
            warn!(
                "{} allows one relationship from {} but {} resolved; following {}",
                typedef.type_name,
                current,
                reached.len(),
                reached[0].0
            );
            reached.truncate(1);
        }
        Ok(reached.into_iter().map(|(_, entity)| entity).collect())
    }

    /// Fetches the instance at the far end of a relationship, or `None` if
    /// the branch through it should be dropped.
    fn reach(&self, relationship: &Guid, target: &Guid, mode: &WalkMode) -> ContextResult<Option<Entity>> {
        let Some(raw) = self.store.get_entity(target)? else {
            warn!(
                "Dangling reference: relationship {} points to missing entity {}",
                relationship, target
            );
            return Ok(None);
        };
        let Some(flags) = mode.flags() else {
            return Ok(Some(raw));
        };
        if !VisibilityPolicy::visible(&raw, flags) {
            debug!("{} hidden under {:?}", target, flags);
            return Ok(None);
        }
        match self.resolver.resolve_entity(target, flags) {
            Ok(winner) => Ok(Some(winner)),
            Err(e) if e.is_not_found() => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}
