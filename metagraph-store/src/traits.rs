use crate::{PagingOptions, StoreResult};
use metagraph_model::{Entity, Guid, Relationship, RelationshipTypeDef, TypeId};

/// Source of instance data.
///
/// Every call returns a fresh snapshot; the caller holds no references
/// into the store between calls.
pub trait EntityStore: Send + Sync {
    /// Fetches one entity. `Ok(None)` if the GUID is unknown.
    fn get_entity(&self, guid: &Guid) -> StoreResult<Option<Entity>>;

    /// Fetches one page of relationships of the given type with `guid` at
    /// either end.
    fn relationships_for_entity(
        &self,
        guid: &Guid,
        relationship_type: &TypeId,
        paging: PagingOptions,
    ) -> StoreResult<Vec<Relationship>>;

    /// Fetches one page of entities whose properties match `text`,
    /// optionally restricted to one entity type name.
    fn find_entities_by_text(
        &self,
        text: &str,
        type_filter: Option<&str>,
        paging: PagingOptions,
    ) -> StoreResult<Vec<Entity>>;
}

/// Source of relationship type metadata.
pub trait TypeDefStore: Send + Sync {
    /// Looks up a relationship type by name.
    fn typedef_by_name(&self, type_name: &str) -> StoreResult<Option<RelationshipTypeDef>>;

    /// Looks up a relationship type by identifier.
    fn typedef_by_id(&self, type_id: &TypeId) -> StoreResult<Option<RelationshipTypeDef>>;
}
