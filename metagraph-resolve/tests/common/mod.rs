//! Shared graph fixtures for resolution tests.

#![allow(dead_code)]

use chrono::{TimeZone, Utc};
use metagraph_model::{
    Cardinality, Classification, CreateTime, EffectivityWindow, Entity, Guid, Instant,
    Relationship, RelationshipTypeDef, TypeId,
};
use metagraph_resolve::{MetadataElementService, RelationshipTypeRegistry, ResolverConfig};
use metagraph_store::InMemoryStore;
use std::sync::Arc;

pub const DUP: &str = "rt-peer-duplicate";
pub const ATTR: &str = "rt-attribute-for-schema";

pub const A: u128 = 1;
pub const B: u128 = 2;
pub const M: u128 = 3;
pub const I: u128 = 4;

pub fn guid(n: u128) -> Guid {
    Guid::from_u128(n)
}

/// A fixed "now" so effectivity tests do not depend on the wall clock.
pub fn now() -> Instant {
    Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap()
}

pub fn yesterday() -> Instant {
    now() - chrono::Duration::days(1)
}

pub fn asset(n: u128, created: u64, name: &str) -> Entity {
    Entity::new(guid(n), "Asset", CreateTime::new(created, 0)).with_property("name", name)
}

pub fn typed_store() -> Arc<InMemoryStore> {
    let store = Arc::new(InMemoryStore::new());
    store.add_typedef(RelationshipTypeDef::new(
        DUP,
        "PeerDuplicateLink",
        Cardinality::Many,
        Cardinality::Many,
    ));
    store.add_typedef(RelationshipTypeDef::new(
        ATTR,
        "AttributeForSchema",
        Cardinality::One,
        Cardinality::Many,
    ));
    store
}

pub fn link_duplicates(store: &InMemoryStore, rel: u128, end1: u128, end2: u128) {
    store.add_relationship(Relationship::new(guid(rel), TypeId::new(DUP), guid(end1), guid(end2)));
}

pub struct Fixture {
    pub store: Arc<InMemoryStore>,
    pub registry: Arc<RelationshipTypeRegistry>,
    pub service: MetadataElementService,
}

pub fn fixture_with(store: Arc<InMemoryStore>, config: ResolverConfig) -> Fixture {
    let registry = Arc::new(RelationshipTypeRegistry::new(store.clone()));
    let service = MetadataElementService::new(store.clone(), Arc::clone(&registry), config);
    Fixture {
        store,
        registry,
        service,
    }
}

pub fn fixture(store: Arc<InMemoryStore>) -> Fixture {
    fixture_with(store, ResolverConfig::default())
}

/// A (t=100) and B (t=200), peer duplicates of each other.
pub fn pair() -> Arc<InMemoryStore> {
    let store = typed_store();
    store.add_entity(asset(A, 100, "customer master"));
    store.add_entity(asset(B, 200, "customer master copy"));
    link_duplicates(&store, 100, A, B);
    store
}

/// `pair()` plus M (t=300, Memento) linked to A.
pub fn with_memento() -> Arc<InMemoryStore> {
    let store = pair();
    store.add_entity(
        asset(M, 300, "customer master retired").with_classification(Classification::memento()),
    );
    link_duplicates(&store, 101, A, M);
    store
}

/// `with_memento()` plus I (t=400) whose effectivity ended yesterday,
/// linked to B.
pub fn with_expired() -> Arc<InMemoryStore> {
    let store = with_memento();
    store.add_entity(
        asset(I, 400, "customer master expired")
            .with_effectivity(EffectivityWindow::ending(yesterday())),
    );
    link_duplicates(&store, 102, B, I);
    store
}
