//! A small warehouse graph: three columns of one table, up to an endpoint.
//!
//! ```text
//! C1 C2 C3 ─AttributeForSchema─ TT ─SchemaAttributeType─ T ─AttributeForSchema─ ST
//!   ─AssetSchemaType─ SA ─DataContentForDataSet─ DB ─ConnectionToAsset─ CONN
//!   ─ConnectionEndpoint─ EP
//! ```

#![allow(dead_code)]

use metagraph_context::{ContextEventBuilder, ContextGraphWalker};
use metagraph_model::{
    Cardinality::{Many, One},
    CreateTime, Entity, Guid, Relationship, RelationshipTypeDef, TypeId,
};
use metagraph_resolve::{MetagraphConfig, RelationshipTypeRegistry};
use metagraph_store::InMemoryStore;
use std::sync::Arc;

pub const DUP: &str = "rt-dup";
pub const AFS: &str = "rt-afs";
pub const SAT: &str = "rt-sat";
pub const AST: &str = "rt-ast";
pub const DCDS: &str = "rt-dcds";
pub const CTA: &str = "rt-cta";
pub const CE: &str = "rt-ce";

pub const C1: u128 = 10;
pub const C2: u128 = 11;
pub const C3: u128 = 12;
pub const TT: u128 = 20;
pub const T: u128 = 30;
pub const ST: u128 = 40;
pub const SA: u128 = 50;
pub const DB: u128 = 60;
pub const CONN: u128 = 70;
pub const EP: u128 = 80;

pub fn guid(n: u128) -> Guid {
    Guid::from_u128(n)
}

pub fn entity(n: u128, type_name: &str, name: &str) -> Entity {
    Entity::new(guid(n), type_name, CreateTime::new(n as u64, 0)).with_property("name", name)
}

pub fn relate(store: &InMemoryStore, rel: u128, type_id: &str, end1: u128, end2: u128) {
    store.add_relationship(Relationship::new(guid(rel), TypeId::new(type_id), guid(end1), guid(end2)));
}

pub fn typed_store() -> Arc<InMemoryStore> {
    let store = Arc::new(InMemoryStore::new());
    for (id, name, end1, end2) in [
        (DUP, "PeerDuplicateLink", Many, Many),
        (AFS, "AttributeForSchema", One, Many),
        (SAT, "SchemaAttributeType", Many, One),
        (AST, "AssetSchemaType", One, One),
        (DCDS, "DataContentForDataSet", Many, Many),
        (CTA, "ConnectionToAsset", Many, One),
        (CE, "ConnectionEndpoint", One, Many),
    ] {
        store.add_typedef(RelationshipTypeDef::new(id, name, end1, end2));
    }
    store
}

pub fn warehouse() -> Arc<InMemoryStore> {
    let store = typed_store();
    store.add_entity(
        entity(C1, "RelationalColumn", "customer_id")
            .with_property("dataType", "INT")
            .with_property("position", 1),
    );
    store.add_entity(
        entity(C2, "RelationalColumn", "email")
            .with_property("dataType", "VARCHAR")
            .with_property("position", "3"),
    );
    store.add_entity(
        entity(C3, "RelationalColumn", "full_name")
            .with_property("dataType", "VARCHAR")
            .with_property("position", 2),
    );
    store.add_entity(entity(TT, "RelationalTableType", "customers_type"));
    store.add_entity(entity(T, "RelationalTable", "customers"));
    store.add_entity(entity(ST, "RelationalDBSchemaType", "sales_schema_type"));
    store.add_entity(entity(SA, "DeployedDatabaseSchema", "sales"));
    store.add_entity(entity(DB, "Database", "warehouse"));
    store.add_entity(entity(CONN, "Connection", "warehouse connection"));
    store.add_entity(
        entity(EP, "Endpoint", "warehouse endpoint")
            .with_property("networkAddress", "db.example.com")
            .with_property("port", 5432)
            .with_property("protocol", "postgresql"),
    );

    relate(&store, 100, AFS, TT, C1);
    relate(&store, 101, AFS, TT, C2);
    relate(&store, 102, AFS, TT, C3);
    relate(&store, 110, SAT, T, TT);
    relate(&store, 120, AFS, ST, T);
    relate(&store, 130, AST, SA, ST);
    relate(&store, 140, DCDS, DB, SA);
    relate(&store, 150, CTA, CONN, DB);
    relate(&store, 160, CE, EP, CONN);
    store
}

pub fn walker_with(store: Arc<InMemoryStore>, config: &MetagraphConfig) -> ContextGraphWalker {
    let registry = Arc::new(RelationshipTypeRegistry::new(store.clone()));
    ContextGraphWalker::new(store, registry, config)
}

pub fn walker(store: Arc<InMemoryStore>) -> ContextGraphWalker {
    walker_with(store, &MetagraphConfig::default())
}

pub fn builder(store: Arc<InMemoryStore>) -> ContextEventBuilder {
    ContextEventBuilder::new(walker(store))
}
