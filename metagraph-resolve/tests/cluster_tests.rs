mod common;

use common::*;
use metagraph_model::{CreateTime, Entity, QueryFlags, Relationship, TypeId};
use metagraph_resolve::{ResolveError, ResolverConfig};
use pretty_assertions::assert_eq;
use std::collections::BTreeSet;

fn set(ns: &[u128]) -> BTreeSet<metagraph_model::Guid> {
    ns.iter().map(|n| guid(*n)).collect()
}

// ── Cluster discovery ────────────────────────────────────────────

#[test]
fn cluster_is_transitive() {
    let fx = fixture(with_expired());
    let resolver = fx.service.resolver();
    assert_eq!(resolver.cluster(&guid(A)).unwrap(), set(&[A, B, M, I]));
    assert_eq!(resolver.cluster(&guid(I)).unwrap(), set(&[A, B, M, I]));
}

#[test]
fn cluster_of_isolated_entity_is_itself() {
    let store = typed_store();
    store.add_entity(asset(A, 1, "solo"));
    let fx = fixture(store);
    assert_eq!(fx.service.resolver().cluster(&guid(A)).unwrap(), set(&[A]));
}

#[test]
fn cycles_and_repeated_links_terminate() {
    let store = pair();
    store.add_entity(asset(M, 300, "third"));
    link_duplicates(&store, 101, B, M);
    link_duplicates(&store, 102, M, A);
    link_duplicates(&store, 103, A, B);
    link_duplicates(&store, 104, A, A);
    let fx = fixture(store);
    assert_eq!(fx.service.resolver().cluster(&guid(B)).unwrap(), set(&[A, B, M]));
}

#[test]
fn other_relationship_types_do_not_join_clusters() {
    let store = pair();
    store.add_entity(asset(M, 300, "column"));
    store.add_relationship(Relationship::new(guid(500), TypeId::new(ATTR), guid(B), guid(M)));
    let fx = fixture(store);
    assert_eq!(fx.service.resolver().cluster(&guid(A)).unwrap(), set(&[A, B]));
}

#[test]
fn cluster_too_large_is_reported() {
    let store = pair();
    store.add_entity(asset(M, 300, "third"));
    link_duplicates(&store, 101, B, M);
    let config = ResolverConfig {
        max_cluster_size: 2,
        ..ResolverConfig::default()
    };
    let fx = fixture_with(store, config);

    let err = fx.service.resolver().cluster(&guid(A)).unwrap_err();
    assert!(matches!(err, ResolveError::ClusterTooLarge { limit: 2, .. }));
    assert!(fx.service.get_by_guid(&guid(A), &QueryFlags::default()).is_err());
}

#[test]
fn cluster_at_the_limit_is_accepted() {
    let config = ResolverConfig {
        max_cluster_size: 2,
        ..ResolverConfig::default()
    };
    let fx = fixture_with(pair(), config);
    assert_eq!(fx.service.resolver().cluster(&guid(A)).unwrap().len(), 2);
}

#[test]
fn paging_walks_every_link() {
    let store = typed_store();
    store.add_entity(asset(A, 1, "hub"));
    for n in 10..30u128 {
        store.add_entity(asset(n, n as u64, "spoke"));
        link_duplicates(&store, 1000 + n, A, n);
    }
    let config = ResolverConfig {
        page_size: 3,
        ..ResolverConfig::default()
    };
    let fx = fixture_with(store, config);
    assert_eq!(fx.service.resolver().cluster(&guid(A)).unwrap().len(), 21);
}

#[test]
fn missing_duplicate_type_is_unknown_type() {
    let store = std::sync::Arc::new(metagraph_store::InMemoryStore::new());
    store.add_entity(asset(A, 1, "untyped"));
    let fx = fixture(store);
    let err = fx.service.resolver().cluster(&guid(A)).unwrap_err();
    assert!(matches!(err, ResolveError::UnknownType(ref name) if name == "PeerDuplicateLink"));
}

// ── Winner selection ─────────────────────────────────────────────

#[test]
fn newest_create_time_wins() {
    let fx = fixture(with_expired());
    let resolver = fx.service.resolver();
    assert_eq!(resolver.resolve(&guid(A), &QueryFlags::default()).unwrap(), guid(I));
}

#[test]
fn ties_go_to_the_smallest_guid() {
    let store = typed_store();
    for n in [7u128, 3, 5] {
        store.add_entity(Entity::new(guid(n), "Asset", CreateTime::new(500, 0)));
    }
    link_duplicates(&store, 100, 7, 3);
    link_duplicates(&store, 101, 3, 5);
    let fx = fixture(store);
    for n in [7u128, 3, 5] {
        assert_eq!(
            fx.service.resolver().resolve(&guid(n), &QueryFlags::default()).unwrap(),
            guid(3)
        );
    }
}

#[test]
fn sequence_breaks_equal_wall_times() {
    let store = typed_store();
    store.add_entity(Entity::new(guid(1), "Asset", CreateTime::new(500, 0)));
    store.add_entity(Entity::new(guid(2), "Asset", CreateTime::new(500, 4)));
    link_duplicates(&store, 100, 1, 2);
    let fx = fixture(store);
    assert_eq!(
        fx.service.resolver().resolve(&guid(1), &QueryFlags::default()).unwrap(),
        guid(2)
    );
}

#[test]
fn resolve_bypasses_clustering_for_duplicate_processing() {
    let store = std::sync::Arc::new(metagraph_store::InMemoryStore::new());
    let fx = fixture(store);
    // No type definitions at all: the bypass never touches the registry.
    assert_eq!(
        fx.service
            .resolver()
            .resolve(&guid(A), &QueryFlags::duplicate_processing())
            .unwrap(),
        guid(A)
    );
}

#[test]
fn winner_skips_dangling_members() {
    let store = pair();
    link_duplicates(&store, 150, A, 99);
    let fx = fixture(store);
    let resolver = fx.service.resolver();
    let members = resolver.cluster(&guid(A)).unwrap();
    assert!(members.contains(&guid(99)));
    assert_eq!(
        resolver.winner_of(&guid(A), &members, &QueryFlags::default()).unwrap().guid,
        guid(B)
    );
}

#[test]
fn fully_hidden_cluster_is_not_found() {
    let store = typed_store();
    store.add_entity(
        asset(A, 1, "gone").with_classification(metagraph_model::Classification::memento()),
    );
    let fx = fixture(store);
    let err = fx
        .service
        .resolver()
        .resolve(&guid(A), &QueryFlags::default())
        .unwrap_err();
    assert!(matches!(err, ResolveError::NotFound { guid } if guid == common::guid(A)));
}
