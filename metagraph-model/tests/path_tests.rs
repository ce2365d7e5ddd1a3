use chrono::Utc;
use metagraph_model::{ContextPath, Direction, PathStep, QueryFlags, RelationshipEnd};
use pretty_assertions::assert_eq;

// ── Direction ────────────────────────────────────────────────────

#[test]
fn direction_admits_matching_end() {
    assert!(Direction::Outgoing.admits(RelationshipEnd::End1));
    assert!(!Direction::Outgoing.admits(RelationshipEnd::End2));
    assert!(Direction::Incoming.admits(RelationshipEnd::End2));
    assert!(!Direction::Incoming.admits(RelationshipEnd::End1));
    assert!(Direction::Both.admits(RelationshipEnd::End1));
    assert!(Direction::Both.admits(RelationshipEnd::End2));
}

// ── ContextPath ──────────────────────────────────────────────────

#[test]
fn builder_appends_steps_in_order() {
    let path = ContextPath::new("test")
        .then("A", Direction::Outgoing)
        .then("B", Direction::Incoming);
    assert_eq!(path.len(), 2);
    assert_eq!(path.steps[0], PathStep::new("A", Direction::Outgoing));
    assert_eq!(path.steps[1], PathStep::new("B", Direction::Incoming));
}

#[test]
fn column_to_root_walks_to_endpoint() {
    let path = ContextPath::column_to_root();
    let names: Vec<&str> = path.steps.iter().map(|s| s.relationship_type.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "AttributeForSchema",
            "SchemaAttributeType",
            "AttributeForSchema",
            "AssetSchemaType",
            "DataContentForDataSet",
            "ConnectionToAsset",
            "ConnectionEndpoint",
        ]
    );
    assert!(path.steps.iter().all(|s| s.direction == Direction::Incoming));
}

#[test]
fn column_type_is_one_outgoing_hop() {
    let path = ContextPath::column_type();
    assert_eq!(path.steps, vec![PathStep::new("SchemaAttributeType", Direction::Outgoing)]);
}

#[test]
fn path_deserializes_with_default_direction() {
    let path: ContextPath = serde_json::from_str(
        r#"{"name":"p","steps":[{"relationship_type":"X"}]}"#,
    )
    .unwrap();
    assert_eq!(path.steps[0].direction, Direction::Outgoing);
}

// ── QueryFlags ───────────────────────────────────────────────────

#[test]
fn default_flags_apply_no_temporal_filter() {
    let flags = QueryFlags::default();
    assert!(!flags.for_duplicate_processing);
    assert!(!flags.for_lineage);
    assert_eq!(flags.effective_time, None);
}

#[test]
fn flag_builders_compose() {
    let now = Utc::now();
    let flags = QueryFlags::lineage().with_effective_time(Some(now));
    assert!(flags.for_lineage);
    assert_eq!(flags.effective_time, Some(now));
    assert!(QueryFlags::duplicate_processing().for_duplicate_processing);
    assert_eq!(QueryFlags::at(now).effective_time, Some(now));
}
