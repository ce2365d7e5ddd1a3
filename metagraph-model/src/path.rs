use crate::{KnownRelationship, RelationshipEnd};
use serde::{Deserialize, Serialize};

/// Which end of a step's relationship the current instance sits at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Current instance is end1; the next instance is end2.
    #[default]
    Outgoing,
    /// Current instance is end2; the next instance is end1.
    Incoming,
    /// Either end; the next instance is whichever end is not current.
    Both,
}

impl Direction {
    /// The end the current instance must occupy, or `None` for `Both`.
    pub const fn from_end(self) -> Option<RelationshipEnd> {
        match self {
            Self::Outgoing => Some(RelationshipEnd::End1),
            Self::Incoming => Some(RelationshipEnd::End2),
            Self::Both => None,
        }
    }

    /// Returns true if a relationship with the current instance at `end`
    /// can be followed in this direction.
    pub fn admits(self, end: RelationshipEnd) -> bool {
        self.from_end().is_none_or(|required| required == end)
    }
}

/// One hop of a [`ContextPath`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathStep {
    pub relationship_type: String,
    #[serde(default)]
    pub direction: Direction,
}

impl PathStep {
    /// Creates a step over the named relationship type.
    pub fn new(relationship_type: impl Into<String>, direction: Direction) -> Self {
        Self {
            relationship_type: relationship_type.into(),
            direction,
        }
    }

    /// Creates a step over a known relationship role.
    pub fn role(role: &KnownRelationship, direction: Direction) -> Self {
        Self::new(role.type_name(), direction)
    }
}

/// A declared chain of relationship steps from a leaf type toward a root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextPath {
    pub name: String,
    pub steps: Vec<PathStep>,
}

impl ContextPath {
    /// Creates an empty path.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            steps: Vec::new(),
        }
    }

    /// Appends a step.
    #[must_use]
    pub fn then(mut self, relationship_type: impl Into<String>, direction: Direction) -> Self {
        self.steps.push(PathStep::new(relationship_type, direction));
        self
    }

    /// Number of steps.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// True if the path has no steps.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// The path from a relational column up to the endpoint serving its
    /// database. Every hop moves from a child (end2) to its owner (end1):
    ///
    /// column → table type → table → schema type → schema asset →
    /// database → connection → endpoint
    ///
    /// The column's own type entity is not on this path; see
    /// [`ContextPath::column_type`].
    pub fn column_to_root() -> Self {
        use KnownRelationship as R;
        Self::new("column-to-root")
            .then(R::AttributeForSchema.type_name(), Direction::Incoming)
            .then(R::SchemaAttributeType.type_name(), Direction::Incoming)
            .then(R::AttributeForSchema.type_name(), Direction::Incoming)
            .then(R::AssetSchemaType.type_name(), Direction::Incoming)
            .then(R::DataContentForDataSet.type_name(), Direction::Incoming)
            .then(R::ConnectionToAsset.type_name(), Direction::Incoming)
            .then(R::ConnectionEndpoint.type_name(), Direction::Incoming)
    }

    /// The single hop from a column (end1) to its column type entity (end2).
    pub fn column_type() -> Self {
        Self::new("column-type").then(
            KnownRelationship::SchemaAttributeType.type_name(),
            Direction::Outgoing,
        )
    }
}
