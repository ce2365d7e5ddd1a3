use metagraph_types::TypeId;
use serde::{Deserialize, Serialize};

/// Describes a relationship type as published by the platform type system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationshipTypeDef {
    pub type_id: TypeId,
    pub type_name: String,
    pub end1: EndDef,
    pub end2: EndDef,
}

impl RelationshipTypeDef {
    /// Creates a type definition with anonymous ends.
    pub fn new(
        type_id: impl Into<TypeId>,
        type_name: impl Into<String>,
        end1: Cardinality,
        end2: Cardinality,
    ) -> Self {
        Self {
            type_id: type_id.into(),
            type_name: type_name.into(),
            end1: EndDef::anonymous(end1),
            end2: EndDef::anonymous(end2),
        }
    }

    /// Returns the definition of one end.
    pub fn end(&self, end: RelationshipEnd) -> &EndDef {
        match end {
            RelationshipEnd::End1 => &self.end1,
            RelationshipEnd::End2 => &self.end2,
        }
    }

    /// Returns the cardinality of one end.
    pub fn cardinality(&self, end: RelationshipEnd) -> Cardinality {
        self.end(end).cardinality
    }
}

/// One end of a relationship type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndDef {
    /// Attribute name the platform uses for instances at this end
    /// (e.g. "parentSchemas"). Informational only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attribute_name: Option<String>,
    pub cardinality: Cardinality,
}

impl EndDef {
    /// An end with no attribute name.
    pub fn anonymous(cardinality: Cardinality) -> Self {
        Self {
            attribute_name: None,
            cardinality,
        }
    }
}

/// How many instances may sit at one end of a relationship type, per
/// instance at the other end.
///
/// A step that moves to a `One` end yields at most one next instance;
/// a step that moves to a `Many` end fans out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Cardinality {
    One,
    Many,
}

impl Cardinality {
    /// `Many` if either side is `Many`.
    #[must_use]
    pub fn widest(self, other: Self) -> Self {
        if self == Self::Many || other == Self::Many {
            Self::Many
        } else {
            Self::One
        }
    }
}

/// Identifies one end of a relationship.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelationshipEnd {
    End1,
    End2,
}

impl RelationshipEnd {
    /// The other end.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::End1 => Self::End2,
            Self::End2 => Self::End1,
        }
    }
}
