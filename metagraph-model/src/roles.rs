use std::fmt;

/// Relationship roles the core dispatches on.
///
/// Resolved once per relationship through the type registry instead of
/// comparing raw type identifiers at each call site. Anything the core has
/// no special behaviour for is `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum KnownRelationship {
    /// Undirected link between two entities describing the same thing.
    PeerDuplicateLink,
    /// Attribute (end1) → its type entity (end2).
    SchemaAttributeType,
    /// Schema type (end1) → one of its attributes (end2).
    AttributeForSchema,
    /// Asset (end1) → its schema type (end2).
    AssetSchemaType,
    /// Data source (end1) → data set it holds (end2).
    DataContentForDataSet,
    /// Connection (end1) → asset it reaches (end2).
    ConnectionToAsset,
    /// Endpoint (end1) → connection using it (end2).
    ConnectionEndpoint,
    Other(String),
}

impl KnownRelationship {
    /// Maps a type name to its role.
    pub fn from_type_name(type_name: &str) -> Self {
        match type_name {
            "PeerDuplicateLink" => Self::PeerDuplicateLink,
            "SchemaAttributeType" => Self::SchemaAttributeType,
            "AttributeForSchema" => Self::AttributeForSchema,
            "AssetSchemaType" => Self::AssetSchemaType,
            "DataContentForDataSet" => Self::DataContentForDataSet,
            "ConnectionToAsset" => Self::ConnectionToAsset,
            "ConnectionEndpoint" => Self::ConnectionEndpoint,
            other => Self::Other(other.to_string()),
        }
    }

    /// The platform type name for this role.
    pub fn type_name(&self) -> &str {
        match self {
            Self::PeerDuplicateLink => "PeerDuplicateLink",
            Self::SchemaAttributeType => "SchemaAttributeType",
            Self::AttributeForSchema => "AttributeForSchema",
            Self::AssetSchemaType => "AssetSchemaType",
            Self::DataContentForDataSet => "DataContentForDataSet",
            Self::ConnectionToAsset => "ConnectionToAsset",
            Self::ConnectionEndpoint => "ConnectionEndpoint",
            Self::Other(name) => name,
        }
    }

    /// True for the duplicate-link role.
    pub fn is_duplicate_link(&self) -> bool {
        matches!(self, Self::PeerDuplicateLink)
    }
}

impl fmt::Display for KnownRelationship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name())
    }
}
