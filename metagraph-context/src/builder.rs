//! Table context assembly.
//!
//! Turns a column identifier into one [`TableContext`] per structural path
//! from the column up to the endpoint serving its database. A column can be
//! reachable through several paths, so the result is always a list.

use crate::{ContextBranch, ContextGraphWalker, ContextResult, WalkMode};
use metagraph_model::{ContextPath, Entity, Guid, KnownRelationship, RelationshipEnd};
use metagraph_resolve::VisibilityPolicy;
use metagraph_store::collect_pages;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use tracing::{debug, warn};

// Positions on a `ContextPath::column_to_root` branch.
const TABLE_TYPE: usize = 1;
const TABLE: usize = 2;
const SCHEMA: usize = 4;
const DATABASE: usize = 5;
const ENDPOINT: usize = 7;

/// Property names read from each kind of instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContextFieldMap {
    /// Display name of tables, schemas, databases and columns.
    pub name: String,
    pub data_type: String,
    /// Ordinal position of a column within its table.
    pub position: String,
    pub network_address: String,
    pub port: String,
    pub protocol: String,
}

impl Default for ContextFieldMap {
    fn default() -> Self {
        Self {
            name: "name".to_string(),
            data_type: "dataType".to_string(),
            position: "position".to_string(),
            network_address: "networkAddress".to_string(),
            port: "port".to_string(),
            protocol: "protocol".to_string(),
        }
    }
}

/// A column of the table being described.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnContext {
    pub guid: Guid,
    pub name: Option<String>,
    pub data_type: Option<String>,
    pub position: Option<i64>,
}

/// Everything a downstream consumer needs to locate a column's table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableContext {
    pub table_name: Option<String>,
    pub schema_name: Option<String>,
    pub database_name: Option<String>,
    /// `address:port` of the endpoint, or the bare address without a port.
    pub host_port: Option<String>,
    pub protocol: Option<String>,
    /// Every column of the table, ordered by position then name.
    pub columns: Vec<ColumnContext>,
}

/// Builds [`TableContext`]s for columns.
pub struct ContextEventBuilder {
    walker: ContextGraphWalker,
    path: ContextPath,
    column_type_path: ContextPath,
    fields: ContextFieldMap,
    mode: WalkMode,
}

impl ContextEventBuilder {
    /// Creates a builder over the column-to-root path with default field
    /// names, walking raw instances.
    pub fn new(walker: ContextGraphWalker) -> Self {
        Self {
            walker,
            path: ContextPath::column_to_root(),
            column_type_path: ContextPath::column_type(),
            fields: ContextFieldMap::default(),
            mode: WalkMode::Raw,
        }
    }

    #[must_use]
    pub fn with_fields(mut self, fields: ContextFieldMap) -> Self {
        self.fields = fields;
        self
    }

    #[must_use]
    pub fn with_mode(mut self, mode: WalkMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn walker(&self) -> &ContextGraphWalker {
        &self.walker
    }

    /// Returns one context per complete path from `column` to an endpoint.
    /// An empty list means no path currently resolves.
    pub fn build(&self, column: &Guid) -> ContextResult<Vec<TableContext>> {
        let branches = self.walker.walk_with(column, &self.path, self.mode)?;
        debug!("Column {} has {} context branches", column, branches.len());

        branches
            .iter()
            .map(|branch| self.table_context(branch))
            .collect()
    }

    fn table_context(&self, branch: &ContextBranch) -> ContextResult<TableContext> {
        let name_of = |position: usize| {
            branch
                .at(position)
                .and_then(|e| e.get_str(&self.fields.name))
                .map(str::to_string)
        };
        let endpoint = branch.at(ENDPOINT);

        let mut columns = BTreeMap::new();
        columns.insert(branch.start.guid, self.column_context(&branch.start)?);
        if let Some(table_type) = branch.at(TABLE_TYPE) {
            for sibling in self.sibling_columns(table_type)? {
                if !columns.contains_key(&sibling.guid) {
                    let column = self.column_context(&sibling)?;
                    columns.insert(sibling.guid, column);
                }
            }
        }
        let mut columns: Vec<ColumnContext> = columns.into_values().collect();
        columns.sort_by(|a, b| {
            (a.position.is_none(), a.position, &a.name).cmp(&(b.position.is_none(), b.position, &b.name))
        });

        Ok(TableContext {
            table_name: name_of(TABLE),
            schema_name: name_of(SCHEMA),
            database_name: name_of(DATABASE),
            host_port: endpoint.and_then(|e| self.host_port(e)),
            protocol: endpoint
                .and_then(|e| e.get_str(&self.fields.protocol))
                .map(str::to_string),
            columns,
        })
    }

    /// Every column attached to `table_type`, the column's own table type.
    fn sibling_columns(&self, table_type: &Entity) -> ContextResult<Vec<Entity>> {
        let registry = self.walker.registry();
        let store = self.walker.store();
        let type_id = registry.resolve_type_id(KnownRelationship::AttributeForSchema.type_name())?;
        let page_size = self.walker.config().page_size;

        let relationships = collect_pages(page_size, None, |paging| {
            store.relationships_for_entity(&table_type.guid, &type_id, paging)
        })?;

        let mut siblings = Vec::new();
        for rel in relationships {
            if rel.end1 != table_type.guid {
                continue;
            }
            let flags = match self.mode {
                WalkMode::Raw => None,
                WalkMode::Resolved(flags) => Some(flags),
            };
            if flags.is_some_and(|f| !VisibilityPolicy::visible(&rel, &f)) {
                continue;
            }
            let column_guid = rel.guid_at(RelationshipEnd::End2);
            match store.get_entity(&column_guid)? {
                Some(column) if flags.is_none_or(|f| VisibilityPolicy::visible(&column, &f)) => {
                    siblings.push(column);
                }
                Some(_) => {}
                None => warn!(
                    "Dangling reference: relationship {} points to missing column {}",
                    rel.guid, column_guid
                ),
            }
        }
        Ok(siblings)
    }

    /// A column's data type comes from the column itself, falling back to
    /// its column type entity.
    fn column_context(&self, column: &Entity) -> ContextResult<ColumnContext> {
        let data_type = match column.get_str(&self.fields.data_type) {
            Some(data_type) => Some(data_type.to_string()),
            None => self
                .column_type(column)?
                .and_then(|t| t.get_str(&self.fields.data_type).map(str::to_string)),
        };
        Ok(ColumnContext {
            guid: column.guid,
            name: column.get_str(&self.fields.name).map(str::to_string),
            data_type,
            position: column.get_i64(&self.fields.position),
        })
    }

    fn column_type(&self, column: &Entity) -> ContextResult<Option<Entity>> {
        let branches = self
            .walker
            .walk_with(&column.guid, &self.column_type_path, self.mode)?;
        Ok(branches.into_iter().next().map(|branch| branch.tip().clone()))
    }

    fn host_port(&self, endpoint: &Entity) -> Option<String> {
        let address = endpoint.get_str(&self.fields.network_address)?;
        let port = match endpoint.properties.get(&self.fields.port) {
            Some(Value::Number(n)) => Some(n.to_string()),
            Some(Value::String(s)) if !s.is_empty() => Some(s.clone()),
            _ => None,
        };
        Some(match port {
            Some(port) => format!("{address}:{port}"),
            None => address.to_string(),
        })
    }
}
