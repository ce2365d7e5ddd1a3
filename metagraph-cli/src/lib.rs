//! Command-line front end for the metagraph core.
//!
//! Loads a [`GraphSnapshot`] into an in-memory store and answers one query
//! against it. Every command produces a JSON value.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use metagraph_context::{ContextEventBuilder, ContextGraphWalker};
use metagraph_model::{Guid, Instant, QueryFlags};
use metagraph_resolve::{MetadataElementService, MetagraphConfig, RelationshipTypeRegistry};
use metagraph_store::GraphSnapshot;
use serde_json::{json, Value};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "metagraph")]
#[command(about = "Resolve identities and context over a metadata instance graph")]
pub struct Cli {
    /// Instance graph snapshot (JSON)
    #[arg(short, long)]
    pub snapshot: PathBuf,

    /// Configuration file
    #[arg(short, long, default_value = "metagraph.toml")]
    pub config: PathBuf,

    /// Enable verbose debug logging
    #[arg(short, long)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Query mode flags shared by `get` and `search`.
#[derive(Args, Debug, Clone, Default)]
pub struct FlagArgs {
    /// Include soft-deleted instances
    #[arg(long)]
    pub for_lineage: bool,

    /// Skip duplicate-cluster resolution
    #[arg(long)]
    pub for_duplicate_processing: bool,

    /// Only consider instances in effect at this time (RFC 3339)
    #[arg(long, value_parser = parse_instant)]
    pub effective_time: Option<Instant>,
}

impl From<&FlagArgs> for QueryFlags {
    fn from(args: &FlagArgs) -> Self {
        QueryFlags::default()
            .with_lineage(args.for_lineage)
            .with_duplicate_processing(args.for_duplicate_processing)
            .with_effective_time(args.effective_time)
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Resolve a GUID to its representative entity
    Get {
        guid: Guid,
        #[command(flatten)]
        flags: FlagArgs,
    },
    /// Search entity properties by regular expression
    Search {
        text: String,
        /// Only match entities of this type
        #[arg(long = "type")]
        type_name: Option<String>,
        #[command(flatten)]
        flags: FlagArgs,
    },
    /// List the duplicate cluster of a GUID
    Cluster { guid: Guid },
    /// Build table contexts for a column
    Context { guid: Guid },
}

fn parse_instant(s: &str) -> Result<Instant, String> {
    chrono::DateTime::parse_from_rfc3339(s)
        .map(|t| t.with_timezone(&chrono::Utc))
        .map_err(|e| format!("invalid RFC 3339 time {s:?}: {e}"))
}

/// Runs one command and returns its JSON result.
pub fn execute(cli: &Cli) -> Result<Value> {
    let config = MetagraphConfig::load_or_default(&cli.config);
    let snapshot = GraphSnapshot::load(&cli.snapshot)
        .with_context(|| format!("failed to load snapshot {:?}", cli.snapshot))?;
    let store = Arc::new(snapshot.into_store());
    let registry = Arc::new(RelationshipTypeRegistry::new(store.clone()));
    info!("Store ready: {} entities", store.entity_count());

    let service =
        MetadataElementService::new(store.clone(), Arc::clone(&registry), config.resolver.clone());

    let value = match &cli.command {
        Command::Get { guid, flags } => {
            let entity = service.get_by_guid(guid, &QueryFlags::from(flags))?;
            serde_json::to_value(entity)?
        }
        Command::Search {
            text,
            type_name,
            flags,
        } => {
            let found = service.find_by_text(text, type_name.as_deref(), &QueryFlags::from(flags))?;
            serde_json::to_value(found)?
        }
        Command::Cluster { guid } => {
            let members = service.resolver().cluster(guid)?;
            json!({ "guid": guid, "members": members })
        }
        Command::Context { guid } => {
            let walker = ContextGraphWalker::new(store, registry, &config);
            let contexts = ContextEventBuilder::new(walker).build(guid)?;
            serde_json::to_value(contexts)?
        }
    };
    Ok(value)
}
