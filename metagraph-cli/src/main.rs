//! `metagraph`: query a metadata instance graph snapshot.
//!
//! Usage:
//!   metagraph --snapshot graph.json get <guid> [--for-lineage]
//!   metagraph --snapshot graph.json search "customer" --type RelationalTable
//!   metagraph --snapshot graph.json context <column-guid>
//!
//! `RUST_LOG` overrides the log filter.

use anyhow::Result;
use clap::Parser;
use metagraph_cli::{execute, Cli};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    let value = execute(&cli)?;
    println!("{}", serde_json::to_string_pretty(&value)?);
    Ok(())
}
