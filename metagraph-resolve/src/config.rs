//! Limits and paging settings, read from `metagraph.toml`.
//!
//! ```toml
//! [resolver]
//! max_cluster_size = 1000
//! page_size = 100
//! max_search_results = 1000
//!
//! [walker]
//! max_depth = 32
//! max_branches = 1024
//! page_size = 100
//! ```

use crate::{ResolveError, ResolveResult};
use metagraph_store::DEFAULT_PAGE_SIZE;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{info, warn};

/// Settings for duplicate-cluster resolution and search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// Largest duplicate cluster tolerated before giving up.
    pub max_cluster_size: usize,
    /// Page size for relationship fetches.
    pub page_size: usize,
    /// Cap on raw text-search matches considered per call.
    pub max_search_results: usize,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            max_cluster_size: 1000,
            page_size: DEFAULT_PAGE_SIZE,
            max_search_results: 1000,
        }
    }
}

/// Settings for context graph traversal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WalkerConfig {
    /// Longest context path accepted.
    pub max_depth: usize,
    /// Most live branches tolerated at any step.
    pub max_branches: usize,
    /// Page size for relationship fetches.
    pub page_size: usize,
}

impl Default for WalkerConfig {
    fn default() -> Self {
        Self {
            max_depth: 32,
            max_branches: 1024,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Top-level configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MetagraphConfig {
    pub resolver: ResolverConfig,
    pub walker: WalkerConfig,
}

impl MetagraphConfig {
    /// Parses configuration from TOML text.
    pub fn from_toml_str(contents: &str) -> ResolveResult<Self> {
        let config: Self =
            toml::from_str(contents).map_err(|e| ResolveError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from an explicit path.
    pub fn load_from(path: &Path) -> ResolveResult<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ResolveError::Config(format!("failed to read {path:?}: {e}")))?;
        let config = Self::from_toml_str(&contents)?;
        info!("Loaded configuration from {:?}", path);
        Ok(config)
    }

    /// Loads configuration if the file exists, falling back to defaults
    /// with a warning when it cannot be read or parsed.
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            info!("No configuration file at {:?}, using defaults", path);
            return Self::default();
        }
        match Self::load_from(path) {
            Ok(config) => config,
            Err(e) => {
                warn!("{}. Falling back to default configuration.", e);
                Self::default()
            }
        }
    }

    /// Rejects zero limits, which would make every call fail or spin.
    pub fn validate(&self) -> ResolveResult<()> {
        let checks = [
            ("resolver.max_cluster_size", self.resolver.max_cluster_size),
            ("resolver.page_size", self.resolver.page_size),
            ("resolver.max_search_results", self.resolver.max_search_results),
            ("walker.max_depth", self.walker.max_depth),
            ("walker.max_branches", self.walker.max_branches),
            ("walker.page_size", self.walker.page_size),
        ];
        for (name, value) in checks {
            if value == 0 {
                return Err(ResolveError::Config(format!("{name} must be greater than zero")));
            }
        }
        Ok(())
    }
}
