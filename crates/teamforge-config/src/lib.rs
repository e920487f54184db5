//! Configuration system for TeamForge.
//!
//! Load search configuration from TOML or YAML to control pruning without
//! code changes.
//!
//! # Examples
//!
//! Load configuration from TOML string:
//!
//! ```
//! use teamforge_config::{CapacityBound, SearchConfig};
//!
//! let config = SearchConfig::from_toml_str(r#"
//!     enable_pruning = true
//!     capacity_bound = { fixed = 8 }
//! "#).unwrap();
//!
//! assert_eq!(config.capacity_bound, CapacityBound::Fixed(8));
//! assert_eq!(config.capacity_bound.total_slots(3), 8);
//! ```
//!
//! Use default config when file is missing:
//!
//! ```
//! use teamforge_config::SearchConfig;
//!
//! let config = SearchConfig::load("teamforge.toml").unwrap_or_default();
//! // Proceeds with defaults if file doesn't exist
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use teamforge_core::TEAM_CAPACITY;
use thiserror::Error;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Branch-and-bound search configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case", default)]
pub struct SearchConfig {
    /// Whether subtrees proven unable to beat the best are skipped.
    pub enable_pruning: bool,

    /// Slot total used by the optimistic pruning bounds.
    pub capacity_bound: CapacityBound,

    /// Emit per-node scores at trace level whenever a mission is scored.
    pub log_node_scores: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            enable_pruning: true,
            capacity_bound: CapacityBound::Derived,
            log_node_scores: false,
        }
    }
}

impl SearchConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if file doesn't exist, contains invalid TOML, or fails
    /// [`validate`](Self::validate).
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_file(path)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Enables or disables pruning.
    pub fn with_pruning(mut self, enabled: bool) -> Self {
        self.enable_pruning = enabled;
        self
    }

    /// Sets the capacity bound.
    pub fn with_capacity_bound(mut self, bound: CapacityBound) -> Self {
        self.capacity_bound = bound;
        self
    }

    /// Enables per-node score tracing.
    pub fn with_node_score_logging(mut self, enabled: bool) -> Self {
        self.log_node_scores = enabled;
        self
    }

    /// Checks values that deserialize fine but cannot drive a search.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.capacity_bound == CapacityBound::Fixed(0) {
            return Err(ConfigError::Invalid(
                "capacity_bound fixed slot total must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

/// Slot total assumed by the optimistic support and affinity bounds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CapacityBound {
    /// Node count times the per-node capacity. Pruning also waits until no
    /// completion can field more units than the best team.
    #[default]
    Derived,

    /// A literal slot total regardless of node count. `Fixed(8)` is exact
    /// only for two-node missions. Pruning applies the tier bounds as they
    /// are, without checking the count tier.
    Fixed(usize),
}

impl CapacityBound {
    /// Legacy two-node slot total.
    pub const LEGACY: CapacityBound = CapacityBound::Fixed(2 * TEAM_CAPACITY);

    /// Total slots for a mission with `node_count` nodes.
    pub fn total_slots(&self, node_count: usize) -> usize {
        match self {
            CapacityBound::Derived => node_count * TEAM_CAPACITY,
            CapacityBound::Fixed(slots) => *slots,
        }
    }
}

#[cfg(test)]
mod tests;
