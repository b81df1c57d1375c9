//! Graph configuration.
//!
//! Values are layered with `figment`: built-in defaults, then an optional
//! TOML file, then `DIGRAPH_`-prefixed environment variables.
//!
//! ```toml
//! expected_nodes = 1000000
//! allow_self_loops = true
//! ```

use std::path::Path;

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Environment variable prefix for configuration overrides.
pub const ENV_PREFIX: &str = "DIGRAPH_";

/// Upper bound for the node capacity hint.
pub const MAX_EXPECTED_NODES: usize = 100_000_000;

/// Construction-time settings for a [`DiGraph`](crate::graph::DiGraph).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    /// Number of nodes to pre-allocate index space for.
    pub expected_nodes: usize,
    /// Whether `add_edge(k, k, w)` is accepted.
    pub allow_self_loops: bool,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            expected_nodes: 0,
            allow_self_loops: true,
        }
    }
}

impl GraphConfig {
    /// Sets the node capacity hint (builder pattern).
    #[must_use]
    pub fn with_expected_nodes(mut self, expected_nodes: usize) -> Self {
        self.expected_nodes = expected_nodes;
        self
    }

    /// Enables or disables self-loops (builder pattern).
    #[must_use]
    pub fn with_self_loops(mut self, allow: bool) -> Self {
        self.allow_self_loops = allow;
        self
    }

    /// Loads configuration from defaults, the TOML file at `path` (skipped if
    /// missing) and `DIGRAPH_*` environment variables, in that order.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let config: Self = Self::figment()
            .merge(Toml::file(path))
            .merge(Env::prefixed(ENV_PREFIX))
            .extract()?;
        config.validate()?;
        tracing::info!(
            path = %path.display(),
            expected_nodes = config.expected_nodes,
            allow_self_loops = config.allow_self_loops,
            "Graph configuration loaded"
        );
        Ok(config)
    }

    /// Loads configuration from defaults and environment variables only.
    pub fn from_env() -> Result<Self> {
        let config: Self = Self::figment().merge(Env::prefixed(ENV_PREFIX)).extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that the values are usable.
    pub fn validate(&self) -> Result<()> {
        if self.expected_nodes > MAX_EXPECTED_NODES {
            return Err(Error::Config(format!(
                "expected_nodes {} exceeds maximum {}",
                self.expected_nodes, MAX_EXPECTED_NODES
            )));
        }
        Ok(())
    }

    fn figment() -> Figment {
        Figment::from(Serialized::defaults(Self::default()))
    }
}
