//! Error types for digraph-core.
//!
//! Graph mutations never fail loudly: the `bool`-returning operations on
//! [`DiGraph`](crate::graph::DiGraph) swallow these errors and report
//! `false`. The typed variants are surfaced by
//! [`DiGraph::try_add_edge`](crate::graph::DiGraph::try_add_edge) and by
//! configuration loading.

use thiserror::Error;

/// Graph and configuration error types.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// An edge endpoint is not a node of the graph.
    #[error("Node not found: {0}")]
    NodeNotFound(String),

    /// Edge weight is negative or NaN.
    #[error("Invalid edge weight: {0} (weights must be non-negative)")]
    InvalidWeight(f64),

    /// An edge already connects this ordered pair.
    #[error("Edge already exists: {0} -> {1}")]
    EdgeExists(String, String),

    /// Self-loops are disabled for this graph.
    #[error("Self-loop rejected on node {0}")]
    SelfLoop(String),

    /// Configuration could not be loaded or is invalid.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::Config(err.to_string())
    }
}

/// Result type alias for graph operations.
pub type Result<T> = std::result::Result<T, Error>;
