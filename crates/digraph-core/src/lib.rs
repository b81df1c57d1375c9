//! # digraph-core
//!
//! In-memory directed, weighted graph container.
//!
//! The graph keeps every edge in two adjacency indices, one keyed by source
//! and one keyed by destination, so both the outgoing and the incoming edges
//! of a node are available in O(1). A modification counter is bumped once
//! per effective mutation, letting algorithm layers cache derived results
//! and detect when they go stale.
//!
//! ## Quick Start
//!
//! ```rust
//! use digraph_core::{DiGraph, GraphConfig};
//!
//! let config = GraphConfig::default().with_expected_nodes(10);
//! let mut g: DiGraph<i64> = DiGraph::from_config(&config);
//!
//! for key in 1..=10 {
//!     g.add_node(key);
//! }
//! for key in 1..10 {
//!     g.add_edge(key, key + 1, (key + key + 1) as f64);
//! }
//! g.remove_edge(1, 2);
//!
//! assert_eq!(g.e_size(), 8);
//! assert_eq!(g.get_mc(), 20);
//! assert_eq!(g.all_in_edges_of_node(5).and_then(|m| m.get(&4)), Some(&9.0));
//! ```

#![warn(missing_docs)]
#![cfg_attr(
    test,
    allow(
        clippy::float_cmp,
        clippy::cast_precision_loss,
        clippy::uninlined_format_args
    )
)]

pub mod config;
pub mod error;
pub mod graph;

pub use config::GraphConfig;
pub use error::{Error, Result};
pub use graph::{DiGraph, EdgeMap, GraphInterface, GraphNode, NodeKey, Position, Weight};
