//! In-memory directed weighted graph.
//!
//! Provides the [`DiGraph`] container with forward and backward adjacency
//! indices, its node types, and the [`GraphInterface`] trait through which
//! algorithm layers consume it.
//!
//! # Example
//!
//! ```rust
//! use digraph_core::graph::{DiGraph, GraphInterface};
//!
//! let mut g: DiGraph<i64> = DiGraph::new();
//! for key in 1..=3 {
//!     g.add_node(key);
//! }
//! g.add_edge(1, 2, 55.5);
//! g.add_edge(2, 3, 33.0);
//!
//! let before = g.get_mc();
//! g.remove_node(2);
//! assert!(g.is_modified_since(before));
//! assert_eq!(g.e_size(), 0);
//! ```

mod digraph;
mod interface;
mod types;


pub use digraph::{DiGraph, EdgeMap};
pub use interface::GraphInterface;
pub use types::{GraphNode, NodeKey, Position, Weight};
