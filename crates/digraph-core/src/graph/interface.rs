//! Graph access trait for algorithm layers.
//!
//! Shortest-path, connectivity and similar modules are written against
//! [`GraphInterface`] rather than a concrete graph, so any store exposing
//! sizes, adjacency maps and the modification counter can back them.

use std::fmt;
use std::hash::Hash;

use super::digraph::{DiGraph, EdgeMap};
use super::types::{NodeKey, Weight};

/// Trait for directed weighted graphs consumed by graph algorithms.
pub trait GraphInterface<K = NodeKey> {
    /// Returns the number of nodes.
    fn v_size(&self) -> usize;

    /// Returns the number of edges.
    fn e_size(&self) -> usize;

    /// Returns the modification counter.
    fn get_mc(&self) -> u64;

    /// Returns `source -> weight` for edges entering `key`, `None` if the
    /// node does not exist.
    fn all_in_edges_of_node(&self, key: K) -> Option<&EdgeMap<K>>;

    /// Returns `destination -> weight` for edges leaving `key`, `None` if
    /// the node does not exist.
    fn all_out_edges_of_node(&self, key: K) -> Option<&EdgeMap<K>>;

    /// Adds a node; `false` if it already exists.
    fn add_node(&mut self, key: K) -> bool;

    /// Adds an edge; `false` if rejected.
    fn add_edge(&mut self, src: K, dst: K, weight: Weight) -> bool;

    /// Removes a node and its edges; `false` if it does not exist.
    fn remove_node(&mut self, key: K) -> bool;

    /// Removes an edge; `false` if it does not exist.
    fn remove_edge(&mut self, src: K, dst: K) -> bool;

    /// Returns true if the graph changed since `mc` was read from
    /// [`get_mc`](GraphInterface::get_mc).
    fn is_modified_since(&self, mc: u64) -> bool {
        self.get_mc() != mc
    }
}

impl<K> GraphInterface<K> for DiGraph<K>
where
    K: Copy + Eq + Hash + fmt::Debug,
{
    fn v_size(&self) -> usize {
        DiGraph::v_size(self)
    }

    fn e_size(&self) -> usize {
        DiGraph::e_size(self)
    }

    fn get_mc(&self) -> u64 {
        DiGraph::get_mc(self)
    }

    fn all_in_edges_of_node(&self, key: K) -> Option<&EdgeMap<K>> {
        DiGraph::all_in_edges_of_node(self, key)
    }

    fn all_out_edges_of_node(&self, key: K) -> Option<&EdgeMap<K>> {
        DiGraph::all_out_edges_of_node(self, key)
    }

    fn add_node(&mut self, key: K) -> bool {
        DiGraph::add_node(self, key)
    }

    fn add_edge(&mut self, src: K, dst: K, weight: Weight) -> bool {
        DiGraph::add_edge(self, src, dst, weight)
    }

    fn remove_node(&mut self, key: K) -> bool {
        DiGraph::remove_node(self, key)
    }

    fn remove_edge(&mut self, src: K, dst: K) -> bool {
        DiGraph::remove_edge(self, src, dst)
    }
}
