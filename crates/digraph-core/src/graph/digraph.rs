//! Directed weighted graph with forward and backward adjacency indices.
//!
//! Every edge is recorded twice: once in the out-index of its source and
//! once in the in-index of its destination. Both entries are written and
//! removed inside the same `&mut self` call, so the indices never disagree
//! between public calls.

use std::collections::hash_map::Entry;
use std::fmt;
use std::hash::Hash;

use rustc_hash::{FxBuildHasher, FxHashMap};

use crate::config::GraphConfig;
use crate::error::{Error, Result};

use super::types::{GraphNode, NodeKey, Position, Weight};

/// Adjacency of one node: neighbor key -> edge weight.
pub type EdgeMap<K> = FxHashMap<K, Weight>;

/// In-memory directed weighted graph.
///
/// Provides O(1) node and edge mutation, O(degree) node removal, and O(1)
/// access to the outgoing and incoming edges of any node. Invalid mutations
/// are silent no-ops that return `false` and leave the modification counter
/// untouched.
///
/// # Example
///
/// ```rust
/// use digraph_core::graph::DiGraph;
///
/// let mut g: DiGraph<i64> = DiGraph::new();
/// g.add_node(1);
/// g.add_node(2);
/// assert!(g.add_edge(1, 2, 5.5));
/// assert!(!g.add_edge(1, 2, 10.0)); // existing edge is kept
///
/// assert_eq!(g.e_size(), 1);
/// assert_eq!(g.get_mc(), 3);
/// assert_eq!(g.all_in_edges_of_node(2).and_then(|m| m.get(&1)), Some(&5.5));
/// assert!(g.all_in_edges_of_node(99).is_none());
/// ```
#[derive(Debug, Clone)]
pub struct DiGraph<K = NodeKey> {
    /// All nodes indexed by key.
    nodes: FxHashMap<K, GraphNode<K>>,
    /// Out-index: source -> (destination -> weight).
    outgoing: FxHashMap<K, EdgeMap<K>>,
    /// In-index: destination -> (source -> weight).
    incoming: FxHashMap<K, EdgeMap<K>>,
    edge_count: usize,
    mc: u64,
    allow_self_loops: bool,
}

impl<K> Default for DiGraph<K> {
    fn default() -> Self {
        Self {
            nodes: FxHashMap::default(),
            outgoing: FxHashMap::default(),
            incoming: FxHashMap::default(),
            edge_count: 0,
            mc: 0,
            allow_self_loops: true,
        }
    }
}

impl<K> DiGraph<K>
where
    K: Copy + Eq + Hash + fmt::Debug,
{
    /// Creates a new empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a graph with index space pre-allocated for `expected_nodes`.
    #[must_use]
    pub fn with_capacity(expected_nodes: usize) -> Self {
        Self {
            nodes: FxHashMap::with_capacity_and_hasher(expected_nodes, FxBuildHasher),
            outgoing: FxHashMap::with_capacity_and_hasher(expected_nodes, FxBuildHasher),
            incoming: FxHashMap::with_capacity_and_hasher(expected_nodes, FxBuildHasher),
            ..Self::default()
        }
    }

    /// Creates a graph from a [`GraphConfig`].
    #[must_use]
    pub fn from_config(config: &GraphConfig) -> Self {
        tracing::debug!(
            expected_nodes = config.expected_nodes,
            allow_self_loops = config.allow_self_loops,
            "Creating graph from config"
        );
        let mut graph = Self::with_capacity(config.expected_nodes);
        graph.allow_self_loops = config.allow_self_loops;
        graph
    }

    // ── Node mutation ──────────────────────────────────────────────────

    /// Adds a node if the key is not already present.
    ///
    /// Returns `true` when the node was added. A duplicate key is a no-op.
    pub fn add_node(&mut self, key: K) -> bool {
        self.insert_node(GraphNode::new(key))
    }

    /// Adds a node carrying a position.
    ///
    /// A duplicate key is a no-op; the existing node keeps its position.
    pub fn add_node_at(&mut self, key: K, position: Position) -> bool {
        self.insert_node(GraphNode::new(key).with_position(position))
    }

    fn insert_node(&mut self, node: GraphNode<K>) -> bool {
        let key = node.key();
        match self.nodes.entry(key) {
            Entry::Occupied(_) => {
                tracing::trace!(node = ?key, "add_node ignored: node exists");
                false
            }
            Entry::Vacant(slot) => {
                slot.insert(node);
                self.outgoing.insert(key, EdgeMap::default());
                self.incoming.insert(key, EdgeMap::default());
                self.mc += 1;
                true
            }
        }
    }

    /// Removes a node and every edge entering or leaving it.
    ///
    /// Counts as a single modification regardless of how many edges are
    /// removed with it. Returns `false` if the node does not exist.
    pub fn remove_node(&mut self, key: K) -> bool {
        if self.nodes.remove(&key).is_none() {
            return false;
        }
        let outgoing = self.outgoing.remove(&key).unwrap_or_default();
        let incoming = self.incoming.remove(&key).unwrap_or_default();

        let mut removed = 0usize;
        for dst in outgoing.keys() {
            // A self-loop lives in both maps; count it here only.
            if *dst != key {
                if let Some(sources) = self.incoming.get_mut(dst) {
                    sources.remove(&key);
                }
            }
            removed += 1;
        }
        for src in incoming.keys() {
            if *src == key {
                continue;
            }
            if let Some(targets) = self.outgoing.get_mut(src) {
                targets.remove(&key);
            }
            removed += 1;
        }

        self.edge_count -= removed;
        self.mc += 1;
        tracing::debug!(node = ?key, removed_edges = removed, "Node removed");
        true
    }

    // ── Edge mutation ──────────────────────────────────────────────────

    /// Adds the edge `src -> dst` with the given weight.
    ///
    /// Returns `false` without changing anything when an endpoint is missing,
    /// the weight is negative or NaN, self-loops are disabled and
    /// `src == dst`, or the edge already exists (its weight is kept).
    pub fn add_edge(&mut self, src: K, dst: K, weight: Weight) -> bool {
        match self.try_add_edge(src, dst, weight) {
            Ok(()) => true,
            Err(err) => {
                tracing::trace!(error = %err, "add_edge rejected");
                false
            }
        }
    }

    /// Adds the edge `src -> dst`, reporting why it was rejected.
    ///
    /// # Errors
    ///
    /// - `Error::NodeNotFound` if either endpoint is not in the graph.
    /// - `Error::SelfLoop` if `src == dst` and self-loops are disabled.
    /// - `Error::InvalidWeight` if the weight is negative or NaN.
    /// - `Error::EdgeExists` if an edge `src -> dst` already exists.
    pub fn try_add_edge(&mut self, src: K, dst: K, weight: Weight) -> Result<()> {
        let Some(targets) = self.outgoing.get_mut(&src) else {
            return Err(Error::NodeNotFound(format!("{src:?}")));
        };
        let Some(sources) = self.incoming.get_mut(&dst) else {
            return Err(Error::NodeNotFound(format!("{dst:?}")));
        };
        if src == dst && !self.allow_self_loops {
            return Err(Error::SelfLoop(format!("{src:?}")));
        }
        if weight.is_nan() || weight < 0.0 {
            return Err(Error::InvalidWeight(weight));
        }

        match targets.entry(dst) {
            Entry::Occupied(_) => {
                return Err(Error::EdgeExists(format!("{src:?}"), format!("{dst:?}")));
            }
            Entry::Vacant(slot) => {
                slot.insert(weight);
            }
        }
        sources.insert(src, weight);

        self.edge_count += 1;
        self.mc += 1;
        Ok(())
    }

    /// Removes the edge `src -> dst`.
    ///
    /// Returns `false` if no such edge exists, including when either endpoint
    /// is not in the graph.
    pub fn remove_edge(&mut self, src: K, dst: K) -> bool {
        let Some(targets) = self.outgoing.get_mut(&src) else {
            return false;
        };
        if targets.remove(&dst).is_none() {
            return false;
        }
        if let Some(sources) = self.incoming.get_mut(&dst) {
            sources.remove(&src);
        }
        self.edge_count -= 1;
        self.mc += 1;
        true
    }

    // ── Sizes and counters ─────────────────────────────────────────────

    /// Returns the number of nodes.
    #[must_use]
    pub fn v_size(&self) -> usize {
        self.nodes.len()
    }

    /// Returns the number of edges.
    #[must_use]
    pub fn e_size(&self) -> usize {
        self.edge_count
    }

    /// Returns the modification counter.
    ///
    /// Incremented once per mutation that changed the graph. Consumers can
    /// snapshot it before a derived computation and compare afterwards.
    #[must_use]
    pub fn get_mc(&self) -> u64 {
        self.mc
    }

    /// Returns whether `add_edge(k, k, w)` is accepted.
    #[must_use]
    pub fn allows_self_loops(&self) -> bool {
        self.allow_self_loops
    }

    // ── Queries ────────────────────────────────────────────────────────

    /// Returns the incoming edges of `key` as `source -> weight`.
    ///
    /// `None` means the node does not exist; a node without incoming edges
    /// yields an empty map.
    #[must_use]
    pub fn all_in_edges_of_node(&self, key: K) -> Option<&EdgeMap<K>> {
        self.incoming.get(&key)
    }

    /// Returns the outgoing edges of `key` as `destination -> weight`.
    ///
    /// `None` means the node does not exist; a node without outgoing edges
    /// yields an empty map.
    #[must_use]
    pub fn all_out_edges_of_node(&self, key: K) -> Option<&EdgeMap<K>> {
        self.outgoing.get(&key)
    }

    /// Returns true if a node with the given key exists.
    #[must_use]
    pub fn has_node(&self, key: K) -> bool {
        self.nodes.contains_key(&key)
    }

    /// Gets a node by key.
    #[must_use]
    pub fn get_node(&self, key: K) -> Option<&GraphNode<K>> {
        self.nodes.get(&key)
    }

    /// Returns true if the edge `src -> dst` exists.
    #[must_use]
    pub fn has_edge(&self, src: K, dst: K) -> bool {
        self.edge_weight(src, dst).is_some()
    }

    /// Returns the weight of the edge `src -> dst`, if it exists.
    #[must_use]
    pub fn edge_weight(&self, src: K, dst: K) -> Option<Weight> {
        self.outgoing.get(&src)?.get(&dst).copied()
    }

    /// Returns the out-degree of a node (0 for unknown nodes).
    #[must_use]
    pub fn out_degree(&self, key: K) -> usize {
        self.outgoing.get(&key).map_or(0, EdgeMap::len)
    }

    /// Returns the in-degree of a node (0 for unknown nodes).
    #[must_use]
    pub fn in_degree(&self, key: K) -> usize {
        self.incoming.get(&key).map_or(0, EdgeMap::len)
    }

    /// Iterates over all nodes, in no particular order.
    pub fn nodes(&self) -> impl Iterator<Item = &GraphNode<K>> + '_ {
        self.nodes.values()
    }

    /// Iterates over all edges as `(source, destination, weight)`.
    pub fn edges(&self) -> impl Iterator<Item = (K, K, Weight)> + '_ {
        self.outgoing.iter().flat_map(|(&src, targets)| {
            targets.iter().map(move |(&dst, &weight)| (src, dst, weight))
        })
    }
}

impl<K> fmt::Display for DiGraph<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Graph: |V|={} , |E|={}", self.nodes.len(), self.edge_count)
    }
}
