//! Node record types for the directed weighted graph.

use std::fmt;

/// Default node key type.
pub type NodeKey = i64;

/// Edge weight type.
pub type Weight = f64;

/// Optional spatial location attached to a node.
///
/// The graph itself never reads positions; they travel with the node for
/// consumers that lay out or draw the graph.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Position {
    /// X coordinate.
    pub x: f64,
    /// Y coordinate.
    pub y: f64,
    /// Z coordinate.
    pub z: f64,
}

impl Position {
    /// Creates a position from its three coordinates.
    #[must_use]
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

/// A node of the graph.
///
/// # Example
///
/// ```rust
/// use digraph_core::graph::{GraphNode, Position};
///
/// let node = GraphNode::new(7).with_position(Position::new(1.0, 2.0, 0.0));
/// assert_eq!(node.key(), 7);
/// assert_eq!(node.position().map(|p| p.y), Some(2.0));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GraphNode<K = NodeKey> {
    key: K,
    position: Option<Position>,
}

impl<K: Copy> GraphNode<K> {
    /// Creates a node with the given key and no position.
    #[must_use]
    pub fn new(key: K) -> Self {
        Self {
            key,
            position: None,
        }
    }

    /// Attaches a position to this node (builder pattern).
    #[must_use]
    pub fn with_position(mut self, position: Position) -> Self {
        self.position = Some(position);
        self
    }

    /// Returns the node key.
    #[must_use]
    pub fn key(&self) -> K {
        self.key
    }

    /// Returns the node position, if one was given.
    #[must_use]
    pub fn position(&self) -> Option<&Position> {
        self.position.as_ref()
    }
}

impl<K: fmt::Display> fmt::Display for GraphNode<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.position {
            Some(pos) => write!(f, "{}: {}", self.key, pos),
            None => write!(f, "{}", self.key),
        }
    }
}
