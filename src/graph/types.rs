//! Core graph types: node IDs, positions, and nodes.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Unique identifier for a node (assigned by the caller).
pub type NodeId = u64;

/// Edge weight. Always non-negative inside a graph.
pub type Weight = f64;

/// Adjacency map from neighbour ID to edge weight.
pub type Adjacency = HashMap<NodeId, Weight>;

/// A point in 3D space used when rendering or exporting a graph.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    /// X coordinate
    pub x: f64,
    /// Y coordinate
    pub y: f64,
    /// Z coordinate
    pub z: f64,
}

impl Position {
    /// Create a new position.
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

impl From<(f64, f64, f64)> for Position {
    fn from((x, y, z): (f64, f64, f64)) -> Self {
        Self { x, y, z }
    }
}

impl From<(f64, f64)> for Position {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y, z: 0.0 }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.x, self.y, self.z)
    }
}

/// A vertex in a [`DirectedGraph`](super::DirectedGraph).
///
/// A node keeps two adjacency maps that mirror each other across the graph:
/// if `v` is in `u.out_edges()` with weight `w`, then `u` is in
/// `v.in_edges()` with the same `w`. Only the graph's mutation API touches
/// these maps, so callers see them read-only.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    id: NodeId,
    position: Option<Position>,
    out: Adjacency,
    incoming: Adjacency,
}

impl Node {
    pub(crate) fn new(id: NodeId, position: Option<Position>) -> Self {
        Self {
            id,
            position,
            out: HashMap::new(),
            incoming: HashMap::new(),
        }
    }

    /// The node's ID.
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// The node's position, if one was assigned.
    pub fn position(&self) -> Option<Position> {
        self.position
    }

    /// Outgoing edges: successor ID to weight.
    pub fn out_edges(&self) -> &Adjacency {
        &self.out
    }

    /// Incoming edges: predecessor ID to weight.
    pub fn in_edges(&self) -> &Adjacency {
        &self.incoming
    }

    /// Number of outgoing edges.
    pub fn out_degree(&self) -> usize {
        self.out.len()
    }

    /// Number of incoming edges.
    pub fn in_degree(&self) -> usize {
        self.incoming.len()
    }

    pub(crate) fn set_position(&mut self, position: Position) {
        self.position = Some(position);
    }

    pub(crate) fn insert_out(&mut self, target: NodeId, weight: Weight) {
        self.out.insert(target, weight);
    }

    pub(crate) fn insert_in(&mut self, source: NodeId, weight: Weight) {
        self.incoming.insert(source, weight);
    }

    pub(crate) fn remove_out(&mut self, target: NodeId) -> Option<Weight> {
        self.out.remove(&target)
    }

    pub(crate) fn remove_in(&mut self, source: NodeId) -> Option<Weight> {
        self.incoming.remove(&source)
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut targets: Vec<_> = self.out.iter().collect();
        targets.sort_by_key(|(id, _)| **id);
        write!(f, "Node {} -> [", self.id)?;
        for (i, (target, weight)) in targets.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{target}: {weight}")?;
        }
        write!(f, "]")
    }
}
