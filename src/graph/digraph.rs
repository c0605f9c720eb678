//! The [`DirectedGraph`] container and its mutation API.

use super::types::{Adjacency, Node, NodeId, Position, Weight};
use super::algorithms::{self, PathResult};
use crate::error::{GraphError, Result};
use log::{debug, trace};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_INSTANCE: AtomicU64 = AtomicU64::new(1);

fn next_instance() -> u64 {
    NEXT_INSTANCE.fetch_add(1, Ordering::Relaxed)
}

/// A directed, weighted graph keyed by caller-assigned node IDs.
///
/// Every structural change goes through [`add_node`](Self::add_node),
/// [`add_edge`](Self::add_edge), [`remove_edge`](Self::remove_edge) and
/// [`remove_node`](Self::remove_node). Each successful call bumps
/// [`version`](Self::version) by one; calls that change nothing return
/// `false` and leave the version alone.
///
/// Every graph, clones included, carries its own
/// [`instance_id`](Self::instance_id).
#[derive(Debug)]
pub struct DirectedGraph {
    nodes: BTreeMap<NodeId, Node>,
    edge_count: usize,
    version: u64,
    instance: u64,
}

impl Default for DirectedGraph {
    fn default() -> Self {
        Self {
            nodes: BTreeMap::new(),
            edge_count: 0,
            version: 0,
            instance: next_instance(),
        }
    }
}

impl Clone for DirectedGraph {
    fn clone(&self) -> Self {
        Self {
            nodes: self.nodes.clone(),
            edge_count: self.edge_count,
            version: self.version,
            instance: next_instance(),
        }
    }
}

impl DirectedGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node with an optional position.
    ///
    /// Returns `false` without touching the graph if the ID is already taken.
    pub fn add_node(&mut self, id: NodeId, position: Option<Position>) -> bool {
        if self.nodes.contains_key(&id) {
            trace!("add_node({id}) ignored: node exists");
            return false;
        }
        debug!("Adding node: id={id}");
        self.nodes.insert(id, Node::new(id, position));
        self.version += 1;
        true
    }

    /// Add an edge `source -> target` with the given weight.
    ///
    /// Returns `Ok(false)` without touching the graph for a self-loop, a
    /// missing endpoint, or an edge that already exists.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::InvalidWeight`] if `weight` is negative or NaN,
    /// whether or not the endpoints exist.
    pub fn add_edge(&mut self, source: NodeId, target: NodeId, weight: Weight) -> Result<bool> {
        if weight.is_nan() || weight < 0.0 {
            return Err(GraphError::InvalidWeight {
                source_id: source,
                target_id: target,
                weight,
            });
        }
        if source == target || !self.nodes.contains_key(&target) {
            trace!("add_edge({source}, {target}) ignored: self-loop or missing target");
            return Ok(false);
        }
        let Some(src) = self.nodes.get_mut(&source) else {
            trace!("add_edge({source}, {target}) ignored: missing source");
            return Ok(false);
        };
        if src.out_edges().contains_key(&target) {
            trace!("add_edge({source}, {target}) ignored: edge exists");
            return Ok(false);
        }

        debug!("Adding edge: source={source}, target={target}, weight={weight}");
        src.insert_out(target, weight);
        if let Some(dst) = self.nodes.get_mut(&target) {
            dst.insert_in(source, weight);
        }
        self.edge_count += 1;
        self.version += 1;
        Ok(true)
    }

    /// Remove the edge `source -> target`.
    ///
    /// Returns `false` if either endpoint or the edge itself is absent.
    pub fn remove_edge(&mut self, source: NodeId, target: NodeId) -> bool {
        if !self.nodes.contains_key(&target) {
            return false;
        }
        let removed = self
            .nodes
            .get_mut(&source)
            .and_then(|src| src.remove_out(target));
        if removed.is_none() {
            trace!("remove_edge({source}, {target}) ignored: no such edge");
            return false;
        }

        debug!("Removing edge: source={source}, target={target}");
        if let Some(dst) = self.nodes.get_mut(&target) {
            dst.remove_in(source);
        }
        self.edge_count -= 1;
        self.version += 1;
        true
    }

    /// Remove a node together with every edge touching it.
    ///
    /// Outgoing edges are removed first, then incoming ones; each edge removal
    /// counts as its own change, followed by one more for the node itself.
    /// Returns `false` if the node does not exist.
    pub fn remove_node(&mut self, id: NodeId) -> bool {
        let Some(node) = self.nodes.get(&id) else {
            return false;
        };
        let successors: Vec<NodeId> = node.out_edges().keys().copied().collect();
        let predecessors: Vec<NodeId> = node.in_edges().keys().copied().collect();

        debug!(
            "Removing node: id={id} ({} outgoing, {} incoming edges)",
            successors.len(),
            predecessors.len()
        );
        for target in successors {
            self.remove_edge(id, target);
        }
        for source in predecessors {
            self.remove_edge(source, id);
        }

        self.nodes.remove(&id);
        self.version += 1;
        true
    }

    /// Get a node by ID.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NodeNotFound`] if the node doesn't exist.
    pub fn get_node(&self, id: NodeId) -> Result<&Node> {
        self.nodes
            .get(&id)
            .ok_or_else(|| GraphError::node_not_found(id))
    }

    /// Check whether a node exists.
    pub fn contains_node(&self, id: NodeId) -> bool {
        self.nodes.contains_key(&id)
    }

    /// Check whether the edge `source -> target` exists.
    pub fn has_edge(&self, source: NodeId, target: NodeId) -> bool {
        self.edge_weight(source, target).is_some()
    }

    /// Weight of the edge `source -> target`, if present.
    pub fn edge_weight(&self, source: NodeId, target: NodeId) -> Option<Weight> {
        self.nodes
            .get(&source)
            .and_then(|node| node.out_edges().get(&target).copied())
    }

    /// Incoming edges of a node: predecessor ID to weight.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NodeNotFound`] if the node doesn't exist.
    pub fn in_edges(&self, id: NodeId) -> Result<&Adjacency> {
        self.get_node(id).map(Node::in_edges)
    }

    /// Outgoing edges of a node: successor ID to weight.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NodeNotFound`] if the node doesn't exist.
    pub fn out_edges(&self, id: NodeId) -> Result<&Adjacency> {
        self.get_node(id).map(Node::out_edges)
    }

    /// Position of a node, if it has one.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NodeNotFound`] if the node doesn't exist.
    pub fn position(&self, id: NodeId) -> Result<Option<Position>> {
        self.get_node(id).map(Node::position)
    }

    /// Assign a position to a node.
    ///
    /// Positions are not structure, so this does not change
    /// [`version`](Self::version).
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NodeNotFound`] if the node doesn't exist.
    pub fn set_position(&mut self, id: NodeId, position: Position) -> Result<()> {
        let node = self
            .nodes
            .get_mut(&id)
            .ok_or_else(|| GraphError::node_not_found(id))?;
        node.set_position(position);
        Ok(())
    }

    /// Iterate over all nodes in ascending ID order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    /// Iterate over all node IDs in ascending order.
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes.keys().copied()
    }

    /// Number of nodes.
    pub fn vertex_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Modification counter, bumped once per successful structural change.
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Process-unique id of this graph value. A clone gets a new one.
    pub fn instance_id(&self) -> u64 {
        self.instance
    }

    /// Build a new graph with the same nodes and every edge reversed.
    ///
    /// The result is a fresh graph: its version counts the insertions made
    /// while building it.
    pub fn transpose(&self) -> DirectedGraph {
        let mut transposed = DirectedGraph::new();
        for node in self.nodes.values() {
            transposed.add_node(node.id(), node.position());
        }
        for node in self.nodes.values() {
            for (&source, &weight) in node.in_edges() {
                transposed.link_unchecked(node.id(), source, weight);
            }
        }
        transposed
    }

    // ===== Algorithm Methods =====

    /// Find the minimum-weight path from `source` to `target` (Dijkstra).
    ///
    /// See [`algorithms::shortest_path`].
    pub fn shortest_path(&self, source: NodeId, target: NodeId) -> Result<PathResult> {
        algorithms::shortest_path(self, source, target)
    }

    /// Find the strongly connected component containing `id` (Kosaraju).
    ///
    /// See [`algorithms::component_of`].
    pub fn component_of(&self, id: NodeId) -> Result<Vec<NodeId>> {
        algorithms::component_of(self, id)
    }

    /// Partition the graph into strongly connected components (Kosaraju).
    ///
    /// See [`algorithms::all_components`].
    pub fn all_components(&self) -> Vec<Vec<NodeId>> {
        algorithms::all_components(self)
    }

    // Private helper methods

    /// Insert an edge whose endpoints are known to exist and whose weight was
    /// already validated by the graph it came from.
    fn link_unchecked(&mut self, source: NodeId, target: NodeId, weight: Weight) {
        if let Some(src) = self.nodes.get_mut(&source) {
            src.insert_out(target, weight);
        }
        if let Some(dst) = self.nodes.get_mut(&target) {
            dst.insert_in(source, weight);
        }
        self.edge_count += 1;
        self.version += 1;
    }
}

impl PartialEq for DirectedGraph {
    fn eq(&self, other: &Self) -> bool {
        self.nodes == other.nodes && self.edge_count == other.edge_count
    }
}

impl fmt::Display for DirectedGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for node in self.nodes.values() {
            writeln!(f, "{node}")?;
        }
        Ok(())
    }
}
