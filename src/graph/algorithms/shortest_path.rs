//! Dijkstra's shortest path between two nodes.

use crate::error::Result;
use crate::graph::{DirectedGraph, NodeId, Weight};
use log::trace;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};

/// Outcome of a shortest path query.
///
/// An unreachable target is reported as an infinite distance with an empty
/// path, not as an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathResult {
    /// Total weight of the path (`f64::INFINITY` if unreachable)
    pub distance: Weight,
    /// Node IDs from source to target, inclusive
    pub path: Vec<NodeId>,
}

impl PathResult {
    fn trivial(node: NodeId) -> Self {
        Self {
            distance: 0.0,
            path: vec![node],
        }
    }

    fn unreachable() -> Self {
        Self {
            distance: f64::INFINITY,
            path: Vec::new(),
        }
    }

    /// Whether a path was found.
    pub fn is_reachable(&self) -> bool {
        self.distance.is_finite() && !self.path.is_empty()
    }

    /// Split into `(distance, path)`.
    pub fn into_parts(self) -> (Weight, Vec<NodeId>) {
        (self.distance, self.path)
    }
}

/// Min-heap entry keyed by tentative distance.
#[derive(Debug, Clone, Copy)]
struct QueueEntry {
    distance: Weight,
    node: NodeId,
}

// Ordering for min-heap (smaller distance = higher priority)
impl PartialEq for QueueEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for QueueEntry {}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .distance
            .total_cmp(&self.distance)
            .then_with(|| other.node.cmp(&self.node))
    }
}

/// Find the minimum-weight path from `source` to `target`.
///
/// Classic Dijkstra with a binary heap and lazy deletion of stale entries.
/// A neighbour is relaxed only when the candidate distance is strictly
/// smaller, so among equal-cost routes the first one found wins. The search
/// stops as soon as `target` is settled.
///
/// Complexity: O((V + E) log V).
///
/// # Errors
///
/// Returns [`GraphError::NodeNotFound`](crate::GraphError::NodeNotFound) if
/// either endpoint is missing.
pub fn shortest_path(graph: &DirectedGraph, source: NodeId, target: NodeId) -> Result<PathResult> {
    graph.get_node(source)?;
    graph.get_node(target)?;

    if source == target {
        return Ok(PathResult::trivial(source));
    }

    let mut distances: HashMap<NodeId, Weight> =
        graph.node_ids().map(|id| (id, f64::INFINITY)).collect();
    let mut previous: HashMap<NodeId, NodeId> = HashMap::new();
    let mut settled: HashSet<NodeId> = HashSet::new();
    let mut queue = BinaryHeap::new();

    distances.insert(source, 0.0);
    queue.push(QueueEntry {
        distance: 0.0,
        node: source,
    });

    while let Some(QueueEntry { distance, node }) = queue.pop() {
        // Stale entry for a node that was already settled via a shorter route
        if !settled.insert(node) {
            continue;
        }
        if node == target {
            trace!("Dijkstra settled target {target} at distance {distance}");
            break;
        }

        for (&next, &weight) in graph.out_edges(node)? {
            let candidate = distance + weight;
            let Some(current) = distances.get_mut(&next) else {
                continue;
            };
            if candidate < *current {
                *current = candidate;
                previous.insert(next, node);
                queue.push(QueueEntry {
                    distance: candidate,
                    node: next,
                });
            }
        }
    }

    let distance = distances.get(&target).copied().unwrap_or(f64::INFINITY);
    if distance.is_infinite() {
        trace!("No path from {source} to {target}");
        return Ok(PathResult::unreachable());
    }

    let mut path = vec![target];
    let mut current = target;
    while let Some(&prev) = previous.get(&current) {
        path.push(prev);
        current = prev;
    }
    path.reverse();

    Ok(PathResult { distance, path })
}
