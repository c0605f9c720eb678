//! Strongly connected components via Kosaraju's algorithm.
//!
//! Two passes:
//! 1. DFS over the original graph, recording the order in which nodes finish
//! 2. DFS over the transposed graph, starting from nodes in reverse finish
//!    order; every node reached from one start forms one component

use crate::error::{GraphError, Result};
use crate::graph::{DirectedGraph, NodeId};
use log::{debug, trace};
use std::collections::HashMap;

/// Visitation state of a node during a depth-first pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    Unseen,
    Discovered,
    Finished,
}

/// Transposed copy of a graph, tagged with the graph and version it was
/// built from.
#[derive(Debug)]
struct CachedTranspose {
    instance: u64,
    version: u64,
    graph: DirectedGraph,
}

/// Kosaraju SCC engine.
///
/// The finder never mutates the graph it is given. It keeps the transposed
/// graph from the previous call and rebuilds it when it is handed a
/// different graph or the graph's [`version`](DirectedGraph::version) has
/// moved on, so repeated queries against an unchanged graph skip the
/// transposition.
#[derive(Debug, Default)]
pub struct ComponentFinder {
    cache: Option<CachedTranspose>,
}

impl ComponentFinder {
    /// Create a finder with an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Find the strongly connected component containing `id`.
    ///
    /// Stops as soon as that component has been collected.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NodeNotFound`] if `id` is not in the graph.
    pub fn component_of(&mut self, graph: &DirectedGraph, id: NodeId) -> Result<Vec<NodeId>> {
        if !graph.contains_node(id) {
            return Err(GraphError::NodeNotFound { node_id: id });
        }
        let mut components = self.run(graph, Some(id));
        // run() returns exactly the matching component when a target is given
        Ok(components.pop().unwrap_or_default())
    }

    /// Partition the graph into strongly connected components.
    ///
    /// Every node appears in exactly one component. Components come out in
    /// finish-stack pop order; their contents in discovery order.
    pub fn all_components(&mut self, graph: &DirectedGraph) -> Vec<Vec<NodeId>> {
        self.run(graph, None)
    }

    /// Whether the cached transpose was built from this graph at its
    /// current version.
    pub fn is_cached_for(&self, graph: &DirectedGraph) -> bool {
        self.cache.as_ref().is_some_and(|cached| {
            cached.instance == graph.instance_id() && cached.version == graph.version()
        })
    }

    fn run(&mut self, graph: &DirectedGraph, target: Option<NodeId>) -> Vec<Vec<NodeId>> {
        // Pass 1: finish order over the original graph
        let mut marks: HashMap<NodeId, Mark> =
            graph.node_ids().map(|id| (id, Mark::Unseen)).collect();
        let mut finish_order = Vec::with_capacity(graph.vertex_count());
        for start in graph.node_ids() {
            if marks.get(&start) == Some(&Mark::Unseen) {
                depth_first(graph, start, &mut marks, None, &mut finish_order);
            }
        }
        trace!("Kosaraju pass 1 finished {} nodes", finish_order.len());

        // Pass 2: collect components over the transpose
        let transposed = self.transposed_for(graph);
        let mut marks: HashMap<NodeId, Mark> =
            transposed.node_ids().map(|id| (id, Mark::Unseen)).collect();
        let mut components = Vec::new();
        let mut finished = Vec::new();
        while let Some(start) = finish_order.pop() {
            if marks.get(&start) != Some(&Mark::Unseen) {
                continue;
            }
            let mut component = Vec::new();
            depth_first(transposed, start, &mut marks, Some(&mut component), &mut finished);

            if let Some(id) = target {
                if component.contains(&id) {
                    return vec![component];
                }
            } else {
                components.push(component);
            }
        }

        debug!("Found {} strongly connected components", components.len());
        components
    }

    fn transposed_for(&mut self, graph: &DirectedGraph) -> &DirectedGraph {
        if !self.is_cached_for(graph) {
            trace!(
                "Rebuilding transposed graph for instance {} version {}",
                graph.instance_id(),
                graph.version()
            );
            self.cache = None;
        }
        let cached = self.cache.get_or_insert_with(|| CachedTranspose {
            instance: graph.instance_id(),
            version: graph.version(),
            graph: graph.transpose(),
        });
        &cached.graph
    }
}

/// Iterative depth-first traversal from `start`.
///
/// A node is finished only after every node reachable from it that was not
/// already finished has finished. Nodes may be pushed more than once; stale
/// copies are dropped when they surface. Discovery order is recorded only
/// when a `discovered` sink is given.
fn depth_first(
    graph: &DirectedGraph,
    start: NodeId,
    marks: &mut HashMap<NodeId, Mark>,
    mut discovered: Option<&mut Vec<NodeId>>,
    finished: &mut Vec<NodeId>,
) {
    let mut stack = vec![start];

    while let Some(&node) = stack.last() {
        match marks.get(&node).copied().unwrap_or(Mark::Unseen) {
            Mark::Unseen => {
                marks.insert(node, Mark::Discovered);
                if let Some(sink) = discovered.as_deref_mut() {
                    sink.push(node);
                }
                if let Ok(out) = graph.out_edges(node) {
                    for next in out.keys() {
                        if marks.get(next).copied().unwrap_or(Mark::Unseen) == Mark::Unseen {
                            stack.push(*next);
                        }
                    }
                }
            }
            Mark::Discovered => {
                stack.pop();
                marks.insert(node, Mark::Finished);
                finished.push(node);
            }
            Mark::Finished => {
                stack.pop();
            }
        }
    }
}

/// Find the strongly connected component containing `id`.
///
/// Convenience wrapper around a fresh [`ComponentFinder`].
///
/// # Errors
///
/// Returns [`GraphError::NodeNotFound`] if `id` is not in the graph.
pub fn component_of(graph: &DirectedGraph, id: NodeId) -> Result<Vec<NodeId>> {
    ComponentFinder::new().component_of(graph, id)
}

/// Partition the graph into strongly connected components.
///
/// Convenience wrapper around a fresh [`ComponentFinder`].
pub fn all_components(graph: &DirectedGraph) -> Vec<Vec<NodeId>> {
    ComponentFinder::new().all_components(graph)
}
