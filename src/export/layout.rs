//! Position assignment for nodes that have none.

use crate::graph::{DirectedGraph, NodeId, Position};
use crate::Result;
use log::debug;
use std::f64::consts::TAU;

/// Place every node without a position on a circle of the given radius.
///
/// The circle is centred at `(radius, radius, 0)` so all coordinates are
/// non-negative. Nodes are laid out in ascending ID order, which makes the
/// result deterministic. Nodes that already have a position keep it.
///
/// Only positions change; the graph's version and edges are untouched.
/// Returns the number of positions assigned.
pub fn assign_missing_positions(graph: &mut DirectedGraph, radius: f64) -> Result<usize> {
    let missing: Vec<NodeId> = graph
        .nodes()
        .filter(|node| node.position().is_none())
        .map(|node| node.id())
        .collect();

    let count = missing.len();
    for (index, id) in missing.into_iter().enumerate() {
        let angle = TAU * index as f64 / count as f64;
        let position = Position::new(
            radius + radius * angle.cos(),
            radius + radius * angle.sin(),
            0.0,
        );
        graph.set_position(id, position)?;
    }

    debug!("Assigned {count} missing positions");
    Ok(count)
}
