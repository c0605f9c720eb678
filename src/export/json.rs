//! JSON import/export in the graph exchange format.
//!
//! ```json
//! {
//!   "Edges": [ { "src": 0, "w": 1.5, "dest": 1 } ],
//!   "Nodes": [ { "pos": "35.1,32.1,0", "id": 0 }, { "id": 1 } ]
//! }
//! ```
//!
//! Positions are comma-joined coordinate strings. Import adds every node
//! before any edge, so edge order in the file does not matter.

use crate::error::{GraphError, Result};
use crate::graph::{DirectedGraph, NodeId, Position, Weight};
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Options for JSON export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JsonOptions {
    /// Indent the output for humans (default) or emit it on one line
    pub pretty: bool,
}

impl Default for JsonOptions {
    fn default() -> Self {
        Self { pretty: true }
    }
}

impl JsonOptions {
    /// Emit compact single-line JSON.
    pub fn compact() -> Self {
        Self { pretty: false }
    }

    /// Set whether output is indented.
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}

/// Top-level record of the exchange format.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphRecord {
    /// All edges
    #[serde(rename = "Edges", default)]
    pub edges: Vec<EdgeRecord>,
    /// All nodes
    #[serde(rename = "Nodes", default)]
    pub nodes: Vec<NodeRecord>,
}

/// A node entry: ID plus optional comma-joined position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeRecord {
    /// Position as `"x,y,z"` (or `"x,y"`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pos: Option<String>,
    /// Node ID
    pub id: NodeId,
}

/// An edge entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeRecord {
    /// Source node ID
    pub src: NodeId,
    /// Edge weight
    pub w: Weight,
    /// Destination node ID
    pub dest: NodeId,
}

/// Convert a graph into its exchange record.
///
/// Nodes come out in ascending ID order; edges grouped by source, then
/// sorted by destination.
pub fn to_record(graph: &DirectedGraph) -> GraphRecord {
    let mut record = GraphRecord::default();

    for node in graph.nodes() {
        record.nodes.push(NodeRecord {
            pos: node.position().map(|p| p.to_string()),
            id: node.id(),
        });

        let mut targets: Vec<_> = node.out_edges().iter().collect();
        targets.sort_by_key(|(id, _)| **id);
        for (&dest, &w) in targets {
            record.edges.push(EdgeRecord {
                src: node.id(),
                w,
                dest,
            });
        }
    }

    record
}

/// Build a graph from an exchange record.
///
/// Edges that the graph refuses as no-ops (missing endpoint, self-loop,
/// duplicate) are skipped with a warning.
///
/// # Errors
///
/// Returns [`GraphError::InvalidFormat`] for a malformed position and
/// [`GraphError::InvalidWeight`] for a negative edge weight.
pub fn from_record(record: &GraphRecord) -> Result<DirectedGraph> {
    let mut graph = DirectedGraph::new();

    for node in &record.nodes {
        let position = match node.pos.as_deref() {
            Some(pos) => parse_position(pos)?,
            None => None,
        };
        if !graph.add_node(node.id, position) {
            warn!("Skipping duplicate node {}", node.id);
        }
    }

    for edge in &record.edges {
        if !graph.add_edge(edge.src, edge.dest, edge.w)? {
            warn!("Skipping edge {} -> {}: not insertable", edge.src, edge.dest);
        }
    }

    Ok(graph)
}

/// Serialize a graph to a JSON string.
///
/// # Errors
///
/// Returns [`GraphError::Serialization`] if serde_json fails, or if an edge
/// weight or position coordinate is not finite. JSON has no infinity, so
/// such a graph could not be loaded back.
pub fn to_json(graph: &DirectedGraph, options: &JsonOptions) -> Result<String> {
    let record = to_record(graph);
    check_finite(&record)?;
    let json = if options.pretty {
        serde_json::to_string_pretty(&record)
    } else {
        serde_json::to_string(&record)
    };
    json.map_err(|e| GraphError::serialization("Failed to serialize graph", Some(e)))
}

/// Parse a graph from a JSON string.
///
/// # Errors
///
/// Returns [`GraphError::Serialization`] for invalid JSON, otherwise see
/// [`from_record`].
pub fn from_json(json: &str) -> Result<DirectedGraph> {
    let record: GraphRecord = serde_json::from_str(json)
        .map_err(|e| GraphError::serialization("Failed to deserialize graph", Some(e)))?;
    from_record(&record)
}

/// Write a graph to a JSON file.
///
/// # Errors
///
/// Returns [`GraphError::Io`] if the file cannot be written.
pub fn save_to_file<P: AsRef<Path>>(
    graph: &DirectedGraph,
    path: P,
    options: &JsonOptions,
) -> Result<()> {
    let path = path.as_ref();
    info!(
        "Saving graph ({} nodes, {} edges) to {:?}",
        graph.vertex_count(),
        graph.edge_count(),
        path
    );
    let json = to_json(graph, options)?;
    fs::write(path, json)
        .map_err(|e| GraphError::io(format!("Failed to write {}", path.display()), Some(e)))
}

/// Read a graph from a JSON file.
///
/// # Errors
///
/// Returns [`GraphError::Io`] if the file cannot be read, otherwise see
/// [`from_json`].
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<DirectedGraph> {
    let path = path.as_ref();
    info!("Loading graph from {:?}", path);
    let json = fs::read_to_string(path)
        .map_err(|e| GraphError::io(format!("Failed to read {}", path.display()), Some(e)))?;
    from_json(&json)
}

fn check_finite(record: &GraphRecord) -> Result<()> {
    if let Some(edge) = record.edges.iter().find(|edge| !edge.w.is_finite()) {
        return Err(GraphError::serialization::<serde_json::Error>(
            format!(
                "Edge {} -> {} has non-finite weight {}",
                edge.src, edge.dest, edge.w
            ),
            None,
        ));
    }
    for node in &record.nodes {
        if let Some(pos) = node.pos.as_deref() {
            if parse_position(pos).is_err() {
                return Err(GraphError::serialization::<serde_json::Error>(
                    format!("Node {} has non-finite position \"{pos}\"", node.id),
                    None,
                ));
            }
        }
    }
    Ok(())
}

/// Parse a comma-joined position string.
///
/// Accepts two or three finite coordinates (a missing `z` is `0`). An empty
/// string means no position.
fn parse_position(pos: &str) -> Result<Option<Position>> {
    if pos.trim().is_empty() {
        return Ok(None);
    }

    let coords = pos
        .split(',')
        .map(|part| part.trim().parse::<f64>())
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|e| GraphError::InvalidFormat {
            message: format!("Bad coordinate in position \"{pos}\": {e}"),
        })?;

    if let Some(bad) = coords.iter().find(|c| !c.is_finite()) {
        return Err(GraphError::InvalidFormat {
            message: format!("Non-finite coordinate {bad} in position \"{pos}\""),
        });
    }

    match coords.as_slice() {
        [x, y] => Ok(Some(Position::new(*x, *y, 0.0))),
        [x, y, z] => Ok(Some(Position::new(*x, *y, *z))),
        _ => Err(GraphError::InvalidFormat {
            message: format!(
                "Position \"{pos}\" has {} coordinates, expected 2 or 3",
                coords.len()
            ),
        }),
    }
}
