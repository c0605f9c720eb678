//! # digraph
//!
//! A weighted directed graph with Dijkstra shortest paths and Kosaraju
//! strongly connected components.
//!
//! ## Core Principles
//!
//! - **Mirrored Adjacency**: Every edge is recorded on both endpoints, and
//!   only the graph's mutation API can touch either side
//! - **Change Tracking**: A version counter moves once per structural change,
//!   never on a no-op
//! - **Errors vs. No-ops**: Missing nodes and negative weights are errors;
//!   duplicate or inapplicable requests simply return `false`
//! - **No Recursion**: Every traversal uses an explicit stack
//!
//! ## Architecture
//!
//! ```text
//! Export (JSON exchange format, DOT, layout)
//!     ↓
//! Algorithms (Dijkstra, Kosaraju)
//!     ↓
//! Core Graph (DirectedGraph, Node)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use digraph::DirectedGraph;
//!
//! # fn example() -> digraph::Result<()> {
//! let mut graph = DirectedGraph::new();
//! for id in 0..3 {
//!     graph.add_node(id, None);
//! }
//! graph.add_edge(0, 1, 1.0)?;
//! graph.add_edge(1, 2, 2.0)?;
//! graph.add_edge(2, 0, 4.0)?;
//!
//! let result = graph.shortest_path(0, 2)?;
//! assert_eq!(result.distance, 3.0);
//! assert_eq!(result.path, vec![0, 1, 2]);
//!
//! assert_eq!(graph.all_components().len(), 1);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod error;
pub mod export;
pub mod graph;

// Re-export main types
pub use error::{GraphError, Result};
pub use graph::algorithms::{ComponentFinder, PathResult};
pub use graph::{Adjacency, DirectedGraph, Node, NodeId, Position, Weight};
