//! Core graph types and operations.
//!
//! This module defines the fundamental building blocks:
//! - [`Node`]: A vertex with mirrored outgoing/incoming adjacency maps
//! - [`DirectedGraph`]: The graph container and its mutation API
//! - [`algorithms`]: Dijkstra shortest paths and Kosaraju SCCs

mod digraph;
mod types;
pub mod algorithms;

pub use digraph::DirectedGraph;
pub use types::{Adjacency, Node, NodeId, Position, Weight};
