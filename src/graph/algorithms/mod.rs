//! Graph analysis algorithms.
//!
//! - [`shortest_path`]: Dijkstra's single-pair shortest path
//! - [`ComponentFinder`]: Kosaraju's strongly connected components
//!
//! Both run read-only over a [`DirectedGraph`](crate::DirectedGraph) and keep
//! their working state (distances, predecessors, visitation marks) local to
//! the call. All traversals are iterative, so deep graphs cannot overflow
//! the call stack.

mod components;
mod shortest_path;

pub use components::{all_components, component_of, ComponentFinder};
pub use shortest_path::{shortest_path, PathResult};
