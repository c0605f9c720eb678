//! Collaborators around the core graph: file exchange and rendering.
//!
//! - **JSON**: the `{"Nodes": [...], "Edges": [...]}` exchange format
//! - **DOT**: Graphviz visualization
//! - **Layout**: positions for nodes that have none
//!
//! These modules only use the graph's public API: `add_node`/`add_edge` to
//! ingest, node iteration and adjacency accessors to emit.

pub mod dot;
pub mod json;
pub mod layout;

pub use dot::{export_dot, export_dot_styled, DotOptions};
pub use json::{
    from_json, from_record, load_from_file, save_to_file, to_json, to_record, EdgeRecord,
    GraphRecord, JsonOptions, NodeRecord,
};
pub use layout::assign_missing_positions;
