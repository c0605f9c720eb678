//! Unit tests for DOT export and layout.

use digraph::export::{assign_missing_positions, export_dot, export_dot_styled, DotOptions};
use digraph::{DirectedGraph, Position};

fn create_test_graph() -> DirectedGraph {
    let mut graph = DirectedGraph::new();
    graph.add_node(0, Some(Position::new(1.0, 2.0, 0.0)));
    graph.add_node(1, None);
    graph.add_node(2, None);
    graph.add_edge(0, 1, 1.5).unwrap();
    graph.add_edge(1, 0, 2.0).unwrap();
    graph.add_edge(1, 2, 0.25).unwrap();
    graph
}

#[test]
fn test_export_dot_basic() {
    let graph = create_test_graph();
    let dot = export_dot(&graph).unwrap();

    assert!(dot.starts_with("digraph \"G\" {"));
    assert!(dot.contains("rankdir=LR"));
    assert!(dot.contains("n0 [label=\"0\""));
    assert!(dot.contains("n0 -> n1 [label=\"1.50\"];"));
    assert!(dot.contains("n1 -> n2 [label=\"0.25\"];"));
    assert!(dot.trim_end().ends_with('}'));
    assert!(!dot.contains("pos="));
}

#[test]
fn test_export_dot_without_weights() {
    let graph = create_test_graph();
    let dot = export_dot_styled(&graph, DotOptions::default().with_weights(false)).unwrap();
    assert!(dot.contains("n0 -> n1;"));
    assert!(!dot.contains("label=\"1.50\""));
}

#[test]
fn test_export_dot_with_positions() {
    let graph = create_test_graph();
    let options = DotOptions::default().with_positions(true).with_rankdir("TB");
    let dot = export_dot_styled(&graph, options).unwrap();

    assert!(dot.contains("rankdir=TB"));
    assert!(dot.contains("pos=\"1,2!\""));
    // Nodes without a position are left for Graphviz to place
    assert_eq!(dot.matches("pos=").count(), 1);
}

#[test]
fn test_export_dot_colours_components() {
    let graph = create_test_graph();
    let components = graph.all_components();
    assert_eq!(components.len(), 2);

    let dot = export_dot_styled(&graph, DotOptions::default().with_components(components)).unwrap();
    let palette = DotOptions::default().palette;
    assert!(dot.contains(&palette[0]));
    assert!(dot.contains(&palette[1]));
    assert!(!dot.contains("#E0E0E0"));
}

#[test]
fn test_layout_then_export() {
    let mut graph = create_test_graph();
    let version = graph.version();

    let assigned = assign_missing_positions(&mut graph, 50.0).unwrap();
    assert_eq!(assigned, 2);
    assert_eq!(graph.version(), version);
    assert!(graph.nodes().all(|node| node.position().is_some()));

    let dot = export_dot_styled(&graph, DotOptions::default().with_positions(true)).unwrap();
    assert_eq!(dot.matches("pos=").count(), 3);
}

#[test]
fn test_export_dot_full_text() {
    let mut graph = DirectedGraph::new();
    graph.add_node(0, None);
    graph.add_node(1, None);
    graph.add_edge(0, 1, 1.5).unwrap();

    let dot = export_dot(&graph).unwrap();
    assert_eq!(
        dot,
        "digraph \"G\" {\n    rankdir=LR;\n    node [style=filled];\n\n    \
         n0 [label=\"0\", fillcolor=\"#E0E0E0\"];\n    \
         n1 [label=\"1\", fillcolor=\"#E0E0E0\"];\n\n    \
         n0 -> n1 [label=\"1.50\"];\n}\n"
    );
}
