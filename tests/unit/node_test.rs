//! Unit tests for Node positions and adjacency views.

use digraph::{DirectedGraph, Position};

#[test]
fn test_node_created_with_position() {
    let mut graph = DirectedGraph::new();
    graph.add_node(1, Some(Position::new(2.0, 14.0, 0.0)));

    let node = graph.get_node(1).unwrap();
    assert_eq!(node.id(), 1);
    assert_eq!(node.position(), Some(Position::new(2.0, 14.0, 0.0)));
}

#[test]
fn test_node_without_position() {
    let mut graph = DirectedGraph::new();
    graph.add_node(1, None);
    assert_eq!(graph.position(1).unwrap(), None);
}

#[test]
fn test_duplicate_add_keeps_first_position() {
    let mut graph = DirectedGraph::new();
    graph.add_node(1, Some((1.0, 1.0).into()));
    assert!(!graph.add_node(1, Some((9.0, 9.0).into())));
    assert_eq!(graph.position(1).unwrap(), Some(Position::new(1.0, 1.0, 0.0)));
}

#[test]
fn test_node_degrees_follow_edges() {
    let mut graph = DirectedGraph::new();
    for id in 0..3 {
        graph.add_node(id, None);
    }
    graph.add_edge(0, 1, 1.0).unwrap();
    graph.add_edge(0, 2, 1.0).unwrap();
    graph.add_edge(2, 0, 1.0).unwrap();

    let node = graph.get_node(0).unwrap();
    assert_eq!(node.out_degree(), 2);
    assert_eq!(node.in_degree(), 1);
    assert_eq!(node.in_edges().get(&2), Some(&1.0));
}

#[test]
fn test_nodes_iterate_in_id_order() {
    let mut graph = DirectedGraph::new();
    for id in [5, 1, 3] {
        graph.add_node(id, None);
    }
    let ids: Vec<_> = graph.nodes().map(|n| n.id()).collect();
    assert_eq!(ids, vec![1, 3, 5]);
    assert_eq!(graph.node_ids().collect::<Vec<_>>(), vec![1, 3, 5]);
}
