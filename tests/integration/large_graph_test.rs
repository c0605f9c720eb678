//! Integration test for large graph handling (100K nodes, 500K edges).

use digraph::DirectedGraph;

#[test]
#[ignore] // This test is slow, run with --ignored flag
fn test_large_graph_100k_nodes_500k_edges() {
    let mut graph = DirectedGraph::new();

    let num_nodes: u64 = 100_000;
    let edges_per_node: u64 = 5;

    for id in 0..num_nodes {
        assert!(graph.add_node(id, None));
    }
    assert_eq!(graph.vertex_count(), num_nodes as usize);

    // Each node links to its next 5 neighbours on a ring
    let mut edge_count = 0;
    for i in 0..num_nodes {
        for j in 1..=edges_per_node {
            let target = (i + j) % num_nodes;
            assert!(graph.add_edge(i, target, j as f64).unwrap());
            edge_count += 1;
        }
    }
    assert_eq!(graph.edge_count(), edge_count);
    assert_eq!(graph.version(), num_nodes + edge_count as u64);

    // The ring is one big component
    let components = graph.all_components();
    assert_eq!(components.len(), 1);
    assert_eq!(components[0].len(), num_nodes as usize);

    // A jump of j positions costs j, so any route to node 10 costs 10
    let result = graph.shortest_path(0, 10).unwrap();
    assert_eq!(result.distance, 10.0);
}
