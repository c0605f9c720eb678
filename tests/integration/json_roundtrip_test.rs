//! Integration tests for JSON file import/export.

use digraph::export::{from_json, load_from_file, save_to_file, to_json, JsonOptions};
use digraph::{DirectedGraph, GraphError, Position};
use tempfile::TempDir;

fn create_positioned_graph() -> DirectedGraph {
    let mut graph = DirectedGraph::new();
    graph.add_node(0, Some(Position::new(35.19, 32.1, 0.0)));
    graph.add_node(1, Some(Position::new(35.2, 32.0, 0.0)));
    graph.add_node(2, None);
    graph.add_node(3, Some(Position::new(-1.5, 0.25, 3.0)));
    graph.add_edge(0, 1, 1.3118716362419698).unwrap();
    graph.add_edge(1, 0, 1.232037506070033).unwrap();
    graph.add_edge(1, 2, 0.0).unwrap();
    graph.add_edge(3, 0, 7.5).unwrap();
    graph
}

#[test]
fn test_save_and_load_roundtrip() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("graph.json");

    let graph = create_positioned_graph();
    save_to_file(&graph, &path, &JsonOptions::default()).unwrap();
    let loaded = load_from_file(&path).unwrap();

    assert_eq!(loaded, graph);
    assert_eq!(loaded.vertex_count(), 4);
    assert_eq!(loaded.edge_count(), 4);
    assert_eq!(loaded.position(2).unwrap(), None);
    assert_eq!(loaded.position(3).unwrap(), Some(Position::new(-1.5, 0.25, 3.0)));
}

#[test]
fn test_compact_and_pretty_load_the_same() {
    let graph = create_positioned_graph();
    let pretty = to_json(&graph, &JsonOptions::default()).unwrap();
    let compact = to_json(&graph, &JsonOptions::compact()).unwrap();

    assert!(pretty.contains('\n'));
    assert!(!compact.contains('\n'));
    assert_eq!(from_json(&pretty).unwrap(), from_json(&compact).unwrap());
}

#[test]
fn test_load_exchange_file_with_spaced_positions() {
    let json = r#"{
        "Edges": [
            {"src": 0, "w": 1.4004465106761335, "dest": 1},
            {"src": 1, "w": 1.8884659521433524, "dest": 2},
            {"src": 2, "w": 1.7155926739282625, "dest": 0}
        ],
        "Nodes": [
            {"pos": "35.18753053591606, 32.10378225882353, 0.0", "id": 0},
            {"pos": "35.18958953510896,32.10785303529412,0.0", "id": 1},
            {"pos": "", "id": 2}
        ]
    }"#;
    let graph = from_json(json).unwrap();

    assert_eq!(graph.vertex_count(), 3);
    assert_eq!(graph.edge_count(), 3);
    assert_eq!(graph.version(), 6);
    assert_eq!(graph.position(2).unwrap(), None);
    assert_eq!(graph.all_components().len(), 1);

    let result = graph.shortest_path(0, 2).unwrap();
    assert_eq!(result.path, vec![0, 1, 2]);
}

#[test]
fn test_load_missing_file_is_io_error() {
    let temp_dir = TempDir::new().unwrap();
    let err = load_from_file(temp_dir.path().join("missing.json")).unwrap_err();
    assert!(matches!(err, GraphError::Io { .. }));
}

#[test]
fn test_load_invalid_json_is_serialization_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("broken.json");
    std::fs::write(&path, "{\"Nodes\": [").unwrap();

    let err = load_from_file(&path).unwrap_err();
    assert!(matches!(err, GraphError::Serialization { .. }));
}

#[test]
fn test_empty_graph_roundtrip() {
    let graph = DirectedGraph::new();
    let json = to_json(&graph, &JsonOptions::compact()).unwrap();
    assert_eq!(json, r#"{"Edges":[],"Nodes":[]}"#);
    assert_eq!(from_json(&json).unwrap(), graph);
}

#[test]
fn test_nan_position_in_file_is_invalid_format() {
    let json = r#"{"Edges":[],"Nodes":[{"pos":"nan,1,0","id":0}]}"#;
    assert!(matches!(
        from_json(json),
        Err(GraphError::InvalidFormat { .. })
    ));
}

#[test]
fn test_infinite_weight_fails_at_save_not_load() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("inf.json");

    let mut graph = create_positioned_graph();
    graph.add_edge(2, 3, f64::INFINITY).unwrap();

    let err = save_to_file(&graph, &path, &JsonOptions::default()).unwrap_err();
    assert!(matches!(err, GraphError::Serialization { .. }));
    assert!(!path.exists());
}
