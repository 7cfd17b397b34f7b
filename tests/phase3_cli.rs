//! Phase 3 tests: command-line input parsing and commands.

use mazegraph::cli::commands::{build_graph, cmd_edges, cmd_path, cmd_sets, SetOp};
use mazegraph::cli::input::{parse_edge_list, parse_index_list, parse_vertex_count};
use mazegraph::types::GraphError;

// ==================== Input Parsing Tests ====================

#[test]
fn test_parse_edge_list() {
    assert_eq!(
        parse_edge_list("0-1,1-2, 2 - 3").unwrap(),
        vec![(0, 1), (1, 2), (2, 3)]
    );
    assert!(parse_edge_list("").unwrap().is_empty());
    assert!(parse_edge_list(" , ").unwrap().is_empty());
}

#[test]
fn test_parse_edge_list_rejects_garbage() {
    assert!(matches!(
        parse_edge_list("0-1,12"),
        Err(GraphError::InvalidEdgeList(_))
    ));
    assert!(matches!(
        parse_edge_list("a-b"),
        Err(GraphError::InvalidEdgeList(_))
    ));
    assert!(matches!(
        parse_edge_list("1--2"),
        Err(GraphError::InvalidEdgeList(_))
    ));
}

#[test]
fn test_parse_index_list() {
    assert_eq!(parse_index_list("3, 1,2").unwrap(), vec![3, 1, 2]);
    assert!(parse_index_list("").unwrap().is_empty());
    assert!(parse_index_list("1,x").is_err());
}

#[test]
fn test_parse_vertex_count() {
    assert_eq!(parse_vertex_count("12"), Ok(12));
    assert!(parse_vertex_count("0").is_err());
    assert!(parse_vertex_count("-3").is_err());
}

#[test]
fn test_set_op_names() {
    for op in [SetOp::Union, SetOp::Intersection, SetOp::Difference] {
        assert_eq!(SetOp::from_name(op.name()), Some(op));
    }
    assert_eq!(SetOp::from_name("and"), Some(SetOp::Intersection));
    assert_eq!(SetOp::from_name("xor"), None);
}

// ==================== Command Tests ====================

#[test]
fn test_build_graph_from_edge_list() {
    let graph = build_graph(4, "0-1,1-2,2-3").unwrap();
    assert_eq!(graph.edge_count(), 3);
    assert!(graph.is_edge(&1, &2).unwrap());
    assert_eq!(graph.find_default_path().unwrap().len(), 4);

    assert!(matches!(
        build_graph(3, "0-5"),
        Err(GraphError::InvalidIndex { index: 5, size: 3 })
    ));
}

#[test]
fn test_zero_vertex_count_is_rejected() {
    let empty = GraphError::InvalidIndex { index: 0, size: 0 };
    assert_eq!(build_graph(0, "").unwrap_err(), empty);
    assert_eq!(cmd_path(0, "", None, None, false, false), Err(empty.clone()));
    assert_eq!(cmd_edges(0, "", 0, true), Err(empty));
}

#[test]
fn test_cmd_path_outcomes() {
    assert!(cmd_path(4, "0-1,1-2,2-3", None, None, false, false).is_ok());
    assert!(cmd_path(4, "0-1,1-2,2-3", Some(1), Some(3), true, true).is_ok());
    assert_eq!(
        cmd_path(4, "0-1,1-2", None, None, false, false),
        Err(GraphError::NoPath { from: 0, to: 3 })
    );
    assert!(matches!(
        cmd_path(4, "0-1", Some(9), None, false, true),
        Err(GraphError::InvalidIndex { index: 9, .. })
    ));
}

#[test]
fn test_cmd_edges_and_sets() {
    assert!(cmd_edges(3, "0-1,0-2", 0, false).is_ok());
    assert!(cmd_edges(3, "0-1,0-2", 2, true).is_ok());
    assert!(cmd_edges(3, "", 3, false).is_err());

    assert!(cmd_sets("1,2,3", "2,3,4", SetOp::Union, false).is_ok());
    assert!(cmd_sets("1,2,3", "2,3,4", SetOp::Difference, true).is_ok());
    assert!(cmd_sets("1,2", "q", SetOp::Intersection, false).is_err());
}
