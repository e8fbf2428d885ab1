//! BFS / DFS traversal tests.

use digraph_menu::graph::{bfs, dfs, traverse, DiGraph, GraphBuilder, TraversalOrder};
use digraph_menu::types::GraphError;

fn abc() -> DiGraph {
    GraphBuilder::new()
        .vertices("ABC".chars())
        .edge('A', 'B')
        .edge('A', 'C')
        .edge('B', 'C')
        .build()
        .unwrap()
}

/// A -> B, A -> C, B -> D, C -> D, D -> E; F -> A is unreachable from A.
fn diamond() -> DiGraph {
    GraphBuilder::new()
        .vertices("ABCDEF".chars())
        .edge('A', 'B')
        .edge('A', 'C')
        .edge('B', 'D')
        .edge('C', 'D')
        .edge('D', 'E')
        .edge('F', 'A')
        .build()
        .unwrap()
}

#[test]
fn test_bfs_level_order() {
    assert_eq!(bfs(&abc(), 'A').unwrap(), vec!['A', 'B', 'C']);
    assert_eq!(bfs(&diamond(), 'A').unwrap(), vec!['A', 'B', 'C', 'D', 'E']);
}

#[test]
fn test_dfs_stack_order() {
    // Last inserted neighbor is expanded first.
    assert_eq!(dfs(&abc(), 'A').unwrap(), vec!['A', 'C', 'B']);
    assert_eq!(dfs(&diamond(), 'A').unwrap(), vec!['A', 'C', 'D', 'E', 'B']);
}

#[test]
fn test_dfs_marks_on_discovery() {
    // D is discovered from A, so the B->D and C->D edges never push it again.
    let graph = GraphBuilder::new()
        .vertices("ABCD".chars())
        .edge('A', 'B')
        .edge('A', 'D')
        .edge('B', 'D')
        .edge('B', 'C')
        .edge('C', 'D')
        .build()
        .unwrap();
    assert_eq!(dfs(&graph, 'A').unwrap(), vec!['A', 'D', 'B', 'C']);
}

#[test]
fn test_traversal_stays_in_component() {
    let mut graph = diamond();
    graph.insert_vertex('X').unwrap();
    graph.insert_vertex('Y').unwrap();
    graph.insert_edge('X', 'Y').unwrap();

    for order in [TraversalOrder::BreadthFirst, TraversalOrder::DepthFirst] {
        let mut visited = traverse(&graph, 'B', order).unwrap();
        assert_eq!(visited.len(), 3);
        visited.sort_unstable();
        assert_eq!(visited, vec!['B', 'D', 'E']);
    }
}

#[test]
fn test_traversal_emits_each_vertex_once() {
    let mut graph = GraphBuilder::new()
        .vertices("ABC".chars())
        .edge('A', 'B')
        .edge('A', 'B')
        .edge('B', 'A')
        .edge('B', 'C')
        .edge('C', 'A')
        .edge('C', 'C')
        .build()
        .unwrap();
    graph.insert_edge('A', 'A').unwrap();

    assert_eq!(bfs(&graph, 'A').unwrap(), vec!['A', 'B', 'C']);
    assert_eq!(dfs(&graph, 'A').unwrap(), vec!['A', 'B', 'C']);
}

#[test]
fn test_isolated_start_emits_itself() {
    let mut graph = abc();
    graph.insert_vertex('Q').unwrap();
    assert_eq!(bfs(&graph, 'Q').unwrap(), vec!['Q']);
    assert_eq!(dfs(&graph, 'C').unwrap(), vec!['C']);
}

#[test]
fn test_missing_start_vertex() {
    let graph = abc();
    assert!(matches!(bfs(&graph, 'Z'), Err(GraphError::NotFound('Z'))));
    assert!(matches!(dfs(&graph, 'Z'), Err(GraphError::NotFound('Z'))));
}

#[test]
fn test_traversal_after_vertex_removal() {
    let mut graph = diamond();
    graph.remove_vertex('D').unwrap();
    assert_eq!(bfs(&graph, 'A').unwrap(), vec!['A', 'B', 'C']);
    assert_eq!(bfs(&graph, 'F').unwrap(), vec!['F', 'A', 'B', 'C']);
}

#[test]
fn test_traversal_order_names() {
    assert_eq!(TraversalOrder::BreadthFirst.name(), "bfs");
    assert_eq!(TraversalOrder::DepthFirst.name(), "dfs");
}
