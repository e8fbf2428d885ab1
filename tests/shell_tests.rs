//! Menu shell tests: command building, execution and the input loop.

use std::fs;
use std::io::Cursor;
use std::path::Path;

use digraph_menu::cli::{
    execute, write_outcome, Command, MenuOption, OutputFormat, Outcome, Shell, ShellConfig,
};
use digraph_menu::graph::{DiGraph, TraversalOrder};
use digraph_menu::types::ErrorKind;
use tempfile::tempdir;

// ==================== Helper ====================

/// Run a scripted session and return the final graph and everything printed.
fn run_script(script: &str, config: ShellConfig) -> (DiGraph, String) {
    let mut shell = Shell::new(Cursor::new(script.to_string()), Vec::new(), config);
    shell.run().unwrap();
    let (graph, out) = shell.into_parts();
    (graph, String::from_utf8(out).unwrap())
}

fn quiet() -> ShellConfig {
    ShellConfig {
        show_menu: false,
        ..ShellConfig::default()
    }
}

fn json() -> ShellConfig {
    ShellConfig {
        format: OutputFormat::Json,
        ..ShellConfig::default()
    }
}

// ==================== Menu Tests ====================

#[test]
fn test_menu_keys_roundtrip() {
    for option in MenuOption::ALL {
        assert_eq!(MenuOption::from_key(option.key()), Some(option));
    }
}

#[test]
fn test_menu_keys_case_sensitive() {
    assert_eq!(MenuOption::from_key('A'), Some(MenuOption::ExportDot));
    assert_eq!(MenuOption::from_key('a'), None);
    assert_eq!(MenuOption::from_key('x'), None);
    assert_eq!(MenuOption::from_key('0'), None);
}

#[test]
fn test_command_from_option_checks_arity() {
    assert_eq!(
        Command::from_option(MenuOption::InsertEdge, &['A', 'B']),
        Some(Command::InsertEdge { from: 'A', to: 'B' })
    );
    assert_eq!(
        Command::from_option(MenuOption::DepthFirst, &['A']),
        Some(Command::Traverse {
            order: TraversalOrder::DepthFirst,
            start: 'A'
        })
    );
    assert_eq!(Command::from_option(MenuOption::InsertEdge, &['A']), None);
    assert_eq!(Command::from_option(MenuOption::Size, &['A']), None);
}

// ==================== Execute Tests ====================

#[test]
fn test_execute_reports_failures_without_mutation() {
    let mut graph = DiGraph::new();
    let path = Path::new("unused.dot");

    let outcome = execute(&mut graph, &Command::InsertVertex('A'), path);
    assert_eq!(outcome, Outcome::VertexInserted { vertex: 'A' });

    let outcome = execute(&mut graph, &Command::InsertVertex('A'), path);
    assert!(matches!(
        outcome,
        Outcome::Failed {
            command: "insert_vertex",
            error: ErrorKind::AlreadyExists,
            ..
        }
    ));

    let outcome = execute(&mut graph, &Command::InsertEdge { from: 'A', to: 'Z' }, path);
    assert!(matches!(
        outcome,
        Outcome::Failed {
            error: ErrorKind::InvalidEndpoint,
            ..
        }
    ));

    let outcome = execute(
        &mut graph,
        &Command::Traverse {
            order: TraversalOrder::BreadthFirst,
            start: 'Q',
        },
        path,
    );
    assert!(matches!(
        outcome,
        Outcome::Failed {
            command: "bfs",
            error: ErrorKind::NotFound,
            ..
        }
    ));

    assert_eq!(graph.size(), 1);
    assert_eq!(graph.edge_count(), 0);
}

#[test]
fn test_execute_export_failure() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("no").join("such").join("dir.dot");
    let mut graph = DiGraph::new();
    let outcome = execute(&mut graph, &Command::ExportDot, &path);
    assert!(matches!(
        outcome,
        Outcome::Failed {
            error: ErrorKind::IoFailure,
            ..
        }
    ));
}

#[test]
fn test_text_rendering() {
    let mut out = Vec::new();
    let outcome = Outcome::Traversal {
        order: TraversalOrder::BreadthFirst,
        start: 'A',
        visited: vec!['A', 'B', 'C'],
    };
    write_outcome(&mut out, &outcome, OutputFormat::Text).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "A B C\n");
}

#[test]
fn test_json_rendering() {
    let mut out = Vec::new();
    let outcome = Outcome::Traversal {
        order: TraversalOrder::DepthFirst,
        start: 'A',
        visited: vec!['A', 'C'],
    };
    write_outcome(&mut out, &outcome, OutputFormat::Json).unwrap();
    let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(value["op"], "traversal");
    assert_eq!(value["order"], "dfs");
    assert_eq!(value["visited"], serde_json::json!(["A", "C"]));
}

// ==================== Shell Loop Tests ====================

#[test]
fn test_scripted_session() {
    let dir = tempdir().unwrap();
    let dot_path = dir.path().join("out.dot");
    let config = ShellConfig {
        dot_path: dot_path.clone(),
        ..quiet()
    };
    let script = "1\nA\n1\nB\n1\nC\n2\nA\nB\n2\nA\nC\n2\nB\nC\n3\n4\n8\nA\n9\nA\nA\nX\n";

    let (graph, out) = run_script(script, config);

    assert_eq!(graph.size(), 3);
    assert!(out.contains("Vertex A inserted."));
    assert!(out.contains("Edge from B to C inserted."));
    assert!(out.contains("Graph size: 3"));
    assert!(out.contains("Adjacency list:\nA -> B C\nB -> C\nC ->\n"));
    assert!(out.contains("A B C\n"));
    assert!(out.contains("A C B\n"));
    assert!(out.contains("DOT file written:"));
    assert!(out.ends_with("Exiting...\n"));
    assert!(!out.contains("Select an option"));

    assert_eq!(
        fs::read_to_string(&dot_path).unwrap(),
        "digraph G {\n    A -> B;\n    A -> C;\n    B -> C;\n}\n"
    );
}

#[test]
fn test_reported_conditions_keep_loop_running() {
    let script = "1\nA\n1\nA\n2\nA\nZ\n5\nQ\n8\nZ\nq\n3\nX\n";
    let (graph, out) = run_script(script, quiet());

    assert!(out.contains("Vertex A already exists."));
    assert!(out.contains("One or both vertices do not exist (A -> Z)."));
    assert!(out.contains("Vertex Q does not exist."));
    assert!(out.contains("Vertex Z does not exist."));
    assert!(out.contains("Invalid option. Try again."));
    assert!(out.contains("Graph size: 1"));
    assert_eq!(graph.size(), 1);
}

#[test]
fn test_remove_and_clear_through_shell() {
    let script = "1\nA\n1\nB\n2\nA\nB\n2\nA\nB\n6\nA\nB\n4\n5\nB\n7\n3\n1\nA\nX\n";
    let (graph, out) = run_script(script, quiet());

    assert!(out.contains("Edge from A to B removed."));
    assert!(out.contains("Adjacency list:\nA ->\nB ->\n"));
    assert!(out.contains("Vertex B removed."));
    assert!(out.contains("Graph cleared."));
    assert!(out.contains("Graph size: 0"));
    assert_eq!(graph.vertices().collect::<Vec<_>>(), vec!['A']);
}

#[test]
fn test_input_is_line_based_and_skips_blank_lines() {
    let script = "\n  1  \n\n  Apple\n3\n";
    let (graph, out) = run_script(script, quiet());
    assert!(graph.contains_vertex('A'));
    assert!(out.contains("Graph size: 1"));
}

#[test]
fn test_end_of_input_stops_loop() {
    // Input ends in the middle of an edge prompt.
    let (graph, out) = run_script("1\nA\n2\nA\n", quiet());
    assert_eq!(graph.edge_count(), 0);
    assert!(!out.contains("Exiting..."));
}

#[test]
fn test_menu_printed_in_text_mode() {
    let (_, out) = run_script("X\n", ShellConfig::default());
    assert!(out.contains("1. Insert vertex"));
    assert!(out.contains("A. Export DOT file"));
    assert!(out.contains("X. Quit"));
    assert!(out.contains("Select an option: "));
}

#[test]
fn test_json_session() {
    let (_, out) = run_script("1\nA\n1\nA\n3\nX\n", json());
    let lines: Vec<serde_json::Value> = out
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();

    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0], serde_json::json!({"op": "vertex_inserted", "vertex": "A"}));
    assert_eq!(lines[1]["op"], "failed");
    assert_eq!(lines[1]["error"], "already_exists");
    assert_eq!(lines[2], serde_json::json!({"op": "size", "vertices": 1, "edges": 0}));
    assert_eq!(lines[3], serde_json::json!({"op": "quit"}));
}
