//! digraph-menu: a directed graph with ordered adjacency lists.
//!
//! Vertices are single characters; edges are directed, unweighted and may
//! repeat. The graph supports breadth-first and depth-first traversal and
//! export to Graphviz DOT. The `cli` module wraps it in a line-driven menu.

pub mod cli;
pub mod format;
pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use format::DotWriter;
pub use graph::{bfs, dfs, traverse, DiGraph, GraphBuilder, TraversalOrder};
pub use types::{
    Edge, ErrorKind, GraphError, GraphResult, VertexId, DEFAULT_DOT_FILE, DOT_INDENT,
};
