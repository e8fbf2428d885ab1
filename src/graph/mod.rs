//! In-memory directed graph: storage, construction and traversal.

pub mod builder;
pub mod digraph;
pub mod traversal;

pub use builder::GraphBuilder;
pub use digraph::DiGraph;
pub use traversal::{bfs, dfs, traverse, TraversalOrder};
