//! All data types for the digraph library.

pub mod edge;
pub mod error;

pub use edge::Edge;
pub use error::{ErrorKind, GraphError, GraphResult};

/// Identifier of a vertex. The menu expects `A`-`Z`, but any character is accepted.
pub type VertexId = char;

/// Destination used by the menu's export command when none is configured.
pub const DEFAULT_DOT_FILE: &str = "graph.dot";

/// Indentation applied to every edge line of a DOT export.
pub const DOT_INDENT: &str = "    ";
