//! Writes Graphviz DOT descriptions of a graph.

use std::io::{BufWriter, Write};
use std::path::Path;

use log::debug;

use crate::graph::DiGraph;
use crate::types::{GraphResult, DOT_INDENT};

/// Writer for DOT `digraph` descriptions.
///
/// Only the edge relation is emitted: one `from -> to;` line per edge,
/// vertices in ascending identifier order and edges in insertion order.
/// Isolated vertices do not appear.
#[derive(Debug, Clone)]
pub struct DotWriter {
    name: String,
}

impl Default for DotWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl DotWriter {
    /// Writer for a digraph named `G`.
    pub fn new() -> Self {
        Self {
            name: "G".to_string(),
        }
    }

    /// Writer using a custom graph name in the header line.
    pub fn with_name(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Render the DOT description into a string.
    pub fn render(&self, graph: &DiGraph) -> String {
        let mut out = format!("digraph {} {{\n", self.name);
        for (from, to) in graph.edges() {
            out.push_str(&format!("{DOT_INDENT}{from} -> {to};\n"));
        }
        out.push_str("}\n");
        out
    }

    /// Write the DOT description to any writer.
    pub fn write_to(&self, graph: &DiGraph, writer: &mut impl Write) -> GraphResult<()> {
        writer.write_all(self.render(graph).as_bytes())?;
        Ok(())
    }

    /// Create (or truncate) `path` and write the DOT description to it.
    pub fn write_to_file(&self, graph: &DiGraph, path: &Path) -> GraphResult<()> {
        let file = std::fs::File::create(path)?;
        let mut writer = BufWriter::new(file);
        self.write_to(graph, &mut writer)?;
        writer.flush()?;
        debug!(
            "exported {} edges to {}",
            graph.edge_count(),
            path.display()
        );
        Ok(())
    }
}
