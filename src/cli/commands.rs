//! Menu command implementations: one `Command` in, one `Outcome` out.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::graph::{traverse, DiGraph, TraversalOrder};
use crate::types::{ErrorKind, GraphError, VertexId};

use super::config::OutputFormat;
use super::menu::MenuOption;

/// A single graph operation requested by the shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    InsertVertex(VertexId),
    InsertEdge { from: VertexId, to: VertexId },
    Size,
    ShowAdjacency,
    RemoveVertex(VertexId),
    RemoveEdge { from: VertexId, to: VertexId },
    ClearAll,
    Traverse { order: TraversalOrder, start: VertexId },
    ExportDot,
    Quit,
    /// Unrecognised menu key.
    Invalid(char),
}

impl Command {
    /// Build the command for a menu option from the identifiers read for its prompts.
    ///
    /// Returns `None` when `args` does not match the option's prompt count.
    pub fn from_option(option: MenuOption, args: &[VertexId]) -> Option<Self> {
        let command = match (option, args) {
            (MenuOption::InsertVertex, &[id]) => Self::InsertVertex(id),
            (MenuOption::InsertEdge, &[from, to]) => Self::InsertEdge { from, to },
            (MenuOption::Size, &[]) => Self::Size,
            (MenuOption::ShowAdjacency, &[]) => Self::ShowAdjacency,
            (MenuOption::RemoveVertex, &[id]) => Self::RemoveVertex(id),
            (MenuOption::RemoveEdge, &[from, to]) => Self::RemoveEdge { from, to },
            (MenuOption::ClearAll, &[]) => Self::ClearAll,
            (MenuOption::BreadthFirst, &[start]) => Self::Traverse {
                order: TraversalOrder::BreadthFirst,
                start,
            },
            (MenuOption::DepthFirst, &[start]) => Self::Traverse {
                order: TraversalOrder::DepthFirst,
                start,
            },
            (MenuOption::ExportDot, &[]) => Self::ExportDot,
            (MenuOption::Quit, &[]) => Self::Quit,
            _ => return None,
        };
        Some(command)
    }

    /// Operation name used in JSON output.
    pub fn name(&self) -> &'static str {
        match self {
            Self::InsertVertex(_) => "insert_vertex",
            Self::InsertEdge { .. } => "insert_edge",
            Self::Size => "size",
            Self::ShowAdjacency => "show_adjacency",
            Self::RemoveVertex(_) => "remove_vertex",
            Self::RemoveEdge { .. } => "remove_edge",
            Self::ClearAll => "clear_all",
            Self::Traverse { order, .. } => order.name(),
            Self::ExportDot => "export_dot",
            Self::Quit => "quit",
            Self::Invalid(_) => "invalid",
        }
    }
}

/// One line of the adjacency listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdjacencyRow {
    pub vertex: VertexId,
    pub targets: Vec<VertexId>,
}

/// The result of executing a [`Command`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Outcome {
    VertexInserted {
        vertex: VertexId,
    },
    EdgeInserted {
        from: VertexId,
        to: VertexId,
    },
    Size {
        vertices: usize,
        edges: usize,
    },
    Adjacency {
        rows: Vec<AdjacencyRow>,
    },
    VertexRemoved {
        vertex: VertexId,
        edges_removed: usize,
    },
    EdgeRemoved {
        from: VertexId,
        to: VertexId,
        removed: usize,
    },
    Cleared,
    Traversal {
        order: TraversalOrder,
        start: VertexId,
        visited: Vec<VertexId>,
    },
    Exported {
        path: PathBuf,
    },
    Quit,
    InvalidOption {
        key: char,
    },
    Failed {
        command: &'static str,
        error: ErrorKind,
        message: String,
    },
}

impl Outcome {
    fn failed(command: &Command, err: GraphError) -> Self {
        Self::Failed {
            command: command.name(),
            error: err.kind(),
            message: err.to_string(),
        }
    }

    /// Whether the shell should stop after this outcome.
    pub fn is_quit(&self) -> bool {
        matches!(self, Self::Quit)
    }
}

/// Apply one command to the graph. Graph errors become `Outcome::Failed`.
pub fn execute(graph: &mut DiGraph, command: &Command, dot_path: &Path) -> Outcome {
    let result = match *command {
        Command::InsertVertex(vertex) => graph
            .insert_vertex(vertex)
            .map(|()| Outcome::VertexInserted { vertex }),
        Command::InsertEdge { from, to } => graph
            .insert_edge(from, to)
            .map(|()| Outcome::EdgeInserted { from, to }),
        Command::Size => Ok(Outcome::Size {
            vertices: graph.size(),
            edges: graph.edge_count(),
        }),
        Command::ShowAdjacency => Ok(Outcome::Adjacency {
            rows: graph
                .adjacency()
                .map(|(vertex, targets)| AdjacencyRow { vertex, targets })
                .collect(),
        }),
        Command::RemoveVertex(vertex) => graph
            .remove_vertex(vertex)
            .map(|edges_removed| Outcome::VertexRemoved {
                vertex,
                edges_removed,
            }),
        Command::RemoveEdge { from, to } => graph
            .remove_edge(from, to)
            .map(|removed| Outcome::EdgeRemoved { from, to, removed }),
        Command::ClearAll => {
            graph.clear();
            Ok(Outcome::Cleared)
        }
        Command::Traverse { order, start } => {
            traverse(graph, start, order).map(|visited| Outcome::Traversal {
                order,
                start,
                visited,
            })
        }
        Command::ExportDot => graph.export_dot(dot_path).map(|()| Outcome::Exported {
            path: dot_path.to_path_buf(),
        }),
        Command::Quit => Ok(Outcome::Quit),
        Command::Invalid(key) => Ok(Outcome::InvalidOption { key }),
    };

    result.unwrap_or_else(|err| Outcome::failed(command, err))
}

/// Print an outcome in the requested format.
pub fn write_outcome(
    out: &mut impl Write,
    outcome: &Outcome,
    format: OutputFormat,
) -> io::Result<()> {
    match format {
        OutputFormat::Text => write_text(out, outcome),
        OutputFormat::Json => {
            let line = serde_json::to_string(outcome)
                .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
            writeln!(out, "{line}")
        }
    }
}

fn write_text(out: &mut impl Write, outcome: &Outcome) -> io::Result<()> {
    match outcome {
        Outcome::VertexInserted { vertex } => writeln!(out, "Vertex {vertex} inserted."),
        Outcome::EdgeInserted { from, to } => {
            writeln!(out, "Edge from {from} to {to} inserted.")
        }
        Outcome::Size { vertices, .. } => writeln!(out, "Graph size: {vertices}"),
        Outcome::Adjacency { rows } => {
            writeln!(out, "Adjacency list:")?;
            for row in rows {
                writeln!(out, "{}", format_row(row))?;
            }
            Ok(())
        }
        Outcome::VertexRemoved { vertex, .. } => writeln!(out, "Vertex {vertex} removed."),
        Outcome::EdgeRemoved { from, to, .. } => {
            writeln!(out, "Edge from {from} to {to} removed.")
        }
        Outcome::Cleared => writeln!(out, "Graph cleared."),
        Outcome::Traversal { visited, .. } => writeln!(out, "{}", join_ids(visited)),
        Outcome::Exported { path } => {
            writeln!(out, "DOT file written: {}", path.display())?;
            writeln!(
                out,
                "Render it with: dot -Tpng {} -o {}",
                path.display(),
                path.with_extension("png").display()
            )
        }
        Outcome::Quit => writeln!(out, "Exiting..."),
        Outcome::InvalidOption { .. } => writeln!(out, "Invalid option. Try again."),
        Outcome::Failed { message, .. } => writeln!(out, "{message}."),
    }
}

/// `A -> B C`, or `A ->` for a vertex without outgoing edges.
fn format_row(row: &AdjacencyRow) -> String {
    if row.targets.is_empty() {
        format!("{} ->", row.vertex)
    } else {
        format!("{} -> {}", row.vertex, join_ids(&row.targets))
    }
}

fn join_ids(ids: &[VertexId]) -> String {
    ids.iter()
        .map(char::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
