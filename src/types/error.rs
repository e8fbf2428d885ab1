//! Error types for the digraph library.

use serde::Serialize;
use thiserror::Error;

use super::VertexId;

/// All conditions a graph operation can report.
///
/// None of these are fatal: the graph is left exactly as it was before the
/// failing call.
#[derive(Error, Debug)]
pub enum GraphError {
    /// A vertex with this identifier is already registered.
    #[error("Vertex {0} already exists")]
    AlreadyExists(VertexId),

    /// No vertex with this identifier is registered.
    #[error("Vertex {0} does not exist")]
    NotFound(VertexId),

    /// An edge endpoint is not a registered vertex.
    #[error("One or both vertices do not exist ({from} -> {to})")]
    InvalidEndpoint { from: VertexId, to: VertexId },

    /// IO error while writing an export.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Copyable discriminant of a [`GraphError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    AlreadyExists,
    NotFound,
    InvalidEndpoint,
    IoFailure,
}

impl GraphError {
    /// The kind of condition, without the payload.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::AlreadyExists(_) => ErrorKind::AlreadyExists,
            Self::NotFound(_) => ErrorKind::NotFound,
            Self::InvalidEndpoint { .. } => ErrorKind::InvalidEndpoint,
            Self::Io(_) => ErrorKind::IoFailure,
        }
    }
}

/// Convenience result type for graph operations.
pub type GraphResult<T> = Result<T, GraphError>;
