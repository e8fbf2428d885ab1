//! The edge record stored in adjacency sequences.

/// A directed edge between two arena slots.
///
/// Edges hold slot indices rather than identifiers so that the adjacency
/// store never duplicates vertex state; `DiGraph` resolves them back to
/// [`VertexId`](super::VertexId)s when reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge {
    /// Slot of the source vertex.
    pub source: usize,
    /// Slot of the destination vertex.
    pub target: usize,
}

impl Edge {
    /// Create an edge between two slots.
    pub fn new(source: usize, target: usize) -> Self {
        Self { source, target }
    }
}
