//! Fluent API for building DiGraph instances.

use crate::types::{GraphResult, VertexId};

use super::DiGraph;

/// Fluent builder for constructing a DiGraph.
///
/// Vertices are inserted before edges, in the order given; the first
/// duplicate vertex or dangling edge aborts the build.
#[derive(Debug, Default)]
pub struct GraphBuilder {
    vertices: Vec<VertexId>,
    edges: Vec<(VertexId, VertexId)>,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a vertex.
    pub fn vertex(mut self, id: VertexId) -> Self {
        self.vertices.push(id);
        self
    }

    /// Add several vertices, e.g. `.vertices("ABC".chars())`.
    pub fn vertices(mut self, ids: impl IntoIterator<Item = VertexId>) -> Self {
        self.vertices.extend(ids);
        self
    }

    /// Add a directed edge.
    pub fn edge(mut self, from: VertexId, to: VertexId) -> Self {
        self.edges.push((from, to));
        self
    }

    /// Build the final DiGraph.
    pub fn build(self) -> GraphResult<DiGraph> {
        let mut graph = DiGraph::with_capacity(self.vertices.len());
        for id in self.vertices {
            graph.insert_vertex(id)?;
        }
        for (from, to) in self.edges {
            graph.insert_edge(from, to)?;
        }
        Ok(graph)
    }
}
