//! Graph traversal algorithms (BFS, DFS).

use std::collections::VecDeque;

use log::{debug, trace};
use serde::Serialize;

use crate::types::{GraphError, GraphResult, VertexId};

use super::DiGraph;

/// Which frontier discipline a traversal uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TraversalOrder {
    /// FIFO frontier: level order.
    #[serde(rename = "bfs")]
    BreadthFirst,
    /// LIFO frontier: the most recently discovered vertex is expanded first.
    #[serde(rename = "dfs")]
    DepthFirst,
}

impl TraversalOrder {
    /// Short name used in logs and JSON output.
    pub fn name(&self) -> &'static str {
        match self {
            Self::BreadthFirst => "bfs",
            Self::DepthFirst => "dfs",
        }
    }
}

/// Breadth-first visitation order of the vertices reachable from `start`.
pub fn bfs(graph: &DiGraph, start: VertexId) -> GraphResult<Vec<VertexId>> {
    traverse(graph, start, TraversalOrder::BreadthFirst)
}

/// Stack-based depth-first visitation order of the vertices reachable from `start`.
///
/// Neighbors are pushed in insertion order, so at each expansion the last
/// inserted edge is followed first. This is not recursive pre-order.
pub fn dfs(graph: &DiGraph, start: VertexId) -> GraphResult<Vec<VertexId>> {
    traverse(graph, start, TraversalOrder::DepthFirst)
}

/// Visit every vertex reachable from `start` exactly once.
///
/// Vertices are marked visited when discovered (pushed), not when emitted, so
/// a vertex reachable along several paths is never queued twice.
pub fn traverse(
    graph: &DiGraph,
    start: VertexId,
    order: TraversalOrder,
) -> GraphResult<Vec<VertexId>> {
    let start_slot = graph.slot_of(start).ok_or(GraphError::NotFound(start))?;

    let mut visited = vec![false; graph.slot_bound()];
    let mut frontier: VecDeque<usize> = VecDeque::new();
    let mut emitted: Vec<VertexId> = Vec::new();

    visited[start_slot] = true;
    frontier.push_back(start_slot);

    loop {
        let next = match order {
            TraversalOrder::BreadthFirst => frontier.pop_front(),
            TraversalOrder::DepthFirst => frontier.pop_back(),
        };
        let Some(current) = next else { break };

        if let Some(id) = graph.id_at(current) {
            trace!("{} emit {id}", order.name());
            emitted.push(id);
        }

        for edge in graph.edges_from_slot(current) {
            if let Some(seen) = visited.get_mut(edge.target) {
                if !*seen {
                    *seen = true;
                    frontier.push_back(edge.target);
                }
            }
        }
    }

    debug!(
        "{} from {start} visited {} vertices",
        order.name(),
        emitted.len()
    );
    Ok(emitted)
}
