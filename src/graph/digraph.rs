//! Core graph structure: vertex registry + per-vertex adjacency sequences.

use std::collections::BTreeMap;
use std::path::Path;

use log::debug;

use crate::format::DotWriter;
use crate::types::{Edge, GraphError, GraphResult, VertexId};

/// Arena slot holding one live vertex and its outgoing edges.
#[derive(Debug, Clone)]
struct VertexSlot {
    id: VertexId,
    /// Outgoing edges in insertion order. Parallel edges are kept.
    edges: Vec<Edge>,
}

/// A directed, unweighted graph with ordered adjacency sequences.
///
/// Vertices live in an arena of slots addressed by index. The registry maps
/// each identifier to its slot and iterates in ascending identifier order,
/// which is the order used for listing and export. Removing a vertex empties
/// its slot, filters every other sequence, and recycles the slot.
#[derive(Debug, Clone, Default)]
pub struct DiGraph {
    /// Arena of vertex slots; `None` marks a free slot.
    slots: Vec<Option<VertexSlot>>,
    /// Free slot indices available for reuse.
    free: Vec<usize>,
    /// Registry: identifier -> slot index.
    registry: BTreeMap<VertexId, usize>,
}

impl DiGraph {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-allocate for a known number of vertices.
    pub fn with_capacity(vertex_count: usize) -> Self {
        Self {
            slots: Vec::with_capacity(vertex_count),
            free: Vec::new(),
            registry: BTreeMap::new(),
        }
    }

    /// Number of registered vertices.
    pub fn size(&self) -> usize {
        self.registry.len()
    }

    /// Total number of edges, parallel edges counted individually.
    pub fn edge_count(&self) -> usize {
        self.live_slots().map(|v| v.edges.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }

    /// Whether `id` is a registered vertex.
    pub fn contains_vertex(&self, id: VertexId) -> bool {
        self.registry.contains_key(&id)
    }

    /// Register a new vertex with an empty adjacency sequence.
    pub fn insert_vertex(&mut self, id: VertexId) -> GraphResult<()> {
        if self.registry.contains_key(&id) {
            return Err(GraphError::AlreadyExists(id));
        }

        let vertex = VertexSlot {
            id,
            edges: Vec::new(),
        };
        let slot = match self.free.pop() {
            Some(slot) => {
                self.slots[slot] = Some(vertex);
                slot
            }
            None => {
                self.slots.push(Some(vertex));
                self.slots.len() - 1
            }
        };
        self.registry.insert(id, slot);

        debug!("inserted vertex {id} at slot {slot}");
        Ok(())
    }

    /// Remove a vertex together with its own edges and every edge pointing at it.
    ///
    /// Returns the number of edges dropped. O(V + E).
    pub fn remove_vertex(&mut self, id: VertexId) -> GraphResult<usize> {
        let slot = self.slot_of(id).ok_or(GraphError::NotFound(id))?;

        let own = self
            .slots
            .get_mut(slot)
            .and_then(Option::take)
            .map(|v| v.edges.len())
            .unwrap_or(0);

        let mut incoming = 0;
        for vertex in self.slots.iter_mut().flatten() {
            let before = vertex.edges.len();
            vertex.edges.retain(|e| e.target != slot);
            incoming += before - vertex.edges.len();
        }

        self.registry.remove(&id);
        self.free.push(slot);

        debug!(
            "removed vertex {id} (slot {slot}): {own} outgoing, {incoming} incoming edges dropped"
        );
        Ok(own + incoming)
    }

    /// Append a directed edge `from -> to`. Self-loops and parallel edges are allowed.
    pub fn insert_edge(&mut self, from: VertexId, to: VertexId) -> GraphResult<()> {
        let (source, target) = self.endpoints(from, to)?;
        let vertex = self
            .slots
            .get_mut(source)
            .and_then(Option::as_mut)
            .ok_or(GraphError::InvalidEndpoint { from, to })?;
        vertex.edges.push(Edge::new(source, target));

        debug!("inserted edge {from} -> {to}");
        Ok(())
    }

    /// Remove every edge `from -> to`, including parallel copies.
    ///
    /// Returns how many edges were removed; zero is not an error as long as
    /// both endpoints exist.
    pub fn remove_edge(&mut self, from: VertexId, to: VertexId) -> GraphResult<usize> {
        let (source, target) = self.endpoints(from, to)?;
        let vertex = self
            .slots
            .get_mut(source)
            .and_then(Option::as_mut)
            .ok_or(GraphError::InvalidEndpoint { from, to })?;

        let before = vertex.edges.len();
        vertex.edges.retain(|e| e.target != target);
        let removed = before - vertex.edges.len();

        debug!("removed {removed} edge(s) {from} -> {to}");
        Ok(removed)
    }

    /// Drop every vertex and edge, returning to the freshly constructed state.
    pub fn clear(&mut self) {
        let vertices = self.registry.len();
        self.slots.clear();
        self.free.clear();
        self.registry.clear();
        debug!("cleared graph ({vertices} vertices)");
    }

    /// Registered identifiers in ascending order.
    pub fn vertices(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.registry.keys().copied()
    }

    /// Destinations of the outgoing edges of `id`, in insertion order.
    pub fn neighbors(&self, id: VertexId) -> GraphResult<impl Iterator<Item = VertexId> + '_> {
        let slot = self.slot_of(id).ok_or(GraphError::NotFound(id))?;
        Ok(self
            .edges_from_slot(slot)
            .iter()
            .filter_map(move |e| self.id_at(e.target)))
    }

    /// Every vertex (ascending) paired with its destinations (insertion order).
    pub fn adjacency(&self) -> impl Iterator<Item = (VertexId, Vec<VertexId>)> + '_ {
        self.registry.iter().map(move |(&id, &slot)| {
            let targets = self
                .edges_from_slot(slot)
                .iter()
                .filter_map(|e| self.id_at(e.target))
                .collect();
            (id, targets)
        })
    }

    /// All edges as `(from, to)` pairs: vertices ascending, edges in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = (VertexId, VertexId)> + '_ {
        self.registry.iter().flat_map(move |(&id, &slot)| {
            self.edges_from_slot(slot)
                .iter()
                .filter_map(move |e| self.id_at(e.target).map(|to| (id, to)))
        })
    }

    /// Write the graph in DOT format to `path`.
    pub fn export_dot(&self, path: &Path) -> GraphResult<()> {
        DotWriter::new().write_to_file(self, path)
    }

    /// Slot index of a registered vertex.
    pub(crate) fn slot_of(&self, id: VertexId) -> Option<usize> {
        self.registry.get(&id).copied()
    }

    /// Identifier stored in a live slot.
    pub(crate) fn id_at(&self, slot: usize) -> Option<VertexId> {
        self.slots.get(slot).and_then(Option::as_ref).map(|v| v.id)
    }

    /// Outgoing edges of a slot; empty for free or out-of-range slots.
    pub(crate) fn edges_from_slot(&self, slot: usize) -> &[Edge] {
        match self.slots.get(slot) {
            Some(Some(vertex)) => &vertex.edges,
            _ => &[],
        }
    }

    /// Upper bound (exclusive) on slot indices, for slot-indexed scratch space.
    pub(crate) fn slot_bound(&self) -> usize {
        self.slots.len()
    }

    fn live_slots(&self) -> impl Iterator<Item = &VertexSlot> {
        self.slots.iter().flatten()
    }

    fn endpoints(&self, from: VertexId, to: VertexId) -> GraphResult<(usize, usize)> {
        match (self.slot_of(from), self.slot_of(to)) {
            (Some(source), Some(target)) => Ok((source, target)),
            _ => Err(GraphError::InvalidEndpoint { from, to }),
        }
    }
}
