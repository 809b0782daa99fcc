//! Adjacency store for the discovery graph

use crate::graph::{Edge, Vertex, Weight};
use std::collections::HashMap;

/// Directed weighted graph keyed by vertex id
///
/// Every vertex that appears as an edge endpoint owns an entry, possibly with
/// an empty edge list. Outgoing edges keep their insertion order so traversal
/// order (and shortest path tie-breaking) is reproducible.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    adjacency: HashMap<Vertex, Vec<Edge>>,
    edge_count: usize,
}

impl Graph {
    /// Creates an empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a node with no outgoing edges
    ///
    /// Returns false if a vertex with the same id already exists; the
    /// existing vertex (and its label) is kept.
    pub fn add_node(&mut self, vertex: Vertex) -> bool {
        if self.adjacency.contains_key(vertex.id.as_str()) {
            return false;
        }
        self.adjacency.insert(vertex, Vec::new());
        true
    }

    /// Appends an edge `from -> to`, creating either node if needed
    ///
    /// Node creation is idempotent, edge insertion is not: adding the same
    /// edge twice yields two parallel edges.
    pub fn add_edge(&mut self, from: &Vertex, to: &Vertex, weight: Weight) {
        self.add_node(to.clone());
        self.add_node(from.clone());

        // Use the stored vertices so first-seen labels propagate into edges
        let to = self.stored(to);
        let from = self.stored(from);

        if let Some(edges) = self.adjacency.get_mut(from.id.as_str()) {
            edges.push(Edge { from, to, weight });
            self.edge_count += 1;
        }
    }

    /// Returns the outgoing edges of `id` in insertion order
    ///
    /// Unknown ids have no edges.
    pub fn neighbors_of(&self, id: &str) -> &[Edge] {
        self.adjacency.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Looks up the stored vertex for an id
    pub fn vertex(&self, id: &str) -> Option<&Vertex> {
        self.adjacency.get_key_value(id).map(|(vertex, _)| vertex)
    }

    /// Returns true if the graph has a node for `id`
    pub fn contains(&self, id: &str) -> bool {
        self.adjacency.contains_key(id)
    }

    /// Iterates over all nodes (in no particular order)
    pub fn vertices(&self) -> impl Iterator<Item = &Vertex> {
        self.adjacency.keys()
    }

    /// Iterates over all edges
    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.adjacency.values().flatten()
    }

    /// Number of nodes
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of edges, counting parallel edges separately
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    fn stored(&self, vertex: &Vertex) -> Vertex {
        self.vertex(&vertex.id)
            .cloned()
            .unwrap_or_else(|| vertex.clone())
    }
}
