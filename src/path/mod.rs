//! Shortest path computation over the discovery graph
//!
//! The engine runs Dijkstra's algorithm from the seed once the crawl has
//! finished and reconstructs the cheapest path to the destination.

mod dijkstra;

pub use dijkstra::{ShortestPathEngine, ShortestPathTree};

use crate::graph::{Vertex, Weight};
use thiserror::Error;

/// Contract violations when invoking the engine
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PathError {
    #[error("Graph is empty")]
    EmptyGraph,

    #[error("Seed vertex not in graph: {0}")]
    UnknownSeed(String),
}

/// A path from seed to destination with its total cost
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPath {
    /// Vertices in seed-to-destination order
    pub vertices: Vec<Vertex>,

    /// Sum of the edge weights along the path
    pub cost: Weight,
}

impl ShortestPath {
    /// Number of edges traversed
    pub fn hops(&self) -> usize {
        self.vertices.len().saturating_sub(1)
    }

    pub fn source(&self) -> Option<&Vertex> {
        self.vertices.first()
    }

    pub fn target(&self) -> Option<&Vertex> {
        self.vertices.last()
    }
}

/// Result of a shortest path query
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathOutcome {
    /// The destination is reachable
    Found(ShortestPath),

    /// No path exists in the discovered graph
    NoPath,
}

impl PathOutcome {
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    pub fn path(&self) -> Option<&ShortestPath> {
        match self {
            Self::Found(path) => Some(path),
            Self::NoPath => None,
        }
    }
}
