//! Dijkstra's algorithm with predecessor tracking
//!
//! The priority queue is a `BinaryHeap` without decrease-key. A vertex is
//! pushed again every time its distance improves; entries whose distance no
//! longer matches the recorded one are skipped when popped. This is sound
//! because all weights are non-negative.

use crate::graph::{Graph, Vertex, Weight};
use crate::path::{PathError, PathOutcome, ShortestPath};
use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

/// Distance sentinel for vertices not reached from the seed
pub const INFINITY: Weight = Weight::MAX;

/// A queued vertex with its tentative distance
#[derive(Debug, Clone)]
struct QueuedVertex<'g> {
    distance: Weight,
    /// Push order, breaks ties between equal distances (earlier first)
    sequence: u64,
    id: &'g str,
}

// Reversed so the BinaryHeap pops the smallest distance first
impl Ord for QueuedVertex<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .distance
            .cmp(&self.distance)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

impl PartialOrd for QueuedVertex<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for QueuedVertex<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.distance == other.distance && self.sequence == other.sequence
    }
}

impl Eq for QueuedVertex<'_> {}

/// Single-source shortest path engine over a finished graph
///
/// The engine borrows the graph immutably, so it cannot run while an
/// expansion still holds the graph for writing.
pub struct ShortestPathEngine<'g> {
    graph: &'g Graph,
}

impl<'g> ShortestPathEngine<'g> {
    pub fn new(graph: &'g Graph) -> Self {
        Self { graph }
    }

    /// Computes the cheapest path from `seed` to `target`
    ///
    /// # Returns
    ///
    /// * `Ok(PathOutcome::Found)` - The path and its total cost
    /// * `Ok(PathOutcome::NoPath)` - The target is absent or unreachable
    /// * `Err(PathError)` - The graph is empty or does not contain the seed
    pub fn shortest_path(&self, seed: &str, target: &str) -> Result<PathOutcome, PathError> {
        let tree = self.tree_from(seed)?;
        Ok(match tree.path_to(target) {
            Some(path) => PathOutcome::Found(path),
            None => PathOutcome::NoPath,
        })
    }

    /// Runs Dijkstra from `seed` over the whole graph
    pub fn tree_from(&self, seed: &str) -> Result<ShortestPathTree<'g>, PathError> {
        if self.graph.is_empty() {
            return Err(PathError::EmptyGraph);
        }
        let seed = self
            .graph
            .vertex(seed)
            .ok_or_else(|| PathError::UnknownSeed(seed.to_string()))?;

        let mut distances: HashMap<&'g str, Weight> = HashMap::new();
        let mut previous: HashMap<&'g str, &'g str> = HashMap::new();
        let mut queue = BinaryHeap::new();
        let mut sequence = 0u64;

        distances.insert(seed.id.as_str(), 0);
        queue.push(QueuedVertex {
            distance: 0,
            sequence,
            id: seed.id.as_str(),
        });

        while let Some(QueuedVertex { distance, id, .. }) = queue.pop() {
            let recorded = distances.get(id).copied().unwrap_or(INFINITY);
            if distance == INFINITY || distance > recorded {
                continue;
            }

            for edge in self.graph.neighbors_of(id) {
                // Overflow is treated as unreachable
                let Some(candidate) = distance.checked_add(edge.weight) else {
                    continue;
                };
                let neighbor = edge.to.id.as_str();
                let current = distances.get(neighbor).copied().unwrap_or(INFINITY);

                if candidate < current {
                    tracing::trace!("Relaxed {} -> {}: {} -> {}", id, neighbor, current, candidate);
                    distances.insert(neighbor, candidate);
                    previous.insert(neighbor, id);
                    sequence += 1;
                    queue.push(QueuedVertex {
                        distance: candidate,
                        sequence,
                        id: neighbor,
                    });
                }
            }
        }

        Ok(ShortestPathTree {
            graph: self.graph,
            seed: seed.id.as_str(),
            distances,
            previous,
        })
    }
}

/// Distances and predecessors from a single seed
#[derive(Debug)]
pub struct ShortestPathTree<'g> {
    graph: &'g Graph,
    seed: &'g str,
    distances: HashMap<&'g str, Weight>,
    previous: HashMap<&'g str, &'g str>,
}

impl<'g> ShortestPathTree<'g> {
    /// Final distance to `id`, or None if unreachable
    pub fn distance(&self, id: &str) -> Option<Weight> {
        self.distances.get(id).copied().filter(|d| *d != INFINITY)
    }

    /// Predecessor of `id` on its shortest path
    pub fn predecessor(&self, id: &str) -> Option<&'g str> {
        self.previous.get(id).copied()
    }

    /// Number of vertices reached from the seed (seed included)
    pub fn reached(&self) -> usize {
        self.distances.len()
    }

    /// Rebuilds the path to `target` by walking predecessors back to the seed
    pub fn path_to(&self, target: &str) -> Option<ShortestPath> {
        let cost = self.distance(target)?;

        let mut vertices: Vec<Vertex> = Vec::new();
        let mut current = self.graph.vertex(target)?;
        loop {
            vertices.push(current.clone());
            if current.id == self.seed {
                break;
            }
            let previous = self.predecessor(&current.id)?;
            current = self.graph.vertex(previous)?;
        }
        vertices.reverse();

        Some(ShortestPath { vertices, cost })
    }
}
