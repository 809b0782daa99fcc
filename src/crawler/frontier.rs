//! Shared crawl state guarded by one lock
//!
//! Visited set, frontier queue, graph and discovery records live in a single
//! `CrawlState` so that "not yet visited → visited + enqueued + linked" is one
//! critical section. Splitting them would let two expansions both claim the
//! same neighbor.

use crate::graph::{Graph, Vertex, Weight};
use std::collections::{HashMap, HashSet, VecDeque};

/// When and from where a vertex was first observed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Discovery {
    /// Round in which the vertex was discovered (the seed is round 0)
    pub round: u32,

    /// Id of the vertex whose expansion discovered it (None for the seed)
    pub parent: Option<String>,
}

/// Everything a crawl run mutates
#[derive(Debug, Default)]
pub struct CrawlState {
    visited: HashSet<String>,
    frontier: VecDeque<Vertex>,
    graph: Graph,
    discoveries: HashMap<String, Discovery>,
    enqueued: usize,
}

impl CrawlState {
    /// Creates the state for a run starting at `seed`
    pub fn seeded(seed: Vertex) -> Self {
        let mut state = Self::default();
        state.visited.insert(seed.id.clone());
        state.discoveries.insert(
            seed.id.clone(),
            Discovery {
                round: 0,
                parent: None,
            },
        );
        state.graph.add_node(seed.clone());
        state.frontier.push_back(seed);
        state.enqueued = 1;
        state
    }

    /// Removes up to `limit` vertices from the front of the frontier
    pub fn drain_batch(&mut self, limit: usize) -> Vec<Vertex> {
        let count = limit.min(self.frontier.len());
        self.frontier.drain(..count).collect()
    }

    /// Merges the neighbors found while expanding `from`
    ///
    /// Each neighbor not yet visited is marked visited, linked from `from`
    /// with `weight`, appended to the frontier and recorded as discovered in
    /// `round`. Returns how many neighbors were new.
    pub fn merge_neighbors(
        &mut self,
        from: &Vertex,
        neighbors: Vec<Vertex>,
        weight: Weight,
        round: u32,
    ) -> usize {
        let mut added = 0;
        for neighbor in neighbors {
            if !self.visited.insert(neighbor.id.clone()) {
                continue;
            }
            self.graph.add_edge(from, &neighbor, weight);
            self.discoveries.insert(
                neighbor.id.clone(),
                Discovery {
                    round,
                    parent: Some(from.id.clone()),
                },
            );
            self.frontier.push_back(neighbor);
            self.enqueued += 1;
            added += 1;
        }
        added
    }

    pub fn is_visited(&self, id: &str) -> bool {
        self.visited.contains(id)
    }

    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }

    pub fn frontier_len(&self) -> usize {
        self.frontier.len()
    }

    /// Total number of frontier insertions over the run
    pub fn enqueued_count(&self) -> usize {
        self.enqueued
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Consumes the state, returning the graph and discovery records
    pub fn into_parts(self) -> (Graph, HashMap<String, Discovery>) {
        (self.graph, self.discoveries)
    }
}
