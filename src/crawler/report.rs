//! Result types produced by a crawl run

use crate::crawler::fetcher::FetchError;
use crate::crawler::frontier::Discovery;
use crate::graph::{Graph, Vertex};
use crate::path::PathOutcome;
use chrono::{DateTime, Utc};
use std::collections::HashMap;

/// Why the scheduler stopped issuing rounds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrawlOutcome {
    /// The destination id was observed
    Found,
    /// The frontier emptied without observing the destination
    Exhausted,
    /// The configured round limit was reached first
    RoundLimit,
}

impl CrawlOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Found => "found",
            Self::Exhausted => "exhausted",
            Self::RoundLimit => "round limit reached",
        }
    }
}

/// Result of expanding one vertex
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expansion {
    /// The page listed links; `added` of them were new vertices
    Neighbors { candidates: usize, added: usize },
    /// The page was fetched but listed no links
    NoNeighbors,
    /// The page could not be fetched; the vertex stays a dead end
    FetchFailed(FetchError),
}

/// A vertex whose document could not be retrieved
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailedFetch {
    pub id: String,
    pub round: u32,
    pub error: FetchError,
}

/// What happened in a single round
#[derive(Debug, Clone, Default)]
pub struct RoundSummary {
    /// Round number, starting at 1
    pub round: u32,

    /// Ids dequeued for this round, in frontier order
    pub expanded: Vec<String>,

    /// New vertices discovered during the round
    pub discovered: usize,

    /// Expansions that failed to fetch (or panicked)
    pub failed: usize,

    /// Frontier length once the round barrier was passed
    pub frontier_after: usize,
}

/// Summary of the discovery phase
#[derive(Debug, Clone)]
pub struct CrawlReport {
    pub seed: Vertex,
    pub target: Vertex,
    pub outcome: CrawlOutcome,
    pub rounds: Vec<RoundSummary>,
    pub failures: Vec<FailedFetch>,

    /// Discovery round and parent for every visited id
    pub discoveries: HashMap<String, Discovery>,

    /// Number of frontier insertions (equals the visited count)
    pub enqueued: usize,

    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

impl CrawlReport {
    pub fn is_found(&self) -> bool {
        self.outcome == CrawlOutcome::Found
    }

    pub fn visited(&self) -> usize {
        self.discoveries.len()
    }

    pub fn elapsed_ms(&self) -> i64 {
        (self.finished_at - self.started_at).num_milliseconds()
    }
}

/// Discovery summary, discovered graph and shortest path of one run
#[derive(Debug, Clone)]
pub struct PathReport {
    pub crawl: CrawlReport,
    pub graph: Graph,

    /// None when the destination was never observed, so no search ran
    pub path: Option<PathOutcome>,
}
