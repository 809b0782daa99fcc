//! Round-based frontier scheduler
//!
//! This module handles:
//! - Draining up to `batch-size` vertices from the frontier per round
//! - Expanding each vertex in its own task
//! - Global concurrency limiting via one semaphore shared by every round
//! - Merging discovered neighbors into the shared crawl state
//! - The round barrier and the termination check after it
//!
//! Rounds give breadth-first layers: round N+1 never starts before every
//! expansion of round N has finished.

use crate::config::CrawlerConfig;
use crate::crawler::fetcher::{FetchError, Fetcher};
use crate::crawler::frontier::CrawlState;
use crate::crawler::parser::LinkExtractor;
use crate::crawler::report::{CrawlOutcome, CrawlReport, Expansion, FailedFetch, RoundSummary};
use crate::graph::{Graph, Vertex, Weight};
use chrono::Utc;
use std::sync::{Arc, Mutex, MutexGuard};
use tokio::sync::Semaphore;
use tokio::task::JoinSet;

/// Scheduler owns the collaborators and the global concurrency ceiling
///
/// The scheduler coordinates:
/// - Round batch size (how many vertices are dequeued per round)
/// - Global concurrency (how many fetches run at once, across rounds)
/// - The optional round limit
pub struct Scheduler<F, E> {
    config: CrawlerConfig,
    fetcher: Arc<F>,
    extractor: Arc<E>,
    global_semaphore: Arc<Semaphore>,
}

impl<F, E> Scheduler<F, E>
where
    F: Fetcher + 'static,
    E: LinkExtractor + 'static,
{
    /// Creates a new scheduler
    ///
    /// # Arguments
    ///
    /// * `config` - Batch size, concurrency ceiling, edge weight, round limit
    /// * `fetcher` - Retrieval collaborator
    /// * `extractor` - Link extraction collaborator
    pub fn new(config: CrawlerConfig, fetcher: F, extractor: E) -> Self {
        Self::with_shared(config, Arc::new(fetcher), Arc::new(extractor))
    }

    /// Creates a scheduler around collaborators the caller keeps a handle to
    pub fn with_shared(config: CrawlerConfig, fetcher: Arc<F>, extractor: Arc<E>) -> Self {
        let global_semaphore = Arc::new(Semaphore::new(config.max_concurrency.max(1)));

        Self {
            config,
            fetcher,
            extractor,
            global_semaphore,
        }
    }

    /// Discovers the graph reachable from `seed` until `target` is observed
    ///
    /// Never fails: unreachable documents are recorded in the report and the
    /// crawl continues with the rest of the frontier.
    ///
    /// # Returns
    ///
    /// The crawl report and the graph discovered so far
    pub async fn run(&self, seed: Vertex, target: Vertex) -> (CrawlReport, Graph) {
        let started_at = Utc::now();
        let state = Arc::new(Mutex::new(CrawlState::seeded(seed.clone())));
        let batch_size = self.config.batch_size.max(1);

        let mut rounds: Vec<RoundSummary> = Vec::new();
        let mut failures: Vec<FailedFetch> = Vec::new();
        let mut round: u32 = 0;

        let outcome = loop {
            let batch = {
                let mut state = lock(&state);
                if state.is_visited(&target.id) {
                    break CrawlOutcome::Found;
                }
                if state.frontier_len() == 0 {
                    break CrawlOutcome::Exhausted;
                }
                if matches!(self.config.max_rounds, Some(limit) if round >= limit) {
                    break CrawlOutcome::RoundLimit;
                }
                state.drain_batch(batch_size)
            };

            round += 1;
            tracing::info!(
                "Round {}: expanding {} vertices ({} visited)",
                round,
                batch.len(),
                lock(&state).visited_count()
            );

            let mut summary = RoundSummary {
                round,
                expanded: batch.iter().map(|v| v.id.clone()).collect(),
                ..RoundSummary::default()
            };

            let mut tasks = JoinSet::new();
            for vertex in batch {
                tasks.spawn(expand(
                    vertex,
                    Arc::clone(&self.fetcher),
                    Arc::clone(&self.extractor),
                    Arc::clone(&self.global_semaphore),
                    Arc::clone(&state),
                    self.config.edge_weight,
                    round,
                ));
            }

            // Round barrier
            while let Some(joined) = tasks.join_next().await {
                match joined {
                    Ok((_, Expansion::Neighbors { added, .. })) => summary.discovered += added,
                    Ok((_, Expansion::NoNeighbors)) => {}
                    Ok((id, Expansion::FetchFailed(error))) => {
                        summary.failed += 1;
                        failures.push(FailedFetch { id, round, error });
                    }
                    Err(e) => {
                        tracing::warn!("Expansion task failed in round {}: {}", round, e);
                        summary.failed += 1;
                    }
                }
            }

            summary.frontier_after = lock(&state).frontier_len();
            tracing::debug!(
                "Round {} done: {} discovered, {} failed, {} pending",
                round,
                summary.discovered,
                summary.failed,
                summary.frontier_after
            );
            rounds.push(summary);
        };

        // All tasks have joined, so this is the only handle left
        let state = std::mem::take(&mut *lock(&state));
        let enqueued = state.enqueued_count();
        let (graph, discoveries) = state.into_parts();

        tracing::info!(
            "Discovery {} after {} rounds: {} vertices, {} edges",
            outcome.as_str(),
            rounds.len(),
            graph.node_count(),
            graph.edge_count()
        );

        let report = CrawlReport {
            seed,
            target,
            outcome,
            rounds,
            failures,
            discoveries,
            enqueued,
            started_at,
            finished_at: Utc::now(),
        };

        (report, graph)
    }
}

/// Expands a single vertex
///
/// The semaphore permit covers fetch and extraction only; merging happens
/// after the permit is released, under the state lock.
async fn expand<F, E>(
    vertex: Vertex,
    fetcher: Arc<F>,
    extractor: Arc<E>,
    semaphore: Arc<Semaphore>,
    state: Arc<Mutex<CrawlState>>,
    weight: Weight,
    round: u32,
) -> (String, Expansion)
where
    F: Fetcher + ?Sized,
    E: LinkExtractor + ?Sized,
{
    let candidates = {
        let Ok(_permit) = semaphore.acquire().await else {
            let error = FetchError::Network("concurrency limiter closed".to_string());
            return (vertex.id, Expansion::FetchFailed(error));
        };

        tracing::debug!("> {}", vertex.label);
        match fetcher.fetch(&vertex.id).await {
            Ok(content) => extractor.extract(&content, &vertex.id),
            Err(error) => {
                tracing::debug!("Dropping {}: {}", vertex.id, error);
                return (vertex.id, Expansion::FetchFailed(error));
            }
        }
    };

    if candidates.is_empty() {
        return (vertex.id, Expansion::NoNeighbors);
    }

    let count = candidates.len();
    let added = {
        let mut state = lock(&state);
        state.merge_neighbors(&vertex, candidates, weight, round)
    };

    (
        vertex.id,
        Expansion::Neighbors {
            candidates: count,
            added,
        },
    )
}

/// Locks the crawl state, recovering it if a task panicked while holding it
fn lock(state: &Mutex<CrawlState>) -> MutexGuard<'_, CrawlState> {
    state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
