//! Crawler module for discovering the link graph
//!
//! This module contains the discovery and orchestration logic, including:
//! - HTTP fetching behind the `Fetcher` trait
//! - HTML link extraction behind the `LinkExtractor` trait
//! - Round-based frontier scheduling under a global concurrency ceiling
//! - Overall run coordination and the shortest path hand-off

mod coordinator;
mod fetcher;
mod frontier;
mod parser;
mod report;
mod scheduler;

pub use coordinator::Coordinator;
pub use fetcher::{build_http_client, FetchError, Fetcher, HttpFetcher};
pub use frontier::{CrawlState, Discovery};
pub use parser::{HtmlLinkExtractor, LinkExtractor};
pub use report::{
    CrawlOutcome, CrawlReport, Expansion, FailedFetch, PathReport, RoundSummary,
};
pub use scheduler::Scheduler;

use crate::config::Config;
use crate::graph::Vertex;
use crate::url::parse_identifier;

/// Label given to the start vertex
pub const START_LABEL: &str = "Start Page";

/// Label given to the destination vertex
pub const DESTINATION_LABEL: &str = "Destination Page";

/// Finds the shortest link path between two URLs
///
/// This is the main entry point. It will:
/// 1. Canonicalize the start and destination URLs
/// 2. Build the HTTP client and link extractor
/// 3. Expand the frontier in rounds until the destination is observed
/// 4. Run Dijkstra over the discovered graph
///
/// # Arguments
///
/// * `config` - The crawler configuration
/// * `start` - Seed URL
/// * `destination` - Destination URL
///
/// # Returns
///
/// * `Ok(PathReport)` - The run completed (whether or not a path exists)
/// * `Err(LinkPathError)` - Invalid URLs or collaborator setup failure
pub async fn find_path(
    config: &Config,
    start: &str,
    destination: &str,
) -> crate::Result<PathReport> {
    let seed = Vertex::new(parse_identifier(start)?, START_LABEL);
    let target = Vertex::new(parse_identifier(destination)?, DESTINATION_LABEL);

    let coordinator = Coordinator::new(config)?;
    coordinator.run(seed, target).await
}
