//! Crawler coordinator - ties discovery and path search together
//!
//! This module owns one complete run:
//! - Building the HTTP fetcher and HTML link extractor from configuration
//! - Running the frontier scheduler until the destination is observed
//! - Running the shortest path engine over the quiesced graph

use crate::config::{Config, CrawlerConfig};
use crate::crawler::fetcher::{Fetcher, HttpFetcher};
use crate::crawler::parser::{HtmlLinkExtractor, LinkExtractor};
use crate::crawler::report::{CrawlOutcome, PathReport};
use crate::crawler::scheduler::Scheduler;
use crate::graph::Vertex;
use crate::path::ShortestPathEngine;
use crate::LinkPathError;

/// Main crawler coordinator structure
pub struct Coordinator<F, E> {
    scheduler: Scheduler<F, E>,
}

impl Coordinator<HttpFetcher, HtmlLinkExtractor> {
    /// Creates a coordinator with the HTTP and HTML collaborators
    ///
    /// # Returns
    ///
    /// * `Ok(Coordinator)` - Successfully created coordinator
    /// * `Err(LinkPathError)` - The HTTP client or link selector could not be built
    pub fn new(config: &Config) -> Result<Self, LinkPathError> {
        let fetcher = HttpFetcher::new(&config.fetch)?;
        let extractor = HtmlLinkExtractor::new(&config.extract)?;
        Ok(Self::with_collaborators(
            config.crawler.clone(),
            fetcher,
            extractor,
        ))
    }
}

impl<F, E> Coordinator<F, E>
where
    F: Fetcher + 'static,
    E: LinkExtractor + 'static,
{
    /// Creates a coordinator around arbitrary collaborators
    pub fn with_collaborators(config: CrawlerConfig, fetcher: F, extractor: E) -> Self {
        Self {
            scheduler: Scheduler::new(config, fetcher, extractor),
        }
    }

    /// Runs discovery from `seed` and, if `target` was observed, the path search
    ///
    /// # Returns
    ///
    /// * `Ok(PathReport)` - Crawl summary, discovered graph and path outcome
    /// * `Err(LinkPathError)` - The path search was invoked on an invalid graph
    pub async fn run(&self, seed: Vertex, target: Vertex) -> Result<PathReport, LinkPathError> {
        tracing::info!("Searching for a path from {} to {}", seed, target);

        let (crawl, graph) = self.scheduler.run(seed, target).await;

        let path = match crawl.outcome {
            CrawlOutcome::Found => {
                let engine = ShortestPathEngine::new(&graph);
                let outcome = engine.shortest_path(&crawl.seed.id, &crawl.target.id)?;
                if let Some(path) = outcome.path() {
                    tracing::info!("Shortest path has {} hops (cost {})", path.hops(), path.cost);
                }
                Some(outcome)
            }
            CrawlOutcome::Exhausted | CrawlOutcome::RoundLimit => {
                tracing::info!("Destination not observed ({})", crawl.outcome.as_str());
                None
            }
        };

        Ok(PathReport { crawl, graph, path })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crawler::fetcher::FetchError;
    use crate::path::PathOutcome;
    use async_trait::async_trait;
    use std::collections::HashMap;

    /// Pages whose content is a space-separated list of linked ids
    struct StaticPages(HashMap<&'static str, &'static str>);

    #[async_trait]
    impl Fetcher for StaticPages {
        async fn fetch(&self, id: &str) -> Result<String, FetchError> {
            self.0
                .get(id)
                .map(|content| content.to_string())
                .ok_or(FetchError::Timeout)
        }
    }

    struct Words;

    impl LinkExtractor for Words {
        fn extract(&self, content: &str, _base_id: &str) -> Vec<Vertex> {
            content.split_whitespace().map(Vertex::unlabeled).collect()
        }
    }

    fn coordinator(pages: &[(&'static str, &'static str)]) -> Coordinator<StaticPages, Words> {
        Coordinator::with_collaborators(
            CrawlerConfig::default(),
            StaticPages(pages.iter().copied().collect()),
            Words,
        )
    }

    #[tokio::test]
    async fn test_path_found_after_discovery() {
        let coordinator = coordinator(&[("a", "b x"), ("b", "c"), ("x", "y"), ("c", "")]);
        let report = coordinator
            .run(Vertex::new("a", "Start Page"), Vertex::new("c", "Destination Page"))
            .await
            .unwrap();

        let path = report.path.as_ref().and_then(PathOutcome::path).unwrap();
        let ids: Vec<&str> = path.vertices.iter().map(|v| v.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
        assert_eq!(path.cost, 2);
    }

    #[tokio::test]
    async fn test_seed_equals_target() {
        let coordinator = coordinator(&[]);
        let report = coordinator
            .run(Vertex::unlabeled("a"), Vertex::unlabeled("a"))
            .await
            .unwrap();

        let path = report.path.as_ref().and_then(PathOutcome::path).unwrap();
        assert_eq!(path.vertices.len(), 1);
        assert_eq!(path.cost, 0);
        assert!(report.crawl.rounds.is_empty());
    }

    #[tokio::test]
    async fn test_no_search_when_not_observed() {
        let coordinator = coordinator(&[("a", "b")]);
        let report = coordinator
            .run(Vertex::unlabeled("a"), Vertex::unlabeled("zzz"))
            .await
            .unwrap();

        assert_eq!(report.crawl.outcome, CrawlOutcome::Exhausted);
        assert!(report.path.is_none());
        // b has no page: one failed fetch
        assert_eq!(report.crawl.failures.len(), 1);
    }
}
