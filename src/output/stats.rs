//! Statistics derived from a finished run
//!
//! This module provides functionality for summarizing and displaying what
//! the discovery phase did.

use crate::crawler::PathReport;
use std::fmt::Write;

/// Crawl statistics summary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrawlStatistics {
    /// Number of rounds run
    pub rounds: usize,

    /// Number of vertices expanded (fetch attempted)
    pub expanded: usize,

    /// Number of vertices in the discovered graph
    pub vertices: usize,

    /// Number of edges in the discovered graph
    pub edges: usize,

    /// Number of expansions abandoned because the fetch failed
    pub failed_fetches: usize,

    /// Wall-clock duration of the discovery phase
    pub elapsed_ms: i64,
}

impl CrawlStatistics {
    pub fn from_report(report: &PathReport) -> Self {
        let crawl = &report.crawl;
        Self {
            rounds: crawl.rounds.len(),
            expanded: crawl.rounds.iter().map(|r| r.expanded.len()).sum(),
            vertices: report.graph.node_count(),
            edges: report.graph.edge_count(),
            failed_fetches: crawl.rounds.iter().map(|r| r.failed).sum(),
            elapsed_ms: crawl.elapsed_ms(),
        }
    }

    /// Expansions per second over the discovery phase
    pub fn rate(&self) -> f64 {
        if self.elapsed_ms > 0 {
            self.expanded as f64 / (self.elapsed_ms as f64 / 1000.0)
        } else {
            0.0
        }
    }
}

/// Formats statistics as an indented block
pub fn render_statistics(stats: &CrawlStatistics) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Statistics:");
    let _ = writeln!(out, "  Rounds: {}", stats.rounds);
    let _ = writeln!(out, "  Pages expanded: {}", stats.expanded);
    let _ = writeln!(out, "  Failed fetches: {}", stats.failed_fetches);
    let _ = writeln!(out, "  Vertices discovered: {}", stats.vertices);
    let _ = writeln!(out, "  Links recorded: {}", stats.edges);
    let _ = writeln!(
        out,
        "  Elapsed: {:.1}s ({:.2} pages/sec)",
        stats.elapsed_ms as f64 / 1000.0,
        stats.rate()
    );
    out
}
