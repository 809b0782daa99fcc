//! Output module for presenting run results
//!
//! This module handles:
//! - Rendering the shortest path (or its absence) as text
//! - Summarizing discovery statistics

pub mod stats;

pub use stats::{render_statistics, CrawlStatistics};

use crate::crawler::PathReport;
use crate::path::PathOutcome;
use std::fmt::Write;

/// Renders the result of a run as printable text
///
/// One of three headlines is produced:
/// - `Path to <destination>:` followed by the path and its cost
/// - `No path to <destination>.` when the destination was observed but is
///   unreachable in the discovered graph
/// - `Destination not found.` when discovery ended without observing it
pub fn render_report(report: &PathReport) -> String {
    let mut out = String::new();
    let target = &report.crawl.target;

    match &report.path {
        Some(PathOutcome::Found(path)) => {
            let _ = writeln!(out, "Path to {}: ", target);
            let steps: Vec<String> = path.vertices.iter().map(ToString::to_string).collect();
            let _ = writeln!(out, "{}", steps.join(" -> "));
            let _ = writeln!(out, "Cost: {} ({} hops)", path.cost, path.hops());
        }
        Some(PathOutcome::NoPath) => {
            let _ = writeln!(out, "No path to {}.", target);
        }
        None => {
            let _ = writeln!(
                out,
                "Destination not found ({}).",
                report.crawl.outcome.as_str()
            );
        }
    }

    let _ = writeln!(out);
    out.push_str(&render_statistics(&CrawlStatistics::from_report(report)));
    out
}

/// Prints the run result to stdout
pub fn print_report(report: &PathReport) {
    print!("{}", render_report(report));
}
