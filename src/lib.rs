//! Linkpath: shortest link paths between web documents
//!
//! This crate discovers the subgraph of linked documents reachable from a seed
//! URL, expanding the frontier in bounded concurrent rounds, and computes the
//! cheapest path from the seed to a destination once the destination has been
//! observed.

pub mod config;
pub mod crawler;
pub mod graph;
pub mod output;
pub mod path;
pub mod url;

use thiserror::Error;

/// Main error type for Linkpath operations
#[derive(Debug, Error)]
pub enum LinkPathError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("URL error: {0}")]
    UrlError(#[from] UrlError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Shortest path error: {0}")]
    Path(#[from] path::PathError),

    #[error("Invalid link selector: {0}")]
    Selector(String),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// URL-specific errors
#[derive(Debug, Error)]
pub enum UrlError {
    #[error("Failed to parse URL: {0}")]
    Parse(String),

    #[error("Invalid URL scheme: {0}")]
    InvalidScheme(String),

    #[error("Missing host in URL")]
    MissingHost,

    #[error("Empty identifier")]
    Empty,
}

/// Result type alias for Linkpath operations
pub type Result<T> = std::result::Result<T, LinkPathError>;

// Re-export commonly used types
pub use config::Config;
pub use crawler::{find_path, CrawlOutcome, CrawlReport, PathReport};
pub use graph::{Edge, Graph, Vertex, Weight};
pub use path::{PathOutcome, ShortestPath, ShortestPathEngine};
