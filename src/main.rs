//! Linkpath main entry point
//!
//! This is the command-line interface for the Linkpath link path finder.

use anyhow::Context;
use clap::Parser;
use linkpath::config::{load_config_with_hash, Config};
use linkpath::crawler::find_path;
use linkpath::output::print_report;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Linkpath: shortest link paths between web pages
///
/// Linkpath crawls outward from the start page in concurrent rounds until the
/// destination page is linked, then prints the shortest chain of links
/// between the two.
#[derive(Parser, Debug)]
#[command(name = "linkpath")]
#[command(version)]
#[command(about = "Finds the shortest link path between two web pages", long_about = None)]
struct Cli {
    /// Path to TOML configuration file (defaults are used when omitted)
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Start URL (prompted for when omitted)
    #[arg(short, long, value_name = "URL")]
    start: Option<String>,

    /// Destination URL (prompted for when omitted)
    #[arg(short, long, value_name = "URL")]
    destination: Option<String>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            let (config, hash) = load_config_with_hash(path)
                .with_context(|| format!("failed to load {}", path.display()))?;
            tracing::info!("Configuration loaded successfully (hash: {})", hash);
            config
        }
        None => Config::default(),
    };

    let start = match cli.start {
        Some(start) => start,
        None => prompt("Start: ")?,
    };
    let destination = match cli.destination {
        Some(destination) => destination,
        None => prompt("Destination: ")?,
    };

    tracing::info!(
        "Round batch size: {}, concurrency ceiling: {}",
        config.crawler.batch_size,
        config.crawler.max_concurrency
    );

    let report = find_path(&config, &start, &destination)
        .await
        .context("path search failed")?;
    print_report(&report);

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("linkpath=info,warn"),
            1 => EnvFilter::new("linkpath=debug,info"),
            2 => EnvFilter::new("linkpath=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_writer(io::stderr)
        .init();
}

/// Reads one trimmed line from stdin after printing `label`
fn prompt(label: &str) -> anyhow::Result<String> {
    print!("{}", label);
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("failed to read from stdin")?;

    let line = line.trim().to_string();
    anyhow::ensure!(!line.is_empty(), "{} cannot be empty", label.trim_end_matches(": "));
    Ok(line)
}
