//! Wikigraph main entry point
//!
//! Command-line interface for the wikigraph crawler. Exit codes: 0 on
//! success, 1 when the seed page could not be fetched, 2 for invalid
//! arguments or configuration.

use anyhow::Context;
use clap::Parser;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use wikigraph::config::{load_config_with_hash, validate, Config};
use wikigraph::crawler::{crawl, CrawlReport};
use wikigraph::graph::{write_adjacency_list, write_dot};
use wikigraph::url::normalize_url;

/// Wikigraph: a bounded, depth-limited wiki link-graph crawler
///
/// Starting from the seed page, wikigraph follows hyperlinks whose raw href
/// matches a path prefix and builds an undirected graph of the pages it
/// visits. Limits on depth, graph size, and per-page fan-out keep the crawl
/// bounded.
#[derive(Parser, Debug)]
#[command(name = "wikigraph")]
#[command(version)]
#[command(about = "Build a link graph from a bounded wiki crawl", long_about = None)]
struct Cli {
    /// Seed URL to start crawling from (scheme defaults to http://)
    #[arg(value_name = "SEED_URL")]
    seed_url: String,

    /// Path to an optional TOML configuration file
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Proxy address for all requests
    #[arg(long, value_name = "HOST:PORT")]
    proxy: Option<String>,

    /// Crawl depth limit (0 fetches nothing)
    #[arg(long, value_name = "N")]
    depth: Option<u32>,

    /// Soft cap on the number of graph nodes
    #[arg(long, value_name = "N")]
    max_nodes: Option<usize>,

    /// Maximum sampled links per page (one extra is always taken)
    #[arg(long, value_name = "N")]
    max_children: Option<usize>,

    /// Raw href prefix a link must have to be followed
    #[arg(long, value_name = "PREFIX")]
    prefix: Option<String>,

    /// Per-request timeout in seconds
    #[arg(long, value_name = "SECS")]
    timeout_secs: Option<u64>,

    /// Fixed seed for link sampling, for reproducible crawls
    #[arg(long, value_name = "SEED")]
    shuffle_seed: Option<u64>,

    /// Write the graph as adjacency-list text to this path
    #[arg(long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Write the graph in Graphviz DOT format to this path
    #[arg(long, value_name = "FILE")]
    dot: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    // Assemble configuration: file (or defaults), then explicit flags on top
    let config = match build_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Invalid configuration: {}", e);
            return ExitCode::from(2);
        }
    };

    // Validate the seed URL before any crawling starts
    let seed = match normalize_url(&cli.seed_url) {
        Ok(seed) => seed,
        Err(e) => {
            tracing::error!("Invalid seed URL '{}': {}", cli.seed_url, e);
            return ExitCode::from(2);
        }
    };

    let report = match run_crawl(&config, &seed).await {
        Ok(report) => report,
        Err(e) => {
            tracing::error!("Crawl failed: {:#}", e);
            return ExitCode::FAILURE;
        }
    };

    print_summary(&seed, &report);

    if let Err(e) = write_exports(&config, &cli, &report) {
        tracing::error!("Failed to write graph output: {:#}", e);
        return ExitCode::FAILURE;
    }

    if report.seed_fetched {
        ExitCode::SUCCESS
    } else {
        // Nothing could be crawled at all
        ExitCode::FAILURE
    }
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("wikigraph=info,warn"),
            1 => EnvFilter::new("wikigraph=debug,info"),
            2 => EnvFilter::new("wikigraph=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Loads the config file (or defaults) and applies CLI overrides
fn build_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = if let Some(path) = &cli.config {
        tracing::info!("Loading configuration from: {}", path.display());
        let (config, hash) = load_config_with_hash(path)
            .with_context(|| format!("failed to load {}", path.display()))?;
        tracing::info!("Configuration loaded successfully (hash: {})", hash);
        config
    } else {
        Config::default()
    };

    if let Some(depth) = cli.depth {
        config.crawl.depth_limit = depth;
    }
    if let Some(max_nodes) = cli.max_nodes {
        config.crawl.max_nodes = max_nodes;
    }
    if let Some(max_children) = cli.max_children {
        config.crawl.max_children = max_children;
    }
    if let Some(prefix) = &cli.prefix {
        config.crawl.link_prefix = prefix.clone();
    }
    if let Some(seed) = cli.shuffle_seed {
        config.crawl.shuffle_seed = Some(seed);
    }
    if let Some(proxy) = &cli.proxy {
        config.http.proxy = Some(proxy.clone());
    }
    if let Some(timeout) = cli.timeout_secs {
        config.http.timeout_secs = timeout;
    }

    // Flag values go through the same checks as file values
    validate(&config)?;

    Ok(config)
}

/// Builds the engine and runs the crawl
async fn run_crawl(config: &Config, seed: &url::Url) -> anyhow::Result<CrawlReport> {
    tracing::info!(
        "Starting crawl from {} (depth {}, max nodes {}, max children {})",
        seed,
        config.crawl.depth_limit,
        config.crawl.max_nodes,
        config.crawl.max_children
    );

    if let Some(proxy) = &config.http.proxy {
        tracing::info!("Using proxy {}", proxy);
    }

    crawl(config, seed).await.context("crawl could not run")
}

/// Prints the final crawl summary
fn print_summary(seed: &url::Url, report: &CrawlReport) {
    tracing::info!(
        "Crawl finished in {:.2?}: {} nodes, {} edges, {} pages visited, {} fetch failures",
        report.elapsed,
        report.graph.node_count(),
        report.graph.edge_count(),
        report.pages_visited,
        report.fetch_failures
    );

    if !report.seed_fetched {
        tracing::error!("Seed page {} could not be fetched; nothing was crawled", seed);
    }
}

/// Writes the configured graph exports
///
/// CLI paths win over config file paths for the same format.
fn write_exports(config: &Config, cli: &Cli, report: &CrawlReport) -> anyhow::Result<()> {
    let graph_path = cli
        .output
        .clone()
        .or_else(|| config.output.graph_path.as_ref().map(PathBuf::from));

    if let Some(path) = graph_path {
        write_adjacency_list(&report.graph, Path::new(&path))
            .with_context(|| format!("failed to write {}", path.display()))?;
        tracing::info!("Adjacency list written to {}", path.display());
    }

    let dot_path = cli
        .dot
        .clone()
        .or_else(|| config.output.dot_path.as_ref().map(PathBuf::from));

    if let Some(path) = dot_path {
        write_dot(&report.graph, Path::new(&path))
            .with_context(|| format!("failed to write {}", path.display()))?;
        tracing::info!("DOT graph written to {}", path.display());
    }

    Ok(())
}
