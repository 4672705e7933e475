//! Crawler module for web page fetching and traversal
//!
//! This module contains the crawling logic:
//! - HTTP fetching with typed failure classification
//! - HTML link extraction
//! - Structural prefix filtering
//! - The graph-building traversal engine

mod engine;
mod fetcher;
mod filter;
mod parser;

pub use engine::{CrawlEngine, CrawlReport};
pub use fetcher::{build_http_client, fetch_page, FetchError};
pub use filter::filter_links;
pub use parser::extract_links;

use crate::config::Config;
use crate::WikigraphError;
use url::Url;

/// Runs a complete crawl from a seed URL
///
/// Convenience wrapper that builds an engine from the configuration and
/// crawls into a fresh graph.
///
/// # Example
///
/// ```no_run
/// use wikigraph::config::Config;
/// use wikigraph::crawler::crawl;
/// use wikigraph::url::normalize_url;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = Config::default();
/// let seed = normalize_url("https://awoiaf.westeros.org/index.php/Main_Page")?;
/// let report = crawl(&config, &seed).await?;
/// println!("{} pages, {} links", report.graph.node_count(), report.graph.edge_count());
/// # Ok(())
/// # }
/// ```
pub async fn crawl(config: &Config, seed: &Url) -> Result<CrawlReport, WikigraphError> {
    let mut engine = CrawlEngine::new(config)?;
    Ok(engine.run(seed).await)
}
