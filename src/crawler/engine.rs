//! Traversal engine - the graph-building crawl loop
//!
//! This is the core of the crate: the policy governing which pages are
//! visited, in what order, how many times, under what limits, and how the
//! result graph is assembled and deduplicated.
//!
//! The traversal is an explicit-frontier restructuring of a recursive
//! depth-limited walk. A queue of `(url, depth_remaining)` entries replaces
//! the call stack, so deep limits cannot exhaust it, and the graph has a
//! single owner for the whole crawl. Fetches are strictly sequential: one
//! request in flight at a time.

use crate::config::Config;
use crate::crawler::fetcher::{build_http_client, fetch_page};
use crate::crawler::filter::filter_links;
use crate::crawler::parser::extract_links;
use crate::graph::PageGraph;
use crate::url::resolve_link;
use crate::{config::CrawlConfig, WikigraphError};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use reqwest::Client;
use std::collections::VecDeque;
use std::time::{Duration, Instant};
use url::Url;

/// A page queued for visiting, with the depth budget left on its branch
#[derive(Debug, Clone)]
struct QueuedPage {
    url: Url,
    depth_remaining: u32,
}

/// The outcome of a crawl
///
/// The graph is the primary artifact; the counters exist so callers can tell
/// a healthy crawl from one that went nowhere.
#[derive(Debug)]
pub struct CrawlReport {
    /// The accumulated page graph
    pub graph: PageGraph,

    /// Pages fetched successfully and expanded
    pub pages_visited: usize,

    /// Fetch attempts that failed (network, timeout, or non-2xx)
    pub fetch_failures: usize,

    /// Whether the seed page itself was fetched successfully
    pub seed_fetched: bool,

    /// Wall-clock duration of the crawl
    pub elapsed: Duration,
}

/// The traversal engine
///
/// Owns the HTTP client, the crawl limits, and the random source used for
/// link sampling. By default the shuffle is seeded from the OS, so two runs
/// over identical content may legitimately produce different subgraphs; set
/// `shuffle-seed` in the configuration for reproducible sampling.
pub struct CrawlEngine {
    config: CrawlConfig,
    client: Client,
    rng: StdRng,
}

impl CrawlEngine {
    /// Creates an engine from the configuration
    pub fn new(config: &Config) -> Result<Self, WikigraphError> {
        let client = build_http_client(&config.http)?;

        let rng = match config.crawl.shuffle_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        Ok(Self {
            config: config.crawl.clone(),
            client,
            rng,
        })
    }

    /// Crawls from the seed into a fresh graph
    pub async fn run(&mut self, seed: &Url) -> CrawlReport {
        self.run_with_graph(seed, PageGraph::new()).await
    }

    /// Crawls from the seed into an existing graph
    ///
    /// The graph may already hold nodes and edges from earlier work; the
    /// node-limit check counts those too. For each visit, in order:
    ///
    /// 1. A branch whose depth budget is exhausted ends without fetching.
    /// 2. If the graph has grown past `max_nodes`, the visit is skipped.
    ///    The check happens before fetching and only once per visit, so a
    ///    single visit may still add up to `max_children + 1` nodes past the
    ///    limit. This soft cap is deliberate, preserved behavior.
    /// 3. The page is fetched. A failure is local: it is logged with its
    ///    kind and the rest of the frontier proceeds.
    /// 4. Raw hrefs are extracted and prefix-filtered; zero survivors end
    ///    the branch.
    /// 5. Survivors are shuffled uniformly and the first `max_children + 1`
    ///    taken, guaranteeing progress even with `max_children == 0`.
    /// 6. Each sampled link is resolved to an absolute URL and connected to
    ///    the current page with an idempotent undirected edge. Only links
    ///    whose node was newly added are enqueued; a page already in the
    ///    graph gains the edge but is never re-fetched.
    pub async fn run_with_graph(&mut self, seed: &Url, mut graph: PageGraph) -> CrawlReport {
        let start = Instant::now();

        let mut pages_visited = 0;
        let mut fetch_failures = 0;
        let mut seed_fetched = false;

        let mut frontier = VecDeque::new();
        frontier.push_back(QueuedPage {
            url: seed.clone(),
            depth_remaining: self.config.depth_limit,
        });

        while let Some(page) = frontier.pop_front() {
            if page.depth_remaining == 0 {
                tracing::trace!("Depth exhausted at {}", page.url);
                continue;
            }

            if graph.node_count() > self.config.max_nodes {
                tracing::debug!(
                    "Node limit exceeded ({} > {}), skipping {}",
                    graph.node_count(),
                    self.config.max_nodes,
                    page.url
                );
                continue;
            }

            graph.add_node(page.url.as_str());

            let html = match fetch_page(&self.client, &page.url).await {
                Ok(body) => {
                    tracing::info!("Successfully fetched {}", page.url);
                    pages_visited += 1;
                    if page.url == *seed {
                        seed_fetched = true;
                    }
                    body
                }
                Err(e) => {
                    tracing::warn!("Failed to fetch {}: {}", page.url, e);
                    fetch_failures += 1;
                    continue;
                }
            };

            let raw_links = extract_links(&html);
            let filtered = filter_links(&raw_links, &self.config.link_prefix);
            if filtered.is_empty() {
                tracing::debug!("No crawlable links on {}", page.url);
                continue;
            }

            let sampled = sample_links(filtered, self.config.max_children, &mut self.rng);

            for href in sampled {
                let child = match resolve_link(&page.url, &href) {
                    Ok(url) => url,
                    Err(e) => {
                        tracing::debug!("Skipping unresolvable link: {}", e);
                        continue;
                    }
                };

                let is_new = !graph.contains(child.as_str());
                graph.add_edge(page.url.as_str(), child.as_str());

                if is_new {
                    frontier.push_back(QueuedPage {
                        url: child,
                        depth_remaining: page.depth_remaining - 1,
                    });
                }
            }
        }

        CrawlReport {
            graph,
            pages_visited,
            fetch_failures,
            seed_fetched,
            elapsed: start.elapsed(),
        }
    }
}

/// Shuffles the filtered links and keeps the first `max_children + 1`
///
/// The `+1` guarantees the traversal makes progress even when `max_children`
/// is zero: every visited page attempts at least one child, provided any
/// link survived filtering.
fn sample_links(mut links: Vec<String>, max_children: usize, rng: &mut StdRng) -> Vec<String> {
    links.shuffle(rng);
    links.truncate(max_children + 1);
    links
}
