use serde::Deserialize;

/// Main configuration structure for wikigraph
///
/// Every section has defaults matching the fixed values of the original
/// crawler, so an empty (or absent) config file yields a usable setup.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub crawl: CrawlConfig,
    pub http: HttpConfig,
    pub output: OutputConfig,
}

/// Traversal limits and sampling policy
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CrawlConfig {
    /// How deep the crawl descends from the seed; 0 fetches nothing
    #[serde(rename = "depth-limit")]
    pub depth_limit: u32,

    /// Soft cap on graph size, checked once per visit before fetching
    #[serde(rename = "max-nodes")]
    pub max_nodes: usize,

    /// Maximum sampled fan-out per page; `max_children + 1` links are
    /// actually taken so the crawl always makes progress
    #[serde(rename = "max-children")]
    pub max_children: usize,

    /// Raw hrefs must start with this prefix to be followed
    #[serde(rename = "link-prefix")]
    pub link_prefix: String,

    /// Optional seed for the link shuffle, for reproducible crawls
    #[serde(rename = "shuffle-seed")]
    pub shuffle_seed: Option<u64>,
}

impl Default for CrawlConfig {
    fn default() -> Self {
        Self {
            depth_limit: 3,
            max_nodes: 10_000,
            max_children: 20,
            link_prefix: "/index.php/".to_string(),
            shuffle_seed: None,
        }
    }
}

/// HTTP client configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// Optional proxy address as `host:port`, used for http and https
    pub proxy: Option<String>,

    /// Per-request timeout in seconds
    #[serde(rename = "timeout-secs")]
    pub timeout_secs: u64,

    /// User-Agent header sent with every request
    #[serde(rename = "user-agent")]
    pub user_agent: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            proxy: None,
            timeout_secs: 10,
            user_agent: format!("wikigraph/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct OutputConfig {
    /// Where to write the adjacency-list export, if anywhere
    #[serde(rename = "graph-path")]
    pub graph_path: Option<String>,

    /// Where to write the Graphviz DOT export, if anywhere
    #[serde(rename = "dot-path")]
    pub dot_path: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_original_limits() {
        let config = Config::default();
        assert_eq!(config.crawl.depth_limit, 3);
        assert_eq!(config.crawl.max_nodes, 10_000);
        assert_eq!(config.crawl.max_children, 20);
        assert_eq!(config.crawl.link_prefix, "/index.php/");
        assert!(config.crawl.shuffle_seed.is_none());
        assert!(config.http.proxy.is_none());
        assert_eq!(config.http.timeout_secs, 10);
    }
}
