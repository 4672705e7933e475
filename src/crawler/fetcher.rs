//! HTTP fetcher implementation
//!
//! This module handles all HTTP requests for the crawler:
//! - Building an HTTP client with timeout, user agent, and optional proxy
//! - GET requests to fetch page content
//! - Error classification into the kinds the engine logs distinctly

use crate::config::HttpConfig;
use reqwest::{Client, Proxy};
use std::time::Duration;
use thiserror::Error;
use url::Url;

/// A failed fetch, classified by kind
///
/// The traversal engine treats every kind identically (the branch stops
/// descending and the graph is not mutated for that node), but the
/// distinction is preserved for logs.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("network error: {0}")]
    Network(reqwest::Error),

    #[error("request timed out")]
    Timeout,

    #[error("HTTP status {0}")]
    HttpStatus(u16),
}

/// Builds an HTTP client from the configuration
///
/// When a proxy is configured it is applied to both http and https traffic,
/// matching the behavior of the original fetcher.
///
/// # Example
///
/// ```no_run
/// use wikigraph::config::HttpConfig;
/// use wikigraph::crawler::build_http_client;
///
/// let config = HttpConfig::default();
/// let client = build_http_client(&config).unwrap();
/// ```
pub fn build_http_client(config: &HttpConfig) -> Result<Client, reqwest::Error> {
    let mut builder = Client::builder()
        .user_agent(config.user_agent.clone())
        .timeout(Duration::from_secs(config.timeout_secs))
        .connect_timeout(Duration::from_secs(config.timeout_secs.min(10)))
        .gzip(true)
        .brotli(true);

    if let Some(proxy) = &config.proxy {
        builder = builder.proxy(Proxy::all(format!("http://{}", proxy))?);
    }

    builder.build()
}

/// Fetches a page and returns its body as text
///
/// Success means an HTTP 2xx response; anything else is a [`FetchError`].
/// Redirects are followed by the client, so the body belongs to the final
/// URL of the chain.
pub async fn fetch_page(client: &Client, url: &Url) -> Result<String, FetchError> {
    let response = client
        .get(url.as_str())
        .send()
        .await
        .map_err(classify_error)?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::HttpStatus(status.as_u16()));
    }

    response.text().await.map_err(classify_error)
}

/// Maps a reqwest error onto the fetch failure taxonomy
fn classify_error(error: reqwest::Error) -> FetchError {
    if error.is_timeout() {
        FetchError::Timeout
    } else {
        FetchError::Network(error)
    }
}
