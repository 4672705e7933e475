//! Wikigraph: a bounded, depth-limited wiki link-graph crawler
//!
//! This crate crawls outward from a seed page, follows hyperlinks that match
//! a structural path prefix, and builds an undirected graph of visited pages
//! connected by the links discovered between them.

pub mod config;
pub mod crawler;
pub mod graph;
pub mod url;

use thiserror::Error;

/// Main error type for wikigraph operations
#[derive(Debug, Error)]
pub enum WikigraphError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("URL error: {0}")]
    UrlError(#[from] UrlError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
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

    #[error("Invalid proxy address: {0}")]
    InvalidProxy(String),
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

    #[error("Failed to resolve link '{href}' against {base}: {message}")]
    Resolve {
        base: String,
        href: String,
        message: String,
    },
}

/// Result type alias for wikigraph operations
pub type Result<T> = std::result::Result<T, WikigraphError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Result type alias for URL operations
pub type UrlResult<T> = std::result::Result<T, UrlError>;

// Re-export commonly used types
pub use config::Config;
pub use crawler::{CrawlEngine, CrawlReport, FetchError};
pub use graph::PageGraph;
pub use url::{normalize_url, resolve_link};
