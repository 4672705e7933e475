//! Configuration module for wikigraph
//!
//! This module handles loading, parsing, and validating TOML configuration
//! files. All crawl parameters are carried explicitly through this structure;
//! there is no ambient or global crawl state.
//!
//! # Example
//!
//! ```no_run
//! use wikigraph::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("wikigraph.toml")).unwrap();
//! println!("Crawl will use depth limit: {}", config.crawl.depth_limit);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{Config, CrawlConfig, HttpConfig, OutputConfig};

// Re-export parser functions
pub use parser::{compute_config_hash, load_config, load_config_with_hash};

// Re-export validation for post-override checks
pub use validation::{validate, validate_proxy};
