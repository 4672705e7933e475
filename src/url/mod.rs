//! URL handling for wikigraph
//!
//! Node identity in the page graph is textual equality of normalized URLs,
//! so every URL that enters the graph passes through this module: seeds via
//! [`normalize_url`], discovered links via [`resolve_link`].

mod normalize;

pub use normalize::{normalize_url, resolve_link};
