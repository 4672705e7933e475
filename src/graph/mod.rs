//! The page graph accumulated during a crawl
//!
//! This module provides the undirected graph of visited pages. Nodes are
//! normalized absolute URL strings; an edge records that one page links to
//! the other. The graph is mutated exclusively by the traversal engine and
//! handed back to the caller as the final crawl artifact.

mod export;

pub use export::{write_adjacency_list, write_dot};

use std::collections::{BTreeSet, HashMap};

/// An undirected, multigraph-free graph of page URLs
///
/// Two URLs are the same node iff they are textually equal after
/// normalization. Edge insertion is idempotent: adding the same edge twice
/// has no additional effect. Every edge endpoint is guaranteed to exist as a
/// node, because [`PageGraph::add_edge`] inserts missing endpoints itself.
#[derive(Debug, Clone, Default)]
pub struct PageGraph {
    adjacency: HashMap<String, BTreeSet<String>>,
    edge_count: usize,
}

impl PageGraph {
    /// Creates an empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a node to the graph
    ///
    /// Returns `true` if the node was newly inserted, `false` if it was
    /// already present.
    pub fn add_node(&mut self, url: &str) -> bool {
        if self.adjacency.contains_key(url) {
            return false;
        }
        self.adjacency.insert(url.to_string(), BTreeSet::new());
        true
    }

    /// Adds an undirected edge between two nodes
    ///
    /// Missing endpoints are inserted as nodes first. Returns `true` if the
    /// edge was newly inserted, `false` if it already existed.
    pub fn add_edge(&mut self, a: &str, b: &str) -> bool {
        self.add_node(a);
        self.add_node(b);

        let inserted = self
            .adjacency
            .get_mut(a)
            .map(|neighbors| neighbors.insert(b.to_string()))
            .unwrap_or(false);

        if let Some(neighbors) = self.adjacency.get_mut(b) {
            neighbors.insert(a.to_string());
        }

        if inserted {
            self.edge_count += 1;
        }
        inserted
    }

    /// Returns true if the URL is a node in the graph
    pub fn contains(&self, url: &str) -> bool {
        self.adjacency.contains_key(url)
    }

    /// Number of nodes in the graph
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of distinct undirected edges in the graph
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// The neighbors of a node, if it exists
    pub fn neighbors(&self, url: &str) -> Option<&BTreeSet<String>> {
        self.adjacency.get(url)
    }

    /// Iterates over all node URLs (no particular order)
    pub fn nodes(&self) -> impl Iterator<Item = &String> {
        self.adjacency.keys()
    }

    /// Iterates over all edges, each reported once with endpoints sorted
    pub fn edges(&self) -> impl Iterator<Item = (&String, &String)> {
        self.adjacency.iter().flat_map(|(node, neighbors)| {
            neighbors
                .iter()
                .filter(move |neighbor| node.as_str() <= neighbor.as_str())
                .map(move |neighbor| (node, neighbor))
        })
    }
}
