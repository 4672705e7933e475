//! Graph serialization to simple interchange formats
//!
//! The graph is an in-memory result; these exporters are an optional
//! extension for callers who want to keep or visualize it. Output is
//! deterministic: nodes and edges are emitted in sorted order regardless of
//! crawl order.

use crate::graph::PageGraph;
use std::io::Write;
use std::path::Path;

/// Writes the graph as adjacency-list text
///
/// One line per node: the node URL, a tab, then its neighbors separated by
/// tabs. Isolated nodes produce a line with no neighbors.
pub fn write_adjacency_list(graph: &PageGraph, path: &Path) -> std::io::Result<()> {
    let mut file = std::fs::File::create(path)?;

    let mut nodes: Vec<&String> = graph.nodes().collect();
    nodes.sort();

    for node in nodes {
        write!(file, "{}", node)?;
        if let Some(neighbors) = graph.neighbors(node) {
            for neighbor in neighbors {
                write!(file, "\t{}", neighbor)?;
            }
        }
        writeln!(file)?;
    }

    Ok(())
}

/// Writes the graph in Graphviz DOT format
///
/// Each undirected edge appears exactly once. Isolated nodes are declared
/// explicitly so they survive a round trip through graphviz tooling.
pub fn write_dot(graph: &PageGraph, path: &Path) -> std::io::Result<()> {
    let mut file = std::fs::File::create(path)?;

    writeln!(file, "graph pages {{")?;

    let mut isolated: Vec<&String> = graph
        .nodes()
        .filter(|node| {
            graph
                .neighbors(node)
                .map(|neighbors| neighbors.is_empty())
                .unwrap_or(true)
        })
        .collect();
    isolated.sort();

    for node in isolated {
        writeln!(file, "    \"{}\";", escape(node))?;
    }

    let mut edges: Vec<(&String, &String)> = graph.edges().collect();
    edges.sort();

    for (from, to) in edges {
        writeln!(file, "    \"{}\" -- \"{}\";", escape(from), escape(to))?;
    }

    writeln!(file, "}}")?;

    Ok(())
}

/// Escapes a URL for use inside a double-quoted DOT string
fn escape(url: &str) -> String {
    url.replace('\\', "\\\\").replace('"', "\\\"")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    fn sample_graph() -> PageGraph {
        let mut graph = PageGraph::new();
        graph.add_edge("https://example.com/a", "https://example.com/b");
        graph.add_edge("https://example.com/a", "https://example.com/c");
        graph.add_node("https://example.com/lonely");
        graph
    }

    #[test]
    fn test_adjacency_list_output() {
        let graph = sample_graph();
        let file = NamedTempFile::new().unwrap();
        write_adjacency_list(&graph, file.path()).unwrap();

        let content = std::fs::read_to_string(file.path()).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(
            lines[0],
            "https://example.com/a\thttps://example.com/b\thttps://example.com/c"
        );
        assert_eq!(lines[3], "https://example.com/lonely");
    }

    #[test]
    fn test_dot_output() {
        let graph = sample_graph();
        let file = NamedTempFile::new().unwrap();
        write_dot(&graph, file.path()).unwrap();

        let content = std::fs::read_to_string(file.path()).unwrap();
        assert!(content.starts_with("graph pages {"));
        assert!(content.contains("\"https://example.com/a\" -- \"https://example.com/b\";"));
        assert!(content.contains("\"https://example.com/lonely\";"));
        assert!(content.trim_end().ends_with('}'));

        // Each edge exactly once
        assert_eq!(content.matches(" -- ").count(), 2);
    }

    #[test]
    fn test_dot_escapes_quotes() {
        let mut graph = PageGraph::new();
        graph.add_node(r#"https://example.com/a"b"#);

        let file = NamedTempFile::new().unwrap();
        write_dot(&graph, file.path()).unwrap();

        let content = std::fs::read_to_string(file.path()).unwrap();
        assert!(content.contains(r#""https://example.com/a\"b""#));
    }
}
