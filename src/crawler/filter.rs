//! Structural link filtering
//!
//! Keeps the crawl inside the wiki-style section of a site by matching raw
//! hrefs against a path prefix.

/// Returns, in original order, exactly the links that start with `prefix`
///
/// No side effects and no error conditions: empty input yields empty output.
pub fn filter_links(links: &[String], prefix: &str) -> Vec<String> {
    links
        .iter()
        .filter(|link| link.starts_with(prefix))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn links(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_keeps_matching_links() {
        let input = links(&["/index.php/A", "/other/B", "/index.php/C"]);
        assert_eq!(
            filter_links(&input, "/index.php/"),
            links(&["/index.php/A", "/index.php/C"])
        );
    }

    #[test]
    fn test_preserves_original_order() {
        let input = links(&["/index.php/Z", "/index.php/A", "/index.php/M"]);
        assert_eq!(filter_links(&input, "/index.php/"), input);
    }

    #[test]
    fn test_empty_input_yields_empty_output() {
        assert!(filter_links(&[], "/index.php/").is_empty());
    }

    #[test]
    fn test_no_matches() {
        let input = links(&["https://other.com/x", "mailto:a@b.com", "#top"]);
        assert!(filter_links(&input, "/index.php/").is_empty());
    }

    #[test]
    fn test_prefix_is_a_plain_prefix_match() {
        // "/index.php" alone must not match: the filter is textual, not
        // path-segment aware
        let input = links(&["/index.php", "/index.php/Page"]);
        assert_eq!(
            filter_links(&input, "/index.php/"),
            links(&["/index.php/Page"])
        );
    }

    #[test]
    fn test_duplicates_survive_filtering() {
        let input = links(&["/index.php/Same", "/index.php/Same"]);
        assert_eq!(filter_links(&input, "/index.php/").len(), 2);
    }
}
