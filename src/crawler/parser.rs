//! HTML link extraction
//!
//! Extracts the ordered sequence of raw `href` values from a page. Hrefs are
//! deliberately returned unresolved: the link filter matches on the raw path
//! prefix (e.g. `/index.php/`), and resolution to absolute URLs happens
//! afterwards in the traversal engine.

use scraper::{Html, Selector};

/// Extracts raw link targets from HTML, in document order
///
/// Malformed HTML is not an error: html5ever recovers from anything, so a
/// garbage document simply yields whatever anchors survive, possibly none.
///
/// # Example
///
/// ```
/// use wikigraph::crawler::extract_links;
///
/// let html = r#"<html><body><a href="/index.php/Page">Link</a></body></html>"#;
/// assert_eq!(extract_links(html), vec!["/index.php/Page".to_string()]);
/// ```
pub fn extract_links(html: &str) -> Vec<String> {
    let document = Html::parse_document(html);

    let mut links = Vec::new();

    if let Ok(selector) = Selector::parse("a[href]") {
        for element in document.select(&selector) {
            if let Some(href) = element.value().attr("href") {
                let href = href.trim();
                if !href.is_empty() {
                    links.push(href.to_string());
                }
            }
        }
    }

    links
}
