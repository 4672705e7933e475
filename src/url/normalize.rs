use crate::UrlError;
use url::Url;

/// Normalizes a seed URL supplied at the crawl boundary
///
/// # Normalization Steps
///
/// 1. Trim surrounding whitespace
/// 2. Default a missing scheme to `http://`
/// 3. Parse; reject if malformed
/// 4. Require an http or https scheme
/// 5. Require a host
/// 6. Remove the fragment
///
/// # Examples
///
/// ```
/// use wikigraph::url::normalize_url;
///
/// let url = normalize_url("awoiaf.westeros.org/index.php/Main_Page").unwrap();
/// assert_eq!(url.as_str(), "http://awoiaf.westeros.org/index.php/Main_Page");
/// ```
pub fn normalize_url(input: &str) -> Result<Url, UrlError> {
    let trimmed = input.trim();

    if trimmed.is_empty() {
        return Err(UrlError::Parse("empty URL".to_string()));
    }

    // Scheme defaulting: bare hostnames are accepted at the CLI
    let with_scheme = if trimmed.contains("://") {
        trimmed.to_string()
    } else {
        format!("http://{}", trimmed)
    };

    let mut url = Url::parse(&with_scheme).map_err(|e| UrlError::Parse(e.to_string()))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(UrlError::InvalidScheme(format!(
            "Only HTTP and HTTPS schemes are supported, got: {}",
            url.scheme()
        )));
    }

    if url.host_str().is_none() {
        return Err(UrlError::MissingHost);
    }

    url.set_fragment(None);

    Ok(url)
}

/// Resolves a raw href against the page it was discovered on
///
/// Relative paths become absolute per RFC 3986 joining. The result must be
/// an http or https URL; fragments are stripped so that anchor variants of
/// the same page collapse to one graph node.
pub fn resolve_link(base: &Url, href: &str) -> Result<Url, UrlError> {
    let mut url = base.join(href).map_err(|e| UrlError::Resolve {
        base: base.to_string(),
        href: href.to_string(),
        message: e.to_string(),
    })?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(UrlError::InvalidScheme(format!(
            "Resolved link has unsupported scheme: {}",
            url.scheme()
        )));
    }

    url.set_fragment(None);

    Ok(url)
}
