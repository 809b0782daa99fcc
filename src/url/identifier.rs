use crate::UrlError;
use url::Url;

/// Parses a raw identifier into its canonical form
///
/// # Canonicalization Steps
///
/// 1. Trim surrounding whitespace; reject empty input
/// 2. Parse as an absolute URL (this lowercases the host and removes dot
///    segments)
/// 3. Require an http or https scheme and a host
/// 4. Drop the fragment, so anchors on one page share a vertex
///
/// # Examples
///
/// ```
/// use linkpath::url::parse_identifier;
///
/// let id = parse_identifier(" https://EN.wikipedia.org/wiki/Rust#History ").unwrap();
/// assert_eq!(id, "https://en.wikipedia.org/wiki/Rust");
/// ```
pub fn parse_identifier(raw: &str) -> Result<String, UrlError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(UrlError::Empty);
    }

    let url = Url::parse(raw).map_err(|e| UrlError::Parse(format!("{}: {}", raw, e)))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(UrlError::InvalidScheme(url.scheme().to_string()));
    }

    if url.host_str().is_none() {
        return Err(UrlError::MissingHost);
    }

    Ok(canonical_id(&url))
}

/// Renders an already parsed URL as a vertex id
pub fn canonical_id(url: &Url) -> String {
    let mut url = url.clone();
    url.set_fragment(None);
    url.to_string()
}
