//! HTML link extraction
//!
//! Turns fetched page content into candidate neighbor vertices. The scheduler
//! sees only the `LinkExtractor` trait; `HtmlLinkExtractor` is the HTML
//! implementation built on `scraper`.

use crate::config::ExtractConfig;
use crate::graph::Vertex;
use crate::url::canonical_id;
use crate::LinkPathError;
use scraper::{Html, Selector};
use url::Url;

/// Link extraction collaborator used by the scheduler
///
/// Returns candidates in document order. Duplicates are allowed; the
/// scheduler drops already visited ids.
pub trait LinkExtractor: Send + Sync {
    fn extract(&self, content: &str, base_id: &str) -> Vec<Vertex>;
}

/// Extracts `<a href>` links from HTML
///
/// # Link Extraction Rules
///
/// **Include:**
/// - `<a href="...">` inside the configured content selector
///
/// **Exclude:**
/// - `<a href="..." download>`
/// - `javascript:`, `mailto:`, `tel:` links and data URIs
/// - Fragment-only links (same page anchors)
/// - Hrefs not starting with the configured prefix, when one is set
/// - Non-HTTP(S) URLs after resolution
#[derive(Debug, Clone)]
pub struct HtmlLinkExtractor {
    selector: String,
    href_prefix: Option<String>,
}

impl HtmlLinkExtractor {
    /// Creates an extractor from configuration
    ///
    /// # Returns
    ///
    /// * `Ok(HtmlLinkExtractor)` - Selector compiled successfully
    /// * `Err(LinkPathError::Selector)` - The content selector is not valid CSS
    pub fn new(config: &ExtractConfig) -> Result<Self, LinkPathError> {
        let scope = config.content_selector.trim();
        let selector = if scope.is_empty() {
            "a[href]".to_string()
        } else {
            format!("{} a[href]", scope)
        };

        Selector::parse(&selector)
            .map_err(|e| LinkPathError::Selector(format!("{}: {:?}", selector, e)))?;

        Ok(Self {
            selector,
            href_prefix: config.href_prefix.clone(),
        })
    }

    /// Follows every link on the page
    pub fn unscoped() -> Self {
        Self {
            selector: "a[href]".to_string(),
            href_prefix: None,
        }
    }

    fn accepts(&self, href: &str) -> bool {
        match &self.href_prefix {
            Some(prefix) => href.starts_with(prefix.as_str()),
            None => true,
        }
    }
}

impl LinkExtractor for HtmlLinkExtractor {
    fn extract(&self, content: &str, base_id: &str) -> Vec<Vertex> {
        let Ok(base_url) = Url::parse(base_id.trim()) else {
            tracing::debug!("Cannot resolve links against {}", base_id);
            return Vec::new();
        };
        // Validated in `new`
        let Ok(selector) = Selector::parse(&self.selector) else {
            return Vec::new();
        };

        let document = Html::parse_document(content);
        let mut links = Vec::new();

        for element in document.select(&selector) {
            if element.value().attr("download").is_some() {
                continue;
            }

            let Some(href) = element.value().attr("href").map(str::trim) else {
                continue;
            };
            if !self.accepts(href) {
                continue;
            }

            if let Some(id) = resolve_link(href, &base_url) {
                let text = element.text().collect::<String>();
                let label = text.split_whitespace().collect::<Vec<_>>().join(" ");
                let label = if label.is_empty() { id.clone() } else { label };
                links.push(Vertex::new(id, label));
            }
        }

        links
    }
}

/// Resolves a link href to a canonical absolute id
///
/// Returns None if the link should be excluded:
/// - javascript:, mailto:, tel: schemes
/// - data: URIs
/// - Fragment-only hrefs
/// - Invalid URLs
/// - Non-HTTP(S) URLs after resolution
fn resolve_link(href: &str, base_url: &Url) -> Option<String> {
    if href.is_empty() || href.starts_with('#') {
        return None;
    }

    if href.starts_with("javascript:")
        || href.starts_with("mailto:")
        || href.starts_with("tel:")
        || href.starts_with("data:")
    {
        return None;
    }

    let absolute_url = base_url.join(href).ok()?;
    if absolute_url.scheme() == "http" || absolute_url.scheme() == "https" {
        Some(canonical_id(&absolute_url))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://en.wikipedia.org/wiki/Rust";

    fn wiki() -> HtmlLinkExtractor {
        HtmlLinkExtractor::new(&ExtractConfig::default()).unwrap()
    }

    fn ids(links: &[Vertex]) -> Vec<&str> {
        links.iter().map(|v| v.id.as_str()).collect()
    }

    #[test]
    fn test_extract_relative_link_with_label() {
        let html = r#"<html><body><div id="content">
            <a href="/wiki/Ferris">  Ferris the
              crab </a>
        </div></body></html>"#;
        let links = wiki().extract(html, BASE);
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].id, "https://en.wikipedia.org/wiki/Ferris");
        assert_eq!(links[0].label, "Ferris the crab");
    }

    #[test]
    fn test_links_outside_content_are_ignored() {
        let html = r#"<html><body>
            <nav><a href="/wiki/Nav">Nav</a></nav>
            <div id="content"><a href="/wiki/Inside">Inside</a></div>
        </body></html>"#;
        let links = wiki().extract(html, BASE);
        assert_eq!(ids(&links), vec!["https://en.wikipedia.org/wiki/Inside"]);
    }

    #[test]
    fn test_href_prefix_filter() {
        let html = r#"<div id="content">
            <a href="/wiki/Keep">Keep</a>
            <a href="/w/index.php?title=Drop">Drop</a>
            <a href="https://other.org/wiki/Absolute">Absolute</a>
        </div>"#;
        let links = wiki().extract(html, BASE);
        assert_eq!(ids(&links), vec!["https://en.wikipedia.org/wiki/Keep"]);
    }

    #[test]
    fn test_fragment_dropped_from_id() {
        let html = r##"<div id="content">
            <a href="/wiki/Page#History">History</a>
            <a href="#Local">Local</a>
        </div>"##;
        let links = wiki().extract(html, BASE);
        assert_eq!(ids(&links), vec!["https://en.wikipedia.org/wiki/Page"]);
    }

    #[test]
    fn test_document_order_and_duplicates_kept() {
        let html = r#"<div id="content">
            <a href="/wiki/B">first b</a>
            <a href="/wiki/A">a</a>
            <a href="/wiki/B">second b</a>
        </div>"#;
        let links = wiki().extract(html, BASE);
        assert_eq!(
            ids(&links),
            vec![
                "https://en.wikipedia.org/wiki/B",
                "https://en.wikipedia.org/wiki/A",
                "https://en.wikipedia.org/wiki/B",
            ]
        );
        assert_eq!(links[0].label, "first b");
    }

    #[test]
    fn test_skip_special_schemes_and_downloads() {
        let html = r#"<html><body>
            <a href="javascript:void(0)">js</a>
            <a href="mailto:test@example.com">mail</a>
            <a href="tel:+1234567890">tel</a>
            <a href="data:text/html,<h1>x</h1>">data</a>
            <a href="/file.pdf" download>file</a>
            <a href="/valid">valid</a>
        </body></html>"#;
        let links = HtmlLinkExtractor::unscoped().extract(html, "https://example.com/page");
        assert_eq!(ids(&links), vec!["https://example.com/valid"]);
    }

    #[test]
    fn test_empty_label_falls_back_to_id() {
        let html = r#"<a href="/img"><img src="x.png"></a>"#;
        let links = HtmlLinkExtractor::unscoped().extract(html, "https://example.com/");
        assert_eq!(links[0].label, "https://example.com/img");
    }

    #[test]
    fn test_empty_selector_scans_whole_page() {
        let config = ExtractConfig {
            content_selector: String::new(),
            href_prefix: None,
        };
        let extractor = HtmlLinkExtractor::new(&config).unwrap();
        let html = r#"<nav><a href="/a">A</a></nav><p><a href="https://other.com/b">B</a></p>"#;
        let links = extractor.extract(html, "https://example.com/");
        assert_eq!(
            ids(&links),
            vec!["https://example.com/a", "https://other.com/b"]
        );
    }

    #[test]
    fn test_invalid_selector_rejected() {
        let config = ExtractConfig {
            content_selector: "div[[".to_string(),
            href_prefix: None,
        };
        assert!(matches!(
            HtmlLinkExtractor::new(&config),
            Err(LinkPathError::Selector(_))
        ));
    }

    #[test]
    fn test_unparseable_base_yields_nothing() {
        let html = r#"<a href="/a">A</a>"#;
        assert!(HtmlLinkExtractor::unscoped().extract(html, "not a url").is_empty());
    }

    #[test]
    fn test_non_html_content_yields_nothing() {
        let links = wiki().extract("plain text, no markup", BASE);
        assert!(links.is_empty());
    }
}
