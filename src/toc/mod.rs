//! Table-of-contents extraction and link resolution.
//!
//! The TOC document is scanned for anchors without building a DOM (see
//! [`AnchorScanner`]). Each anchor becomes a [`TocLink`]; resolving the links
//! against the page list produces [`TocEntry`] values that point at pages
//! actually present in the output archive whenever possible.

mod escape;
mod scanner;

pub use escape::escape_html;
pub use scanner::{AnchorScanner, RawAnchor, strip_tags};

use crate::util::trailing_segments;

/// A link extracted from the TOC document, before resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TocLink {
    /// The `href` attribute exactly as written.
    pub href: String,
    /// Markup-stripped, HTML-escaped display text. Never empty.
    pub label: String,
}

/// A TOC entry resolved against the output page list.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(serde::Serialize))]
pub struct TocEntry {
    pub original_href: String,
    /// Markup-stripped, HTML-escaped display text.
    pub label: String,
    /// Matching page path, or `original_href` if no page matched.
    pub resolved_path: String,
}

impl TocEntry {
    /// Whether this entry points at a page in `page_paths`.
    pub fn is_resolved(&self, page_paths: &[String]) -> bool {
        page_paths.iter().any(|p| *p == self.resolved_path)
    }
}

/// Extract `(href, label)` pairs from TOC document text, in document order.
///
/// Labels are stripped of tags, trimmed and escaped; anchors whose label is
/// empty after trimming are discarded. Repeated hrefs are kept.
///
/// # Example
///
/// ```
/// use epubzip::toc::extract_links;
///
/// let links = extract_links(r#"<a href="ch1.xhtml"><b>One</b> &amp; Two</a><a href="x"> </a>"#);
/// assert_eq!(links.len(), 1);
/// assert_eq!(links[0].href, "ch1.xhtml");
/// assert_eq!(links[0].label, "One &amp;amp; Two");
/// ```
pub fn extract_links(toc_text: &str) -> Vec<TocLink> {
    AnchorScanner::new(toc_text)
        .filter_map(|anchor| {
            let stripped = strip_tags(anchor.inner);
            let label = trim_js(&stripped);
            if label.is_empty() {
                return None;
            }
            Some(TocLink {
                href: anchor.href.to_string(),
                label: escape_html(label),
            })
        })
        .collect()
}

/// Resolve each link against the page list.
///
/// The last two path segments of the href are matched as a suffix against the
/// page paths; the first page that ends with that suffix wins. Links with no
/// match keep their original href.
pub fn resolve_links(links: Vec<TocLink>, page_paths: &[String]) -> Vec<TocEntry> {
    links
        .into_iter()
        .map(|link| {
            let suffix = trailing_segments(&link.href, 2);
            let resolved_path = match page_paths.iter().find(|p| p.ends_with(suffix)) {
                Some(page) => page.clone(),
                None => {
                    log::debug!("no page matches toc link {}", link.href);
                    link.href.clone()
                }
            };
            TocEntry {
                original_href: link.href,
                label: link.label,
                resolved_path,
            }
        })
        .collect()
}

/// Trim the whitespace set used by browser scripting engines: Unicode
/// whitespace plus the byte-order mark, minus NEL.
fn trim_js(text: &str) -> &str {
    text.trim_matches(|c: char| (c.is_whitespace() && c != '\u{0085}') || c == '\u{FEFF}')
}
