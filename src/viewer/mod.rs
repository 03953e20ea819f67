//! Static HTML viewer generation.
//!
//! The viewer is a single document that shows one page at a time in an
//! iframe, with previous/next buttons, a page-number box, a collapsible TOC
//! panel and a reading-progress bar along the bottom edge. Everything it
//! needs is embedded at generation time; it only references the vendored
//! script by name.

mod assets;

use crate::archive::SCRIPT_NAME;
use crate::toc::{TocEntry, escape_html};

/// Configuration for [`generate_viewer`].
#[derive(Debug, Clone)]
pub struct ViewerConfig {
    /// Document title, shown in the browser tab and the top bar.
    pub title: String,
    /// File name the `<script src>` tag points at.
    pub script_name: String,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            title: "EPUB Viewer".to_string(),
            script_name: SCRIPT_NAME.to_string(),
        }
    }
}

impl ViewerConfig {
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }
}

/// Generate the viewer document.
///
/// Deterministic: the same pages and entries always produce the same bytes.
/// `toc` labels are expected to be escaped already (as produced by
/// [`crate::toc::extract_links`]); hrefs are escaped here.
///
/// Each TOC item whose resolved path is one of `page_paths` navigates to that
/// page's position; dangling items load their href into the frame directly.
pub fn generate_viewer(page_paths: &[String], toc: &[TocEntry], config: &ViewerConfig) -> String {
    let mut html = String::with_capacity(16 * 1024 + toc.len() * 160);
    let title = escape_html(&config.title);

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("  <meta charset=\"utf-8\"/>\n");
    html.push_str(
        "  <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\"/>\n",
    );
    html.push_str(&format!("  <title>{title}</title>\n"));
    html.push_str("  <style>");
    html.push_str(assets::STYLE);
    html.push_str("  </style>\n</head>\n<body>\n");

    // Top bar
    html.push_str("  <div id=\"topbar\">\n");
    html.push_str("    <button id=\"menu-btn\" title=\"Table of Contents\"><span></span><span></span><span></span></button>\n");
    html.push_str(&format!("    <div id=\"book-title\">{title}</div>\n"));
    html.push_str("    <div id=\"pagination\">\n");
    html.push_str("      <div class=\"pg-btn\" id=\"prev\" title=\"Previous page\">&#8592;</div>\n");
    html.push_str(&format!(
        "      <input type=\"number\" id=\"pgNo\" min=\"1\" max=\"{}\" value=\"{}\"/>\n",
        page_paths.len(),
        usize::from(!page_paths.is_empty())
    ));
    html.push_str(&format!(
        "      <span id=\"total-pages\">/ {}</span>\n",
        page_paths.len()
    ));
    html.push_str("      <div class=\"pg-btn\" id=\"next\" title=\"Next page\">&#8594;</div>\n");
    html.push_str("    </div>\n  </div>\n");

    // Sidebar
    html.push_str("  <div id=\"sidebar\">\n");
    html.push_str("    <div id=\"sidebar-header\"><h2>Table of Contents</h2></div>\n");
    html.push_str("    <ol id=\"toc-list\">\n");
    for (index, entry) in toc.iter().enumerate() {
        write_toc_item(&mut html, index, entry, page_paths);
    }
    html.push_str("    </ol>\n  </div>\n");
    html.push_str("  <div id=\"overlay\"></div>\n");

    // Frame
    let first = page_paths.first().map(|p| escape_html(p)).unwrap_or_default();
    html.push_str("  <div id=\"content\">\n");
    html.push_str(&format!(
        "    <iframe id=\"viewerFrame\" name=\"main\" src=\"{first}\"></iframe>\n"
    ));
    html.push_str("  </div>\n");
    html.push_str("  <div id=\"progress-bar\"></div>\n");

    html.push_str(&format!(
        "  <script src=\"{}\"></script>\n",
        escape_html(&config.script_name)
    ));
    html.push_str("  <script>\n    var fileNames = ");
    html.push_str(&script_json(page_paths));
    html.push(';');
    html.push_str(assets::SCRIPT);
    html.push_str("  </script>\n</body>\n</html>\n");

    html
}

fn write_toc_item(html: &mut String, index: usize, entry: &TocEntry, page_paths: &[String]) {
    let page = page_paths
        .iter()
        .position(|p| *p == entry.resolved_path)
        .map(|i| i + 1);
    let data_page = page.map(|p| p.to_string()).unwrap_or_default();

    html.push_str(&format!(
        "      <li class=\"toc-item\" data-page=\"{data_page}\"><a href=\"{}\" target=\"main\"><span class=\"toc-num\">{}</span>{}</a></li>\n",
        escape_html(&entry.resolved_path),
        index + 1,
        entry.label,
    ));
}

/// Serialize the page list as a JSON array that is safe inside `<script>`.
fn script_json(page_paths: &[String]) -> String {
    // Serializing a slice of strings cannot fail.
    let json = serde_json::to_string(page_paths).unwrap_or_else(|_| "[]".to_string());
    json.replace('<', "\\u003c")
        .replace('>', "\\u003e")
        .replace('&', "\\u0026")
}
