//! Content restructuring for the viewer archive.
//!
//! - Paths: content-root stripping, image extension normalization
//! - Entries: filtering, page discovery, TOC document capture

mod paths;

pub use paths::{normalize_image_extension, strip_content_root};

use std::collections::HashMap;

use rayon::prelude::*;

use crate::archive::ArchiveEntry;
use crate::util::decode_utf8;

/// Configuration for [`transform_entries`].
#[derive(Debug, Clone)]
pub struct TransformConfig {
    /// Prefix an entry must carry to be kept; stripped from kept entries.
    pub content_root: String,
    /// Path (after stripping) of the document holding the table of contents.
    pub toc_path: String,
    /// Prefix (after stripping) under which reading-order pages live.
    pub pages_prefix: String,
    /// Suffixes that mark a file under `pages_prefix` as a page.
    pub page_suffixes: Vec<String>,
    /// Image extensions, compared case-insensitively, that get lowercased.
    pub image_extensions: Vec<String>,
    /// Classify entries on the rayon pool.
    pub parallel: bool,
}

impl Default for TransformConfig {
    fn default() -> Self {
        Self {
            content_root: "EPUB/".to_string(),
            toc_path: "xhtml/raw/contents.xhtml".to_string(),
            pages_prefix: "xhtml/".to_string(),
            page_suffixes: vec![".xhtml".to_string(), ".html".to_string()],
            image_extensions: ["png", "jpg", "jpeg", "gif", "webp", "bmp"]
                .into_iter()
                .map(String::from)
                .collect(),
            parallel: true,
        }
    }
}

impl TransformConfig {
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    fn is_page(&self, path: &str) -> bool {
        path != self.toc_path
            && path.starts_with(&self.pages_prefix)
            && self.page_suffixes.iter().any(|s| path.ends_with(s.as_str()))
    }
}

/// Output of [`transform_entries`].
#[derive(Debug, Clone, Default)]
pub struct Transformed {
    /// Retained entries with rewritten paths, in first-encounter order.
    pub entries: Vec<ArchiveEntry>,
    /// Reading-order pages, in first-encounter order.
    pub page_paths: Vec<String>,
    /// Text of the table-of-contents document, empty if absent.
    pub toc_text: String,
    /// Number of source paths that collapsed onto an existing output path.
    pub collisions: usize,
}

/// What a single source entry turns into.
enum Disposition {
    Dropped,
    Kept {
        path: String,
        bytes: Vec<u8>,
        is_page: bool,
        toc_text: Option<String>,
    },
}

fn classify(entry: ArchiveEntry, config: &TransformConfig) -> Disposition {
    let Some(stripped) = strip_content_root(&entry.path, &config.content_root) else {
        return Disposition::Dropped;
    };
    let path = normalize_image_extension(stripped, &config.image_extensions).into_owned();

    let toc_text = (path == config.toc_path).then(|| decode_utf8(&entry.bytes).into_owned());
    let is_page = config.is_page(&path);

    Disposition::Kept {
        path,
        bytes: entry.bytes,
        is_page,
        toc_text,
    }
}

/// Restructure source entries for the viewer archive.
///
/// Entries outside the content root are dropped; the rest lose the prefix and
/// have image extensions lowercased. Pages and the TOC document are picked
/// out along the way.
///
/// Classification may run in parallel, but results are folded in original
/// archive order, so `page_paths` always follows enumeration order.
///
/// When two source paths map to the same output path, the later entry's bytes
/// replace the earlier ones while the entry keeps its first position, and the
/// page list keeps a single occurrence.
///
/// `progress` is called with `(done, total)` as each entry is folded.
pub fn transform_entries(
    entries: Vec<ArchiveEntry>,
    config: &TransformConfig,
    progress: &mut dyn FnMut(usize, usize),
) -> Transformed {
    let total = entries.len();
    let dispositions: Vec<Disposition> = if config.parallel {
        entries
            .into_par_iter()
            .map(|entry| classify(entry, config))
            .collect()
    } else {
        entries
            .into_iter()
            .map(|entry| classify(entry, config))
            .collect()
    };

    let mut out = Transformed::default();
    let mut positions: HashMap<String, usize> = HashMap::new();

    for (done, disposition) in dispositions.into_iter().enumerate() {
        if let Disposition::Kept {
            path,
            bytes,
            is_page,
            toc_text,
        } = disposition
        {
            if let Some(text) = toc_text {
                out.toc_text = text;
            }

            match positions.get(&path) {
                Some(&index) => {
                    log::warn!("{path} appears more than once; keeping the last copy");
                    out.entries[index].bytes = bytes;
                    out.collisions += 1;
                }
                None => {
                    if is_page {
                        out.page_paths.push(path.clone());
                    }
                    positions.insert(path.clone(), out.entries.len());
                    out.entries.push(ArchiveEntry { path, bytes });
                }
            }
        }
        progress(done + 1, total);
    }

    log::debug!(
        "kept {} of {} entries, {} pages, toc {} bytes",
        out.entries.len(),
        total,
        out.page_paths.len(),
        out.toc_text.len()
    );
    out
}
