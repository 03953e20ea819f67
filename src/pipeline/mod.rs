//! Conversion pipeline.
//!
//! A [`Converter`] runs the phases in strict sequence:
//!
//! | Phase                    | Progress |
//! |--------------------------|----------|
//! | read source archive      | 2 → 10   |
//! | transform entries        | 10 → 50  |
//! | extract and resolve TOC  | 50       |
//! | fetch vendored script    | 52       |
//! | generate viewer          | 58       |
//! | write output archive     | 58 → 96  |
//! | finalize                 | 97 → 100 |
//!
//! Each conversion owns all of its working data; nothing is shared between
//! invocations.

mod progress;
mod session;

pub use progress::{ConversionProgress, Phase, ProgressObserver};
pub use session::{ConversionSession, SessionState, validate_source_name};

use progress::ProgressTracker;

use crate::archive::{read_entries, write_archive};
use crate::config::ConvertConfig;
use crate::error::Result;
use crate::toc::{TocEntry, extract_links, resolve_links};
use crate::transform::transform_entries;
use crate::util::replace_extension;
use crate::vendor::{OfflineSource, ScriptSource, resolve_script};
use crate::viewer::generate_viewer;

/// Outcome of one conversion.
pub type ConversionResult = Result<ConvertedArchive>;

/// A finished output archive.
#[derive(Debug, Clone)]
pub struct ConvertedArchive {
    /// The zip archive.
    pub bytes: Vec<u8>,
    /// Suggested file name: the source name with its extension replaced.
    pub name: String,
    pub summary: ConversionSummary,
}

/// Counts describing what a conversion produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(serde::Serialize))]
pub struct ConversionSummary {
    /// Entries in the output archive, generated files included.
    pub entries: usize,
    pub pages: usize,
    pub toc_entries: usize,
    /// TOC entries whose link did not match any page.
    pub dangling_toc_entries: usize,
    /// Source entries that collapsed onto an existing output path.
    pub collisions: usize,
    /// False when the placeholder script was bundled.
    pub script_fetched: bool,
}

/// Page order and resolved TOC of a source archive, without an output.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "cli", derive(serde::Serialize))]
pub struct BookOutline {
    pub page_paths: Vec<String>,
    pub toc: Vec<TocEntry>,
    pub entries: usize,
}

/// Converts EPUB archives into viewer archives.
///
/// # Example
///
/// ```no_run
/// use epubzip::{ConversionProgress, Converter};
///
/// let data = std::fs::read("book.epub")?;
/// let converter = Converter::new();
/// let archive = converter.convert(&data, "book.epub", &mut |p: ConversionProgress| {
///     eprintln!("{:>3}% {}", p.percent, p.phase);
/// })?;
/// std::fs::write(&archive.name, &archive.bytes)?;
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub struct Converter {
    config: ConvertConfig,
    script_source: Box<dyn ScriptSource>,
}

impl Default for Converter {
    fn default() -> Self {
        Self::new()
    }
}

impl Converter {
    /// Create a converter with default configuration.
    ///
    /// With the `fetch` feature the vendored script is downloaded over HTTP;
    /// without it the placeholder is always used.
    pub fn new() -> Self {
        #[cfg(feature = "fetch")]
        let script_source: Box<dyn ScriptSource> = Box::new(crate::vendor::HttpSource);
        #[cfg(not(feature = "fetch"))]
        let script_source: Box<dyn ScriptSource> = Box::new(OfflineSource);

        Self {
            config: ConvertConfig::default(),
            script_source,
        }
    }

    /// A converter that never touches the network.
    pub fn offline() -> Self {
        Self {
            config: ConvertConfig::default(),
            script_source: Box::new(OfflineSource),
        }
    }

    /// Configure the converter with custom settings.
    pub fn with_config(mut self, config: ConvertConfig) -> Self {
        self.config = config;
        self
    }

    /// Replace where the vendored script comes from.
    pub fn with_script_source(mut self, source: impl ScriptSource + 'static) -> Self {
        self.script_source = Box::new(source);
        self
    }

    pub fn config(&self) -> &ConvertConfig {
        &self.config
    }

    /// Convert an EPUB held in memory.
    ///
    /// `source_name` is the display name of the input; the output name is
    /// derived from it. `observer` sees monotonic progress ending in a `Done`
    /// event at 100 on success. On failure no events follow the last one and
    /// no output is produced.
    pub fn convert(
        &self,
        data: &[u8],
        source_name: &str,
        observer: &mut dyn ProgressObserver,
    ) -> ConversionResult {
        let mut tracker = ProgressTracker::new(observer);
        let result = self.run(data, source_name, &mut tracker);
        match &result {
            Ok(archive) => {
                tracker.finish();
                log::info!(
                    "converted {source_name} into {} ({} pages, {} toc entries)",
                    archive.name,
                    archive.summary.pages,
                    archive.summary.toc_entries
                );
            }
            Err(e) => {
                tracker.fail();
                log::error!("conversion of {source_name} failed: {e}");
            }
        }
        result
    }

    fn run(
        &self,
        data: &[u8],
        source_name: &str,
        tracker: &mut ProgressTracker<'_>,
    ) -> ConversionResult {
        tracker.emit(Phase::Reading, 2);
        let entries = read_entries(data)?;
        tracker.emit(Phase::Parsing, 10);

        let transformed = transform_entries(
            entries,
            &self.config.transform,
            &mut |done: usize, total: usize| {
                tracker.emit_fraction(Phase::Extracting, 10, 40, done as u64, total as u64)
            },
        );

        tracker.emit(Phase::ResolvingToc, 50);
        let links = extract_links(&transformed.toc_text);
        let toc = resolve_links(links, &transformed.page_paths);

        tracker.emit(Phase::FetchingScript, 52);
        let script = resolve_script(self.script_source.as_ref(), &self.config.vendor);

        tracker.emit(Phase::GeneratingViewer, 58);
        let viewer = generate_viewer(&transformed.page_paths, &toc, &self.config.viewer);

        let bytes = write_archive(
            &transformed.entries,
            &viewer,
            script.as_bytes(),
            &self.config.writer,
            &mut |percent: u8| {
                tracker.emit_fraction(Phase::BuildingArchive, 58, 38, percent as u64, 100)
            },
        )?;

        tracker.emit(Phase::Finalizing, 97);
        let reserved = [&self.config.writer.index_name, &self.config.writer.script_name];
        let kept = transformed
            .entries
            .iter()
            .filter(|e| !reserved.contains(&&e.path))
            .count();

        let summary = ConversionSummary {
            entries: kept + 2,
            pages: transformed.page_paths.len(),
            toc_entries: toc.len(),
            dangling_toc_entries: toc
                .iter()
                .filter(|e| !e.is_resolved(&transformed.page_paths))
                .count(),
            collisions: transformed.collisions,
            script_fetched: script.is_fetched(),
        };

        Ok(ConvertedArchive {
            bytes,
            name: output_name(source_name),
            summary,
        })
    }

    /// Read an EPUB and report its page order and resolved TOC.
    pub fn outline(&self, data: &[u8]) -> Result<BookOutline> {
        let entries = read_entries(data)?;
        let transformed =
            transform_entries(entries, &self.config.transform, &mut |_: usize, _: usize| {});
        let toc = resolve_links(extract_links(&transformed.toc_text), &transformed.page_paths);

        Ok(BookOutline {
            entries: transformed.entries.len(),
            page_paths: transformed.page_paths,
            toc,
        })
    }
}

/// Output file name for a source display name.
///
/// # Examples
///
/// ```
/// use epubzip::output_name;
///
/// assert_eq!(output_name("Moby Dick.epub"), "Moby Dick.zip");
/// ```
pub fn output_name(source_name: &str) -> String {
    replace_extension(source_name, "zip")
}
