//! # epubzip
//!
//! Converts an EPUB into a zip archive that can be read in any browser: the
//! book's content files with the content root stripped, plus a generated
//! `index.html` viewer and the script it loads.
//!
//! ## Features
//!
//! - Rewrites paths (`EPUB/` prefix removed, image extensions lowercased)
//! - Orders pages by their position in the source archive
//! - Parses the `xhtml/raw/contents.xhtml` table of contents and resolves its
//!   links against the page list
//! - Generates a single-page viewer with page navigation, a TOC panel and a
//!   progress bar
//! - Reports monotonic progress through a [`ProgressObserver`]
//!
//! ## Quick Start
//!
//! ```no_run
//! use epubzip::{ConversionProgress, Converter};
//!
//! let data = std::fs::read("book.epub").unwrap();
//! let archive = Converter::offline()
//!     .convert(&data, "book.epub", &mut |_: ConversionProgress| {})
//!     .unwrap();
//! std::fs::write(&archive.name, &archive.bytes).unwrap();
//! ```
//!
//! ## Inspecting a Book
//!
//! [`Converter::outline`] reads an EPUB and returns its page order and the
//! resolved table of contents without producing an archive:
//!
//! ```no_run
//! use epubzip::Converter;
//!
//! let data = std::fs::read("book.epub").unwrap();
//! let outline = Converter::offline().outline(&data).unwrap();
//! for entry in &outline.toc {
//!     println!("{} -> {}", entry.label, entry.resolved_path);
//! }
//! ```

pub mod archive;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod toc;
pub mod transform;
pub mod util;
pub mod vendor;
pub mod viewer;

#[cfg(test)]
mod test_support;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use archive::ArchiveEntry;
pub use config::ConvertConfig;
pub use error::{Error, ErrorKind, Result};
pub use pipeline::{
    BookOutline, ConversionProgress, ConversionResult, ConversionSession, ConversionSummary,
    ConvertedArchive, Converter, Phase, ProgressObserver, SessionState, output_name,
    validate_source_name,
};
pub use toc::TocEntry;
