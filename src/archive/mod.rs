//! Zip archive decoding and encoding.
//!
//! Both directions work on fully materialized byte buffers: the source is
//! decoded into a list of [`ArchiveEntry`] values in central-directory order,
//! and the output is assembled in memory before being handed back.

mod reader;
mod writer;

pub use reader::read_entries;
pub use writer::{INDEX_NAME, SCRIPT_NAME, WriterConfig, write_archive};

/// A named file inside a zip archive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveEntry {
    /// Slash-separated path, unique within its archive.
    pub path: String,
    pub bytes: Vec<u8>,
}

impl ArchiveEntry {
    pub fn new(path: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            path: path.into(),
            bytes: bytes.into(),
        }
    }
}
