use std::io::{Cursor, Write};

use zip::CompressionMethod;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

use super::ArchiveEntry;
use crate::error::{Error, Result};

/// File name of the generated viewer document inside the output archive.
pub const INDEX_NAME: &str = "index.html";

/// File name of the vendored script inside the output archive.
pub const SCRIPT_NAME: &str = "jquery.min.js";

/// Configuration for the output archive.
#[derive(Debug, Clone)]
pub struct WriterConfig {
    /// Compression level for deflate (1-9, default 6).
    pub compression_level: Option<u32>,
    /// Name of the generated viewer document.
    pub index_name: String,
    /// Name of the vendored script.
    pub script_name: String,
}

impl Default for WriterConfig {
    fn default() -> Self {
        Self {
            compression_level: None,
            index_name: INDEX_NAME.to_string(),
            script_name: SCRIPT_NAME.to_string(),
        }
    }
}

impl WriterConfig {
    pub fn with_compression_level(mut self, level: u32) -> Self {
        self.compression_level = Some(level.clamp(1, 9));
        self
    }
}

/// Assemble the output archive in memory.
///
/// Content entries are written in the order given, followed by the vendored
/// script and the viewer document. A content entry whose path collides with
/// either generated name is skipped so the generated file wins.
///
/// `progress` receives values on a 0-100 scale proportional to the
/// uncompressed bytes written so far. It is only called when the integer
/// percentage changes and always ends with 100.
pub fn write_archive(
    entries: &[ArchiveEntry],
    viewer: &str,
    script: &[u8],
    config: &WriterConfig,
    progress: &mut dyn FnMut(u8),
) -> Result<Vec<u8>> {
    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));

    let compression_level = config.compression_level.unwrap_or(6);
    let deflated = SimpleFileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .compression_level(Some(compression_level as i64));

    let reserved = |path: &str| path == config.index_name || path == config.script_name;
    let content: Vec<&ArchiveEntry> = entries
        .iter()
        .filter(|entry| {
            let keep = !reserved(&entry.path);
            if !keep {
                log::warn!("{} is replaced by a generated file", entry.path);
            }
            keep
        })
        .collect();

    let total: u64 = content.iter().map(|e| e.bytes.len() as u64).sum::<u64>()
        + script.len() as u64
        + viewer.len() as u64;
    let mut meter = ProgressMeter::new(total, progress);

    for entry in content {
        add_file(&mut zip, &entry.path, &entry.bytes, deflated)?;
        meter.advance(entry.bytes.len());
    }

    add_file(&mut zip, &config.script_name, script, deflated)?;
    meter.advance(script.len());

    add_file(&mut zip, &config.index_name, viewer.as_bytes(), deflated)?;
    meter.advance(viewer.len());

    let cursor = zip.finish().map_err(Error::encode)?;
    meter.finish();

    Ok(cursor.into_inner())
}

fn add_file<W: Write + std::io::Seek>(
    zip: &mut ZipWriter<W>,
    name: &str,
    data: &[u8],
    options: SimpleFileOptions,
) -> Result<()> {
    zip.start_file(name, options).map_err(Error::encode)?;
    zip.write_all(data).map_err(|e| Error::ArchiveEncode {
        message: format!("failed to write {name}: {e}"),
        source: None,
    })
}

/// Turns byte counts into de-duplicated integer percentages.
struct ProgressMeter<'a> {
    total: u64,
    written: u64,
    last: Option<u8>,
    sink: &'a mut dyn FnMut(u8),
}

impl<'a> ProgressMeter<'a> {
    fn new(total: u64, sink: &'a mut dyn FnMut(u8)) -> Self {
        Self {
            total,
            written: 0,
            last: None,
            sink,
        }
    }

    fn advance(&mut self, bytes: usize) {
        self.written += bytes as u64;
        // Hold back 100 until the central directory is written.
        let percent = if self.total == 0 {
            99
        } else {
            ((self.written * 100 / self.total) as u8).min(99)
        };
        self.emit(percent);
    }

    fn finish(&mut self) {
        self.emit(100);
    }

    fn emit(&mut self, percent: u8) {
        if self.last.is_some_and(|last| percent <= last) {
            return;
        }
        self.last = Some(percent);
        (self.sink)(percent);
    }
}
