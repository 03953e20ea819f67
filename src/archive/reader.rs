use std::io::{Cursor, Read};

use zip::ZipArchive;

use super::ArchiveEntry;
use crate::error::{Error, Result};

const MAX_PREALLOC: u64 = 16 * 1024 * 1024;

/// Decode a zip archive held in memory into its entries.
///
/// Entries are returned in central-directory order with their contents
/// inflated. Directory entries carry no data and are skipped.
///
/// Fails with [`Error::ArchiveDecode`] if the buffer is not a well-formed
/// archive, uses an unsupported compression method, or any entry fails to
/// inflate. No partial entry list is ever returned.
///
/// # Example
///
/// ```no_run
/// use epubzip::archive::read_entries;
///
/// let data = std::fs::read("book.epub")?;
/// for entry in read_entries(&data)? {
///     println!("{} ({} bytes)", entry.path, entry.bytes.len());
/// }
/// # Ok::<(), epubzip::Error>(())
/// ```
pub fn read_entries(data: &[u8]) -> Result<Vec<ArchiveEntry>> {
    let mut archive = ZipArchive::new(Cursor::new(data)).map_err(Error::decode)?;
    let mut entries = Vec::with_capacity(archive.len());

    for i in 0..archive.len() {
        let mut file = archive.by_index(i).map_err(Error::decode)?;
        if file.is_dir() {
            continue;
        }

        let path = file.name().to_string();
        // Declared sizes are untrusted; cap the up-front allocation.
        let mut bytes = Vec::with_capacity(file.size().min(MAX_PREALLOC) as usize);
        file.read_to_end(&mut bytes)
            .map_err(|e| Error::ArchiveDecode {
                message: format!("failed to inflate {path}: {e}"),
                source: None,
            })?;

        entries.push(ArchiveEntry { path, bytes });
    }

    log::debug!("decoded {} entries from {} bytes", entries.len(), data.len());
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::archive::{WriterConfig, write_archive};
    use crate::error::ErrorKind;

    fn sample_archive() -> Vec<u8> {
        let entries = vec![
            ArchiveEntry::new("EPUB/xhtml/ch1.xhtml", b"<html>1</html>".to_vec()),
            ArchiveEntry::new("mimetype", b"application/epub+zip".to_vec()),
        ];
        write_archive(&entries, "<html/>", b"/* js */", &WriterConfig::default(), &mut |_: u8| {})
            .unwrap()
    }

    #[test]
    fn test_read_preserves_order_and_content() {
        let entries = read_entries(&sample_archive()).unwrap();
        let paths: Vec<_> = entries.iter().map(|e| e.path.as_str()).collect();
        assert_eq!(
            paths,
            vec!["EPUB/xhtml/ch1.xhtml", "mimetype", "jquery.min.js", "index.html"]
        );
        assert_eq!(entries[0].bytes, b"<html>1</html>");
    }

    #[test]
    fn test_truncated_archive_is_rejected() {
        let data = sample_archive();
        let truncated = &data[..data.len() / 2];
        let err = read_entries(truncated).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ArchiveDecode);
    }

    #[test]
    fn test_garbage_is_rejected() {
        let err = read_entries(b"definitely not a zip file").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ArchiveDecode);
    }

    #[test]
    fn test_empty_buffer_is_rejected() {
        assert!(read_entries(&[]).is_err());
    }
}
