//! Small path and text helpers shared across the pipeline.

use std::borrow::Cow;

/// Decode bytes as UTF-8 text.
///
/// A leading byte-order mark is stripped and malformed sequences are replaced
/// with U+FFFD rather than failing. Uses `Cow<str>` to avoid allocation when
/// the input is already valid UTF-8.
pub fn decode_utf8(bytes: &[u8]) -> Cow<'_, str> {
    let (result, malformed) = encoding_rs::UTF_8.decode_with_bom_removal(bytes);
    if malformed {
        log::debug!("replaced malformed UTF-8 sequences while decoding text");
    }
    result
}

/// Split a slash-separated path into `(stem_with_dirs, extension)`.
///
/// The extension is whatever follows the last `.` of the final segment; a
/// final segment without a dot has no extension.
pub fn split_extension(path: &str) -> (&str, Option<&str>) {
    let name_start = path.rfind('/').map(|i| i + 1).unwrap_or(0);
    match path[name_start..].rfind('.') {
        Some(dot) => {
            let dot = name_start + dot;
            (&path[..dot], Some(&path[dot + 1..]))
        }
        None => (path, None),
    }
}

/// Replace the final extension of a file name, or append one if it has none.
///
/// # Examples
///
/// ```
/// use epubzip::util::replace_extension;
///
/// assert_eq!(replace_extension("book.epub", "zip"), "book.zip");
/// assert_eq!(replace_extension("My.Book.EPUB", "zip"), "My.Book.zip");
/// assert_eq!(replace_extension("README", "zip"), "README.zip");
/// ```
pub fn replace_extension(name: &str, extension: &str) -> String {
    let (stem, _) = split_extension(name);
    format!("{stem}.{extension}")
}

/// Last `count` slash-separated segments of a path, rejoined with `/`.
pub fn trailing_segments(path: &str, count: usize) -> &str {
    if count == 0 {
        return "";
    }
    let mut seen = 0;
    for (i, b) in path.bytes().enumerate().rev() {
        if b == b'/' {
            seen += 1;
            if seen == count {
                return &path[i + 1..];
            }
        }
    }
    path
}
