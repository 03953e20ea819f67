//! Fixture archives built in memory.

#![allow(dead_code)]

use std::io::{Cursor, Write};

use zip::ZipWriter;
use zip::write::SimpleFileOptions;

use epubzip::archive::{ArchiveEntry, read_entries};

pub const TOC: &str = "EPUB/xhtml/raw/contents.xhtml";

/// Build a zip archive from `(path, bytes)` pairs, in order.
pub fn epub(entries: &[(&str, &[u8])]) -> Vec<u8> {
    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default();
    for (path, bytes) in entries {
        zip.start_file(*path, options).unwrap();
        zip.write_all(bytes).unwrap();
    }
    zip.finish().unwrap().into_inner()
}

/// The scenario book: a TOC, one chapter and an upper-case image.
pub fn sample_book() -> Vec<u8> {
    epub(&[
        (TOC, br#"<a href="xhtml/ch1.xhtml">Chapter 1</a>"#),
        ("EPUB/xhtml/ch1.xhtml", b"<html>...</html>"),
        ("EPUB/images/cover.PNG", b"\x89PNG"),
    ])
}

pub fn entries(zip: &[u8]) -> Vec<ArchiveEntry> {
    read_entries(zip).unwrap()
}

pub fn paths(zip: &[u8]) -> Vec<String> {
    entries(zip).into_iter().map(|e| e.path).collect()
}

pub fn file(zip: &[u8], path: &str) -> Vec<u8> {
    entries(zip)
        .into_iter()
        .find(|e| e.path == path)
        .unwrap_or_else(|| panic!("{path} missing from archive"))
        .bytes
}

pub fn viewer(zip: &[u8]) -> String {
    String::from_utf8(file(zip, "index.html")).unwrap()
}
