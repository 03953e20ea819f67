mod common;

use std::time::Duration;

use common::{TOC, epub, file, paths, sample_book, viewer};
use epubzip::vendor::{PLACEHOLDER_SCRIPT, ScriptSource};
use epubzip::{
    ConversionProgress, ConversionSession, ConvertConfig, Converter, Error, ErrorKind, Phase,
    SessionState,
};

struct FixedScript(&'static [u8]);

impl ScriptSource for FixedScript {
    fn fetch(&self, _url: &str, _timeout: Duration) -> epubzip::Result<Vec<u8>> {
        Ok(self.0.to_vec())
    }
}

struct Unreachable;

impl ScriptSource for Unreachable {
    fn fetch(&self, url: &str, _timeout: Duration) -> epubzip::Result<Vec<u8>> {
        Err(Error::VendorFetch(format!("{url}: timed out")))
    }
}

fn convert(data: &[u8]) -> epubzip::ConvertedArchive {
    Converter::offline()
        .convert(data, "book.epub", &mut |_: ConversionProgress| {})
        .unwrap()
}

#[test]
fn test_sample_book_layout() {
    let archive = convert(&sample_book());

    assert_eq!(archive.name, "book.zip");
    assert_eq!(
        paths(&archive.bytes),
        vec![
            "xhtml/raw/contents.xhtml",
            "xhtml/ch1.xhtml",
            "images/cover.png",
            "jquery.min.js",
            "index.html",
        ]
    );
    assert_eq!(file(&archive.bytes, "xhtml/ch1.xhtml"), b"<html>...</html>");
    assert_eq!(file(&archive.bytes, "images/cover.png"), b"\x89PNG");

    let html = viewer(&archive.bytes);
    assert!(html.contains(r#"var fileNames = ["xhtml/ch1.xhtml"];"#));
    assert!(html.contains(
        r#"<a href="xhtml/ch1.xhtml" target="main"><span class="toc-num">1</span>Chapter 1</a>"#
    ));
}

#[test]
fn test_outline_of_sample_book() {
    let outline = Converter::offline().outline(&sample_book()).unwrap();
    assert_eq!(outline.page_paths, vec!["xhtml/ch1.xhtml"]);
    assert_eq!(outline.toc.len(), 1);
    assert_eq!(outline.toc[0].label, "Chapter 1");
    assert_eq!(outline.toc[0].resolved_path, "xhtml/ch1.xhtml");
}

#[test]
fn test_dangling_toc_link_kept() {
    let data = epub(&[
        (TOC, br#"<a href="xhtml/missing.xhtml">Lost</a>"#),
        ("EPUB/xhtml/ch1.xhtml", b""),
    ]);
    let outline = Converter::offline().outline(&data).unwrap();
    assert_eq!(outline.toc[0].original_href, "xhtml/missing.xhtml");
    assert_eq!(outline.toc[0].resolved_path, "xhtml/missing.xhtml");

    let archive = convert(&data);
    assert_eq!(archive.summary.dangling_toc_entries, 1);
    assert!(viewer(&archive.bytes).contains(r#"data-page=""><a href="xhtml/missing.xhtml""#));
}

#[test]
fn test_empty_toc() {
    let data = epub(&[(TOC, b"<html><body></body></html>"), ("EPUB/xhtml/ch1.xhtml", b"")]);
    let archive = convert(&data);

    assert_eq!(archive.summary.toc_entries, 0);
    assert_eq!(archive.summary.pages, 1);
    let html = viewer(&archive.bytes);
    assert!(html.contains("<ol id=\"toc-list\">\n    </ol>"));
    assert!(html.contains(r#"src="xhtml/ch1.xhtml""#));
}

#[test]
fn test_missing_toc_document() {
    let data = epub(&[("EPUB/xhtml/ch1.xhtml", b"")]);
    let archive = convert(&data);
    assert_eq!(archive.summary.toc_entries, 0);
    assert_eq!(archive.summary.pages, 1);
}

#[test]
fn test_truncated_archive() {
    let mut data = sample_book();
    data.truncate(data.len() / 2);

    let mut seen = Vec::new();
    let err = Converter::offline()
        .convert(&data, "book.epub", &mut |p: ConversionProgress| seen.push(p))
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::ArchiveDecode);
    assert!(err.is_fatal());
    assert!(seen.iter().all(|p| p.phase != Phase::Done));
    assert!(seen.iter().all(|p| p.percent <= 10));
}

#[test]
fn test_case_collision_last_write_wins() {
    let data = epub(&[
        ("EPUB/images/Cover.JPG", b"first"),
        ("EPUB/xhtml/ch1.xhtml", b""),
        ("EPUB/images/cover.jpg", b"second"),
    ]);
    let archive = convert(&data);

    assert_eq!(
        paths(&archive.bytes),
        vec!["images/Cover.jpg", "xhtml/ch1.xhtml", "images/cover.jpg", "jquery.min.js", "index.html"]
    );
    assert_eq!(archive.summary.collisions, 0);
}

#[test]
fn test_extension_collision_last_write_wins() {
    let data = epub(&[
        ("EPUB/images/cover.JPG", b"first"),
        ("EPUB/xhtml/ch1.xhtml", b""),
        ("EPUB/images/cover.jpg", b"second"),
    ]);
    let archive = convert(&data);

    assert_eq!(
        paths(&archive.bytes),
        vec!["images/cover.jpg", "xhtml/ch1.xhtml", "jquery.min.js", "index.html"]
    );
    assert_eq!(file(&archive.bytes, "images/cover.jpg"), b"second");
    assert_eq!(archive.summary.collisions, 1);
}

#[test]
fn test_progress_is_monotonic_and_ends_at_100() {
    let mut seen = Vec::new();
    Converter::offline()
        .convert(&sample_book(), "book.epub", &mut |p: ConversionProgress| seen.push(p))
        .unwrap();

    assert!(seen.windows(2).all(|w| w[0].percent <= w[1].percent));
    let last = seen.last().unwrap();
    assert_eq!((last.phase, last.percent), (Phase::Done, 100));
    assert!(seen.iter().any(|p| p == &ConversionProgress {
        phase: Phase::GeneratingViewer,
        percent: 58
    }));
}

#[test]
fn test_fetch_failure_bundles_placeholder() {
    let archive = Converter::offline()
        .with_script_source(Unreachable)
        .convert(&sample_book(), "book.epub", &mut |_: ConversionProgress| {})
        .unwrap();

    assert!(!archive.summary.script_fetched);
    let script = file(&archive.bytes, "jquery.min.js");
    assert!(!script.is_empty());
    assert_eq!(script, PLACEHOLDER_SCRIPT.as_bytes());
}

#[test]
fn test_fetched_script_is_bundled() {
    let archive = Converter::offline()
        .with_script_source(FixedScript(b"/*! jQuery */"))
        .convert(&sample_book(), "book.epub", &mut |_: ConversionProgress| {})
        .unwrap();

    assert!(archive.summary.script_fetched);
    assert_eq!(file(&archive.bytes, "jquery.min.js"), b"/*! jQuery */");
}

#[test]
fn test_offline_config_skips_source() {
    let archive = Converter::offline()
        .with_script_source(FixedScript(b"/*! jQuery */"))
        .with_config(ConvertConfig::default().offline())
        .convert(&sample_book(), "book.epub", &mut |_: ConversionProgress| {})
        .unwrap();
    assert!(!archive.summary.script_fetched);
}

#[test]
fn test_labels_escaped_in_viewer() {
    let data = epub(&[
        (TOC, br#"<a href="xhtml/ch1.xhtml"><em>Fish & Chips</em> <i>&lt;3</i> "x" > y</a>"#),
        ("EPUB/xhtml/ch1.xhtml", b""),
    ]);
    let html = viewer(&convert(&data).bytes);

    assert!(html.contains("Fish &amp; Chips &amp;lt;3 &quot;x&quot; &gt; y"));
    assert!(!html.contains("<em>Fish"));
}

#[test]
fn test_sequential_matches_parallel() {
    let data = epub(&[
        (TOC, br#"<a href="xhtml/b.xhtml">B</a><a href="a.xhtml">A</a>"#),
        ("EPUB/xhtml/b.xhtml", b"b"),
        ("EPUB/styles/main.css", b"body{}"),
        ("EPUB/xhtml/a.xhtml", b"a"),
        ("EPUB/images/x.GIF", b"gif"),
    ]);
    let parallel = Converter::offline().outline(&data).unwrap();
    let sequential = Converter::offline()
        .with_config(ConvertConfig::default().with_parallel(false))
        .outline(&data)
        .unwrap();

    assert_eq!(parallel.page_paths, vec!["xhtml/b.xhtml", "xhtml/a.xhtml"]);
    assert_eq!(parallel.page_paths, sequential.page_paths);
    assert_eq!(parallel.toc, sequential.toc);
    assert_eq!(sequential.toc[1].resolved_path, "xhtml/a.xhtml");
}

#[test]
fn test_content_index_is_replaced_by_viewer() {
    let data = epub(&[("EPUB/index.html", b"<p>old</p>"), ("EPUB/xhtml/ch1.xhtml", b"")]);
    let archive = convert(&data);

    let html = viewer(&archive.bytes);
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert_eq!(paths(&archive.bytes).iter().filter(|p| *p == "index.html").count(), 1);
    assert_eq!(archive.summary.entries, 3);
}

#[test]
fn test_session_tracks_conversion() {
    let mut session = ConversionSession::new();
    session.select("book.epub").unwrap();
    session.run(&Converter::offline(), &sample_book()).unwrap();

    assert_eq!(session.percent(), 100);
    assert!(matches!(session.state(), SessionState::Done { name, .. } if name == "book.zip"));

    session.run(&Converter::offline(), b"not a zip").unwrap_err();
    assert_eq!(session.percent(), 0);
    assert!(matches!(
        session.state(),
        SessionState::Failed {
            kind: ErrorKind::ArchiveDecode,
            ..
        }
    ));
}
