//! Tolerant anchor-tag scanning.
//!
//! The table-of-contents document is loosely structured and often not
//! well-formed XML, so instead of building a tree the scanner looks for the
//! shape `<a …href="H"…>INNER</a>` directly. Matching is ASCII
//! case-insensitive and follows these rules:
//!
//! - at least one character that is not `>` separates `<a` from `href="`;
//! - when a tag has several `href="` attributes, the last one wins;
//! - the href value runs to the next `"`, then the tag closes at the next `>`;
//! - the inner content is everything up to the first `</a>`.
//!
//! If no `</a>` follows, the candidate is abandoned and scanning resumes one
//! byte after its `<`.

use memchr::memchr;
use memchr::memchr_iter;

/// An anchor found by [`AnchorScanner`], borrowing from the scanned text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawAnchor<'a> {
    pub href: &'a str,
    pub inner: &'a str,
}

/// Pull-based iterator over the anchors of a document, in document order.
pub struct AnchorScanner<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> AnchorScanner<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text, pos: 0 }
    }

    /// Try to match an anchor whose `<` sits at `start`.
    ///
    /// Returns the anchor and the offset just past its closing `</a>`.
    fn match_at(&self, start: usize) -> Option<(RawAnchor<'a>, usize)> {
        let bytes = self.text.as_bytes();
        let attrs = start + 2;
        let tag_limit = memchr(b'>', &bytes[attrs..])
            .map(|i| attrs + i)
            .unwrap_or(bytes.len());

        const HREF: &[u8] = b"href=\"";
        if tag_limit < attrs + 1 + HREF.len() {
            return None;
        }

        // Latest `href="` first, mirroring a greedy attribute run.
        for k in (attrs + 1..=tag_limit - HREF.len()).rev() {
            if !bytes[k..k + HREF.len()].eq_ignore_ascii_case(HREF) {
                continue;
            }

            let value_start = k + HREF.len();
            let Some(value_end) = memchr(b'"', &bytes[value_start..]).map(|i| value_start + i)
            else {
                continue;
            };
            let Some(tag_end) = memchr(b'>', &bytes[value_end + 1..]).map(|i| value_end + 1 + i)
            else {
                continue;
            };
            let inner_start = tag_end + 1;
            let Some(close) = find_closing_anchor(bytes, inner_start) else {
                continue;
            };

            let anchor = RawAnchor {
                href: &self.text[value_start..value_end],
                inner: &self.text[inner_start..close],
            };
            return Some((anchor, close + CLOSE.len()));
        }

        None
    }
}

impl<'a> Iterator for AnchorScanner<'a> {
    type Item = RawAnchor<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let bytes = self.text.as_bytes();
        while self.pos < bytes.len() {
            let Some(lt) = memchr(b'<', &bytes[self.pos..]).map(|i| self.pos + i) else {
                self.pos = bytes.len();
                break;
            };

            let opens_anchor = bytes
                .get(lt + 1)
                .is_some_and(|b| b.eq_ignore_ascii_case(&b'a'));
            if opens_anchor && let Some((anchor, end)) = self.match_at(lt) {
                self.pos = end;
                return Some(anchor);
            }
            self.pos = lt + 1;
        }
        None
    }
}

const CLOSE: &[u8] = b"</a>";

fn find_closing_anchor(bytes: &[u8], from: usize) -> Option<usize> {
    memchr_iter(b'<', &bytes[from..])
        .map(|i| from + i)
        .find(|&i| {
            bytes
                .get(i..i + CLOSE.len())
                .is_some_and(|w| w.eq_ignore_ascii_case(CLOSE))
        })
}

/// Remove every `<…>` run that has at least one character between the
/// brackets. A lone `<` or an empty `<>` is kept as text.
pub fn strip_tags(text: &str) -> String {
    let bytes = text.as_bytes();
    let mut result = String::with_capacity(text.len());
    let mut copied = 0;
    let mut pos = 0;

    while let Some(lt) = memchr(b'<', &bytes[pos..]).map(|i| pos + i) {
        let Some(gt) = memchr(b'>', &bytes[lt + 1..]).map(|i| lt + 1 + i) else {
            break;
        };
        if gt == lt + 1 {
            pos = lt + 1;
            continue;
        }
        result.push_str(&text[copied..lt]);
        copied = gt + 1;
        pos = gt + 1;
    }

    result.push_str(&text[copied..]);
    result
}
