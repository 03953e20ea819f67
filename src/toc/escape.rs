/// Escape text for embedding in HTML.
///
/// Besides the five markup-significant characters this maps common
/// typographic characters and the control codes U+0010..=U+001F to numeric
/// character references, except U+0016, which becomes the literal `0`.
///
/// # Examples
///
/// ```
/// use epubzip::toc::escape_html;
///
/// assert_eq!(escape_html("Tom & \"Jerry\""), "Tom &amp; &quot;Jerry&quot;");
/// assert_eq!(escape_html("Part\u{2014}One"), "Part&#8212;One");
/// ```
pub fn escape_html(text: &str) -> String {
    let mut result = String::with_capacity(text.len() + text.len() / 8);
    for c in text.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#039;"),
            '\u{00A0}' => result.push_str("&#160;"),
            '\u{2022}' => result.push_str("&#8226;"),
            '\u{2026}' => result.push_str("&#8230;"),
            '\u{2013}' => result.push_str("&#8211;"),
            '\u{2014}' => result.push_str("&#8212;"),
            '\u{2018}' => result.push_str("&#8216;"),
            '\u{2019}' => result.push_str("&#8217;"),
            '\u{201C}' => result.push_str("&#8220;"),
            '\u{201D}' => result.push_str("&#8221;"),
            '\u{0016}' => result.push('0'),
            '\u{0010}'..='\u{001F}' => {
                result.push_str("&#");
                result.push_str(&(c as u32).to_string());
                result.push(';');
            }
            _ => result.push(c),
        }
    }
    result
}
