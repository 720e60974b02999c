//! Character encoding detection for raw HTML bytes.
//!
//! Pages handed over as bytes are decoded to UTF-8 before parsing. The
//! encoding comes from a byte order mark, then from the charset declared in
//! the document head, and falls back to UTF-8.

use std::sync::LazyLock;

use encoding_rs::{Encoding, UTF_8};
use regex::Regex;

/// Only the head of the document is scanned for a charset declaration.
const SNIFF_LIMIT: usize = 1024;

/// `<meta charset="...">` and `<meta http-equiv="Content-Type" content="...; charset=...">`
#[allow(clippy::expect_used)]
static META_CHARSET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?([^"'\s;/>]+)"#).expect("valid regex")
});

/// Find the charset label declared in the first bytes of a page.
fn declared_charset(head: &str) -> Option<&str> {
    META_CHARSET_RE
        .captures(head)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
}

/// Detect the character encoding of an HTML document.
#[must_use]
pub fn detect_encoding(html: &[u8]) -> &'static Encoding {
    if let Some((encoding, _)) = Encoding::for_bom(html) {
        return encoding;
    }

    let head = String::from_utf8_lossy(&html[..html.len().min(SNIFF_LIMIT)]);
    declared_charset(&head)
        .and_then(|label| Encoding::for_label(label.as_bytes()))
        .unwrap_or(UTF_8)
}

/// Decode HTML bytes to a UTF-8 string.
///
/// Invalid sequences are replaced with U+FFFD rather than rejected.
///
/// # Examples
///
/// ```
/// use rs_readability::encoding::decode_html;
///
/// let html = b"<html><body><p>Caf\xE9</p></body></html>";
/// // No declaration: treated as UTF-8, the stray byte becomes U+FFFD.
/// assert!(decode_html(html).contains("Caf\u{FFFD}"));
/// ```
#[must_use]
pub fn decode_html(html: &[u8]) -> String {
    let encoding = detect_encoding(html);
    let (decoded, used, had_errors) = encoding.decode(html);
    if had_errors {
        tracing::debug!(encoding = used.name(), "replaced malformed byte sequences");
    }
    decoded.into_owned()
}
