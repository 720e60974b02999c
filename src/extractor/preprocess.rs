//! Markup normalization before scoring.
//!
//! Pages that fake paragraphs with `<br>` runs and wrap text in `<font>` are
//! rewritten at the markup level, then reparsed, so the scanner sees real
//! paragraph elements.

use std::borrow::Cow;

use tracing::trace;

use crate::dom::{self, Document};
use crate::patterns::{FONT_TAG, LINE_BREAK, PARAGRAPH_BREAK};

/// Elements detached from the document before cleaning.
const NON_CONTENT_SELECTOR: &str = "script, link, style";

/// Rewrite raw markup: every line break becomes a paragraph break and
/// `<font>` tags are dropped with their text kept.
///
/// Returns `None` when nothing matched.
#[must_use]
pub fn rewrite_markup(markup: &str) -> Option<String> {
    let with_paragraphs = LINE_BREAK.replace_all(markup, PARAGRAPH_BREAK);
    let without_fonts = FONT_TAG.replace_all(&with_paragraphs, "");

    match (&with_paragraphs, without_fonts) {
        (Cow::Borrowed(_), Cow::Borrowed(_)) => None,
        (_, rewritten) => Some(rewritten.into_owned()),
    }
}

/// Normalize line breaks and font tags across the whole document.
///
/// The document is reparsed only when the markup actually changed.
pub fn normalize_markup(doc: &mut Document) {
    let markup = doc.html();
    if let Some(rewritten) = rewrite_markup(&markup) {
        trace!(before = markup.len(), after = rewritten.len(), "rewrote line breaks and font tags");
        *doc = dom::parse(&rewritten);
    }
}

/// Detach every `script`, `link` and `style` element.
///
/// Their text would otherwise survive tag stripping.
pub fn remove_scripts(doc: &Document) {
    let targets = doc.select(NON_CONTENT_SELECTOR);
    if targets.exists() {
        trace!(count = targets.length(), "removing script, link and style elements");
        dom::remove(&targets);
    }
}
