//! Compiled regex patterns and keyword lists for article extraction.
//!
//! All patterns are compiled once at first use using `LazyLock`.
//! The keyword lists are matched as case-insensitive substrings of the
//! `class` and `id` attribute values.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

// =============================================================================
// Scoring Keywords
// =============================================================================

/// Class/id fragments that suggest article content. +1 per match.
pub const GOOD_KEYWORDS: &[&str] = &[
    "article", "body", "content", "entry", "hentry", "post", "story", "text",
];

/// Class/id fragments that only count once the block already looks like content.
pub const SEMI_GOOD_KEYWORDS: &[&str] = &["area", "container", "inner", "main"];

/// Class/id fragments that suggest boilerplate. -15 per match.
pub const BAD_KEYWORDS: &[&str] = &[
    "ad",
    "captcha",
    "classified",
    "comment",
    "footer",
    "footnote",
    "leftcolumn",
    "listing",
    "menu",
    "meta",
    "module",
    "nav",
    "navbar",
    "rightcolumn",
    "sidebar",
    "sponsor",
    "tab",
    "toolbar",
    "tools",
    "trackback",
    "widget",
];

// =============================================================================
// Cleaning Keywords
// =============================================================================

/// Class/id fragments that mark a division inside a candidate as boilerplate.
///
/// Close to `BAD_KEYWORDS` but not the same list: `clear`, `tag` and
/// `tweetback` only apply here.
pub const DIV_BLACKLIST: &[&str] = &[
    "ad",
    "captcha",
    "classified",
    "clear",
    "comment",
    "footer",
    "footnote",
    "leftcolumn",
    "listing",
    "menu",
    "meta",
    "module",
    "nav",
    "navbar",
    "rightcolumn",
    "sidebar",
    "sponsor",
    "tab",
    "tag",
    "toolbar",
    "tools",
    "trackback",
    "tweetback",
    "widget",
];

// =============================================================================
// Markup Rewriting Patterns
// =============================================================================

/// Matches a line break element and any whitespace after it.
pub static LINE_BREAK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)<br\b[^>]*>\s*").expect("LINE_BREAK regex")
});

/// Matches opening and closing `<font>` tags.
pub static FONT_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)</?font\b[^>]*>").expect("FONT_TAG regex")
});

/// Matches runs of two or more line breaks, whitespace allowed in between.
pub static REPEATED_BREAKS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)<br\b[^>]*>(?:\s*<br\b[^>]*>)+").expect("REPEATED_BREAKS regex")
});

/// Matches any start or end tag. Quoted attribute values may contain `>`,
/// which the serializer leaves unescaped.
pub static ANY_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<[a-zA-Z/](?:[^>"']|"[^"]*"|'[^']*')*>"#).expect("ANY_TAG regex")
});

// =============================================================================
// Text Cleaning Patterns
// =============================================================================

/// Matches whitespace runs for normalization.
pub static WHITESPACE_NORMALIZE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\s+").expect("WHITESPACE_NORMALIZE regex")
});

// =============================================================================
// Markup Constants
// =============================================================================

/// Paragraph break element substituted for every line break.
pub const PARAGRAPH_BREAK: &str = "<p />";

/// Replacement for a collapsed run of line breaks.
pub const SINGLE_BREAK: &str = "<br />";
