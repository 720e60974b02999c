//! Candidate cleaning.
//!
//! Each surviving candidate is scrubbed in place: inline styles go, runs of
//! line breaks collapse, boilerplate divisions and unwanted tags are pruned,
//! and finally every tag is stripped so only text remains.

use std::borrow::Cow;

use tracing::trace;

use crate::dom::{self, NodeRef, Selection};
use crate::options::Options;
use crate::patterns::{ANY_TAG, DIV_BLACKLIST, REPEATED_BREAKS, SINGLE_BREAK};
use crate::scoring::word_count;

/// Word floor no real element reaches: tags pruned with it always go.
pub const ALWAYS_REMOVE: usize = 1_000_000;

/// Attributes dropped from a candidate and all of its descendants.
const STYLE_ATTRIBUTES: [&str; 2] = ["style", "function"];

/// Tags pruned from candidates with their minimum word count, in pruning
/// order. Tables take their floor from `Options::min_table_words`.
#[must_use]
pub fn min_word_rules(opts: &Options) -> [(&'static str, usize); 6] {
    [
        ("form", ALWAYS_REMOVE),
        ("object", ALWAYS_REMOVE),
        ("table", opts.min_table_words),
        ("h1", ALWAYS_REMOVE),
        ("h2", ALWAYS_REMOVE),
        ("iframe", ALWAYS_REMOVE),
    ]
}

/// Run every cleaning step on one candidate.
pub fn clean_candidate(candidate: &NodeRef, malformed_content: bool, opts: &Options) {
    let sel = Selection::from(*candidate);

    strip_inline_styles(&sel);
    collapse_breaks(&sel);

    // Division pruning relies on paragraph structure the page lacks.
    if !malformed_content {
        remove_non_content_divs(&sel, opts);
    }

    for (tag, min_words) in min_word_rules(opts) {
        remove_by_min_words(&sel, tag, min_words);
    }

    let markup = dom::inner_html(&sel);
    if let Cow::Owned(text) = strip_tags(&markup) {
        dom::set_inner_html(&sel, &text);
    }
}

/// Drop `style` and `function` attributes from `sel` and every descendant.
pub fn strip_inline_styles(sel: &Selection) {
    let descendants = dom::select(sel, "*");
    for name in STYLE_ATTRIBUTES {
        dom::remove_attribute(sel, name);
        dom::remove_attribute(&descendants, name);
    }
}

/// Collapse runs of two or more line breaks into one.
pub fn collapse_breaks(sel: &Selection) {
    let markup = dom::inner_html(sel);
    if let Cow::Owned(collapsed) = REPEATED_BREAKS.replace_all(&markup, SINGLE_BREAK) {
        dom::set_inner_html(sel, &collapsed);
    }
}

/// Remove every start and end tag from `markup`, keeping the text between
/// them. Comments and bare `<` characters are left alone.
///
/// # Examples
///
/// ```
/// use rs_readability::extractor::cleaner::strip_tags;
///
/// let text = strip_tags(r#"<p class="lead">Hello <b>world</b></p>"#);
/// assert_eq!(text, "Hello world");
/// assert_eq!(strip_tags(&text), text);
/// ```
#[must_use]
pub fn strip_tags(markup: &str) -> Cow<'_, str> {
    ANY_TAG.replace_all(markup, "")
}

/// True if `value` contains a blacklisted class/id fragment.
fn is_blacklisted(value: &str) -> bool {
    let value = value.to_lowercase();
    DIV_BLACKLIST.iter().any(|keyword| value.contains(keyword))
}

/// Direct-child counts used to judge a division.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct ChildCounts {
    p: usize,
    img: usize,
    li: usize,
    a: usize,
    embed: usize,
}

impl ChildCounts {
    fn of(node: &NodeRef) -> Self {
        Self {
            p: dom::count_children(node, "p"),
            img: dom::count_children(node, "img"),
            li: dom::count_children(node, "li"),
            a: dom::count_children(node, "a"),
            embed: dom::count_children(node, "embed"),
        }
    }

    fn is_empty(self) -> bool {
        self == Self::default()
    }

    /// Links, list items or media outweigh prose, or there is no prose.
    fn is_link_or_media_heavy(self) -> bool {
        self.img > self.p || self.li > self.p || self.a > self.p || self.p == 0 || self.embed > 0
    }
}

/// Whether a division inside a candidate is boilerplate.
///
/// - a pure-text division with none of the counted children goes
/// - a division whose `id` or `class` hits the blacklist goes
/// - a short division dominated by links, list items or media goes
fn is_low_value_div(node: &NodeRef, opts: &Options) -> bool {
    let counts = ChildCounts::of(node);

    if counts.is_empty() && dom::has_only_text_children(node) {
        return true;
    }

    let sel = Selection::from(*node);
    let id = dom::id(&sel).unwrap_or_default();
    let class_name = dom::class_name(&sel).unwrap_or_default();
    if is_blacklisted(&id) || is_blacklisted(&class_name) {
        return true;
    }

    word_count(&dom::text_content(&sel)) < opts.min_div_words && counts.is_link_or_media_heavy()
}

/// Remove boilerplate divisions below `sel`.
///
/// Divisions are visited deepest-last-first, so nested divisions are judged
/// before the division that contains them.
pub fn remove_non_content_divs(sel: &Selection, opts: &Options) {
    let divs: Vec<NodeRef> = dom::select(sel, "div").nodes().to_vec();

    for node in divs.into_iter().rev() {
        if is_low_value_div(&node, opts) {
            trace!(id = ?dom::id(&Selection::from(node)), "removing low-value division");
            dom::remove(&Selection::from(node));
        }
    }
}

/// Remove `tag` elements below `sel` with fewer than `min_words` words.
pub fn remove_by_min_words(sel: &Selection, tag: &str, min_words: usize) {
    let targets: Vec<NodeRef> = dom::select(sel, tag).nodes().to_vec();

    for node in targets.into_iter().rev() {
        let target = Selection::from(node);
        if word_count(&dom::text_content(&target)) < min_words {
            trace!(tag, min_words, "removing short element");
            dom::remove(&target);
        }
    }
}
