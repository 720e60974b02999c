//! DOM Operations Adapter
//!
//! The extraction passes only need a small capability set from the parsed
//! tree: selecting by tag, reading `id`/`class`, reading and replacing inner
//! markup, dropping attributes and detaching nodes. This module names those
//! operations on top of `dom_query`.
//!
//! Node identity is `NodeId`. Two nodes with the same markup are still two
//! distinct entries anywhere a `NodeId` is used as a key.

use std::collections::HashSet;

// Re-export core types for external use
pub use dom_query::{Document, NodeId, NodeRef, Selection};

pub use tendril::StrTendril;

// === Attribute Operations ===

/// Get element ID attribute
#[inline]
#[must_use]
pub fn id(sel: &Selection) -> Option<String> {
    sel.attr("id").map(|s| s.to_string())
}

/// Get element class attribute
#[inline]
#[must_use]
pub fn class_name(sel: &Selection) -> Option<String> {
    sel.attr("class").map(|s| s.to_string())
}

/// Remove an attribute from every node in the selection
#[inline]
pub fn remove_attribute(sel: &Selection, name: &str) {
    sel.remove_attr(name);
}

// === Tag/Node Information ===

/// Get tag name (lowercase)
#[must_use]
pub fn tag_name(sel: &Selection) -> Option<String> {
    sel.nodes()
        .first()
        .and_then(dom_query::NodeRef::node_name)
        .map(|t| t.to_string())
}

// === Text Content ===

/// Get all text content of node and descendants
#[inline]
#[must_use]
pub fn text_content(sel: &Selection) -> StrTendril {
    sel.text()
}

/// Get inner HTML content
#[inline]
#[must_use]
pub fn inner_html(sel: &Selection) -> StrTendril {
    sel.inner_html()
}

/// Get outer HTML content
#[inline]
#[must_use]
pub fn outer_html(sel: &Selection) -> StrTendril {
    sel.html()
}

// === Tree Navigation ===

/// Parent of a node, if that parent is an element.
///
/// A node hanging directly off the document root has no element parent.
#[must_use]
pub fn parent_element<'a>(node: &NodeRef<'a>) -> Option<NodeRef<'a>> {
    node.parent().filter(|p| p.is_element())
}

/// Number of direct element children with the given tag.
#[must_use]
pub fn count_children(node: &NodeRef, tag: &str) -> usize {
    node.children()
        .into_iter()
        .filter(|child| child.node_name().is_some_and(|name| name.eq_ignore_ascii_case(tag)))
        .count()
}

/// True if none of the direct children is an element.
#[must_use]
pub fn has_only_text_children(node: &NodeRef) -> bool {
    node.children().into_iter().all(|child| !child.is_element())
}

/// True if any descendant of `node` is one of `ids`. The node itself is not
/// considered.
#[must_use]
pub fn has_descendant_in<S: std::hash::BuildHasher>(node: &NodeRef, ids: &HashSet<NodeId, S>) -> bool {
    node.descendants()
        .into_iter()
        .any(|descendant| ids.contains(&descendant.id))
}

// === Querying ===

/// Query all descendant elements by CSS selector
#[inline]
#[must_use]
pub fn select<'a>(sel: &Selection<'a>, selector: &str) -> Selection<'a> {
    sel.select(selector)
}

// === Tree Manipulation ===

/// Detach elements from the tree
#[inline]
pub fn remove(sel: &Selection) {
    sel.remove();
}

/// Append HTML content
#[inline]
pub fn append_html(sel: &Selection, html: &str) {
    sel.append_html(html);
}

/// Replace inner HTML content
#[inline]
pub fn set_inner_html(sel: &Selection, html: &str) {
    sel.set_html(html);
}

// === Parsing ===

/// Parse HTML string into document. Never fails; malformed markup is
/// repaired by the HTML5 tree builder.
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}
