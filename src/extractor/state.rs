//! Extraction state tracking.
//!
//! `ExtractionState` holds the candidate blocks found by the scanner: an
//! ordered, duplicate-free list of nodes with an identity set alongside it
//! for O(1) membership checks.

use std::collections::HashSet;

use dom_query::{NodeId, NodeRef};

/// Candidate blocks for one extraction pass.
///
/// # Purpose
///
/// - **Candidates**: parents of scanned blocks whose score went positive, in
///   the order they first qualified
/// - **Members**: `NodeId`s of the candidates, so membership is by node
///   identity and never by content
/// - **Malformed content**: set when the page had no paragraphs and divisions
///   were scanned instead
pub struct ExtractionState<'a> {
    candidates: Vec<NodeRef<'a>>,
    members: HashSet<NodeId>,
    malformed_content: bool,
}

impl<'a> ExtractionState<'a> {
    /// Create an empty candidate list.
    #[must_use]
    pub fn new(malformed_content: bool) -> Self {
        Self {
            candidates: Vec::new(),
            members: HashSet::new(),
            malformed_content,
        }
    }

    /// Append `node` unless it is already a candidate. Returns true if added.
    pub fn add_candidate(&mut self, node: NodeRef<'a>) -> bool {
        if !self.members.insert(node.id) {
            return false;
        }
        self.candidates.push(node);
        true
    }

    /// Check if a node is a candidate
    #[must_use]
    pub fn is_candidate(&self, node_id: NodeId) -> bool {
        self.members.contains(&node_id)
    }

    /// Remove the candidate at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn remove(&mut self, index: usize) -> NodeRef<'a> {
        let node = self.candidates.remove(index);
        self.members.remove(&node.id);
        node
    }

    /// Candidates in insertion order.
    #[must_use]
    pub fn candidates(&self) -> &[NodeRef<'a>] {
        &self.candidates
    }

    /// Identity set of the current candidates.
    #[must_use]
    pub fn member_ids(&self) -> &HashSet<NodeId> {
        &self.members
    }

    /// Whether divisions were scanned because the page had no paragraphs.
    #[must_use]
    pub fn is_malformed(&self) -> bool {
        self.malformed_content
    }

    /// Number of candidates
    #[must_use]
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    /// True if there are no candidates
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }
}
