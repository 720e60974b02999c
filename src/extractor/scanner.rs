//! Candidate block discovery.
//!
//! Walks every paragraph in document order and scores its parent element.
//! Parents whose score turns positive become candidate blocks. Pages with no
//! paragraphs at all are scanned by division instead.

use tracing::debug;

use crate::dom::{self, Document};
use crate::options::Options;
use crate::scoring::ScoreBoard;

use super::state::ExtractionState;

/// Scan `doc` and build the candidate list, recording scores in `board`.
///
/// A parent visited once per child paragraph accumulates its score across
/// visits. Blocks without an element parent are skipped.
pub fn scan_candidates<'a>(
    doc: &'a Document,
    board: &mut ScoreBoard,
    opts: &Options,
) -> ExtractionState<'a> {
    let mut blocks = doc.select("p");
    let malformed_content = blocks.is_empty();
    if malformed_content {
        blocks = doc.select("div");
    }
    debug!(
        blocks = blocks.length(),
        malformed_content, "scanning candidate blocks"
    );

    let mut state = ExtractionState::new(malformed_content);

    for node in blocks.nodes() {
        let Some(parent) = dom::parent_element(node) else {
            continue;
        };

        let current = board.annotate(parent.id);
        let updated = board.content_score(current, &parent, node, opts);
        board.set_score(parent.id, updated);

        if updated > 0 {
            state.add_candidate(parent);
        }
    }

    debug!(
        candidates = state.len(),
        highest_score = board.highest_score(),
        "scan complete"
    );
    state
}
