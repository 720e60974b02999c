//! Candidate filtering.
//!
//! Two passes over the candidate list, each walking it back to front so a
//! removal never shifts an index that is still to be visited:
//!
//! 1. drop candidates scoring below the threshold derived from the highest
//!    score of the pass
//! 2. drop candidates that contain another candidate, keeping the more
//!    specific descendant

use tracing::{debug, trace};

use crate::dom;
use crate::options::Options;
use crate::scoring::ScoreBoard;

use super::state::ExtractionState;

/// Whether a candidate scoring `score` is dropped when the best score of the
/// pass is `highest`.
///
/// Once any block reaches `strong_score` every weaker block goes. Until then
/// only blocks matching the best score are kept, so a page without a strong
/// block still yields something.
#[must_use]
pub fn below_threshold(score: i32, highest: i32, strong_score: i32) -> bool {
    if highest < strong_score {
        score < highest
    } else {
        score < strong_score
    }
}

/// Threshold pass.
pub fn apply_score_threshold(state: &mut ExtractionState, board: &ScoreBoard, opts: &Options) {
    let highest = board.highest_score();

    for index in (0..state.len()).rev() {
        let id = state.candidates()[index].id;
        let score = board.score(id).unwrap_or_default();
        if below_threshold(score, highest, opts.strong_score) {
            trace!(score, highest, "dropping weak candidate");
            state.remove(index);
        }
    }

    debug!(remaining = state.len(), highest, "score threshold applied");
}

/// Ancestor/descendant collapse. Only runs with more than one candidate.
pub fn collapse_nested(state: &mut ExtractionState) {
    if state.len() <= 1 {
        return;
    }

    for index in (0..state.len()).rev() {
        let node = state.candidates()[index];
        if dom::has_descendant_in(&node, state.member_ids()) {
            trace!("dropping candidate that contains another candidate");
            state.remove(index);
        }
    }

    debug!(remaining = state.len(), "nested candidates collapsed");
}
