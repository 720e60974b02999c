//! Content scoring for candidate blocks.
//!
//! Every element that parents a scanned paragraph gets an integer score,
//! built from keyword matches on its `class` and `id` and from the length of
//! the paragraphs under it. Scores live in a side-table keyed by `NodeId`
//! rather than on the nodes themselves, and the board remembers the highest
//! score seen during one extraction pass.

use std::collections::HashMap;

use crate::dom::{self, NodeId, NodeRef, Selection};
use crate::options::Options;
use crate::patterns::{BAD_KEYWORDS, GOOD_KEYWORDS, SEMI_GOOD_KEYWORDS, WHITESPACE_NORMALIZE};

/// Penalty applied for each boilerplate keyword hit.
pub const BAD_KEYWORD_PENALTY: i32 = 15;

/// Count whitespace-delimited words in `text`.
///
/// Whitespace runs are collapsed to a single space and the result is trimmed
/// before splitting on spaces. Splitting an empty string still yields one
/// (empty) token, so empty text counts as one word.
///
/// # Examples
///
/// ```
/// use rs_readability::scoring::word_count;
///
/// assert_eq!(word_count("a   b"), word_count("a b"));
/// assert_eq!(word_count("  one two three  "), 3);
/// assert_eq!(word_count(""), 1);
/// ```
#[must_use]
pub fn word_count(text: &str) -> usize {
    let normalized = WHITESPACE_NORMALIZE.replace_all(text, " ");
    normalized.trim().split(' ').count()
}

/// Number of `keywords` found as substrings of `value`.
///
/// `value` is expected to be lowercased already.
#[must_use]
pub fn keyword_hits(value: &str, keywords: &[&str]) -> i32 {
    let mut hits = 0;
    for keyword in keywords {
        if value.contains(keyword) {
            hits += 1;
        }
    }
    hits
}

/// Per-pass score side-table and high-water mark.
#[derive(Debug, Clone)]
pub struct ScoreBoard {
    scores: HashMap<NodeId, i32>,
    highest_score: i32,
}

impl ScoreBoard {
    /// Empty board. The highest score starts below any reachable score.
    #[must_use]
    pub fn new() -> Self {
        Self {
            scores: HashMap::new(),
            highest_score: -1,
        }
    }

    /// Forget every score and reset the high-water mark.
    pub fn reset(&mut self) {
        self.scores.clear();
        self.highest_score = -1;
    }

    /// Attach a zero score to `id` unless it already has one, and return
    /// the stored score.
    pub fn annotate(&mut self, id: NodeId) -> i32 {
        *self.scores.entry(id).or_insert(0)
    }

    /// Stored score for `id`, if the node was ever annotated.
    #[must_use]
    pub fn score(&self, id: NodeId) -> Option<i32> {
        self.scores.get(&id).copied()
    }

    /// Replace the stored score for `id`.
    pub fn set_score(&mut self, id: NodeId, score: i32) {
        self.scores.insert(id, score);
    }

    /// Highest score computed so far, or `-1` before any scoring.
    #[must_use]
    pub fn highest_score(&self) -> i32 {
        self.highest_score
    }

    /// Number of annotated nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    /// True if no node has been annotated.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Compute the updated score of `parent` after visiting `element`.
    ///
    /// Starting from `score`:
    /// - +1 for each good keyword in the class, and again for each in the id
    /// - if the score is now at least 1, the same for the semi-good keywords
    /// - -15 for each bad keyword in the class, and again for each in the id
    /// - +1 if `element` is a paragraph longer than `min_paragraph_words`
    ///
    /// Raises the high-water mark when the result exceeds it.
    pub fn content_score(
        &mut self,
        score: i32,
        parent: &NodeRef,
        element: &NodeRef,
        opts: &Options,
    ) -> i32 {
        let parent_sel = Selection::from(*parent);
        let class_name = dom::class_name(&parent_sel).unwrap_or_default().to_lowercase();
        let id = dom::id(&parent_sel).unwrap_or_default().to_lowercase();

        let mut score = score;
        score += keyword_hits(&class_name, GOOD_KEYWORDS) + keyword_hits(&id, GOOD_KEYWORDS);

        if score >= 1 {
            score += keyword_hits(&class_name, SEMI_GOOD_KEYWORDS)
                + keyword_hits(&id, SEMI_GOOD_KEYWORDS);
        }

        let bad = keyword_hits(&class_name, BAD_KEYWORDS) + keyword_hits(&id, BAD_KEYWORDS);
        score -= bad * BAD_KEYWORD_PENALTY;

        let element_sel = Selection::from(*element);
        if dom::tag_name(&element_sel).as_deref() == Some("p")
            && word_count(&dom::text_content(&element_sel)) > opts.min_paragraph_words
        {
            score += 1;
        }

        if score > self.highest_score {
            self.highest_score = score;
        }

        score
    }
}

impl Default for ScoreBoard {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(n: usize) -> String {
        (0..n).map(|i| format!("word{i}")).collect::<Vec<_>>().join(" ")
    }

    fn score_first_paragraph(html: &str) -> (i32, ScoreBoard) {
        let doc = dom::parse(html);
        let p = doc.select("p").nodes()[0];
        let parent = dom::parent_element(&p).expect("paragraph has a parent");
        let mut board = ScoreBoard::new();
        let current = board.annotate(parent.id);
        let score = board.content_score(current, &parent, &p, &Options::default());
        (score, board)
    }

    #[test]
    fn word_count_collapses_whitespace() {
        assert_eq!(word_count("a   b"), 2);
        assert_eq!(word_count("a b"), 2);
        assert_eq!(word_count("\n\t a \n b \t"), 2);
        // Single newlines and tabs separate words as well.
        assert_eq!(word_count("a\nb"), 2);
        assert_eq!(word_count("a\tb"), 2);
    }

    #[test]
    fn word_count_of_empty_text_is_one() {
        assert_eq!(word_count(""), 1);
        assert_eq!(word_count("   \n  "), 1);
    }

    #[test]
    fn keyword_hits_counts_each_keyword_once() {
        assert_eq!(keyword_hits("article-content", GOOD_KEYWORDS), 2);
        assert_eq!(keyword_hits("content content", GOOD_KEYWORDS), 1);
        assert_eq!(keyword_hits("", GOOD_KEYWORDS), 0);
        // "navbar" contains "nav" as well
        assert_eq!(keyword_hits("navbar", BAD_KEYWORDS), 2);
    }

    #[test]
    fn good_keywords_in_class_and_id_count_independently() {
        let (score, _) = score_first_paragraph(r#"<div class="post" id="story"><p>short</p></div>"#);
        assert_eq!(score, 2);
    }

    #[test]
    fn keyword_matching_is_case_insensitive() {
        let (score, _) = score_first_paragraph(r#"<div class="ARTICLE"><p>short</p></div>"#);
        assert_eq!(score, 1);
    }

    #[test]
    fn semi_good_keywords_need_a_positive_score() {
        let (gated, _) = score_first_paragraph(r#"<div class="main"><p>short</p></div>"#);
        assert_eq!(gated, 0);

        let (open, _) = score_first_paragraph(r#"<div class="main-content"><p>short</p></div>"#);
        // content +1, then main +1
        assert_eq!(open, 2);
    }

    #[test]
    fn semi_good_gate_sees_score_from_earlier_visits() {
        let html = format!(r#"<div class="main"><p>{}</p><p>short</p></div>"#, words(21));
        let doc = dom::parse(&html);
        let paragraphs: Vec<_> = doc.select("p").nodes().to_vec();
        let parent = dom::parent_element(&paragraphs[0]).expect("parent");
        let mut board = ScoreBoard::new();

        // gated, then +1 for length
        let current = board.annotate(parent.id);
        let first = board.content_score(current, &parent, &paragraphs[0], &Options::default());
        assert_eq!(first, 1);
        board.set_score(parent.id, first);

        // main now counts
        let second = board.content_score(first, &parent, &paragraphs[1], &Options::default());
        assert_eq!(second, 2);
        assert_eq!(board.highest_score(), 2);
    }

    #[test]
    fn bad_keywords_cost_fifteen_each() {
        let (score, board) = score_first_paragraph(r#"<div class="sidebar"><p>short</p></div>"#);
        assert_eq!(score, -15);
        assert_eq!(board.highest_score(), -1);
    }

    #[test]
    fn long_paragraph_adds_one() {
        let html = format!("<div><p>{}</p></div>", words(21));
        let (score, board) = score_first_paragraph(&html);
        assert_eq!(score, 1);
        assert_eq!(board.highest_score(), 1);

        let html = format!("<div><p>{}</p></div>", words(20));
        let (score, _) = score_first_paragraph(&html);
        assert_eq!(score, 0);
    }

    #[test]
    fn scores_accumulate_from_current_value() {
        let doc = dom::parse(r#"<div class="entry"><p>one</p><p>two</p></div>"#);
        let paragraphs: Vec<_> = doc.select("p").nodes().to_vec();
        let parent = dom::parent_element(&paragraphs[0]).expect("parent");
        let mut board = ScoreBoard::new();

        for p in &paragraphs {
            let current = board.annotate(parent.id);
            let updated = board.content_score(current, &parent, p, &Options::default());
            board.set_score(parent.id, updated);
        }

        assert_eq!(board.score(parent.id), Some(2));
        assert_eq!(board.highest_score(), 2);
    }

    #[test]
    fn reset_clears_scores_and_high_water_mark() {
        let (_, mut board) = score_first_paragraph(r#"<div class="text"><p>x</p></div>"#);
        assert_eq!(board.highest_score(), 1);

        board.reset();
        assert!(board.is_empty());
        assert_eq!(board.highest_score(), -1);
    }
}
