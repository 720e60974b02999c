//! Extraction pipeline orchestration.
//!
//! `Readability` is one extraction session over one document:
//!
//! 1. normalize line breaks and font tags
//! 2. scan paragraphs (or divisions) and score their parents
//! 3. detach scripts and stylesheets
//! 4. filter candidates by score, then collapse nested candidates
//! 5. clean each surviving candidate down to text
//! 6. assemble the survivors into one container

use tracing::debug;

use crate::dom::{self, Document};
use crate::encoding;
use crate::error::{Error, Result};
use crate::options::Options;
use crate::result::Article;
use crate::scoring::ScoreBoard;

use super::{cleaner, filter, preprocess, scanner};

/// An extraction session.
///
/// The session owns its document for as long as it lives. Scores and the
/// highest score are reset at the start of every [`Readability::parse`]
/// call, so nothing carries over between calls.
///
/// # Example
///
/// ```rust
/// use rs_readability::Readability;
///
/// let html = r#"<div id="content"><p>Main text of the page.</p></div>"#;
/// let article = Readability::from_html(html)?.parse();
/// assert!(article.text().contains("Main text"));
/// # Ok::<(), rs_readability::Error>(())
/// ```
pub struct Readability {
    doc: Document,
    options: Options,
    board: ScoreBoard,
}

impl Readability {
    /// Session over an already parsed document.
    #[must_use]
    pub fn new(doc: Document) -> Self {
        Self::with_options(doc, Options::default())
    }

    /// Session over an already parsed document with custom options.
    #[must_use]
    pub fn with_options(doc: Document, options: Options) -> Self {
        Self {
            doc,
            options,
            board: ScoreBoard::new(),
        }
    }

    /// Parse raw markup and open a session over it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ParseInput`] if `html` is empty or only whitespace.
    pub fn from_html(html: &str) -> Result<Self> {
        if html.trim().is_empty() {
            return Err(Error::ParseInput("document is empty".to_string()));
        }
        Ok(Self::new(dom::parse(html)))
    }

    /// Decode raw bytes, parse them and open a session.
    ///
    /// The encoding is taken from a byte order mark or the charset declared
    /// in the document head, defaulting to UTF-8.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ParseInput`] if the decoded document is empty.
    pub fn from_bytes(html: &[u8]) -> Result<Self> {
        Self::from_html(&encoding::decode_html(html))
    }

    /// Replace the options used by later `parse` calls.
    pub fn set_options(&mut self, options: Options) {
        self.options = options;
    }

    /// Options of this session.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// The session's document, as modified by the last `parse`.
    #[must_use]
    pub fn document(&self) -> &Document {
        &self.doc
    }

    /// Highest content score seen by the last `parse`, or `-1`.
    #[must_use]
    pub fn highest_score(&self) -> i32 {
        self.board.highest_score()
    }

    /// Extract the main article content.
    ///
    /// Never fails: when no candidate survives, the returned article holds
    /// the placeholder text and reports `is_parsed() == false`.
    pub fn parse(&mut self) -> Article {
        self.board.reset();
        preprocess::normalize_markup(&mut self.doc);

        let Self {
            doc,
            options,
            board,
        } = self;
        let doc: &Document = doc;

        let mut state = scanner::scan_candidates(doc, board, options);

        if options.remove_scripts {
            preprocess::remove_scripts(doc);
        }

        filter::apply_score_threshold(&mut state, board, options);
        filter::collapse_nested(&mut state);

        for candidate in state.candidates() {
            cleaner::clean_candidate(candidate, state.is_malformed(), options);
        }

        let article = Article::assemble(state.candidates(), options);
        if !article.is_parsed() {
            debug!("no candidate survived, returning placeholder");
        }
        article
    }
}
