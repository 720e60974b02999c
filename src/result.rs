//! Result type for extraction output.
//!
//! An `Article` owns a small document holding one container `div`. The
//! container either wraps the cleaned candidate blocks or carries the
//! placeholder text when nothing could be extracted.

use std::fmt;

use crate::dom::{self, Document, NodeRef, Selection};
use crate::options::Options;

/// Markup of the empty result container.
const CONTAINER_HTML: &str = "<div></div>";

/// Selects the result container inside the article document.
const CONTAINER_SELECTOR: &str = "body > div";

/// Extracted article content.
pub struct Article {
    document: Document,
    parsed: bool,
    candidate_count: usize,
}

impl Article {
    /// Build the result container from the cleaned candidates, in order.
    ///
    /// With no candidates the container holds `opts.placeholder` instead.
    pub(crate) fn assemble(candidates: &[NodeRef], opts: &Options) -> Self {
        let document = dom::parse(CONTAINER_HTML);
        {
            let container = document.select(CONTAINER_SELECTOR);
            if candidates.is_empty() {
                dom::set_inner_html(&container, &opts.placeholder);
            } else {
                for candidate in candidates {
                    dom::append_html(&container, &dom::outer_html(&Selection::from(*candidate)));
                }
            }
        }

        Self {
            document,
            parsed: !candidates.is_empty(),
            candidate_count: candidates.len(),
        }
    }

    /// The container element.
    #[must_use]
    pub fn container(&self) -> Selection<'_> {
        self.document.select(CONTAINER_SELECTOR)
    }

    /// Outer markup of the container.
    #[must_use]
    pub fn html(&self) -> String {
        dom::outer_html(&self.container()).to_string()
    }

    /// Inner markup of the container.
    #[must_use]
    pub fn inner_html(&self) -> String {
        dom::inner_html(&self.container()).to_string()
    }

    /// Text of the container, trimmed.
    #[must_use]
    pub fn text(&self) -> String {
        dom::text_content(&self.container()).trim().to_string()
    }

    /// False when the container holds the placeholder text.
    #[must_use]
    pub fn is_parsed(&self) -> bool {
        self.parsed
    }

    /// Number of candidate blocks in the container.
    #[must_use]
    pub fn candidate_count(&self) -> usize {
        self.candidate_count
    }
}

impl fmt::Debug for Article {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Article")
            .field("parsed", &self.parsed)
            .field("candidate_count", &self.candidate_count)
            .field("html", &self.html())
            .finish()
    }
}
