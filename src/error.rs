//! Error types for rs-readability.
//!
//! The extraction core never fails: missing paragraphs and empty candidate
//! sets fall back to division scanning or to the placeholder article. The
//! only error is raised while turning host input into a parsed document.

/// Error type for extraction operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The raw input could not be turned into a document.
    #[error("HTML input could not be parsed: {0}")]
    ParseInput(String),
}

/// Result type alias for extraction operations.
pub type Result<T> = std::result::Result<T, Error>;
