//! Main content extraction module.
//!
//! # Module Structure
//!
//! - `preprocess`: line break and font tag normalization, script removal
//! - `state`: candidate block list with identity-based membership
//! - `scanner`: candidate discovery over paragraphs (or divisions)
//! - `filter`: score threshold and nested candidate collapse
//! - `cleaner`: per-candidate pruning and tag stripping
//! - `pipeline`: the `Readability` session tying the passes together
//!
//! # Usage
//!
//! ```rust
//! use rs_readability::dom;
//! use rs_readability::extractor::Readability;
//!
//! let doc = dom::parse(r#"<div class="entry"><p>Body text.</p></div>"#);
//! let article = Readability::new(doc).parse();
//! assert_eq!(article.text(), "Body text.");
//! ```

pub mod cleaner;
pub mod filter;
pub mod pipeline;
pub mod preprocess;
pub mod scanner;
pub mod state;

pub use pipeline::Readability;
pub use state::ExtractionState;
