//! # rs-readability
//!
//! Main article extraction from arbitrary, often malformed, HTML.
//!
//! The extractor scores the parents of paragraph blocks by the keywords in
//! their `class` and `id` and by paragraph length, keeps the best scoring
//! blocks, strips boilerplate out of them and returns their text inside a
//! single container element.
//!
//! ## Quick Start
//!
//! ```rust
//! use rs_readability::extract;
//!
//! let html = r#"<html><body>
//! <div class="sidebar"><p>Related links</p></div>
//! <div id="content"><p>Main content here.</p></div>
//! </body></html>"#;
//!
//! let article = extract(html)?;
//! assert!(article.is_parsed());
//! assert_eq!(article.text(), "Main content here.");
//! # Ok::<(), rs_readability::Error>(())
//! ```
//!
//! ## Pipeline
//!
//! - **Preprocessing**: `<br>` runs become paragraphs, `<font>` tags are dropped
//! - **Scanning**: every paragraph scores its parent element
//! - **Filtering**: weak candidates and candidates containing other candidates go
//! - **Cleaning**: styles, boilerplate divisions, forms, headings, small tables
//!   and finally all tags are removed
//! - **Assembly**: survivors are appended to one container, or a placeholder
//!   is returned when nothing survives

mod error;
mod options;
mod patterns;
mod result;

/// DOM operations adapter over `dom_query`.
pub mod dom;

/// Candidate scanning, filtering, cleaning and the extraction session.
pub mod extractor;

/// Content scores and word counting.
pub mod scoring;

/// Character encoding detection and transcoding.
pub mod encoding;

// Public API - re-exports
pub use error::{Error, Result};
pub use extractor::Readability;
pub use options::{Options, DEFAULT_PLACEHOLDER};
pub use result::Article;

/// Extracts the main article from an HTML document using default options.
///
/// # Errors
///
/// Returns [`Error::ParseInput`] if `html` is empty or only whitespace.
/// Extraction itself never fails; see [`Article::is_parsed`].
///
/// # Example
///
/// ```rust
/// use rs_readability::{extract, DEFAULT_PLACEHOLDER};
///
/// let article = extract("<span>no paragraphs</span>")?;
/// assert!(!article.is_parsed());
/// assert_eq!(article.text(), DEFAULT_PLACEHOLDER);
/// # Ok::<(), rs_readability::Error>(())
/// ```
pub fn extract(html: &str) -> Result<Article> {
    extract_with_options(html, &Options::default())
}

/// Extracts the main article from an HTML document with custom options.
///
/// # Errors
///
/// Returns [`Error::ParseInput`] if `html` is empty or only whitespace.
///
/// # Example
///
/// ```rust
/// use rs_readability::{extract_with_options, Options};
///
/// let html = r#"<div class="post"><p>Text</p><script>track()</script></div>"#;
/// let options = Options {
///     remove_scripts: true,
///     ..Options::default()
/// };
/// let article = extract_with_options(html, &options)?;
/// assert_eq!(article.text(), "Text");
/// # Ok::<(), rs_readability::Error>(())
/// ```
pub fn extract_with_options(html: &str, options: &Options) -> Result<Article> {
    let mut session = Readability::from_html(html)?;
    session.set_options(options.clone());
    Ok(session.parse())
}

/// Extracts the main article from HTML bytes with automatic encoding detection.
///
/// # Errors
///
/// Returns [`Error::ParseInput`] if the decoded document is empty.
///
/// # Example
///
/// ```rust
/// use rs_readability::extract_bytes;
///
/// let html = b"<html><head><meta charset=\"ISO-8859-1\"></head><body><div class=\"entry\"><p>Caf\xE9</p></div></body></html>";
/// let article = extract_bytes(html)?;
/// assert_eq!(article.text(), "Café");
/// # Ok::<(), rs_readability::Error>(())
/// ```
pub fn extract_bytes(html: &[u8]) -> Result<Article> {
    extract_bytes_with_options(html, &Options::default())
}

/// Extracts the main article from HTML bytes with custom options and
/// automatic encoding detection.
///
/// # Errors
///
/// Returns [`Error::ParseInput`] if the decoded document is empty.
pub fn extract_bytes_with_options(html: &[u8], options: &Options) -> Result<Article> {
    let mut session = Readability::from_bytes(html)?;
    session.set_options(options.clone());
    Ok(session.parse())
}
