//! Configuration options for article extraction.
//!
//! The `Options` struct exposes the numeric thresholds used by the scorer,
//! the candidate filter and the cleaner. Defaults reproduce the classic
//! readability tuning; the keyword lists are fixed and live in `patterns`.

/// Text of the article returned when no candidate block survives.
pub const DEFAULT_PLACEHOLDER: &str = "Sorry, readability was unable to parse this page.";

/// Configuration options for article extraction.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use rs_readability::Options;
///
/// // Use defaults
/// let options = Options::default();
///
/// // Keep short tables in the output
/// let options = Options {
///     min_table_words: 0,
///     ..Options::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Options {
    /// Detach every `script`, `link` and `style` element before cleaning.
    ///
    /// Tag stripping keeps element text, so leaving these in place leaks
    /// script and CSS source into the article.
    ///
    /// Default: `true`
    pub remove_scripts: bool,

    /// Score a candidate needs to count as a "strong" match.
    ///
    /// If the highest score in the document reaches this value, every
    /// candidate scoring below it is dropped. Otherwise only candidates
    /// matching the highest score survive.
    ///
    /// Default: `20`
    pub strong_score: i32,

    /// A paragraph with more words than this earns its parent one point.
    ///
    /// Default: `20`
    pub min_paragraph_words: usize,

    /// Division blocks below this word count are dropped when their content
    /// is dominated by links, list items, images or embeds.
    ///
    /// Default: `25`
    pub min_div_words: usize,

    /// Tables below this word count are removed from candidates.
    ///
    /// Default: `250`
    pub min_table_words: usize,

    /// Text of the container returned when nothing could be extracted.
    ///
    /// Default: `"Sorry, readability was unable to parse this page."`
    pub placeholder: String,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            remove_scripts: true,
            strong_score: 20,
            min_paragraph_words: 20,
            min_div_words: 25,
            min_table_words: 250,
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
        }
    }
}
