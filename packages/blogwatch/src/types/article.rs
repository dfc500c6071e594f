//! Extraction output type.

/// Metadata and body text recovered from a fetched page.
///
/// Extraction never fails: every field degrades to a placeholder when
/// the page gives nothing better, so all fields are always populated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedArticle {
    /// Best-effort title, `"Untitled Article"` as a last resort
    pub title: String,

    /// Publication date in `YYYY-MM-DD` form, ingestion date as a last resort
    pub date: String,

    /// Body text with whitespace runs collapsed to single spaces
    pub text: String,
}
