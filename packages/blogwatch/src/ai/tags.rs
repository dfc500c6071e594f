//! Tagged-region parsing for AI responses.
//!
//! The summarization prompt asks for output wrapped in XML-style tags.
//! Parsing is pure and lives apart from the transport call; a missing
//! tag yields a documented default rather than an error.

use regex::Regex;

/// Extract the trimmed contents of a `<TAG>...</TAG>` region.
pub fn extract_tagged(text: &str, tag: &str) -> Option<String> {
    let pattern = Regex::new(&format!(r"(?s)<{tag}>(.*?)</{tag}>")).unwrap();
    pattern
        .captures(text)
        .map(|caps| caps[1].trim().to_string())
}

/// Pull the summary out of a tagged response.
///
/// Falls back to the full response text when the tag is absent - some
/// model outputs drop the tags under length pressure.
pub fn parse_summary_response(text: &str) -> String {
    extract_tagged(text, "SUMMARY").unwrap_or_else(|| text.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_summary_tag() {
        let response = "<THINKING>hmm</THINKING>\n<SUMMARY>\nThe post announces a release.\n</SUMMARY>";
        assert_eq!(
            parse_summary_response(response),
            "The post announces a release."
        );
    }

    #[test]
    fn test_multiline_region() {
        let response = "<SUMMARY>Line one.\nLine two.</SUMMARY>";
        assert_eq!(parse_summary_response(response), "Line one.\nLine two.");
    }

    #[test]
    fn test_missing_tag_falls_back_to_full_text() {
        assert_eq!(
            parse_summary_response("  Plain untagged answer.  "),
            "Plain untagged answer."
        );
    }

    #[test]
    fn test_extract_other_tags() {
        let response = "<SUMMARY>s</SUMMARY><SCORE>8</SCORE><RATIONALE>why</RATIONALE>";
        assert_eq!(extract_tagged(response, "SCORE").as_deref(), Some("8"));
        assert_eq!(extract_tagged(response, "RATIONALE").as_deref(), Some("why"));
        assert_eq!(extract_tagged(response, "MISSING"), None);
    }
}
