//! Prompts for the summarization boundary.

use crate::types::RankedRecord;
use crate::util::truncate_chars;

/// Article content beyond this is cut before prompting; the head of a
/// post carries the announcements the summary needs.
const MAX_SUMMARIZE_CHARS: usize = 100_000;

/// Prompt for summarizing a single article.
pub const SUMMARIZE_PROMPT: &str = r#"You are a professional writer who specializes in technical content summarization. You excel at distilling complex content into clear, objective summaries. Think before you write, out loud, inside <THINKING> tags. Return only your summary inside <SUMMARY> tags.

Here is the blog post content:
<POST>
Title: {title}
URL: {url}

{content}
</POST>

Provide a comprehensive, objective summary that captures the key technical information, announcements, features, and updates described in this post."#;

/// Prompt for composing a digest of the posts most relevant to a query.
pub const DIGEST_PROMPT: &str = r#"You are a technical writer producing a roundup for a professional audience. Write a clear, engaging digest of the {count} blog posts below, selected as most relevant to: "{query}". Start with a brief introduction about the overall trends or themes you notice, then cover each post, explaining why it is significant and what readers should know. Always link to the posts you reference.

Here are the posts:

{posts}"#;

/// Render the single-article summarization prompt.
pub fn format_summarize_prompt(content: &str, title: &str, url: &str) -> String {
    SUMMARIZE_PROMPT
        .replace("{title}", title)
        .replace("{url}", url)
        .replace("{content}", truncate_chars(content, MAX_SUMMARIZE_CHARS))
}

/// Render the digest prompt over ranked records.
pub fn format_digest_prompt(query: &str, records: &[RankedRecord]) -> String {
    let posts = records
        .iter()
        .map(|ranked| {
            format!(
                "URL: {}\nTitle: {}\nDate: {}\nSimilarity: {:.4}\nSummary: {}",
                ranked.record.url,
                ranked.record.title,
                ranked.record.date,
                ranked.score,
                ranked.record.summary,
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n");

    DIGEST_PROMPT
        .replace("{count}", &records.len().to_string())
        .replace("{query}", query)
        .replace("{posts}", &posts)
}
