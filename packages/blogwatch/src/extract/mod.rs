//! Multi-strategy article extraction from raw HTML.
//!
//! Real blog HTML is inconsistently structured, so title, date, and
//! body text each resolve through an ordered chain of small strategy
//! functions. The first acceptable result wins and every chain bottoms
//! out in a placeholder, so extraction never fails - it only degrades.

mod content;
mod date;
mod title;

use scraper::{ElementRef, Html, Selector};

use crate::types::ExtractedArticle;

pub use content::extract_body_text;
pub use date::{extract_date, extract_date_from_text};
pub use title::extract_title;

/// Minimum body length for a page to count as a usable article.
pub const MIN_CONTENT_LENGTH: usize = 100;

/// Derive title, date, and body text from raw HTML.
pub fn extract(html: &str, url: &str) -> ExtractedArticle {
    let document = Html::parse_document(html);
    ExtractedArticle {
        title: title::extract_title(&document, url),
        date: date::extract_date(&document),
        text: content::extract_body_text(&document),
    }
}

pub(crate) fn selector(css: &str) -> Selector {
    Selector::parse(css).expect("valid selector")
}

pub(crate) fn element_text(el: &ElementRef<'_>) -> String {
    el.text().collect::<String>().trim().to_string()
}

pub(crate) fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
