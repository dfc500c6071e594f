//! Title resolution.
//!
//! Strategies in priority order: `<title>` (site suffix stripped),
//! `og:title`, first `<h1>`, a heading inside a header-like container,
//! well-known title classes, the URL path, and finally a placeholder.

use regex::Regex;
use scraper::Html;

use super::{element_text, selector};

/// Classes that commonly carry the article title.
const TITLE_CLASSES: [&str; 5] = [
    "entry-title",
    "post-title",
    "article-title",
    "headline",
    "title",
];

/// Placeholder when every strategy comes up empty.
const UNTITLED: &str = "Untitled Article";

/// Candidates this short are noise (site initials, "|", bullet glyphs).
const MIN_TITLE_CHARS: usize = 3;

/// Resolve the article title, trying each strategy in order.
pub fn extract_title(document: &Html, url: &str) -> String {
    from_title_tag(document)
        .or_else(|| from_og_title(document))
        .or_else(|| from_first_h1(document))
        .or_else(|| from_header_container(document))
        .or_else(|| from_title_classes(document))
        .or_else(|| from_url_path(url))
        .unwrap_or_else(|| UNTITLED.to_string())
}

fn non_trivial(title: String) -> Option<String> {
    (title.chars().count() > MIN_TITLE_CHARS).then_some(title)
}

/// `<title>` text, with a trailing `" | Site"` / `" - Site"` suffix removed.
fn from_title_tag(document: &Html) -> Option<String> {
    let el = document.select(&selector("title")).next()?;
    non_trivial(strip_site_suffix(&element_text(&el)))
}

/// Strip a site-name suffix at the last `" | "` or `" - "` delimiter.
fn strip_site_suffix(title: &str) -> String {
    let pipe = Regex::new(r"\s*\|\s*[^|]*$").unwrap();
    let stripped = pipe.replace(title, "");
    let dash = Regex::new(r"\s+-\s+[^-]*$").unwrap();
    dash.replace(&stripped, "").trim().to_string()
}

fn from_og_title(document: &Html) -> Option<String> {
    let el = document
        .select(&selector(r#"meta[property="og:title"]"#))
        .next()?;
    let content = el.value().attr("content")?;
    non_trivial(content.trim().to_string())
}

fn from_first_h1(document: &Html) -> Option<String> {
    let el = document.select(&selector("h1")).next()?;
    non_trivial(element_text(&el))
}

/// A heading nested in a container whose class mentions "header" or "title".
fn from_header_container(document: &Html) -> Option<String> {
    let heading = selector("h1, h2");
    document
        .select(&selector("header, div"))
        .filter(|el| {
            el.value().classes().any(|class| {
                let class = class.to_ascii_lowercase();
                class.contains("header") || class.contains("title")
            })
        })
        .find_map(|el| {
            let h = el.select(&heading).next()?;
            non_trivial(element_text(&h))
        })
}

fn from_title_classes(document: &Html) -> Option<String> {
    TITLE_CLASSES.iter().find_map(|class| {
        let el = document.select(&selector(&format!(".{class}"))).next()?;
        non_trivial(element_text(&el))
    })
}

/// Derive a readable title from the URL's last path segment.
fn from_url_path(url: &str) -> Option<String> {
    let segment = url.trim_end_matches('/').rsplit('/').next()?;
    let cased = title_case(&segment.replace(['-', '_'], " "));
    (cased.chars().count() > MIN_TITLE_CHARS).then(|| format!("Article: {cased}"))
}

fn title_case(text: &str) -> String {
    text.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}
