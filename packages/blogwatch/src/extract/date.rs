//! Publication date resolution.
//!
//! Strategies in priority order: dedicated metadata tags, `<time>`
//! machine attributes, `<time>` visible text, well-known date classes,
//! free-text search over the whole document, and finally today's date.

use chrono::{NaiveDate, Utc};
use regex::Regex;
use scraper::Html;

use super::{element_text, selector};

const META_DATE_SELECTORS: [&str; 6] = [
    r#"meta[property="article:published_time"]"#,
    r#"meta[property="og:published_time"]"#,
    r#"meta[name="date"]"#,
    r#"meta[name="publication_date"]"#,
    r#"meta[name="publish-date"]"#,
    r#"meta[itemprop="datePublished"]"#,
];

/// Classes that commonly carry the publication date.
const DATE_CLASSES: [&str; 6] = [
    "date",
    "post-date",
    "entry-date",
    "published",
    "byline",
    "post-meta",
];

/// Delimiter/order combinations accepted for metadata-sourced dates.
const METADATA_DATE_FORMATS: [&str; 6] = [
    "%Y-%m-%d", "%Y/%m/%d", "%d-%m-%Y", "%d/%m/%Y", "%m-%d-%Y", "%m/%d/%Y",
];

const MONTH_NAMES: &str = "Jan(?:uary)?|Feb(?:ruary)?|Mar(?:ch)?|Apr(?:il)?|May|Jun(?:e)?|Jul(?:y)?|Aug(?:ust)?|Sep(?:tember)?|Oct(?:ober)?|Nov(?:ember)?|Dec(?:ember)?";

/// Resolve the publication date, trying each strategy in order.
///
/// Falls back to the current date when the page gives nothing usable.
pub fn extract_date(document: &Html) -> String {
    from_meta_tags(document)
        .or_else(|| from_time_attribute(document))
        .or_else(|| from_time_text(document))
        .or_else(|| from_date_classes(document))
        .or_else(|| from_document_text(document))
        .unwrap_or_else(today)
}

fn today() -> String {
    Utc::now().format("%Y-%m-%d").to_string()
}

/// Drop the time component of an ISO-like datetime string.
fn date_portion(value: &str) -> &str {
    match value.split_once('T') {
        Some((date, _)) => date,
        None => value,
    }
}

fn is_valid_date(value: &str) -> bool {
    METADATA_DATE_FORMATS
        .iter()
        .any(|fmt| NaiveDate::parse_from_str(value, fmt).is_ok())
}

fn from_meta_tags(document: &Html) -> Option<String> {
    META_DATE_SELECTORS.iter().find_map(|css| {
        let el = document.select(&selector(css)).next()?;
        let date = date_portion(el.value().attr("content")?.trim());
        is_valid_date(date).then(|| date.to_string())
    })
}

fn from_time_attribute(document: &Html) -> Option<String> {
    document.select(&selector("time")).find_map(|el| {
        let date = date_portion(el.value().attr("datetime")?.trim());
        is_valid_date(date).then(|| date.to_string())
    })
}

fn from_time_text(document: &Html) -> Option<String> {
    document
        .select(&selector("time"))
        .find_map(|el| extract_date_from_text(&element_text(&el)))
}

fn from_date_classes(document: &Html) -> Option<String> {
    DATE_CLASSES.iter().find_map(|class| {
        let el = document.select(&selector(&format!(".{class}"))).next()?;
        extract_date_from_text(&element_text(&el))
    })
}

fn from_document_text(document: &Html) -> Option<String> {
    let text: String = document.root_element().text().collect();
    extract_date_from_text(&text)
}

/// Find the first recognizable date in free text.
///
/// Recognizes ISO-like `YYYY-MM-DD` (also `/`), long month-name forms
/// in both orders, and numeric `MM/DD/YYYY` forms. Matches normalize
/// to `YYYY-MM-DD` where the parts form a real calendar date; the raw
/// matched text is returned otherwise.
pub fn extract_date_from_text(text: &str) -> Option<String> {
    let iso = Regex::new(r"\b(\d{4})[-/](\d{1,2})[-/](\d{1,2})\b").unwrap();
    if let Some(caps) = iso.captures(text) {
        return Some(format_ymd(&caps[1], &caps[2], &caps[3], &caps[0]));
    }

    let month_first = Regex::new(&format!(
        r"(?i)\b({MONTH_NAMES})[.,]?\s+(\d{{1,2}})(?:st|nd|rd|th)?,?\s+(\d{{4}})\b"
    ))
    .unwrap();
    if let Some(caps) = month_first.captures(text) {
        return Some(format_month_name(&caps[1], &caps[2], &caps[3], &caps[0]));
    }

    let day_first = Regex::new(&format!(
        r"(?i)\b(\d{{1,2}})(?:st|nd|rd|th)?\s+({MONTH_NAMES})[.,]?\s+(\d{{4}})\b"
    ))
    .unwrap();
    if let Some(caps) = day_first.captures(text) {
        return Some(format_month_name(&caps[2], &caps[1], &caps[3], &caps[0]));
    }

    let numeric = Regex::new(r"\b(\d{1,2})[/.-](\d{1,2})[/.-](\d{4})\b").unwrap();
    if let Some(caps) = numeric.captures(text) {
        return Some(format_numeric(&caps[1], &caps[2], &caps[3], &caps[0]));
    }

    None
}

fn format_ymd(year: &str, month: &str, day: &str, raw: &str) -> String {
    build_date(year, month, day).unwrap_or_else(|| raw.to_string())
}

fn format_month_name(month: &str, day: &str, year: &str, raw: &str) -> String {
    month_number(month)
        .and_then(|m| build_date(year, &m.to_string(), day))
        .unwrap_or_else(|| raw.to_string())
}

/// Month-first preferred; day-first when the first field cannot be a month.
fn format_numeric(first: &str, second: &str, year: &str, raw: &str) -> String {
    build_date(year, first, second)
        .or_else(|| build_date(year, second, first))
        .unwrap_or_else(|| raw.to_string())
}

fn build_date(year: &str, month: &str, day: &str) -> Option<String> {
    let year: i32 = year.parse().ok()?;
    let month: u32 = month.parse().ok()?;
    let day: u32 = day.parse().ok()?;
    Some(
        NaiveDate::from_ymd_opt(year, month, day)?
            .format("%Y-%m-%d")
            .to_string(),
    )
}

fn month_number(name: &str) -> Option<u32> {
    let prefix = name.get(..3)?.to_ascii_lowercase();
    let number = match prefix.as_str() {
        "jan" => 1,
        "feb" => 2,
        "mar" => 3,
        "apr" => 4,
        "may" => 5,
        "jun" => 6,
        "jul" => 7,
        "aug" => 8,
        "sep" => 9,
        "oct" => 10,
        "nov" => 11,
        "dec" => 12,
        _ => return None,
    };
    Some(number)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(html: &str) -> Html {
        Html::parse_document(html)
    }

    #[test]
    fn test_meta_published_time() {
        let document = doc(
            r#"<html><head>
            <meta property="article:published_time" content="2023-07-04T00:00:00Z">
            </head></html>"#,
        );
        assert_eq!(extract_date(&document), "2023-07-04");
    }

    #[test]
    fn test_invalid_meta_falls_through_to_time_tag() {
        let document = doc(
            r#"<html><head><meta name="date" content="not a date"></head>
            <body><time datetime="2022-12-25T09:30:00">Christmas post</time></body></html>"#,
        );
        assert_eq!(extract_date(&document), "2022-12-25");
    }

    #[test]
    fn test_time_text() {
        let document = doc("<html><body><time>Posted on March 5, 2021</time></body></html>");
        assert_eq!(extract_date(&document), "2021-03-05");
    }

    #[test]
    fn test_date_class() {
        let document =
            doc(r#"<html><body><span class="post-date">15 August 2020</span></body></html>"#);
        assert_eq!(extract_date(&document), "2020-08-15");
    }

    #[test]
    fn test_document_text_scan() {
        let document = doc("<html><body><p>Updated 03/15/2023 by the team.</p></body></html>");
        assert_eq!(extract_date(&document), "2023-03-15");
    }

    #[test]
    fn test_defaults_to_today() {
        let document = doc("<html><body><p>No dates here.</p></body></html>");
        assert_eq!(extract_date(&document), today());
    }

    #[test]
    fn test_free_text_iso_variants() {
        assert_eq!(
            extract_date_from_text("released 2023/1/5 to the public"),
            Some("2023-01-05".to_string())
        );
    }

    #[test]
    fn test_free_text_ordinal_day() {
        assert_eq!(
            extract_date_from_text("January 3rd, 2024"),
            Some("2024-01-03".to_string())
        );
    }

    #[test]
    fn test_free_text_abbreviated_month() {
        assert_eq!(
            extract_date_from_text("Sep 9, 2019"),
            Some("2019-09-09".to_string())
        );
    }

    #[test]
    fn test_free_text_day_first_numeric() {
        // 25 cannot be a month, so the day-first reading applies.
        assert_eq!(
            extract_date_from_text("25/12/2021"),
            Some("2021-12-25".to_string())
        );
    }

    #[test]
    fn test_free_text_impossible_date_returns_raw_match() {
        assert_eq!(
            extract_date_from_text("see 2023-13-45 in the changelog"),
            Some("2023-13-45".to_string())
        );
    }

    #[test]
    fn test_free_text_no_match() {
        assert_eq!(extract_date_from_text("nothing datelike here"), None);
    }
}
