//! Body text resolution.
//!
//! Finds the main content container, collects its block-level text,
//! and collapses whitespace. Script, style, and page-chrome subtrees
//! never contribute text.

use scraper::{ElementRef, Html, Node};

use super::{collapse_whitespace, selector};

/// Tags whose subtrees never contribute article text.
const STRIP_TAGS: [&str; 5] = ["script", "style", "nav", "footer", "header"];

/// Candidate content containers, most specific first.
const CONTAINER_SELECTORS: [&str; 8] = [
    "article",
    "main",
    "div.content",
    "div.post-content",
    "div.entry-content",
    "div.blog-content",
    "div.post-body",
    "div#content",
];

/// Minimum visible text for a container to qualify as the article body.
const MIN_CONTAINER_TEXT: usize = 200;

/// Extract the article body text.
///
/// The chosen container's paragraph, heading, and list-item text is
/// joined with newlines; if no container qualifies, the whole body
/// text is used instead. Whitespace runs collapse to single spaces.
pub fn extract_body_text(document: &Html) -> String {
    let text = match find_content_container(document) {
        Some(container) => collect_block_text(&container),
        None => fallback_text(document),
    };
    collapse_whitespace(&text)
}

fn find_content_container(document: &Html) -> Option<ElementRef<'_>> {
    for css in CONTAINER_SELECTORS {
        if let Some(el) = document
            .select(&selector(css))
            .filter(|el| !in_stripped_subtree(el))
            .find(qualifies)
        {
            return Some(el);
        }
    }

    // Last chance: anything whose class mentions content, article, or post.
    document
        .select(&selector("[class]"))
        .filter(|el| !in_stripped_subtree(el) && has_content_class(el))
        .find(qualifies)
}

fn qualifies(el: &ElementRef<'_>) -> bool {
    collapse_whitespace(&visible_text(el)).chars().count() > MIN_CONTAINER_TEXT
}

fn has_content_class(el: &ElementRef<'_>) -> bool {
    el.value().classes().any(|class| {
        let class = class.to_ascii_lowercase();
        class.contains("content") || class.contains("article") || class.contains("post")
    })
}

fn in_stripped_subtree(el: &ElementRef<'_>) -> bool {
    el.ancestors()
        .filter_map(ElementRef::wrap)
        .any(|ancestor| STRIP_TAGS.contains(&ancestor.value().name()))
}

/// Join the text of paragraph, heading, and list-item elements.
fn collect_block_text(container: &ElementRef<'_>) -> String {
    let blocks = selector("p, h1, h2, h3, h4, h5, h6, li");
    container
        .select(&blocks)
        .filter(|el| !in_stripped_subtree(el))
        .map(|el| visible_text(&el).trim().to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

fn fallback_text(document: &Html) -> String {
    match document.select(&selector("body")).next() {
        Some(body) => visible_text(&body),
        None => visible_text(&document.root_element()),
    }
}

/// Subtree text, skipping stripped tags.
fn visible_text(el: &ElementRef<'_>) -> String {
    let mut out = String::new();
    append_visible_text(el, &mut out);
    out
}

fn append_visible_text(el: &ElementRef<'_>, out: &mut String) {
    for child in el.children() {
        match child.value() {
            Node::Text(text) => out.push_str(text),
            Node::Element(element) if !STRIP_TAGS.contains(&element.name()) => {
                if let Some(child_el) = ElementRef::wrap(child) {
                    append_visible_text(&child_el, out);
                }
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(html: &str) -> Html {
        Html::parse_document(html)
    }

    fn long_paragraph() -> String {
        "Spatial analysis keeps getting easier for everyone involved. ".repeat(10)
    }

    #[test]
    fn test_article_container_preferred() {
        let html = format!(
            r#"<html><body>
            <div class="sidebar"><p>short sidebar</p></div>
            <article><p>{}</p><h2>Section</h2><li>An item</li></article>
            </body></html>"#,
            long_paragraph()
        );
        let text = extract_body_text(&doc(&html));
        assert!(text.contains("Spatial analysis"));
        assert!(text.contains("Section"));
        assert!(text.contains("An item"));
        assert!(!text.contains("short sidebar"));
    }

    #[test]
    fn test_scripts_and_chrome_excluded() {
        let html = format!(
            r#"<html><body>
            <header><h1>Site Banner</h1></header>
            <nav><li>Menu entry</li></nav>
            <article>
                <script>var tracking = true;</script>
                <p>{}</p>
            </article>
            <footer><p>All rights reserved</p></footer>
            </body></html>"#,
            long_paragraph()
        );
        let text = extract_body_text(&doc(&html));
        assert!(!text.contains("tracking"));
        assert!(!text.contains("Menu entry"));
        assert!(!text.contains("Site Banner"));
        assert!(!text.contains("All rights reserved"));
    }

    #[test]
    fn test_short_containers_fall_back_to_body() {
        let html = r#"<html><body>
            <article><p>too short</p></article>
            <p>Loose body text outside any container.</p>
            </body></html>"#;
        let text = extract_body_text(&doc(html));
        assert!(text.contains("Loose body text"));
        assert!(text.contains("too short"));
    }

    #[test]
    fn test_class_substring_container() {
        let html = format!(
            r#"<html><body>
            <div class="main-article-wrapper"><p>{}</p></div>
            </body></html>"#,
            long_paragraph()
        );
        let text = extract_body_text(&doc(&html));
        assert!(text.contains("Spatial analysis"));
    }

    #[test]
    fn test_whitespace_collapsed() {
        let html = format!(
            "<html><body><article><p>{}</p><p>spaced   \n\n  out</p></article></body></html>",
            long_paragraph()
        );
        let text = extract_body_text(&doc(&html));
        assert!(text.contains("spaced out"));
    }
}
