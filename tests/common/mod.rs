//! Test utilities and helper functions for the interlink test suite

use kodegen_tools_interlink::ArticleReference;
use regex::Regex;
use scraper::{Html, Selector};
use std::sync::LazyLock;

/// Creates a related article without localized slugs
#[allow(dead_code)]
pub fn article(id: &str, title: &str, slug: &str) -> ArticleReference {
    ArticleReference::new(id, title, slug)
}

/// Expected anchor markup for a generated link
#[allow(dead_code)]
pub fn anchor(href: &str, id: &str, text: &str) -> String {
    format!(r#"<a href="{href}" class="internal-link" data-article-id="{id}">{text}</a>"#)
}

/// Removes the anchors this crate generates, keeping their inner text
///
/// Applied to an injection result this must give back the input exactly.
#[allow(dead_code)]
pub fn unwrap_injected_anchors(html: &str) -> String {
    static INJECTED: LazyLock<Regex> = LazyLock::new(|| {
        Regex::new(r#"(?s)<a href="[^"]*" class="internal-link" data-article-id="[^"]*">(.*?)</a>"#)
            .expect("INJECTED: hardcoded regex is valid")
    });
    INJECTED.replace_all(html, "$1").into_owned()
}

/// Counts generated anchors pointing at `id`
#[allow(dead_code)]
pub fn count_links_to(html: &str, id: &str) -> usize {
    html.matches(&format!(r#"data-article-id="{id}""#)).count()
}

/// Counts `<a>` elements that have an `<a>` ancestor after parsing with html5ever
#[allow(dead_code)]
pub fn nested_anchor_count(html: &str) -> usize {
    let fragment = Html::parse_fragment(html);
    let selector = Selector::parse("a a").expect("static selector is valid");
    fragment.select(&selector).count()
}

/// Fails with a readable diff when two HTML strings differ
#[allow(dead_code)]
pub fn assert_html_eq(actual: &str, expected: &str) {
    if actual != expected {
        println!("=== ACTUAL ===\n{actual}\n");
        println!("=== EXPECTED ===\n{expected}\n");
        panic!("HTML content does not match");
    }
}

/// Deepest `<a>` nesting found by a plain textual scan
///
/// html5ever repairs nested anchors while parsing, so this catches what
/// `nested_anchor_count` cannot. Only meaningful for inputs without raw-text
/// elements that mention `<a`.
#[allow(dead_code)]
pub fn max_anchor_depth(html: &str) -> usize {
    let lower = html.to_ascii_lowercase();
    let bytes = lower.as_bytes();
    let mut depth = 0usize;
    let mut max = 0usize;
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i..].starts_with(b"</a>") {
            depth = depth.saturating_sub(1);
            i += 4;
            continue;
        }
        if bytes[i..].starts_with(b"<a") && matches!(bytes.get(i + 2), Some(b' ' | b'>' | b'\t' | b'\n')) {
            depth += 1;
            max = max.max(depth);
        }
        i += 1;
    }
    max
}
