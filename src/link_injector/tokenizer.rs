//! Tag-boundary tracker.
//!
//! Splits an HTML fragment into `Markup` and `Text` spans in one left-to-right
//! pass, tracking how deep the scan is inside excluded elements. A text span is
//! linkable only when no excluded element is open around it.
//!
//! Malformed input never fails:
//! - a `<` that does not open a tag, comment or declaration is plain text
//! - a stray `>` is plain text
//! - `>` inside a quoted attribute value does not close the tag
//! - an unterminated tag, comment or raw-text body swallows the rest of the
//!   input as non-linkable
//! - an excluded element that is never closed keeps the rest of the input
//!   non-linkable
//! - `/>` only ends void elements; `<a href="/x"/>` opens an anchor
//!
//! Slice boundaries only ever fall on ASCII structural bytes, so every span is
//! a valid `&str` range.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;
use smallvec::SmallVec;

use crate::utils::{ARTICLE_ID_ATTRIBUTE, INLINE_ELEMENTS, RAW_TEXT_ELEMENTS};

const COMMENT_START: &[u8] = b"<!--";
const COMMENT_END: &str = "-->";

/// One classified region of the content, as byte offsets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Span {
    /// Tag, comment, doctype or processing instruction
    Markup { start: usize, end: usize },
    /// Character data; `linkable` is false inside excluded or raw-text elements
    Text {
        start: usize,
        end: usize,
        linkable: bool,
    },
}

impl Span {
    #[must_use]
    pub fn start(&self) -> usize {
        match *self {
            Span::Markup { start, .. } | Span::Text { start, .. } => start,
        }
    }

    #[must_use]
    pub fn end(&self) -> usize {
        match *self {
            Span::Markup { end, .. } | Span::Text { end, .. } => end,
        }
    }

    #[must_use]
    pub fn is_linkable(&self) -> bool {
        matches!(self, Span::Text { linkable: true, .. })
    }
}

/// Element name of a tag (`"a"` for both `<a href="/x">` and `</a>`).
///
/// Comments, doctypes and processing instructions have no name.
#[must_use]
pub fn markup_tag_name(markup: &str) -> Option<&str> {
    let rest = markup.strip_prefix('<')?;
    let rest = rest.strip_prefix('/').unwrap_or(rest);
    if !rest.starts_with(|c: char| c.is_ascii_alphabetic()) {
        return None;
    }
    let end = rest
        .find(|c: char| !(c.is_ascii_alphanumeric() || c == '-'))
        .unwrap_or(rest.len());
    Some(&rest[..end])
}

/// Whether a markup span is an inline tag that text flows through
#[must_use]
pub fn is_inline_markup(markup: &str) -> bool {
    markup_tag_name(markup)
        .is_some_and(|name| INLINE_ELEMENTS.iter().any(|e| e.eq_ignore_ascii_case(name)))
}

/// Article id carried by an anchor start tag (`data-article-id` attribute).
///
/// End tags, other elements and anchors without the attribute yield `None`.
/// Entity references in the value are decoded.
#[must_use]
pub fn anchor_article_id(markup: &str) -> Option<Cow<'_, str>> {
    static ARTICLE_ID: LazyLock<Regex> = LazyLock::new(|| {
        Regex::new(&format!(
            r#"(?i)\s{}\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s"'=<>`]+))"#,
            regex::escape(ARTICLE_ID_ATTRIBUTE)
        ))
        .expect("ARTICLE_ID: hardcoded regex is valid")
    });

    if markup.starts_with("</") || !markup_tag_name(markup)?.eq_ignore_ascii_case("a") {
        return None;
    }
    let caps = ARTICLE_ID.captures(markup)?;
    let value = caps.get(1).or_else(|| caps.get(2)).or_else(|| caps.get(3))?;
    Some(html_escape::decode_html_entities(value.as_str()))
}

fn is_void_element(name: &str) -> bool {
    matches!(
        name,
        "area"
            | "base"
            | "br"
            | "col"
            | "embed"
            | "hr"
            | "img"
            | "input"
            | "link"
            | "meta"
            | "param"
            | "source"
            | "track"
            | "wbr"
    )
}

fn is_raw_text_element(name: &str) -> bool {
    RAW_TEXT_ELEMENTS.iter().any(|e| e.eq_ignore_ascii_case(name))
}

/// Depth counters for the excluded elements of one scan
struct ExclusionTracker<'a> {
    names: &'a [String],
    depths: SmallVec<[usize; 8]>,
}

impl<'a> ExclusionTracker<'a> {
    fn new(names: &'a [String]) -> Self {
        Self {
            names,
            depths: SmallVec::from_elem(0, names.len()),
        }
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| n.eq_ignore_ascii_case(name))
    }

    fn open(&mut self, name: &str) {
        if let Some(idx) = self.position(name) {
            self.depths[idx] += 1;
        }
    }

    fn close(&mut self, name: &str) {
        if let Some(idx) = self.position(name) {
            self.depths[idx] = self.depths[idx].saturating_sub(1);
        }
    }

    fn is_inside_excluded(&self) -> bool {
        self.depths.iter().any(|&d| d > 0)
    }
}

/// Whether the `<` at `i` opens markup rather than being a literal character
fn opens_markup(bytes: &[u8], i: usize) -> bool {
    match bytes.get(i + 1) {
        Some(b) if b.is_ascii_alphabetic() => true,
        Some(b'!') | Some(b'?') => true,
        Some(b'/') => bytes.get(i + 2).is_some_and(|b| b.is_ascii_alphabetic()),
        _ => false,
    }
}

/// End offset of a tag name starting at `start`
fn tag_name_end(bytes: &[u8], start: usize) -> usize {
    let mut j = start;
    while j < bytes.len() && (bytes[j].is_ascii_alphanumeric() || bytes[j] == b'-') {
        j += 1;
    }
    j
}

/// Offset just past the `>` closing a start tag, honouring quoted attribute values.
///
/// A quote only opens a value when it follows `=`, so a stray apostrophe in an
/// unquoted value does not derail the scan.
fn start_tag_end(bytes: &[u8], from: usize) -> Option<usize> {
    let mut quote: Option<u8> = None;
    let mut last_significant = 0u8;
    let mut j = from;

    while j < bytes.len() {
        let b = bytes[j];
        match quote {
            Some(q) => {
                if b == q {
                    quote = None;
                    last_significant = b;
                }
            }
            None => match b {
                b'>' => return Some(j + 1),
                b'"' | b'\'' if last_significant == b'=' => quote = Some(b),
                _ if b.is_ascii_whitespace() => {}
                _ => last_significant = b,
            },
        }
        j += 1;
    }
    None
}

/// Offset of the `</name` that closes a raw-text element, case-insensitively
fn raw_text_close(bytes: &[u8], from: usize, name: &str) -> Option<usize> {
    let name = name.as_bytes();
    let mut i = from;
    while i + 2 + name.len() <= bytes.len() {
        let rel = bytes[i..].iter().position(|&b| b == b'<')?;
        i += rel;
        let name_start = i + 2;
        let name_end = name_start + name.len();
        if bytes.get(i + 1) == Some(&b'/')
            && name_end <= bytes.len()
            && bytes[name_start..name_end].eq_ignore_ascii_case(name)
            && bytes
                .get(name_end)
                .is_none_or(|b| b.is_ascii_whitespace() || *b == b'>' || *b == b'/')
        {
            return Some(i);
        }
        i += 1;
    }
    None
}

/// Classify `content` into markup and text spans.
///
/// `excluded` holds lowercase element names whose text is never linkable.
/// Spans are contiguous and cover the whole input in order.
#[must_use]
pub fn tokenize(content: &str, excluded: &[String]) -> Vec<Span> {
    let bytes = content.as_bytes();
    let len = bytes.len();
    let mut spans = Vec::new();
    let mut tracker = ExclusionTracker::new(excluded);
    let mut i = 0;

    while i < len {
        if bytes[i] != b'<' || !opens_markup(bytes, i) {
            // Text runs to the next `<` that actually opens markup
            let start = i;
            i += 1;
            while i < len && !(bytes[i] == b'<' && opens_markup(bytes, i)) {
                i += 1;
            }
            spans.push(Span::Text {
                start,
                end: i,
                linkable: !tracker.is_inside_excluded(),
            });
            continue;
        }

        let start = i;

        // Comment; `<!-->` and `<!--->` are complete empty comments
        if bytes[i..].starts_with(COMMENT_START) {
            let body = i + COMMENT_START.len();
            let end = if bytes[body..].starts_with(b">") {
                body + 1
            } else if bytes[body..].starts_with(b"->") {
                body + 2
            } else {
                content[body..]
                    .find(COMMENT_END)
                    .map_or(len, |rel| body + rel + COMMENT_END.len())
            };
            spans.push(Span::Markup { start, end });
            i = end;
            continue;
        }

        // Doctype, CDATA or processing instruction
        if matches!(bytes[i + 1], b'!' | b'?') {
            let end = content[i..].find('>').map_or(len, |rel| i + rel + 1);
            spans.push(Span::Markup { start, end });
            i = end;
            continue;
        }

        // End tag
        if bytes[i + 1] == b'/' {
            let name_end = tag_name_end(bytes, i + 2);
            let name = &content[i + 2..name_end];
            let end = content[name_end..].find('>').map_or(len, |rel| name_end + rel + 1);
            tracker.close(name);
            spans.push(Span::Markup { start, end });
            i = end;
            continue;
        }

        // Start tag
        let name_end = tag_name_end(bytes, i + 1);
        let name = &content[i + 1..name_end];
        let Some(end) = start_tag_end(bytes, name_end) else {
            log::trace!("Unterminated <{name}> tag at byte {start}; rest of input is markup");
            spans.push(Span::Markup { start, end: len });
            break;
        };
        spans.push(Span::Markup { start, end });
        i = end;

        // A trailing `/` does not close a non-void element (`<a href=/x/>` stays open)
        if is_void_element(&name.to_ascii_lowercase()) {
            continue;
        }

        if is_raw_text_element(name) {
            // Body is opaque; the close tag is handled as a normal end tag next
            let body_end = raw_text_close(bytes, i, name).unwrap_or(len);
            if body_end > i {
                spans.push(Span::Text {
                    start: i,
                    end: body_end,
                    linkable: false,
                });
            }
            i = body_end;
            continue;
        }

        tracker.open(name);
    }

    spans
}

#[cfg(test)]
mod tests {
    use super::*;

    fn excluded() -> Vec<String> {
        ["script", "style", "code", "pre", "a"]
            .iter()
            .map(|s| (*s).to_string())
            .collect()
    }

    /// (slice, linkable) for every text span
    fn texts<'a>(content: &'a str, spans: &[Span]) -> Vec<(&'a str, bool)> {
        spans
            .iter()
            .filter_map(|span| match *span {
                Span::Text {
                    start,
                    end,
                    linkable,
                } => Some((&content[start..end], linkable)),
                Span::Markup { .. } => None,
            })
            .collect()
    }

    #[test]
    fn test_spans_cover_input() {
        let html = r#"<p>Hello <b class="x">world</b><!-- c --> end</p>"#;
        let spans = tokenize(html, &excluded());
        let mut cursor = 0;
        for span in &spans {
            assert_eq!(span.start(), cursor);
            cursor = span.end();
        }
        assert_eq!(cursor, html.len());
    }

    #[test]
    fn test_anchor_text_not_linkable() {
        let html = r#"<a href="/x">inside</a> outside"#;
        let spans = tokenize(html, &excluded());
        assert_eq!(texts(html, &spans), vec![("inside", false), (" outside", true)]);
    }

    #[test]
    fn test_nested_excluded_elements() {
        let html = "<pre><code>one</code>two</pre>three";
        let spans = tokenize(html, &excluded());
        assert_eq!(
            texts(html, &spans),
            vec![("one", false), ("two", false), ("three", true)]
        );
    }

    #[test]
    fn test_attribute_values_are_markup() {
        let html = r#"<img alt="Uber Insurance > cheap" src="a.png">Uber"#;
        let spans = tokenize(html, &excluded());
        assert_eq!(texts(html, &spans), vec![("Uber", true)]);
    }

    #[test]
    fn test_script_body_is_raw_text() {
        let html = "<script>if (a < b && c > d) { x('<a>') }</script>after";
        let spans = tokenize(html, &excluded());
        assert_eq!(
            texts(html, &spans),
            vec![("if (a < b && c > d) { x('<a>') }", false), ("after", true)]
        );
    }

    #[test]
    fn test_stray_angle_brackets_are_text() {
        let html = "a < b and c > d";
        let spans = tokenize(html, &excluded());
        assert_eq!(texts(html, &spans), vec![("a < b and c > d", true)]);
    }

    #[test]
    fn test_unterminated_tag_swallows_rest() {
        let html = r#"before <div class="open Uber"#;
        let spans = tokenize(html, &excluded());
        assert_eq!(texts(html, &spans), vec![("before ", true)]);
        assert_eq!(spans.last().map(Span::end), Some(html.len()));
    }

    #[test]
    fn test_unclosed_anchor_keeps_rest_unlinkable() {
        let html = r#"<a href="/x">open and more <p>text</p>"#;
        let spans = tokenize(html, &excluded());
        assert!(spans.iter().all(|s| !s.is_linkable()));
    }

    #[test]
    fn test_stray_close_tag_does_not_underflow() {
        let html = "</a>text<a>in</a>out";
        let spans = tokenize(html, &excluded());
        assert_eq!(
            texts(html, &spans),
            vec![("text", true), ("in", false), ("out", true)]
        );
    }

    #[test]
    fn test_uppercase_tags_and_similar_names() {
        let html = "<A HREF='/x'>in</A><abbr>ok</abbr>";
        let spans = tokenize(html, &excluded());
        assert_eq!(texts(html, &spans), vec![("in", false), ("ok", true)]);
    }

    #[test]
    fn test_void_excluded_element_does_not_open() {
        let excluded = vec!["a".to_string(), "img".to_string()];
        let html = "<img src=x>one<img src=y/>two";
        let spans = tokenize(html, &excluded);
        assert_eq!(texts(html, &spans), vec![("one", true), ("two", true)]);
    }

    #[test]
    fn test_trailing_slash_does_not_close_anchor() {
        for html in [
            "<a href=/blog/uber/>Uber</a> rides",
            r#"<a href="/x"/>Uber</a> rides"#,
            "<A HREF=/x/>Uber</A> rides",
        ] {
            let spans = tokenize(html, &excluded());
            assert_eq!(
                texts(html, &spans),
                vec![("Uber", false), (" rides", true)],
                "input: {html}"
            );
        }
    }

    #[test]
    fn test_empty_comments_are_complete() {
        for html in ["<!-->Uber", "<!--->Uber", "<!---->Uber"] {
            let spans = tokenize(html, &excluded());
            assert_eq!(texts(html, &spans), vec![("Uber", true)], "input: {html}");
        }
    }

    #[test]
    fn test_anchor_article_id() {
        assert_eq!(
            anchor_article_id(r#"<a href="/x" class="internal-link" data-article-id="a1">"#).as_deref(),
            Some("a1")
        );
        assert_eq!(anchor_article_id("<A data-article-id='b&amp;c'>").as_deref(), Some("b&c"));
        assert_eq!(anchor_article_id("<a data-article-id=z9>").as_deref(), Some("z9"));
        assert_eq!(anchor_article_id(r#"<a href="/x">"#), None);
        assert_eq!(anchor_article_id(r#"<span data-article-id="a1">"#), None);
        assert_eq!(anchor_article_id("</a>"), None);
        assert_eq!(anchor_article_id(r#"<abbr data-article-id="a1">"#), None);
    }

    #[test]
    fn test_multibyte_text_boundaries() {
        let html = "<p>Seguro automóvel — ótimo</p>";
        let spans = tokenize(html, &excluded());
        assert_eq!(texts(html, &spans), vec![("Seguro automóvel — ótimo", true)]);
    }

    #[test]
    fn test_markup_tag_name() {
        assert_eq!(markup_tag_name(r#"<a href="/x">"#), Some("a"));
        assert_eq!(markup_tag_name("</STRONG>"), Some("STRONG"));
        assert_eq!(markup_tag_name("<my-widget/>"), Some("my-widget"));
        assert_eq!(markup_tag_name("<!-- note -->"), None);
        assert_eq!(markup_tag_name("<!DOCTYPE html>"), None);
        assert!(is_inline_markup("<em>"));
        assert!(is_inline_markup("</a>"));
        assert!(!is_inline_markup("<p>"));
        assert!(!is_inline_markup("<br>"));
    }

    #[test]
    fn test_apostrophe_in_unquoted_value() {
        let html = "<img alt=don't>Uber";
        let spans = tokenize(html, &excluded());
        assert_eq!(texts(html, &spans), vec![("Uber", true)]);
    }
}
