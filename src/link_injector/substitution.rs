//! Anchor rendering and offset-consistent insertion.

use super::candidates::Candidate;
use super::scanner::MatchRange;
use crate::utils::ARTICLE_ID_ATTRIBUTE;

/// Render the anchor wrapping `text` for `candidate`.
///
/// `text` is copied verbatim so the original casing survives. Attribute values
/// are escaped; ordinary slugs and ids pass through unchanged.
pub fn render_anchor(candidate: &Candidate<'_>, link_class: &str, text: &str) -> String {
    format!(
        r#"<a href="{href}" class="{link_class}" {ARTICLE_ID_ATTRIBUTE}="{id}">{text}</a>"#,
        href = html_escape::encode_double_quoted_attribute(&candidate.target_url),
        id = html_escape::encode_double_quoted_attribute(candidate.id),
    )
}

/// Wrap every range in `matches` with an anchor, in a single pass.
///
/// `matches` must be sorted and non-overlapping, which `find_eligible_matches`
/// guarantees. The output is rebuilt front to back from the untouched input,
/// so earlier insertions never shift the offsets of later ones.
pub fn apply_matches(
    content: &str,
    matches: &[MatchRange],
    candidate: &Candidate<'_>,
    link_class: &str,
) -> String {
    let mut output = String::with_capacity(content.len() + matches.len() * 96);
    let mut last = 0;

    for m in matches {
        debug_assert!(last <= m.start && m.start < m.end);
        output.push_str(&content[last..m.start]);
        output.push_str(&render_anchor(candidate, link_class, &content[m.start..m.end]));
        last = m.end;
    }
    output.push_str(&content[last..]);

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::article::ArticleReference;
    use crate::config::InterlinkConfig;
    use crate::link_injector::candidates::prepare_candidates;

    #[test]
    fn test_render_anchor_format() {
        let config = InterlinkConfig::builder().locale("en-US").build().expect("valid");
        let articles = vec![ArticleReference::new("a1", "Uber Insurance", "uber-insurance")];
        let candidates = prepare_candidates(&articles, &config);
        assert_eq!(
            render_anchor(&candidates[0], "internal-link", "uber insurance"),
            r#"<a href="/en-US/articles/uber-insurance" class="internal-link" data-article-id="a1">uber insurance</a>"#
        );
    }

    #[test]
    fn test_attribute_values_escaped() {
        let config = InterlinkConfig::default();
        let articles = vec![ArticleReference::new(r#"a"1"#, "Uber", r#"x"><script>"#)];
        let candidates = prepare_candidates(&articles, &config);
        let anchor = render_anchor(&candidates[0], "internal-link", "Uber");
        assert!(anchor.contains(r#"data-article-id="a&quot;1""#));
        assert!(!anchor.contains("<script>"));
    }

    #[test]
    fn test_apply_matches_preserves_surroundings() {
        let config = InterlinkConfig::default();
        let articles = vec![ArticleReference::new("a1", "Uber", "uber")];
        let candidates = prepare_candidates(&articles, &config);
        let content = "Uber, then Uber.";
        let matches = [
            MatchRange { start: 0, end: 4 },
            MatchRange { start: 11, end: 15 },
        ];
        let out = apply_matches(content, &matches, &candidates[0], "internal-link");
        let anchor = r#"<a href="/pt-BR/articles/uber" class="internal-link" data-article-id="a1">Uber</a>"#;
        assert_eq!(out, format!("{anchor}, then {anchor}."));
    }
}
