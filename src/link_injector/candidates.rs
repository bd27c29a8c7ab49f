//! Candidate preparation and match ordering.
//!
//! Each related article becomes a `Candidate` carrying its display title,
//! its locale-resolved target URL and a compiled literal matcher. Candidates
//! are then stable-sorted longest title first so that a specific title
//! ("Uber Insurance") consumes its span before a shorter one ("Uber") can.

use regex::{Regex, RegexBuilder};

use crate::article::ArticleReference;
use crate::config::InterlinkConfig;
use crate::utils::article_url;

/// A related article prepared for one injection call
#[derive(Debug, Clone)]
pub struct Candidate<'a> {
    /// Stable identity used for link accounting
    pub id: &'a str,
    /// Canonical title, matched case-insensitively and literally
    pub display_title: &'a str,
    /// `/{locale}/{segment}/{slug}`
    pub target_url: String,
    /// Title length in characters, the ordering key
    pub title_len: usize,
    pub(crate) matcher: Regex,
}

/// Spellings a rendered document may use for a character HTML escapes.
///
/// Named, decimal and hex references are accepted, with optional leading
/// zeros. Case is handled by the matcher.
fn escaped_spellings(c: char) -> Option<&'static str> {
    match c {
        '&' => Some("&|&amp;|&#0*38;|&#x0*26;"),
        '<' => Some("<|&lt;|&#0*60;|&#x0*3c;"),
        '>' => Some(">|&gt;|&#0*62;|&#x0*3e;"),
        '"' => Some("\"|&quot;|&#0*34;|&#x0*22;"),
        '\'' => Some("'|&apos;|&#0*39;|&#x0*27;"),
        _ => None,
    }
}

/// Build the case-insensitive literal matcher for a title.
///
/// Pattern metacharacters are escaped. Characters that HTML escapes (`&`,
/// `<`, `>`, quotes) also match their character references, so the title
/// `Rock 'n' Roll` finds `Rock &#39;n&#39; Roll` in rendered content.
fn build_matcher(title: &str) -> Result<Regex, regex::Error> {
    let mut pattern = String::with_capacity(title.len() * 2);
    let mut buf = [0u8; 4];
    for c in title.chars() {
        match escaped_spellings(c) {
            Some(spellings) => {
                pattern.push_str("(?:");
                pattern.push_str(spellings);
                pattern.push(')');
            }
            None => pattern.push_str(&regex::escape(c.encode_utf8(&mut buf))),
        }
    }

    RegexBuilder::new(&pattern).case_insensitive(true).build()
}

/// Project related articles into candidates for `config.locale()`.
///
/// References whose title is empty or whitespace-only are dropped; so is a
/// title too large to compile into a matcher. Neither is an error.
pub fn prepare_candidates<'a>(
    articles: &'a [ArticleReference],
    config: &InterlinkConfig,
) -> Vec<Candidate<'a>> {
    articles
        .iter()
        .filter_map(|article| {
            if article.title.trim().is_empty() {
                log::debug!("Skipping article {} with empty title", article.id);
                return None;
            }

            let matcher = match build_matcher(&article.title) {
                Ok(matcher) => matcher,
                Err(e) => {
                    log::warn!("Skipping article {}: cannot build matcher: {e}", article.id);
                    return None;
                }
            };

            let slug = article.resolve_slug(config.locale());
            Some(Candidate {
                id: &article.id,
                display_title: &article.title,
                target_url: article_url(config.locale(), config.article_path_segment(), slug),
                title_len: article.title.chars().count(),
                matcher,
            })
        })
        .collect()
}

/// Stable-sort candidates by title length, longest first.
///
/// Equal lengths keep their input order (`sort_by` is stable).
pub fn order_candidates(candidates: &mut [Candidate<'_>]) {
    candidates.sort_by(|a, b| b.title_len.cmp(&a.title_len));
}
