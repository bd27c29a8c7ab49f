//! Internal link injection for rendered article HTML.
//!
//! Rewrites plain-text occurrences of related article titles into anchors:
//! 1. Candidates are prepared (locale-resolved URL, literal matcher)
//! 2. Candidates are ordered longest title first
//! 3. Each candidate scans the linkable text spans of the current content
//! 4. Up to the remaining per-article budget of matches are wrapped
//!
//! Anchors already carrying `data-article-id` count against that article's
//! budget, so feeding a result back in does not add links beyond the budget.
//!
//! Every call owns its link counter; nothing is shared or cached between
//! calls, so one injector can serve any number of threads.

pub mod candidates;
pub mod scanner;
pub mod substitution;
pub mod tokenizer;

use ahash::AHashMap;

use crate::article::ArticleReference;
use crate::config::InterlinkConfig;
use crate::utils::string_utils::safe_truncate_chars;

pub use candidates::{Candidate, order_candidates, prepare_candidates};
pub use scanner::{MatchRange, find_eligible_matches};
pub use substitution::{apply_matches, render_anchor};
pub use tokenizer::{Span, anchor_article_id, tokenize};

/// Anchors created so far per article id, scoped to one call
type LinkCounter<'a> = AHashMap<&'a str, usize>;

/// Generated-link anchors already present in `content`, per article id
fn existing_link_counts(content: &str, spans: &[Span]) -> AHashMap<String, usize> {
    let mut counts = AHashMap::new();
    for span in spans {
        let Span::Markup { start, end } = *span else {
            continue;
        };
        if let Some(id) = anchor_article_id(&content[start..end]) {
            *counts.entry(id.into_owned()).or_insert(0) += 1;
        }
    }
    counts
}

/// Result of one injection call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InjectionReport {
    /// Rewritten content
    pub content: String,
    /// Total anchors created
    pub links_created: usize,
    /// Anchors created by this call per article id, in processing order (ids with none are omitted)
    pub links_per_article: Vec<(String, usize)>,
    /// Candidates not scanned because their id's budget was already spent,
    /// including by anchors present in the input
    pub candidates_skipped: usize,
}

impl InjectionReport {
    fn unchanged(content: &str) -> Self {
        Self {
            content: content.to_string(),
            ..Self::default()
        }
    }
}

/// Injects internal links according to an `InterlinkConfig`.
#[derive(Debug, Clone, Default)]
pub struct InternalLinkInjector {
    config: InterlinkConfig,
}

impl InternalLinkInjector {
    #[must_use]
    pub fn new(config: InterlinkConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &InterlinkConfig {
        &self.config
    }

    /// Rewrite `content`, linking titles of `related` articles.
    ///
    /// Empty content or an empty related list returns the content unchanged.
    #[must_use]
    pub fn inject(&self, content: &str, related: &[ArticleReference]) -> String {
        self.inject_with_report(content, related).content
    }

    /// Same as [`inject`](Self::inject), with statistics about the rewrite.
    #[must_use]
    pub fn inject_with_report(&self, content: &str, related: &[ArticleReference]) -> InjectionReport {
        if content.is_empty() || related.is_empty() {
            return InjectionReport::unchanged(content);
        }

        let mut candidates = prepare_candidates(related, &self.config);
        order_candidates(&mut candidates);

        let budget = self.config.max_links_per_article();
        let mut report = InjectionReport::unchanged(content);
        let initial_spans = tokenize(content, self.config.excluded_elements());

        // Anchors already present count against the budget of their article
        let existing = existing_link_counts(content, &initial_spans);
        let mut counter: LinkCounter<'_> = AHashMap::with_capacity(candidates.len());
        for candidate in &candidates {
            if let Some(&count) = existing.get(candidate.id) {
                counter.insert(candidate.id, count);
            }
        }
        if !existing.is_empty() {
            log::debug!("Found existing internal links for {} article(s)", existing.len());
        }

        let mut created: LinkCounter<'_> = AHashMap::new();
        let mut order: Vec<&str> = Vec::new();
        // Spans stay valid until the content changes
        let mut spans: Option<Vec<Span>> = Some(initial_spans);

        for candidate in &candidates {
            let used = counter.get(candidate.id).copied().unwrap_or(0);
            let remaining = budget.saturating_sub(used);
            if remaining == 0 {
                log::trace!("Budget spent for article {}, skipping scan", candidate.id);
                report.candidates_skipped += 1;
                continue;
            }

            let current_spans = spans.get_or_insert_with(|| {
                tokenize(&report.content, self.config.excluded_elements())
            });
            let matches =
                find_eligible_matches(&report.content, current_spans, candidate, remaining);
            if matches.is_empty() {
                continue;
            }

            log::trace!(
                "Linking {} occurrence(s) of '{}' to {}",
                matches.len(),
                safe_truncate_chars(candidate.display_title, 60),
                candidate.target_url
            );

            report.content = apply_matches(
                &report.content,
                &matches,
                candidate,
                self.config.link_class(),
            );
            spans = None;

            *counter.entry(candidate.id).or_insert(0) += matches.len();
            let count = created.entry(candidate.id).or_insert(0);
            if *count == 0 {
                order.push(candidate.id);
            }
            *count += matches.len();
            report.links_created += matches.len();
        }

        report.links_per_article = order
            .into_iter()
            .map(|id| (id.to_string(), created.get(id).copied().unwrap_or(0)))
            .collect();

        log::debug!(
            "Injected {} internal link(s) for {} related article(s) ({} candidates skipped)",
            report.links_created,
            related.len(),
            report.candidates_skipped
        );

        report
    }
}

/// Rewrite `content` with links to `related` articles.
///
/// `locale` defaults to `"pt-BR"` and `max_links_per_article` to `1`. The
/// function is total: an unusable locale (empty, or containing whitespace or
/// `/`) leaves the content unchanged rather than emitting broken URLs.
///
/// # Examples
/// ```
/// use kodegen_tools_interlink::{ArticleReference, inject_internal_links};
///
/// let related = vec![ArticleReference::new("a1", "Uber Insurance", "uber-insurance")];
/// let html = inject_internal_links("Learn about Uber Insurance today.", &related, Some("en-US"), None);
/// assert_eq!(
///     html,
///     r#"Learn about <a href="/en-US/articles/uber-insurance" class="internal-link" data-article-id="a1">Uber Insurance</a> today."#
/// );
/// ```
#[must_use]
pub fn inject_internal_links(
    content: &str,
    related: &[ArticleReference],
    locale: Option<&str>,
    max_links_per_article: Option<usize>,
) -> String {
    if content.is_empty() || related.is_empty() {
        return content.to_string();
    }

    let mut builder = InterlinkConfig::builder();
    if let Some(locale) = locale {
        builder = builder.locale(locale);
    }
    if let Some(max) = max_links_per_article {
        builder = builder.max_links_per_article(max);
    }

    match builder.build() {
        Ok(config) => InternalLinkInjector::new(config).inject(content, related),
        Err(e) => {
            log::warn!("Internal link injection skipped: {e}");
            content.to_string()
        }
    }
}
