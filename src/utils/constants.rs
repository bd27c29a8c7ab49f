//! Shared configuration constants for interlink
//!
//! This module contains default values and configuration constants used
//! throughout the codebase to ensure consistency and avoid magic numbers.

/// Default locale: Brazilian Portuguese
///
/// The site is primarily published in Portuguese, so callers that do not
/// pass a locale get `/pt-BR/articles/...` URLs and `slugPt` resolution.
pub const DEFAULT_LOCALE: &str = "pt-BR";

/// Default link budget: 1 anchor per related article per call
///
/// One contextual link per related article keeps article bodies readable.
/// Raise via `max_links_per_article` for long-form content.
pub const DEFAULT_MAX_LINKS_PER_ARTICLE: usize = 1;

/// CSS class applied to every generated anchor
pub const INTERNAL_LINK_CLASS: &str = "internal-link";

/// Path segment between the locale and the slug in generated URLs
pub const ARTICLE_PATH_SEGMENT: &str = "articles";

/// Attribute carrying the related article id on generated anchors
pub const ARTICLE_ID_ATTRIBUTE: &str = "data-article-id";

/// Elements whose text content never receives injected links
///
/// `a` must stay in this list: an anchor is never nested inside another anchor.
pub const DEFAULT_EXCLUDED_ELEMENTS: &[&str] = &["script", "style", "code", "pre", "a"];

/// Elements whose body is raw text (a `<` inside them does not open a tag)
pub const RAW_TEXT_ELEMENTS: &[&str] = &["script", "style", "textarea", "title"];

/// Phrasing elements that do not break a word
///
/// Text on either side of these tags is treated as adjacent when checking
/// whether an occurrence is glued to a neighbouring letter or digit.
pub const INLINE_ELEMENTS: &[&str] = &[
    "a", "abbr", "b", "bdi", "bdo", "cite", "code", "data", "dfn", "em", "font", "i", "kbd",
    "mark", "q", "s", "samp", "small", "span", "strong", "sub", "sup", "time", "u", "var",
];
