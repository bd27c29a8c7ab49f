//! Core configuration types for link injection
//!
//! This module contains the `InterlinkConfig` struct that defines the
//! parameters applied uniformly to every related article in a call.

use serde::{Deserialize, Serialize};

use crate::utils::{
    ARTICLE_PATH_SEGMENT, DEFAULT_EXCLUDED_ELEMENTS, DEFAULT_LOCALE,
    DEFAULT_MAX_LINKS_PER_ARTICLE, INTERNAL_LINK_CLASS,
};

/// Main configuration struct for internal link injection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct InterlinkConfig {
    /// Locale used both as the URL prefix and for slug selection.
    ///
    /// Never affects title matching.
    pub(crate) locale: String,

    /// Maximum anchors created per article id within one call.
    ///
    /// Default: 1. Zero disables injection entirely.
    pub(crate) max_links_per_article: usize,

    /// CSS class on generated anchors
    pub(crate) link_class: String,

    /// Segment between locale and slug: `/{locale}/{segment}/{slug}`
    pub(crate) article_path_segment: String,

    /// Lowercase element names whose text is never linked.
    ///
    /// **INVARIANT:** always contains `a` (normalized in builder and on load).
    pub(crate) excluded_elements: Vec<String>,
}

impl Default for InterlinkConfig {
    fn default() -> Self {
        Self {
            locale: DEFAULT_LOCALE.to_string(),
            max_links_per_article: DEFAULT_MAX_LINKS_PER_ARTICLE,
            link_class: INTERNAL_LINK_CLASS.to_string(),
            article_path_segment: ARTICLE_PATH_SEGMENT.to_string(),
            excluded_elements: DEFAULT_EXCLUDED_ELEMENTS
                .iter()
                .map(|s| (*s).to_string())
                .collect(),
        }
    }
}
