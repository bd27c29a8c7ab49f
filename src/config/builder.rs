//! Fluent builder for `InterlinkConfig`
//!
//! All fields have defaults, so `build()` is available in any state. Values
//! are validated and normalized once here so the injector never has to.

use super::types::InterlinkConfig;
use crate::errors::{InterlinkError, InterlinkResult};
use crate::utils::{DEFAULT_EXCLUDED_ELEMENTS, DEFAULT_LOCALE, DEFAULT_MAX_LINKS_PER_ARTICLE};
use crate::utils::{ARTICLE_PATH_SEGMENT, INTERNAL_LINK_CLASS};

#[derive(Debug, Clone)]
pub struct InterlinkConfigBuilder {
    pub(crate) locale: String,
    pub(crate) max_links_per_article: usize,
    pub(crate) link_class: String,
    pub(crate) article_path_segment: String,
    pub(crate) excluded_elements: Vec<String>,
}

impl Default for InterlinkConfigBuilder {
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

impl InterlinkConfig {
    /// Create a builder for configuring an `InterlinkConfig` with a fluent interface
    #[must_use]
    pub fn builder() -> InterlinkConfigBuilder {
        InterlinkConfigBuilder::default()
    }
}

impl InterlinkConfigBuilder {
    /// Set the locale used for URL prefix and slug selection
    ///
    /// # Example
    /// ```rust
    /// # use kodegen_tools_interlink::config::InterlinkConfig;
    /// # fn main() -> anyhow::Result<()> {
    /// let config = InterlinkConfig::builder()
    ///     .locale("en-US")
    ///     .max_links_per_article(2)
    ///     .build()?;
    /// assert_eq!(config.locale(), "en-US");
    /// # Ok(())
    /// # }
    /// ```
    #[must_use]
    pub fn locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = locale.into();
        self
    }

    #[must_use]
    pub fn max_links_per_article(mut self, max: usize) -> Self {
        self.max_links_per_article = max;
        self
    }

    #[must_use]
    pub fn link_class(mut self, class: impl Into<String>) -> Self {
        self.link_class = class.into();
        self
    }

    #[must_use]
    pub fn article_path_segment(mut self, segment: impl Into<String>) -> Self {
        self.article_path_segment = segment.into();
        self
    }

    /// Replace the set of elements whose text is never linked
    ///
    /// `a` is always added back: injected anchors are never nested.
    #[must_use]
    pub fn excluded_elements<I, S>(mut self, elements: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.excluded_elements = elements.into_iter().map(Into::into).collect();
        self
    }

    /// Add one element to the excluded set (e.g. `h1`, `figcaption`)
    #[must_use]
    pub fn exclude_element(mut self, element: impl Into<String>) -> Self {
        self.excluded_elements.push(element.into());
        self
    }

    pub fn build(self) -> InterlinkResult<InterlinkConfig> {
        let config = InterlinkConfig {
            locale: self.locale,
            max_links_per_article: self.max_links_per_article,
            link_class: self.link_class,
            article_path_segment: self.article_path_segment,
            excluded_elements: self.excluded_elements,
        };
        config.validated()
    }
}

impl InterlinkConfig {
    /// Validate fields and normalize the excluded element list.
    ///
    /// Shared by the builder and by deserialized configs.
    pub(crate) fn validated(mut self) -> InterlinkResult<Self> {
        let locale = self.locale.trim();
        if locale.is_empty() || locale.contains(|c: char| c.is_whitespace() || c == '/') {
            return Err(InterlinkError::InvalidLocale(self.locale));
        }
        self.locale = locale.to_string();

        let class = self.link_class.trim();
        if class.is_empty() || class.contains(|c: char| c.is_whitespace() || c == '"') {
            return Err(InterlinkError::InvalidLinkClass(self.link_class));
        }
        self.link_class = class.to_string();

        let segment = self.article_path_segment.trim_matches('/');
        if segment.is_empty() || segment.contains('/') {
            return Err(InterlinkError::InvalidPathSegment(self.article_path_segment));
        }
        self.article_path_segment = segment.to_string();

        let mut elements = Vec::with_capacity(self.excluded_elements.len() + 1);
        for name in &self.excluded_elements {
            let normalized = name.trim().to_ascii_lowercase();
            if normalized.is_empty() || !normalized.bytes().all(|b| b.is_ascii_alphanumeric()) {
                return Err(InterlinkError::InvalidElementName(name.clone()));
            }
            if !elements.contains(&normalized) {
                elements.push(normalized);
            }
        }
        if !elements.iter().any(|e| e == "a") {
            elements.push("a".to_string());
        }
        self.excluded_elements = elements;

        Ok(self)
    }
}
