//! Lightweight article references supplied by the rendering collaborator.
//!
//! The injector never fetches articles itself. Callers load the related set
//! from their content repository and hand over these records.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{InterlinkError, InterlinkResult};
use crate::utils::{is_english_locale, is_portuguese_locale};

/// A related article that may receive internal links.
///
/// `id` is the identity used for link budgeting and the `data-article-id`
/// marker. `title` is always matched verbatim regardless of locale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleReference {
    pub id: String,
    pub title: String,
    pub slug: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug_en: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug_pt: Option<String>,
}

impl ArticleReference {
    pub fn new(id: impl Into<String>, title: impl Into<String>, slug: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            slug: slug.into(),
            slug_en: None,
            slug_pt: None,
        }
    }

    #[must_use]
    pub fn with_slug_en(mut self, slug: impl Into<String>) -> Self {
        self.slug_en = Some(slug.into());
        self
    }

    #[must_use]
    pub fn with_slug_pt(mut self, slug: impl Into<String>) -> Self {
        self.slug_pt = Some(slug.into());
        self
    }

    /// Pick the slug for `locale`.
    ///
    /// Portuguese-family locales prefer `slug_pt`, English-family locales
    /// prefer `slug_en`, everything else (and any missing or empty localized
    /// slug) falls back to `slug`.
    ///
    /// # Examples
    /// ```
    /// # use kodegen_tools_interlink::ArticleReference;
    /// let article = ArticleReference::new("a1", "Seguro Uber", "seguro-uber")
    ///     .with_slug_en("uber-insurance");
    /// assert_eq!(article.resolve_slug("en-US"), "uber-insurance");
    /// assert_eq!(article.resolve_slug("pt-BR"), "seguro-uber");
    /// ```
    #[must_use]
    pub fn resolve_slug(&self, locale: &str) -> &str {
        let localized = if is_portuguese_locale(locale) {
            self.slug_pt.as_deref()
        } else if is_english_locale(locale) {
            self.slug_en.as_deref()
        } else {
            None
        };

        localized
            .filter(|slug| !slug.trim().is_empty())
            .unwrap_or(&self.slug)
    }
}

/// Parse a JSON array of article references
pub fn parse_article_references(json: &str) -> InterlinkResult<Vec<ArticleReference>> {
    serde_json::from_str(json).map_err(|source| InterlinkError::Json {
        context: "related articles".to_string(),
        source,
    })
}

/// Read and parse a JSON file holding an array of article references
pub fn load_article_references(path: impl AsRef<Path>) -> InterlinkResult<Vec<ArticleReference>> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path).map_err(|source| InterlinkError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let articles = parse_article_references(&json)?;
    log::debug!("Loaded {} related articles from {}", articles.len(), path.display());
    Ok(articles)
}
