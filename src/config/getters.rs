//! Getter methods for `InterlinkConfig`

use super::types::InterlinkConfig;

impl InterlinkConfig {
    #[must_use]
    pub fn locale(&self) -> &str {
        &self.locale
    }

    #[must_use]
    pub fn max_links_per_article(&self) -> usize {
        self.max_links_per_article
    }

    #[must_use]
    pub fn link_class(&self) -> &str {
        &self.link_class
    }

    #[must_use]
    pub fn article_path_segment(&self) -> &str {
        &self.article_path_segment
    }

    #[must_use]
    pub fn excluded_elements(&self) -> &[String] {
        &self.excluded_elements
    }

    /// Check if text inside `element` is never linked
    #[must_use]
    pub fn is_excluded_element(&self, element: &str) -> bool {
        self.excluded_elements
            .iter()
            .any(|e| e.eq_ignore_ascii_case(element))
    }
}
