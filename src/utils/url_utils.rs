//! Locale and article URL utilities.
//!
//! Locales are treated as opaque strings. Only the primary language subtag
//! is inspected to decide which precomputed slug applies.

/// Primary language subtag of a locale (`"pt"` for `"pt-BR"` or `"pt_PT"`).
fn primary_subtag(locale: &str) -> &str {
    locale
        .split(['-', '_'])
        .next()
        .unwrap_or(locale)
        .trim()
}

/// Check if a locale belongs to the Portuguese family
#[must_use]
pub fn is_portuguese_locale(locale: &str) -> bool {
    primary_subtag(locale).eq_ignore_ascii_case("pt")
}

/// Check if a locale belongs to the English family
#[must_use]
pub fn is_english_locale(locale: &str) -> bool {
    primary_subtag(locale).eq_ignore_ascii_case("en")
}

/// Build the site-relative URL of an article.
///
/// # Examples
/// ```
/// # use kodegen_tools_interlink::utils::article_url;
/// assert_eq!(
///     article_url("en-US", "articles", "uber-insurance"),
///     "/en-US/articles/uber-insurance"
/// );
/// ```
#[must_use]
pub fn article_url(locale: &str, path_segment: &str, slug: &str) -> String {
    format!("/{locale}/{path_segment}/{slug}")
}
