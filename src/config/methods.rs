//! Loading `InterlinkConfig` from JSON
//!
//! Missing fields fall back to defaults; loaded values go through the same
//! validation as the builder.

use std::path::Path;

use super::types::InterlinkConfig;
use crate::errors::{InterlinkError, InterlinkResult};

impl InterlinkConfig {
    /// Parse and validate a configuration from a JSON string
    ///
    /// # Example
    /// ```rust
    /// # use kodegen_tools_interlink::config::InterlinkConfig;
    /// # fn main() -> anyhow::Result<()> {
    /// let config = InterlinkConfig::from_json_str(r#"{"locale": "en", "maxLinksPerArticle": 3}"#)?;
    /// assert_eq!(config.max_links_per_article(), 3);
    /// assert_eq!(config.link_class(), "internal-link");
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_json_str(json: &str) -> InterlinkResult<Self> {
        let config: InterlinkConfig =
            serde_json::from_str(json).map_err(|source| InterlinkError::Json {
                context: "interlink config".to_string(),
                source,
            })?;
        config.validated()
    }

    /// Read, parse and validate a configuration file
    pub fn from_json_file(path: impl AsRef<Path>) -> InterlinkResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| InterlinkError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("Loaded interlink config from {}", path.display());
        Self::from_json_str(&json)
    }
}
