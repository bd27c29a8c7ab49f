//! Error types for interlink configuration and input loading
//!
//! Link injection itself is total and never fails. These errors only surface
//! while building a configuration or reading inputs from disk.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for interlink operations
pub type InterlinkResult<T> = Result<T, InterlinkError>;

/// Error types for interlink operations
#[derive(Debug, Error)]
pub enum InterlinkError {
    /// Locale is empty or contains characters that cannot appear in a URL segment
    #[error("Invalid locale '{0}': must be non-empty and contain no whitespace or '/'")]
    InvalidLocale(String),

    /// Link class is empty or not a single CSS class token
    #[error("Invalid link class '{0}': must be a single non-empty class name")]
    InvalidLinkClass(String),

    /// Path segment is empty or contains '/'
    #[error("Invalid article path segment '{0}'")]
    InvalidPathSegment(String),

    /// Excluded element name is not a plain tag name
    #[error("Invalid excluded element name '{0}'")]
    InvalidElementName(String),

    /// Input file could not be read
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON input could not be parsed
    #[error("Invalid JSON in {context}: {source}")]
    Json {
        context: String,
        #[source]
        source: serde_json::Error,
    },
}

impl InterlinkError {
    /// Check if the error comes from configuration validation
    #[must_use]
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            InterlinkError::InvalidLocale(_)
                | InterlinkError::InvalidLinkClass(_)
                | InterlinkError::InvalidPathSegment(_)
                | InterlinkError::InvalidElementName(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_classification() {
        assert!(InterlinkError::InvalidLocale(String::new()).is_config_error());
        assert!(InterlinkError::InvalidElementName("<a>".into()).is_config_error());

        let io = InterlinkError::Read {
            path: PathBuf::from("missing.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        assert!(!io.is_config_error());
        assert!(io.to_string().contains("missing.json"));
    }
}
