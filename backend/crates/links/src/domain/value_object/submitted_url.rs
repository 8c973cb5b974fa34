//! SubmittedUrl Value Object
//!
//! An absolute http(s) URL as submitted. The original string (trimmed)
//! is what gets stored and what uniqueness is checked against; no
//! normalization beyond trimming is applied.

use kernel::error::app_error::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use url::Url;

const URL_MAX_LENGTH: usize = 2048;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SubmittedUrl(String);

impl SubmittedUrl {
    /// Create with validation
    pub fn new(raw: impl Into<String>) -> AppResult<Self> {
        let raw = raw.into().trim().to_string();

        if raw.is_empty() {
            return Err(AppError::bad_request("URL is required"));
        }

        if raw.len() > URL_MAX_LENGTH {
            return Err(AppError::bad_request(format!(
                "URL must be at most {} characters",
                URL_MAX_LENGTH
            )));
        }

        let parsed = Url::parse(&raw).map_err(|_| AppError::bad_request("Invalid URL format"))?;

        match parsed.scheme() {
            "http" | "https" => {}
            _ => return Err(AppError::bad_request("URL must use http or https")),
        }

        if parsed.host_str().is_none() {
            return Err(AppError::bad_request("URL must have a host"));
        }

        Ok(Self(raw))
    }

    /// Create from database value (assumed already validated)
    pub fn from_db(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl std::fmt::Display for SubmittedUrl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_urls() {
        assert!(SubmittedUrl::new("https://example.com").is_ok());
        assert!(SubmittedUrl::new("http://example.com/path?q=1#frag").is_ok());
    }

    #[test]
    fn test_trims_whitespace() {
        let url = SubmittedUrl::new("  https://example.com/a  ").unwrap();
        assert_eq!(url.as_str(), "https://example.com/a");
    }

    #[test]
    fn test_invalid_urls() {
        assert!(SubmittedUrl::new("").is_err());
        assert!(SubmittedUrl::new("not a url").is_err());
        assert!(SubmittedUrl::new("example.com/no-scheme").is_err());
        assert!(SubmittedUrl::new("ftp://example.com").is_err());
        assert!(SubmittedUrl::new("javascript:alert(1)").is_err());
    }

    #[test]
    fn test_preserves_original_form() {
        // No normalization: trailing slash and casing stay as submitted
        let url = SubmittedUrl::new("https://Example.com/Path/").unwrap();
        assert_eq!(url.as_str(), "https://Example.com/Path/");
    }
}
