//! TagName Value Object
//!
//! The normalized (lowercase, trimmed) tag name used for uniqueness
//! checks and lookups. Display casing lives in the tag's `display_name`.

use kernel::error::app_error::{AppError, AppResult};
use serde::{Deserialize, Serialize};

const TAG_NAME_MAX_LENGTH: usize = 50;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TagName(String);

impl TagName {
    /// Normalize and validate a raw tag name
    pub fn new(raw: impl Into<String>) -> AppResult<Self> {
        let name = raw.into().trim().to_lowercase();

        if name.is_empty() {
            return Err(AppError::bad_request("Tag name is required"));
        }

        if name.len() > TAG_NAME_MAX_LENGTH {
            return Err(AppError::bad_request(format!(
                "Tag name must be at most {} characters",
                TAG_NAME_MAX_LENGTH
            )));
        }

        Ok(Self(name))
    }

    /// Create from database value (assumed already normalized)
    pub fn from_db(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TagName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalizes_case_and_whitespace() {
        let name = TagName::new("  AI  ").unwrap();
        assert_eq!(name.as_str(), "ai");
    }

    #[test]
    fn test_case_variants_collide() {
        assert_eq!(
            TagName::new("AI").unwrap(),
            TagName::new("ai").unwrap()
        );
    }

    #[test]
    fn test_rejects_empty() {
        assert!(TagName::new("").is_err());
        assert!(TagName::new("   ").is_err());
    }

    #[test]
    fn test_rejects_too_long() {
        assert!(TagName::new("x".repeat(51)).is_err());
    }
}
