//! UserName Value Object
//!
//! Display name chosen at registration. Uniqueness is checked
//! case-insensitively, so the canonical (lowercase) form is what
//! the unique index covers.

use kernel::error::app_error::{AppError, AppResult};
use serde::{Deserialize, Serialize};

const USER_NAME_MIN_LENGTH: usize = 3;
const USER_NAME_MAX_LENGTH: usize = 20;

/// User display name, original casing preserved
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserName(String);

impl UserName {
    /// Create a new user name with validation
    pub fn new(name: impl Into<String>) -> AppResult<Self> {
        let name = name.into().trim().to_string();

        if name.len() < USER_NAME_MIN_LENGTH {
            return Err(AppError::bad_request(format!(
                "User name must be at least {} characters",
                USER_NAME_MIN_LENGTH
            )));
        }

        if name.len() > USER_NAME_MAX_LENGTH {
            return Err(AppError::bad_request(format!(
                "User name must be at most {} characters",
                USER_NAME_MAX_LENGTH
            )));
        }

        if !name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
        {
            return Err(AppError::bad_request(
                "User name may only contain letters, digits, '_' and '-'",
            ));
        }

        Ok(Self(name))
    }

    /// Create from database value (assumed already validated)
    pub fn from_db(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Name as entered by the user
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Lowercase form used for uniqueness checks
    pub fn canonical(&self) -> String {
        self.0.to_lowercase()
    }
}

impl std::fmt::Display for UserName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_names() {
        assert!(UserName::new("abc").is_ok());
        assert!(UserName::new("Link_Fan-42").is_ok());
        assert!(UserName::new("a".repeat(20)).is_ok());
    }

    #[test]
    fn test_length_bounds() {
        assert!(UserName::new("ab").is_err());
        assert!(UserName::new("a".repeat(21)).is_err());
    }

    #[test]
    fn test_invalid_characters() {
        assert!(UserName::new("has space").is_err());
        assert!(UserName::new("dots.not.ok").is_err());
        assert!(UserName::new("émoji").is_err());
    }

    #[test]
    fn test_canonical_lowercases() {
        let name = UserName::new("LinkFan").unwrap();
        assert_eq!(name.as_str(), "LinkFan");
        assert_eq!(name.canonical(), "linkfan");
    }
}
