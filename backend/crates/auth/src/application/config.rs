//! Application Configuration
//!
//! Configuration for the Auth application layer.

use std::time::Duration;

/// Auth application configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Session lifetime (30 days)
    pub session_ttl: Duration,
    /// Minimum password length
    pub min_password_length: usize,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            session_ttl: Duration::from_secs(30 * 24 * 3600),
            min_password_length: 8,
        }
    }
}

impl AuthConfig {
    /// Build config from environment, falling back to defaults.
    ///
    /// Recognized variables:
    /// - `SESSION_TTL_DAYS` - session lifetime in days
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(days) = std::env::var("SESSION_TTL_DAYS")
            && let Ok(days) = days.parse::<u64>()
            && days > 0
        {
            config.session_ttl = Duration::from_secs(days * 24 * 3600);
        }
        config
    }

    /// Session TTL in milliseconds
    pub fn session_ttl_ms(&self) -> i64 {
        self.session_ttl.as_millis() as i64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_ttl_is_thirty_days() {
        let config = AuthConfig::default();
        assert_eq!(config.session_ttl_ms(), 30 * 24 * 3600 * 1000);
    }
}
