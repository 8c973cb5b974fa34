//! AuthSession Entity
//!
//! Bearer-token session. The token itself is the lookup key; it is a
//! 64-character hex string generated from 32 random bytes.

use kernel::id::UserId;
use platform::crypto;

/// Bytes of entropy behind each session token
const TOKEN_BYTES: usize = 32;

#[derive(Debug, Clone)]
pub struct AuthSession {
    pub token: String,
    pub user_id: UserId,
    pub created_at_ms: i64,
    pub expires_at_ms: i64,
}

impl AuthSession {
    /// Issue a fresh session for a user.
    pub fn new(user_id: UserId, now_ms: i64, ttl_ms: i64) -> Self {
        Self {
            token: crypto::random_token(TOKEN_BYTES),
            user_id,
            created_at_ms: now_ms,
            expires_at_ms: now_ms + ttl_ms,
        }
    }

    pub fn is_expired(&self, now_ms: i64) -> bool {
        now_ms >= self.expires_at_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_token_is_hex() {
        let session = AuthSession::new(UserId::new(), 1_000, 60_000);
        assert_eq!(session.token.len(), TOKEN_BYTES * 2);
        assert!(session.token.chars().all(|c| c.is_ascii_hexdigit()));
        assert_eq!(session.expires_at_ms, 61_000);
    }

    #[test]
    fn test_expiry() {
        let session = AuthSession::new(UserId::new(), 1_000, 60_000);
        assert!(!session.is_expired(60_999));
        assert!(session.is_expired(61_000));
        assert!(session.is_expired(100_000));
    }

    #[test]
    fn test_tokens_are_unique() {
        let a = AuthSession::new(UserId::new(), 0, 1);
        let b = AuthSession::new(UserId::new(), 0, 1);
        assert_ne!(a.token, b.token);
    }
}
