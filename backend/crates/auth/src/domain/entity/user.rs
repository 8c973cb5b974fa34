//! User Entity

use kernel::id::UserId;
use kernel::viewer::{Role, ViewerIdentity};

use super::super::value_object::email::Email;
use super::super::value_object::user_name::UserName;

/// Registered user account.
///
/// Timestamps are Unix epoch milliseconds, matching the wire format.
#[derive(Debug, Clone)]
pub struct User {
    pub user_id: UserId,
    pub email: Email,
    pub user_name: UserName,
    pub role: Role,
    pub password_hash: String,
    pub last_login_at_ms: Option<i64>,
    pub created_at_ms: i64,
}

impl User {
    /// Create a new user with the default role.
    pub fn new(email: Email, user_name: UserName, password_hash: String, now_ms: i64) -> Self {
        Self {
            user_id: UserId::new(),
            email,
            user_name,
            role: Role::default(),
            password_hash,
            last_login_at_ms: None,
            created_at_ms: now_ms,
        }
    }

    /// Identity handed to downstream features after session resolution.
    pub fn identity(&self) -> ViewerIdentity {
        ViewerIdentity {
            user_id: *self.user_id.as_uuid(),
            user_name: self.user_name.as_str().to_string(),
            role: self.role,
        }
    }

    pub fn is_moderator_or_higher(&self) -> bool {
        self.role.is_moderator_or_higher()
    }

    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> User {
        User::new(
            Email::new("user@example.com").unwrap(),
            UserName::new("sample").unwrap(),
            "hash".to_string(),
            1_700_000_000_000,
        )
    }

    #[test]
    fn test_new_user_defaults() {
        let user = sample_user();
        assert_eq!(user.role, Role::User);
        assert!(user.last_login_at_ms.is_none());
        assert!(!user.is_moderator_or_higher());
    }

    #[test]
    fn test_identity_carries_role() {
        let mut user = sample_user();
        user.role = Role::Moderator;
        let identity = user.identity();
        assert_eq!(identity.role, Role::Moderator);
        assert_eq!(identity.user_name, "sample");
    }
}
