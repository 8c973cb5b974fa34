//! Data Transfer Objects
//!
//! Request/response types for the auth API. All fields are camelCase
//! on the wire.

use kernel::viewer::Role;
use serde::{Deserialize, Serialize};

use crate::domain::entity::user::User;

// ============================================================================
// Requests
// ============================================================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub email: String,
    pub user_name: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

// ============================================================================
// Responses
// ============================================================================

/// Public view of a user account
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: String,
    pub email: String,
    pub user_name: String,
    pub role: Role,
    pub created_at: i64,
}

impl UserDto {
    pub fn from_user(user: &User) -> Self {
        Self {
            id: user.user_id.to_string(),
            email: user.email.as_str().to_string(),
            user_name: user.user_name.as_str().to_string(),
            role: user.role,
            created_at: user.created_at_ms,
        }
    }
}

/// Returned by register and login
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub token: String,
    pub user: UserDto,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_object::{email::Email, user_name::UserName};

    #[test]
    fn test_user_dto_serialization() {
        let user = User::new(
            Email::new("user@example.com").unwrap(),
            UserName::new("LinkFan").unwrap(),
            "hash".to_string(),
            1_700_000_000_000,
        );
        let json = serde_json::to_value(UserDto::from_user(&user)).unwrap();
        assert_eq!(json["email"], "user@example.com");
        assert_eq!(json["userName"], "LinkFan");
        assert_eq!(json["role"], "user");
        assert_eq!(json["createdAt"], 1_700_000_000_000i64);
        assert!(json.get("passwordHash").is_none());
    }
}
