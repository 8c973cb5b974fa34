//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use kernel::id::UserId;

use crate::domain::entity::{auth_session::AuthSession, user::User};
use crate::domain::value_object::{email::Email, user_name::UserName};
use crate::error::AuthResult;

/// User repository trait
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Create a new user
    async fn create(&self, user: &User) -> AuthResult<()>;

    /// Find user by ID
    async fn find_by_id(&self, user_id: UserId) -> AuthResult<Option<User>>;

    /// Find user by email
    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<User>>;

    /// Check if email is already registered
    async fn exists_by_email(&self, email: &Email) -> AuthResult<bool>;

    /// Check if user name is already taken (case-insensitive)
    async fn exists_by_user_name(&self, user_name: &UserName) -> AuthResult<bool>;

    /// Record a successful login
    async fn record_login(&self, user_id: UserId, now_ms: i64) -> AuthResult<()>;
}

/// Auth session repository trait
#[trait_variant::make(AuthSessionRepository: Send)]
pub trait LocalAuthSessionRepository {
    /// Create a new session
    async fn create(&self, session: &AuthSession) -> AuthResult<()>;

    /// Find a session by token, including expired ones
    async fn find_by_token(&self, token: &str) -> AuthResult<Option<AuthSession>>;

    /// Delete a session by token (logout, expiry)
    async fn delete(&self, token: &str) -> AuthResult<()>;

    /// Delete all expired sessions, returning how many were removed
    async fn cleanup_expired(&self, now_ms: i64) -> AuthResult<u64>;
}
