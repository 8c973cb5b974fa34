//! Login Use Case
//!
//! Verifies credentials and opens a new session.

use std::sync::Arc;

use platform::password;

use crate::application::config::AuthConfig;
use crate::application::now_ms;
use crate::domain::entity::{auth_session::AuthSession, user::User};
use crate::domain::repository::{AuthSessionRepository, UserRepository};
use crate::domain::value_object::email::Email;
use crate::error::{AuthError, AuthResult};

/// Login input
pub struct LoginInput {
    pub email: String,
    pub password: String,
}

/// Login output
pub struct LoginOutput {
    pub token: String,
    pub user: User,
}

/// Login use case
pub struct LoginUseCase<U, S>
where
    U: UserRepository,
    S: AuthSessionRepository,
{
    user_repo: Arc<U>,
    session_repo: Arc<S>,
    config: Arc<AuthConfig>,
}

impl<U, S> LoginUseCase<U, S>
where
    U: UserRepository,
    S: AuthSessionRepository,
{
    pub fn new(user_repo: Arc<U>, session_repo: Arc<S>, config: Arc<AuthConfig>) -> Self {
        Self {
            user_repo,
            session_repo,
            config,
        }
    }

    pub async fn execute(&self, input: LoginInput) -> AuthResult<LoginOutput> {
        // Unknown email and wrong password produce the same error
        let email = Email::new(input.email).map_err(|_| AuthError::InvalidCredentials)?;

        let user: User = self
            .user_repo
            .find_by_email(&email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        let valid = password::verify_password(&input.password, &user.password_hash)
            .map_err(|e| AuthError::Internal(e.to_string()))?;
        if !valid {
            return Err(AuthError::InvalidCredentials);
        }

        let now = now_ms();
        self.user_repo.record_login(user.user_id, now).await?;

        let session = AuthSession::new(user.user_id, now, self.config.session_ttl_ms());
        self.session_repo.create(&session).await?;

        tracing::info!(user_id = %user.user_id, "User logged in");

        Ok(LoginOutput {
            token: session.token,
            user,
        })
    }
}
