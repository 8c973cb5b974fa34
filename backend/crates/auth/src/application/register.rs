//! Register Use Case
//!
//! Creates a new user account and opens an initial session.

use std::sync::Arc;

use platform::password;

use crate::application::config::AuthConfig;
use crate::application::now_ms;
use crate::domain::entity::{auth_session::AuthSession, user::User};
use crate::domain::repository::{AuthSessionRepository, UserRepository};
use crate::domain::value_object::{email::Email, user_name::UserName};
use crate::error::{AuthError, AuthResult};

/// Register input
pub struct RegisterInput {
    pub email: String,
    pub user_name: String,
    pub password: String,
}

/// Register output
pub struct RegisterOutput {
    pub token: String,
    pub user: User,
}

/// Register use case
pub struct RegisterUseCase<U, S>
where
    U: UserRepository,
    S: AuthSessionRepository,
{
    user_repo: Arc<U>,
    session_repo: Arc<S>,
    config: Arc<AuthConfig>,
}

impl<U, S> RegisterUseCase<U, S>
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

    pub async fn execute(&self, input: RegisterInput) -> AuthResult<RegisterOutput> {
        // Validate inputs
        let email = Email::new(input.email).map_err(AuthError::from)?;
        let user_name = UserName::new(input.user_name).map_err(AuthError::from)?;

        if input.password.len() < self.config.min_password_length {
            return Err(AuthError::Validation(format!(
                "Password must be at least {} characters",
                self.config.min_password_length
            )));
        }

        // Pre-checks. The unique indexes still back these up, so a race
        // between two identical registrations surfaces as the same error.
        if self.user_repo.exists_by_email(&email).await? {
            return Err(AuthError::EmailTaken);
        }
        if self.user_repo.exists_by_user_name(&user_name).await? {
            return Err(AuthError::UserNameTaken);
        }

        let password_hash = password::hash_password(&input.password)
            .map_err(|e| AuthError::Internal(e.to_string()))?;

        let now = now_ms();
        let user = User::new(email, user_name, password_hash, now);
        self.user_repo.create(&user).await?;

        let session = AuthSession::new(user.user_id, now, self.config.session_ttl_ms());
        self.session_repo.create(&session).await?;

        tracing::info!(
            user_id = %user.user_id,
            user_name = %user.user_name,
            "User registered"
        );

        Ok(RegisterOutput {
            token: session.token,
            user,
        })
    }
}
