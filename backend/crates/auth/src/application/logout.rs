//! Logout Use Case

use std::sync::Arc;

use crate::domain::repository::AuthSessionRepository;
use crate::error::AuthResult;

/// Logout use case
pub struct LogoutUseCase<S>
where
    S: AuthSessionRepository,
{
    session_repo: Arc<S>,
}

impl<S> LogoutUseCase<S>
where
    S: AuthSessionRepository,
{
    pub fn new(session_repo: Arc<S>) -> Self {
        Self { session_repo }
    }

    /// Delete the session behind the token. Idempotent: logging out
    /// with an unknown or expired token is not an error.
    pub async fn execute(&self, token: &str) -> AuthResult<()> {
        self.session_repo.delete(token).await?;
        tracing::debug!("Session deleted");
        Ok(())
    }
}
