//! Resolve Viewer Use Case
//!
//! Turns a bearer token into the user behind it. Anything short of a
//! valid, unexpired session for an existing user resolves to `None`
//! rather than an error, so callers can fall back to anonymous access.

use std::sync::Arc;

use kernel::viewer::ViewerIdentity;

use crate::application::now_ms;
use crate::domain::entity::user::User;
use crate::domain::repository::{AuthSessionRepository, UserRepository};
use crate::error::AuthResult;

/// Resolve viewer use case
pub struct ResolveViewerUseCase<U, S>
where
    U: UserRepository,
    S: AuthSessionRepository,
{
    user_repo: Arc<U>,
    session_repo: Arc<S>,
}

impl<U, S> ResolveViewerUseCase<U, S>
where
    U: UserRepository,
    S: AuthSessionRepository,
{
    pub fn new(user_repo: Arc<U>, session_repo: Arc<S>) -> Self {
        Self {
            user_repo,
            session_repo,
        }
    }

    /// Resolve a token to the full user record.
    ///
    /// Expired sessions are deleted on sight.
    pub async fn execute(&self, token: &str) -> AuthResult<Option<User>> {
        let Some(session) = self.session_repo.find_by_token(token).await? else {
            return Ok(None);
        };

        if session.is_expired(now_ms()) {
            self.session_repo.delete(token).await?;
            tracing::debug!("Expired session removed");
            return Ok(None);
        }

        let user = self.user_repo.find_by_id(session.user_id).await?;
        if user.is_none() {
            // Session outlived its user account
            self.session_repo.delete(token).await?;
        }
        Ok(user)
    }

    /// Resolve a token to the lightweight identity used by other features.
    pub async fn resolve_identity(&self, token: &str) -> AuthResult<Option<ViewerIdentity>> {
        Ok(self.execute(token).await?.map(|user| user.identity()))
    }
}
