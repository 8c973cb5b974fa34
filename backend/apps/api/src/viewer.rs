//! Viewer resolution adapter
//!
//! Bridges the auth feature's session resolution into the links
//! feature's `ViewerResolver` seam.

use std::sync::Arc;

use auth::PgAuthRepository;
use auth::application::ResolveViewerUseCase;
use kernel::viewer::ViewerIdentity;
use links::{LinksError, LinksResult, ViewerResolver};

/// Resolves bearer tokens through the auth session store.
pub struct SessionViewerResolver {
    use_case: ResolveViewerUseCase<PgAuthRepository, PgAuthRepository>,
}

impl SessionViewerResolver {
    pub fn new(repo: PgAuthRepository) -> Self {
        let repo = Arc::new(repo);
        Self {
            use_case: ResolveViewerUseCase::new(repo.clone(), repo),
        }
    }
}

impl ViewerResolver for SessionViewerResolver {
    async fn resolve(&self, token: &str) -> LinksResult<Option<ViewerIdentity>> {
        self.use_case
            .resolve_identity(token)
            .await
            .map_err(|e| LinksError::Internal(e.to_string()))
    }
}
