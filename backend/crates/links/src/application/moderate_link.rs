//! Moderate Link Use Case
//!
//! Approve or reject a pending submission. The status precondition is
//! re-checked at commit time by the repository's compare-and-set, so a
//! double-approval race leaves exactly one winner.

use std::sync::Arc;

use kernel::viewer::ViewerIdentity;

use crate::application::now_ms;
use crate::domain::repository::LinkRepository;
use crate::domain::value_object::link_status::LinkStatus;
use crate::error::{LinksError, LinksResult};

/// Moderate link use case
pub struct ModerateLinkUseCase<L>
where
    L: LinkRepository,
{
    repo: Arc<L>,
}

impl<L> ModerateLinkUseCase<L>
where
    L: LinkRepository,
{
    pub fn new(repo: Arc<L>) -> Self {
        Self { repo }
    }

    /// pending -> live
    pub async fn approve(&self, actor: &ViewerIdentity, link_id: i64) -> LinksResult<()> {
        self.transition(actor, link_id, LinkStatus::Live).await
    }

    /// pending -> rejected
    pub async fn reject(&self, actor: &ViewerIdentity, link_id: i64) -> LinksResult<()> {
        self.transition(actor, link_id, LinkStatus::Rejected).await
    }

    async fn transition(
        &self,
        actor: &ViewerIdentity,
        link_id: i64,
        target: LinkStatus,
    ) -> LinksResult<()> {
        if !actor.role.is_moderator_or_higher() {
            return Err(LinksError::Forbidden(
                "Admin or moderator role required".to_string(),
            ));
        }

        if self.repo.find_by_id(link_id).await?.is_none() {
            return Err(LinksError::LinkNotFound);
        }

        let resolved = self
            .repo
            .resolve(link_id, target, actor.user_id, now_ms())
            .await?;
        if !resolved {
            return Err(LinksError::NotPending);
        }

        tracing::info!(
            link_id,
            status = %target,
            approved_by = %actor.user_id,
            "Link resolved"
        );

        Ok(())
    }
}
