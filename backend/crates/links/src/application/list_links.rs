//! List Links Use Case
//!
//! Lists the catalog as seen by a given viewer, newest first. The
//! pending count is included for moderators so clients can badge the
//! review queue.

use std::sync::Arc;

use kernel::viewer::Viewer;

use crate::domain::entity::link::Link;
use crate::domain::repository::LinkRepository;
use crate::domain::visibility::is_visible;
use crate::error::LinksResult;

/// List links output
pub struct ListLinksOutput {
    pub links: Vec<Link>,
    /// Zero for non-moderators
    pub pending_count: i64,
}

/// List links use case
pub struct ListLinksUseCase<L>
where
    L: LinkRepository,
{
    repo: Arc<L>,
}

impl<L> ListLinksUseCase<L>
where
    L: LinkRepository,
{
    pub fn new(repo: Arc<L>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, viewer: &Viewer) -> LinksResult<ListLinksOutput> {
        let links: Vec<Link> = self
            .repo
            .list_recent()
            .await?
            .into_iter()
            .filter(|link| is_visible(link, viewer))
            .collect();

        let pending_count = if viewer.is_moderator_or_higher() {
            self.repo.pending_count().await?
        } else {
            0
        };

        Ok(ListLinksOutput {
            links,
            pending_count,
        })
    }
}
