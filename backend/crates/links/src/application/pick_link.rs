//! Pick Link Use Case
//!
//! Fetches a fresh catalog snapshot and runs the selection engine over
//! it. Review mode is gated to moderators here; the pure selection
//! function itself does not check roles.

use std::sync::Arc;

use kernel::viewer::Viewer;

use crate::domain::entity::link::Link;
use crate::domain::repository::LinkRepository;
use crate::domain::selection::select_next;
use crate::error::{LinksError, LinksResult};

/// Pick link input
pub struct PickLinkInput {
    /// Client-maintained history of already-shown URLs
    pub exclude_urls: Vec<String>,
    /// Restrict selection to the pending queue (moderators only)
    pub approval_mode: bool,
}

/// Pick link use case
pub struct PickLinkUseCase<L>
where
    L: LinkRepository,
{
    repo: Arc<L>,
}

impl<L> PickLinkUseCase<L>
where
    L: LinkRepository,
{
    pub fn new(repo: Arc<L>) -> Self {
        Self { repo }
    }

    /// `Ok(None)` means nothing qualifies; callers branch on it.
    pub async fn execute(&self, viewer: &Viewer, input: PickLinkInput) -> LinksResult<Option<Link>> {
        if input.approval_mode {
            if !viewer.is_authenticated() {
                return Err(LinksError::Unauthorized);
            }
            if !viewer.is_moderator_or_higher() {
                return Err(LinksError::Forbidden(
                    "Admin or moderator role required".to_string(),
                ));
            }
        }

        let snapshot = self.repo.list_recent().await?;

        let picked = select_next(
            &snapshot,
            viewer,
            &input.exclude_urls,
            input.approval_mode,
            &mut rand::rng(),
        )
        .cloned();

        Ok(picked)
    }
}
