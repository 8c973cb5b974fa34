//! Submit Link Use Case
//!
//! Creates a pending submission on behalf of an authenticated user.

use std::sync::Arc;

use kernel::viewer::ViewerIdentity;

use crate::application::now_ms;
use crate::domain::entity::link::NewLink;
use crate::domain::repository::LinkRepository;
use crate::domain::value_object::submitted_url::SubmittedUrl;
use crate::error::{LinksError, LinksResult};

/// Submit link input
pub struct SubmitLinkInput {
    pub url: String,
    pub title: String,
    pub tag_ids: Vec<i64>,
}

/// Submit link use case
pub struct SubmitLinkUseCase<L>
where
    L: LinkRepository,
{
    repo: Arc<L>,
}

impl<L> SubmitLinkUseCase<L>
where
    L: LinkRepository,
{
    pub fn new(repo: Arc<L>) -> Self {
        Self { repo }
    }

    /// Returns the id of the new pending link.
    pub async fn execute(&self, submitter: &ViewerIdentity, input: SubmitLinkInput) -> LinksResult<i64> {
        let url = SubmittedUrl::new(input.url).map_err(LinksError::from)?;

        let title = input.title.trim().to_string();
        if title.is_empty() {
            return Err(LinksError::Validation("Title is required".to_string()));
        }

        let new_link = NewLink::pending(url, title, submitter.user_id, input.tag_ids, now_ms());

        // The URL unique constraint decides duplicates; no pre-check
        let link_id = self.repo.create(&new_link).await?;

        tracing::info!(
            link_id,
            submitter_id = %submitter.user_id,
            "Link submitted for moderation"
        );

        Ok(link_id)
    }
}
