//! Update Link Use Case
//!
//! Moderator edit of title and/or tags. Allowed regardless of status;
//! only supplied fields change.

use std::sync::Arc;

use kernel::viewer::ViewerIdentity;

use crate::domain::entity::link::normalize_tag_ids;
use crate::domain::repository::LinkRepository;
use crate::error::{LinksError, LinksResult};

/// Update link input; `None` fields are left unchanged
#[derive(Default)]
pub struct UpdateLinkInput {
    pub title: Option<String>,
    pub tag_ids: Option<Vec<i64>>,
}

/// Update link use case
pub struct UpdateLinkUseCase<L>
where
    L: LinkRepository,
{
    repo: Arc<L>,
}

impl<L> UpdateLinkUseCase<L>
where
    L: LinkRepository,
{
    pub fn new(repo: Arc<L>) -> Self {
        Self { repo }
    }

    pub async fn execute(
        &self,
        actor: &ViewerIdentity,
        link_id: i64,
        input: UpdateLinkInput,
    ) -> LinksResult<()> {
        if !actor.role.is_moderator_or_higher() {
            return Err(LinksError::Forbidden(
                "Admin or moderator role required".to_string(),
            ));
        }

        if self.repo.find_by_id(link_id).await?.is_none() {
            return Err(LinksError::LinkNotFound);
        }

        if let Some(title) = input.title {
            let title = title.trim().to_string();
            if title.is_empty() {
                return Err(LinksError::Validation("Title cannot be empty".to_string()));
            }
            self.repo.update_title(link_id, &title).await?;
        }

        if let Some(tag_ids) = input.tag_ids {
            let tag_ids = normalize_tag_ids(tag_ids);
            self.repo.replace_tags(link_id, &tag_ids).await?;
        }

        tracing::debug!(link_id, actor = %actor.user_id, "Link updated");

        Ok(())
    }
}
