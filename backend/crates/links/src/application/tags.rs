//! Tag Use Cases
//!
//! Listing is public; create/update require moderator, delete requires
//! admin. Deletion cascades removal of link associations.

use std::sync::Arc;

use kernel::viewer::ViewerIdentity;

use crate::application::now_ms;
use crate::domain::entity::tag::{NewTag, Tag, TagPatch, TagWithUsage};
use crate::domain::repository::TagRepository;
use crate::domain::value_object::tag_name::TagName;
use crate::error::{LinksError, LinksResult};

fn require_moderator(actor: &ViewerIdentity) -> LinksResult<()> {
    if actor.role.is_moderator_or_higher() {
        Ok(())
    } else {
        Err(LinksError::Forbidden(
            "Admin or moderator role required".to_string(),
        ))
    }
}

// ============================================================================
// List Tags
// ============================================================================

pub struct ListTagsUseCase<T>
where
    T: TagRepository,
{
    repo: Arc<T>,
}

impl<T> ListTagsUseCase<T>
where
    T: TagRepository,
{
    pub fn new(repo: Arc<T>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self) -> LinksResult<Vec<TagWithUsage>> {
        self.repo.list_tags().await
    }
}

// ============================================================================
// Create Tag
// ============================================================================

pub struct CreateTagInput {
    pub name: String,
    pub display_name: String,
    pub description: Option<String>,
    pub color: Option<String>,
}

pub struct CreateTagUseCase<T>
where
    T: TagRepository,
{
    repo: Arc<T>,
}

impl<T> CreateTagUseCase<T>
where
    T: TagRepository,
{
    pub fn new(repo: Arc<T>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, actor: &ViewerIdentity, input: CreateTagInput) -> LinksResult<Tag> {
        require_moderator(actor)?;

        let name = TagName::new(input.name).map_err(LinksError::from)?;

        let display_name = input.display_name.trim().to_string();
        if display_name.is_empty() {
            return Err(LinksError::Validation(
                "Display name is required".to_string(),
            ));
        }

        let new_tag = NewTag {
            name,
            display_name,
            description: input.description,
            color: input.color,
            created_by: actor.user_id,
            created_at_ms: now_ms(),
        };

        let tag = self.repo.create_tag(&new_tag).await?;

        tracing::info!(tag_id = tag.id, name = %tag.name, "Tag created");

        Ok(tag)
    }
}

// ============================================================================
// Update Tag
// ============================================================================

pub struct UpdateTagInput {
    pub display_name: Option<String>,
    pub description: Option<String>,
    pub color: Option<String>,
}

pub struct UpdateTagUseCase<T>
where
    T: TagRepository,
{
    repo: Arc<T>,
}

impl<T> UpdateTagUseCase<T>
where
    T: TagRepository,
{
    pub fn new(repo: Arc<T>) -> Self {
        Self { repo }
    }

    pub async fn execute(
        &self,
        actor: &ViewerIdentity,
        tag_id: i64,
        input: UpdateTagInput,
    ) -> LinksResult<()> {
        require_moderator(actor)?;

        if self.repo.find_tag_by_id(tag_id).await?.is_none() {
            return Err(LinksError::TagNotFound);
        }

        let display_name = match input.display_name {
            Some(s) => {
                let trimmed = s.trim().to_string();
                if trimmed.is_empty() {
                    return Err(LinksError::Validation(
                        "Display name cannot be empty".to_string(),
                    ));
                }
                Some(trimmed)
            }
            None => None,
        };

        let patch = TagPatch {
            display_name,
            description: input.description,
            color: input.color,
        };

        if patch.is_empty() {
            return Ok(());
        }

        self.repo.update_tag(tag_id, &patch).await
    }
}

// ============================================================================
// Delete Tag
// ============================================================================

pub struct DeleteTagUseCase<T>
where
    T: TagRepository,
{
    repo: Arc<T>,
}

impl<T> DeleteTagUseCase<T>
where
    T: TagRepository,
{
    pub fn new(repo: Arc<T>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, actor: &ViewerIdentity, tag_id: i64) -> LinksResult<()> {
        if !actor.role.is_admin() {
            return Err(LinksError::Forbidden("Admin role required".to_string()));
        }

        if self.repo.find_tag_by_id(tag_id).await?.is_none() {
            return Err(LinksError::TagNotFound);
        }

        self.repo.delete_tag(tag_id).await?;

        tracing::info!(tag_id, actor = %actor.user_id, "Tag deleted");

        Ok(())
    }
}
