//! Bulk Import Use Case
//!
//! Administrative import of pre-approved links. Partial-failure batch:
//! every item is attempted, failures and duplicates are counted as
//! skips, and the batch never aborts as a whole.

use std::sync::Arc;

use kernel::viewer::ViewerIdentity;

use crate::application::now_ms;
use crate::domain::entity::link::NewLink;
use crate::domain::repository::LinkRepository;
use crate::domain::value_object::submitted_url::SubmittedUrl;
use crate::error::{LinksError, LinksResult};

/// One item of an import batch
pub struct ImportItem {
    pub url: String,
    pub title: String,
    pub tag_ids: Vec<i64>,
}

/// Aggregate outcome of an import batch
#[derive(Debug, PartialEq, Eq)]
pub struct ImportSummary {
    pub imported: u32,
    pub skipped: u32,
}

/// Bulk import use case
pub struct BulkImportUseCase<L>
where
    L: LinkRepository,
{
    repo: Arc<L>,
}

impl<L> BulkImportUseCase<L>
where
    L: LinkRepository,
{
    pub fn new(repo: Arc<L>) -> Self {
        Self { repo }
    }

    pub async fn execute(
        &self,
        actor: &ViewerIdentity,
        items: Vec<ImportItem>,
    ) -> LinksResult<ImportSummary> {
        if !actor.role.is_admin() {
            return Err(LinksError::Forbidden("Admin role required".to_string()));
        }

        let mut imported = 0u32;
        let mut skipped = 0u32;

        for item in items {
            match self.import_one(actor, item).await {
                Ok(true) => imported += 1,
                Ok(false) => skipped += 1,
                Err(err) => {
                    tracing::warn!(error = %err, "Import item failed, skipping");
                    skipped += 1;
                }
            }
        }

        tracing::info!(imported, skipped, actor = %actor.user_id, "Bulk import finished");

        Ok(ImportSummary { imported, skipped })
    }

    /// `Ok(false)` means the URL already existed.
    async fn import_one(&self, actor: &ViewerIdentity, item: ImportItem) -> LinksResult<bool> {
        let url = SubmittedUrl::new(item.url).map_err(LinksError::from)?;

        let title = item.title.trim().to_string();
        if title.is_empty() {
            return Err(LinksError::Validation("Title is required".to_string()));
        }

        let new_link = NewLink::imported(url, title, actor.user_id, item.tag_ids, now_ms());

        match self.repo.create(&new_link).await {
            Ok(_) => Ok(true),
            // Duplicates within the batch and against existing rows
            // both land here
            Err(LinksError::DuplicateUrl) => Ok(false),
            Err(err) => Err(err),
        }
    }
}
