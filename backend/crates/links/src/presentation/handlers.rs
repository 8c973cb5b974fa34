//! HTTP Handlers

use axum::Json;
use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use std::sync::Arc;

use kernel::viewer::{Viewer, ViewerIdentity};
use platform::bearer::extract_bearer_token;

use crate::application::{
    BulkImportUseCase, CreateTagInput, CreateTagUseCase, DeleteTagUseCase, ImportItem,
    ListLinksUseCase, ListTagsUseCase, ModerateLinkUseCase, PickLinkInput, PickLinkUseCase,
    SubmitLinkInput, SubmitLinkUseCase, UpdateLinkInput, UpdateLinkUseCase, UpdateTagInput,
    UpdateTagUseCase,
};
use crate::domain::repository::{LinkRepository, TagRepository, ViewerResolver};
use crate::error::{LinksError, LinksResult};
use crate::presentation::dto::{
    CreateTagRequest, ImportRequest, ImportResponse, LinkDto, ListLinksResponse, ListTagsResponse,
    NextLinkRequest, NextLinkResponse, SubmitLinkRequest, SubmitLinkResponse, TagDto,
    UpdateLinkRequest, UpdateTagRequest, ViewerDto,
};

/// Shared state for links handlers
pub struct LinksAppState<R, V>
where
    R: LinkRepository + TagRepository + Clone + Send + Sync + 'static,
    V: ViewerResolver + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub viewer_resolver: Arc<V>,
}

impl<R, V> Clone for LinksAppState<R, V>
where
    R: LinkRepository + TagRepository + Clone + Send + Sync + 'static,
    V: ViewerResolver + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            repo: Arc::clone(&self.repo),
            viewer_resolver: Arc::clone(&self.viewer_resolver),
        }
    }
}

/// Resolve the request's bearer token to an identity, if any.
///
/// A missing or invalid token is not an error here; most routes serve
/// anonymous viewers a reduced view.
async fn current_identity<V>(
    resolver: &V,
    headers: &HeaderMap,
) -> LinksResult<Option<ViewerIdentity>>
where
    V: ViewerResolver + Send + Sync,
{
    match extract_bearer_token(headers) {
        Some(token) => resolver.resolve(&token).await,
        None => Ok(None),
    }
}

fn require_identity(identity: Option<ViewerIdentity>) -> LinksResult<ViewerIdentity> {
    identity.ok_or(LinksError::Unauthorized)
}

// ============================================================================
// Links
// ============================================================================

/// GET /api/urls
pub async fn list_links<R, V>(
    State(state): State<LinksAppState<R, V>>,
    headers: HeaderMap,
) -> LinksResult<Json<ListLinksResponse>>
where
    R: LinkRepository + TagRepository + Clone + Send + Sync + 'static,
    V: ViewerResolver + Send + Sync + 'static,
{
    let identity = current_identity(state.viewer_resolver.as_ref(), &headers).await?;
    let viewer = Viewer::from_identity(identity.as_ref());

    let use_case = ListLinksUseCase::new(state.repo.clone());
    let output = use_case.execute(&viewer).await?;

    Ok(Json(ListLinksResponse {
        urls: output.links.iter().map(LinkDto::from_link).collect(),
        pending_count: output.pending_count,
        user: identity.as_ref().map(ViewerDto::from_identity),
    }))
}

/// POST /api/urls
pub async fn submit_link<R, V>(
    State(state): State<LinksAppState<R, V>>,
    headers: HeaderMap,
    Json(req): Json<SubmitLinkRequest>,
) -> LinksResult<impl IntoResponse>
where
    R: LinkRepository + TagRepository + Clone + Send + Sync + 'static,
    V: ViewerResolver + Send + Sync + 'static,
{
    let identity =
        require_identity(current_identity(state.viewer_resolver.as_ref(), &headers).await?)?;

    let use_case = SubmitLinkUseCase::new(state.repo.clone());
    let url_id = use_case
        .execute(
            &identity,
            SubmitLinkInput {
                url: req.url,
                title: req.title,
                tag_ids: req.tag_ids,
            },
        )
        .await?;

    let body = SubmitLinkResponse {
        url_id,
        message: "URL submitted successfully. Waiting for moderator approval.",
    };

    Ok((StatusCode::CREATED, Json(body)))
}

/// POST /api/urls/next
pub async fn next_link<R, V>(
    State(state): State<LinksAppState<R, V>>,
    headers: HeaderMap,
    Json(req): Json<NextLinkRequest>,
) -> LinksResult<Json<NextLinkResponse>>
where
    R: LinkRepository + TagRepository + Clone + Send + Sync + 'static,
    V: ViewerResolver + Send + Sync + 'static,
{
    let identity = current_identity(state.viewer_resolver.as_ref(), &headers).await?;
    let viewer = Viewer::from_identity(identity.as_ref());

    let use_case = PickLinkUseCase::new(state.repo.clone());
    let picked = use_case
        .execute(
            &viewer,
            PickLinkInput {
                exclude_urls: req.exclude_urls,
                approval_mode: req.approval_mode,
            },
        )
        .await?;

    Ok(Json(NextLinkResponse {
        url: picked.as_ref().map(LinkDto::from_link),
    }))
}

/// POST /api/urls/{id}/approve
pub async fn approve_link<R, V>(
    State(state): State<LinksAppState<R, V>>,
    headers: HeaderMap,
    Path(id): Path<i64>,
) -> LinksResult<StatusCode>
where
    R: LinkRepository + TagRepository + Clone + Send + Sync + 'static,
    V: ViewerResolver + Send + Sync + 'static,
{
    let identity =
        require_identity(current_identity(state.viewer_resolver.as_ref(), &headers).await?)?;

    let use_case = ModerateLinkUseCase::new(state.repo.clone());
    use_case.approve(&identity, id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/urls/{id}/reject
pub async fn reject_link<R, V>(
    State(state): State<LinksAppState<R, V>>,
    headers: HeaderMap,
    Path(id): Path<i64>,
) -> LinksResult<StatusCode>
where
    R: LinkRepository + TagRepository + Clone + Send + Sync + 'static,
    V: ViewerResolver + Send + Sync + 'static,
{
    let identity =
        require_identity(current_identity(state.viewer_resolver.as_ref(), &headers).await?)?;

    let use_case = ModerateLinkUseCase::new(state.repo.clone());
    use_case.reject(&identity, id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// PATCH /api/urls/{id}
pub async fn update_link<R, V>(
    State(state): State<LinksAppState<R, V>>,
    headers: HeaderMap,
    Path(id): Path<i64>,
    Json(req): Json<UpdateLinkRequest>,
) -> LinksResult<StatusCode>
where
    R: LinkRepository + TagRepository + Clone + Send + Sync + 'static,
    V: ViewerResolver + Send + Sync + 'static,
{
    let identity =
        require_identity(current_identity(state.viewer_resolver.as_ref(), &headers).await?)?;

    let use_case = UpdateLinkUseCase::new(state.repo.clone());
    use_case
        .execute(
            &identity,
            id,
            UpdateLinkInput {
                title: req.title,
                tag_ids: req.tag_ids,
            },
        )
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/admin/import
pub async fn import_links<R, V>(
    State(state): State<LinksAppState<R, V>>,
    headers: HeaderMap,
    Json(req): Json<ImportRequest>,
) -> LinksResult<Json<ImportResponse>>
where
    R: LinkRepository + TagRepository + Clone + Send + Sync + 'static,
    V: ViewerResolver + Send + Sync + 'static,
{
    let identity =
        require_identity(current_identity(state.viewer_resolver.as_ref(), &headers).await?)?;

    let items: Vec<ImportItem> = req
        .urls
        .into_iter()
        .map(|item| ImportItem {
            url: item.url,
            title: item.title,
            tag_ids: item.tag_ids,
        })
        .collect();

    let use_case = BulkImportUseCase::new(state.repo.clone());
    let summary = use_case.execute(&identity, items).await?;

    Ok(Json(ImportResponse {
        imported: summary.imported,
        skipped: summary.skipped,
    }))
}

// ============================================================================
// Tags
// ============================================================================

/// GET /api/tags
pub async fn list_tags<R, V>(
    State(state): State<LinksAppState<R, V>>,
) -> LinksResult<Json<ListTagsResponse>>
where
    R: LinkRepository + TagRepository + Clone + Send + Sync + 'static,
    V: ViewerResolver + Send + Sync + 'static,
{
    let use_case = ListTagsUseCase::new(state.repo.clone());
    let tags = use_case.execute().await?;

    Ok(Json(ListTagsResponse {
        tags: tags.iter().map(TagDto::from_usage).collect(),
    }))
}

/// POST /api/tags
pub async fn create_tag<R, V>(
    State(state): State<LinksAppState<R, V>>,
    headers: HeaderMap,
    Json(req): Json<CreateTagRequest>,
) -> LinksResult<impl IntoResponse>
where
    R: LinkRepository + TagRepository + Clone + Send + Sync + 'static,
    V: ViewerResolver + Send + Sync + 'static,
{
    let identity =
        require_identity(current_identity(state.viewer_resolver.as_ref(), &headers).await?)?;

    let use_case = CreateTagUseCase::new(state.repo.clone());
    let tag = use_case
        .execute(
            &identity,
            CreateTagInput {
                name: req.name,
                display_name: req.display_name,
                description: req.description,
                color: req.color,
            },
        )
        .await?;

    let body = TagDto {
        id: tag.id,
        name: tag.name.as_str().to_string(),
        display_name: tag.display_name,
        description: tag.description,
        color: tag.color,
        url_count: 0,
    };

    Ok((StatusCode::CREATED, Json(body)))
}

/// PATCH /api/tags/{id}
pub async fn update_tag<R, V>(
    State(state): State<LinksAppState<R, V>>,
    headers: HeaderMap,
    Path(id): Path<i64>,
    Json(req): Json<UpdateTagRequest>,
) -> LinksResult<StatusCode>
where
    R: LinkRepository + TagRepository + Clone + Send + Sync + 'static,
    V: ViewerResolver + Send + Sync + 'static,
{
    let identity =
        require_identity(current_identity(state.viewer_resolver.as_ref(), &headers).await?)?;

    let use_case = UpdateTagUseCase::new(state.repo.clone());
    use_case
        .execute(
            &identity,
            id,
            UpdateTagInput {
                display_name: req.display_name,
                description: req.description,
                color: req.color,
            },
        )
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/tags/{id}
pub async fn delete_tag<R, V>(
    State(state): State<LinksAppState<R, V>>,
    headers: HeaderMap,
    Path(id): Path<i64>,
) -> LinksResult<StatusCode>
where
    R: LinkRepository + TagRepository + Clone + Send + Sync + 'static,
    V: ViewerResolver + Send + Sync + 'static,
{
    let identity =
        require_identity(current_identity(state.viewer_resolver.as_ref(), &headers).await?)?;

    let use_case = DeleteTagUseCase::new(state.repo.clone());
    use_case.execute(&identity, id).await?;

    Ok(StatusCode::NO_CONTENT)
}
