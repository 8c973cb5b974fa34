//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use kernel::viewer::ViewerIdentity;
use uuid::Uuid;

use crate::domain::entity::link::{Link, NewLink};
use crate::domain::entity::tag::{NewTag, Tag, TagPatch, TagWithUsage};
use crate::domain::value_object::link_status::LinkStatus;
use crate::error::LinksResult;

/// Link repository trait
#[trait_variant::make(LinkRepository: Send)]
pub trait LocalLinkRepository {
    /// Persist a new link with its tag associations.
    ///
    /// Fails with `DuplicateUrl` if the URL already exists. The unique
    /// constraint on the URL column is the authority; callers must not
    /// rely on a prior existence check.
    async fn create(&self, new_link: &NewLink) -> LinksResult<i64>;

    /// Find a link by id, including its tags
    async fn find_by_id(&self, id: i64) -> LinksResult<Option<Link>>;

    /// All live and pending links, newest first, with tags.
    ///
    /// Rejected links never appear here; they are reachable only by
    /// direct id lookup.
    async fn list_recent(&self) -> LinksResult<Vec<Link>>;

    /// Resolve a pending link to `live` or `rejected`, stamping
    /// approver and time.
    ///
    /// Compare-and-set: returns `false` when the link was no longer
    /// pending at commit time (a concurrent moderator won the race).
    async fn resolve(
        &self,
        id: i64,
        status: LinkStatus,
        approver: Uuid,
        now_ms: i64,
    ) -> LinksResult<bool>;

    /// Update the display title
    async fn update_title(&self, id: i64, title: &str) -> LinksResult<()>;

    /// Replace the tag association set atomically.
    ///
    /// Readers never observe a half-replaced state.
    async fn replace_tags(&self, id: i64, tag_ids: &[i64]) -> LinksResult<()>;

    /// Number of links currently pending moderation
    async fn pending_count(&self) -> LinksResult<i64>;
}

/// Tag repository trait
#[trait_variant::make(TagRepository: Send)]
pub trait LocalTagRepository {
    /// Persist a new tag. Fails with `DuplicateTag` on a normalized
    /// name collision.
    async fn create_tag(&self, new_tag: &NewTag) -> LinksResult<Tag>;

    /// Find a tag by id
    async fn find_tag_by_id(&self, id: i64) -> LinksResult<Option<Tag>>;

    /// All tags with usage counts, ordered by display name
    async fn list_tags(&self) -> LinksResult<Vec<TagWithUsage>>;

    /// Apply a partial update
    async fn update_tag(&self, id: i64, patch: &TagPatch) -> LinksResult<()>;

    /// Delete a tag, cascading removal of its link associations
    async fn delete_tag(&self, id: i64) -> LinksResult<()>;
}

/// Resolves a bearer token to a viewer identity.
///
/// Provided by the auth feature; this crate trusts the resolution and
/// performs no credential verification itself.
#[trait_variant::make(ViewerResolver: Send)]
pub trait LocalViewerResolver {
    /// `None` for absent, invalid, or expired credentials
    async fn resolve(&self, token: &str) -> LinksResult<Option<ViewerIdentity>>;
}
