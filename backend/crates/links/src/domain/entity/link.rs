//! Link Entity

use uuid::Uuid;

use crate::domain::value_object::link_status::LinkStatus;
use crate::domain::value_object::submitted_url::SubmittedUrl;

/// Hard cap on tag associations per link. Longer inputs are truncated,
/// not rejected.
pub const MAX_TAGS_PER_LINK: usize = 3;

/// Order-preserving dedup plus the cap. Every write path that accepts
/// tag ids goes through this; `link_tags` keys on `(link_id, tag_id)`,
/// so a repeated id must never reach the store.
pub fn normalize_tag_ids(mut tag_ids: Vec<i64>) -> Vec<i64> {
    let mut seen: Vec<i64> = Vec::new();
    tag_ids.retain(|id| {
        if seen.contains(id) {
            false
        } else {
            seen.push(*id);
            true
        }
    });
    tag_ids.truncate(MAX_TAGS_PER_LINK);
    tag_ids
}

/// Lightweight tag reference carried on each link
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagRef {
    pub id: i64,
    pub name: String,
    pub display_name: String,
}

/// A submitted URL record with moderation status.
///
/// `approved_at_ms`/`approved_by` are stamped together, exactly once,
/// on the transition out of `pending`. Timestamps are epoch millis.
#[derive(Debug, Clone)]
pub struct Link {
    pub id: i64,
    pub url: SubmittedUrl,
    pub title: String,
    /// Null only for administrative bulk import
    pub submitter_id: Option<Uuid>,
    pub status: LinkStatus,
    pub created_at_ms: i64,
    pub approved_at_ms: Option<i64>,
    pub approved_by: Option<Uuid>,
    pub tags: Vec<TagRef>,
}

/// A link about to be persisted. The id is assigned by the store.
#[derive(Debug, Clone)]
pub struct NewLink {
    pub url: SubmittedUrl,
    pub title: String,
    pub submitter_id: Option<Uuid>,
    pub status: LinkStatus,
    pub created_at_ms: i64,
    pub approved_at_ms: Option<i64>,
    pub approved_by: Option<Uuid>,
    pub tag_ids: Vec<i64>,
}

impl NewLink {
    /// A regular submission, awaiting moderation.
    pub fn pending(
        url: SubmittedUrl,
        title: String,
        submitter_id: Uuid,
        tag_ids: Vec<i64>,
        now_ms: i64,
    ) -> Self {
        Self {
            url,
            title,
            submitter_id: Some(submitter_id),
            status: LinkStatus::Pending,
            created_at_ms: now_ms,
            approved_at_ms: None,
            approved_by: None,
            tag_ids: normalize_tag_ids(tag_ids),
        }
    }

    /// A bulk-imported link, created directly in `live` with the
    /// importing admin as approver.
    pub fn imported(
        url: SubmittedUrl,
        title: String,
        importer: Uuid,
        tag_ids: Vec<i64>,
        now_ms: i64,
    ) -> Self {
        Self {
            url,
            title,
            submitter_id: Some(importer),
            status: LinkStatus::Live,
            created_at_ms: now_ms,
            approved_at_ms: Some(now_ms),
            approved_by: Some(importer),
            tag_ids: normalize_tag_ids(tag_ids),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn url(s: &str) -> SubmittedUrl {
        SubmittedUrl::new(s).unwrap()
    }

    #[test]
    fn test_pending_truncates_tags() {
        let new_link = NewLink::pending(
            url("https://example.com"),
            "Example".to_string(),
            Uuid::new_v4(),
            vec![1, 2, 3, 4, 5],
            1_000,
        );
        assert_eq!(new_link.tag_ids, vec![1, 2, 3]);
        assert_eq!(new_link.status, LinkStatus::Pending);
        assert!(new_link.approved_at_ms.is_none());
        assert!(new_link.approved_by.is_none());
    }

    #[test]
    fn test_normalize_drops_repeats_before_capping() {
        assert_eq!(normalize_tag_ids(vec![5, 5]), vec![5]);
        assert_eq!(normalize_tag_ids(vec![5, 5, 7, 5, 8, 9]), vec![5, 7, 8]);
        assert_eq!(normalize_tag_ids(vec![]), Vec::<i64>::new());
    }

    #[test]
    fn test_pending_dedups_tags() {
        let new_link = NewLink::pending(
            url("https://example.com"),
            "Example".to_string(),
            Uuid::new_v4(),
            vec![5, 5, 7],
            1_000,
        );
        assert_eq!(new_link.tag_ids, vec![5, 7]);
    }

    #[test]
    fn test_imported_is_pre_approved() {
        let admin = Uuid::new_v4();
        let new_link = NewLink::imported(
            url("https://example.com"),
            "Example".to_string(),
            admin,
            vec![],
            2_000,
        );
        assert_eq!(new_link.status, LinkStatus::Live);
        assert_eq!(new_link.approved_at_ms, Some(2_000));
        assert_eq!(new_link.approved_by, Some(admin));
        assert_eq!(new_link.submitter_id, Some(admin));
    }
}
