//! Data Transfer Objects
//!
//! Request/response types for the links API. All fields are camelCase
//! on the wire; timestamps are epoch milliseconds.

use kernel::viewer::{Role, ViewerIdentity};
use serde::{Deserialize, Serialize};

use crate::domain::entity::link::{Link, TagRef};
use crate::domain::entity::tag::TagWithUsage;
use crate::domain::value_object::link_status::LinkStatus;

// ============================================================================
// Requests
// ============================================================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitLinkRequest {
    pub url: String,
    pub title: String,
    #[serde(default)]
    pub tag_ids: Vec<i64>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct NextLinkRequest {
    #[serde(default)]
    pub exclude_urls: Vec<String>,
    #[serde(default)]
    pub approval_mode: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateLinkRequest {
    pub title: Option<String>,
    pub tag_ids: Option<Vec<i64>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportRequest {
    pub urls: Vec<ImportItemDto>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportItemDto {
    pub url: String,
    pub title: String,
    #[serde(default)]
    pub tag_ids: Vec<i64>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTagRequest {
    pub name: String,
    pub display_name: String,
    pub description: Option<String>,
    pub color: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTagRequest {
    pub display_name: Option<String>,
    pub description: Option<String>,
    pub color: Option<String>,
}

// ============================================================================
// Responses
// ============================================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TagRefDto {
    pub id: i64,
    pub name: String,
    pub display_name: String,
}

impl TagRefDto {
    fn from_ref(tag: &TagRef) -> Self {
        Self {
            id: tag.id,
            name: tag.name.clone(),
            display_name: tag.display_name.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkDto {
    pub id: i64,
    pub url: String,
    pub title: String,
    pub submitter_id: Option<String>,
    pub status: LinkStatus,
    pub created_at: i64,
    pub approved_at: Option<i64>,
    pub approved_by: Option<String>,
    pub tags: Vec<TagRefDto>,
}

impl LinkDto {
    pub fn from_link(link: &Link) -> Self {
        Self {
            id: link.id,
            url: link.url.as_str().to_string(),
            title: link.title.clone(),
            submitter_id: link.submitter_id.map(|id| id.to_string()),
            status: link.status,
            created_at: link.created_at_ms,
            approved_at: link.approved_at_ms,
            approved_by: link.approved_by.map(|id| id.to_string()),
            tags: link.tags.iter().map(TagRefDto::from_ref).collect(),
        }
    }
}

/// Viewer summary echoed back so clients can adapt their UI
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewerDto {
    pub id: String,
    pub user_name: String,
    pub role: Role,
}

impl ViewerDto {
    pub fn from_identity(identity: &ViewerIdentity) -> Self {
        Self {
            id: identity.user_id.to_string(),
            user_name: identity.user_name.clone(),
            role: identity.role,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListLinksResponse {
    pub urls: Vec<LinkDto>,
    pub pending_count: i64,
    pub user: Option<ViewerDto>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitLinkResponse {
    pub url_id: i64,
    pub message: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NextLinkResponse {
    /// `null` when nothing qualifies
    pub url: Option<LinkDto>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportResponse {
    pub imported: u32,
    pub skipped: u32,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TagDto {
    pub id: i64,
    pub name: String,
    pub display_name: String,
    pub description: Option<String>,
    pub color: Option<String>,
    pub url_count: i64,
}

impl TagDto {
    pub fn from_usage(usage: &TagWithUsage) -> Self {
        Self {
            id: usage.tag.id,
            name: usage.tag.name.as_str().to_string(),
            display_name: usage.tag.display_name.clone(),
            description: usage.tag.description.clone(),
            color: usage.tag.color.clone(),
            url_count: usage.url_count,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListTagsResponse {
    pub tags: Vec<TagDto>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_object::submitted_url::SubmittedUrl;
    use uuid::Uuid;

    #[test]
    fn test_link_dto_serialization() {
        let submitter = Uuid::new_v4();
        let link = Link {
            id: 7,
            url: SubmittedUrl::new("https://example.com").unwrap(),
            title: "Example".to_string(),
            submitter_id: Some(submitter),
            status: LinkStatus::Pending,
            created_at_ms: 1_700_000_000_000,
            approved_at_ms: None,
            approved_by: None,
            tags: vec![TagRef {
                id: 1,
                name: "ai".to_string(),
                display_name: "AI".to_string(),
            }],
        };

        let json = serde_json::to_value(LinkDto::from_link(&link)).unwrap();
        assert_eq!(json["id"], 7);
        assert_eq!(json["status"], "pending");
        assert_eq!(json["submitterId"], submitter.to_string());
        assert_eq!(json["approvedAt"], serde_json::Value::Null);
        assert_eq!(json["tags"][0]["displayName"], "AI");
    }

    #[test]
    fn test_next_link_request_defaults() {
        let req: NextLinkRequest = serde_json::from_str("{}").unwrap();
        assert!(req.exclude_urls.is_empty());
        assert!(!req.approval_mode);
    }
}
