//! Tag Entity

use uuid::Uuid;

use crate::domain::value_object::tag_name::TagName;

/// A tag available for classifying links.
///
/// `name` is the normalized, unique lookup key; `display_name` is what
/// clients render.
#[derive(Debug, Clone)]
pub struct Tag {
    pub id: i64,
    pub name: TagName,
    pub display_name: String,
    pub description: Option<String>,
    pub color: Option<String>,
    pub created_by: Option<Uuid>,
    pub created_at_ms: i64,
}

/// Tag plus how many links currently carry it, for listings
#[derive(Debug, Clone)]
pub struct TagWithUsage {
    pub tag: Tag,
    pub url_count: i64,
}

/// A tag about to be persisted
#[derive(Debug, Clone)]
pub struct NewTag {
    pub name: TagName,
    pub display_name: String,
    pub description: Option<String>,
    pub color: Option<String>,
    pub created_by: Uuid,
    pub created_at_ms: i64,
}

/// Partial update for a tag; `None` fields are left unchanged
#[derive(Debug, Clone, Default)]
pub struct TagPatch {
    pub display_name: Option<String>,
    pub description: Option<String>,
    pub color: Option<String>,
}

impl TagPatch {
    pub fn is_empty(&self) -> bool {
        self.display_name.is_none() && self.description.is_none() && self.color.is_none()
    }
}
