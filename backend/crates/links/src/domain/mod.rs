//! Domain Layer
//!
//! Entities, value objects, repository traits, and the pure
//! visibility/selection logic at the heart of the catalog.

pub mod entity;
pub mod repository;
pub mod selection;
pub mod value_object;
pub mod visibility;

// Re-exports
pub use entity::link::{Link, NewLink, TagRef, MAX_TAGS_PER_LINK};
pub use entity::tag::{NewTag, Tag, TagPatch, TagWithUsage};
pub use repository::{LinkRepository, TagRepository, ViewerResolver};
pub use value_object::link_status::LinkStatus;
pub use value_object::submitted_url::SubmittedUrl;
pub use value_object::tag_name::TagName;
