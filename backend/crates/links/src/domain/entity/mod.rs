pub mod link;
pub mod tag;

pub use link::{Link, NewLink, TagRef, MAX_TAGS_PER_LINK};
pub use tag::{NewTag, Tag, TagPatch, TagWithUsage};
