//! Application Layer
//!
//! Use cases orchestrating the catalog domain and repositories.

pub mod bulk_import;
pub mod list_links;
pub mod moderate_link;
pub mod pick_link;
pub mod submit_link;
pub mod tags;
pub mod update_link;

pub use bulk_import::{BulkImportUseCase, ImportItem, ImportSummary};
pub use list_links::{ListLinksOutput, ListLinksUseCase};
pub use moderate_link::ModerateLinkUseCase;
pub use pick_link::{PickLinkInput, PickLinkUseCase};
pub use submit_link::{SubmitLinkInput, SubmitLinkUseCase};
pub use tags::{
    CreateTagInput, CreateTagUseCase, DeleteTagUseCase, ListTagsUseCase, UpdateTagInput,
    UpdateTagUseCase,
};
pub use update_link::{UpdateLinkInput, UpdateLinkUseCase};

/// Current time as Unix epoch milliseconds.
pub(crate) fn now_ms() -> i64 {
    chrono::Utc::now().timestamp_millis()
}
