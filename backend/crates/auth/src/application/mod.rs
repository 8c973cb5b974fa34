//! Application Layer
//!
//! Use cases orchestrating domain objects and repositories.

pub mod config;
pub mod login;
pub mod logout;
pub mod register;
pub mod resolve_viewer;

pub use login::{LoginInput, LoginOutput, LoginUseCase};
pub use logout::LogoutUseCase;
pub use register::{RegisterInput, RegisterOutput, RegisterUseCase};
pub use resolve_viewer::ResolveViewerUseCase;

/// Current time as Unix epoch milliseconds.
pub(crate) fn now_ms() -> i64 {
    chrono::Utc::now().timestamp_millis()
}
