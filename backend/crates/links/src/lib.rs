//! Links (URL Catalog) Backend Module
//!
//! Community URL discovery: users submit links, moderators approve or
//! reject them, and clients pull a random link from the approved pool.
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, value objects, repository traits, and the
//!   pure visibility/selection logic
//! - `application/` - Use cases
//! - `infra/` - PostgreSQL implementations
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Moderation Model
//! - A link starts `pending` and moves exactly once to `live` or
//!   `rejected`; both are terminal
//! - The status transition is compare-and-set at the storage layer, so
//!   two moderators racing on the same link cannot both win
//! - Bulk import (admin only) creates links directly in `live`
//!
//! ## Selection Model
//! - Selection is a pure function over a snapshot of the catalog; the
//!   server holds no per-client state
//! - Clients keep their own seen-history and pass it as `excludeUrls`

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;


// Re-exports for convenience
pub use domain::repository::ViewerResolver;
pub use error::{LinksError, LinksResult};
pub use infra::postgres::PgLinksRepository;
pub use presentation::router::{links_router, links_router_generic};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};
