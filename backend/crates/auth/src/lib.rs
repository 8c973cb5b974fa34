//! Auth (Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Business logic, entities, repository traits
//! - `application/` - Use cases and application services
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Features
//! - Account registration with email + username + password
//! - Login/logout with opaque bearer tokens (server-side sessions)
//! - Role-based access (User, Moderator, Admin)
//! - Viewer resolution for the link catalog (bearer token -> identity)
//!
//! ## Security Model
//! - Passwords hashed with Argon2id (`platform::password`)
//! - Session tokens are 32 random bytes, never derived from user data
//! - Expired sessions resolve to anonymous and are deleted on sight

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::AuthConfig;
pub use error::{AuthError, AuthResult};
pub use infra::postgres::PgAuthRepository;
pub use presentation::router::auth_router;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};
