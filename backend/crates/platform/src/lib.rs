//! Platform Infrastructure
//!
//! Domain-free plumbing shared by the backend crates:
//! - `crypto` - random bytes, hashing, encoding helpers
//! - `password` - Argon2id password hashing
//! - `bearer` - Authorization header parsing

pub mod bearer;
pub mod crypto;
pub mod password;
