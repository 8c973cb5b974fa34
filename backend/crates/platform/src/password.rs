//! Password Hashing
//!
//! Argon2id hashing in PHC string format. Input is NFKC-normalized before
//! hashing so that visually identical passwords typed on different
//! platforms verify against the same hash.

use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::password_hash::rand_core::OsRng;
use argon2::Argon2;
use thiserror::Error;
use unicode_normalization::UnicodeNormalization;

#[derive(Debug, Error)]
pub enum PasswordError {
    #[error("Failed to hash password")]
    Hash,
    #[error("Stored password hash is malformed")]
    MalformedHash,
}

/// Normalize a password to NFKC form
fn normalize(raw: &str) -> String {
    raw.nfkc().collect()
}

/// Hash a password with Argon2id and a fresh random salt
pub fn hash_password(raw: &str) -> Result<String, PasswordError> {
    let normalized = normalize(raw);
    let salt = SaltString::generate(&mut OsRng);

    let hash = Argon2::default()
        .hash_password(normalized.as_bytes(), &salt)
        .map_err(|_| PasswordError::Hash)?;

    Ok(hash.to_string())
}

/// Verify a password against a stored PHC hash string
pub fn verify_password(raw: &str, stored: &str) -> Result<bool, PasswordError> {
    let normalized = normalize(raw);
    let parsed = PasswordHash::new(stored).map_err(|_| PasswordError::MalformedHash)?;

    Ok(Argon2::default()
        .verify_password(normalized.as_bytes(), &parsed)
        .is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let hash = hash_password("correct horse battery staple").unwrap();
        assert!(hash.starts_with("$argon2"));
        assert!(verify_password("correct horse battery staple", &hash).unwrap());
        assert!(!verify_password("incorrect horse", &hash).unwrap());
    }

    #[test]
    fn test_salts_differ() {
        let a = hash_password("same password").unwrap();
        let b = hash_password("same password").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_nfkc_equivalence() {
        // U+00E9 (precomposed) vs U+0065 U+0301 (combining acute)
        let composed = "caf\u{00e9}";
        let decomposed = "cafe\u{0301}";

        let hash = hash_password(composed).unwrap();
        assert!(verify_password(decomposed, &hash).unwrap());
    }

    #[test]
    fn test_malformed_hash() {
        assert!(matches!(
            verify_password("anything", "not-a-phc-string"),
            Err(PasswordError::MalformedHash)
        ));
    }
}
