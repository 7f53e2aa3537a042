//! Password hashing built on bcrypt.
//!
//! bcrypt hashes are self-describing: the salt and cost factor are
//! embedded in the hash string, so the cost can be raised later without
//! invalidating hashes minted at the old cost.

use bcrypt::DEFAULT_COST;

use crate::error::AppError;

/// Hash a plaintext password with a fresh random salt at the default cost.
pub fn hash_password(plaintext: &str) -> Result<String, AppError> {
    bcrypt::hash(plaintext, DEFAULT_COST)
        .map_err(|e| AppError::internal(format!("failed to hash password: {e}")))
}

/// Check a plaintext password against a stored hash.
///
/// Returns false for any mismatch, including a malformed stored hash.
/// Callers never learn why verification failed, and the underlying
/// comparison is constant-time with respect to the hash bytes.
pub fn verify_password(stored_hash: &str, plaintext: &str) -> bool {
    bcrypt::verify(plaintext, stored_hash).unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::{hash_password, verify_password};

    // Low cost keeps tests fast; the hash format embeds the cost, so
    // verification behaves the same as at the default cost.
    const TEST_COST: u32 = 4;

    #[test]
    fn test_hash_and_verify_roundtrip() {
        let hash = bcrypt::hash("password1", TEST_COST).unwrap();
        assert!(verify_password(&hash, "password1"));
        assert!(!verify_password(&hash, "password2"));
    }

    #[test]
    fn test_default_cost_hash_verifies() {
        let hash = hash_password("secret").unwrap();
        assert!(hash.starts_with("$2"));
        assert!(verify_password(&hash, "secret"));
    }

    #[test]
    fn test_hashes_are_salted() {
        let a = bcrypt::hash("password1", TEST_COST).unwrap();
        let b = bcrypt::hash("password1", TEST_COST).unwrap();
        // Same plaintext, fresh salt each time
        assert_ne!(a, b);
        assert!(verify_password(&a, "password1"));
        assert!(verify_password(&b, "password1"));
    }

    #[test]
    fn test_cost_is_embedded_in_hash() {
        // A hash minted at a non-default cost still verifies; the stored
        // parameters drive recomputation, not the current default.
        let hash = bcrypt::hash("password1", 6).unwrap();
        assert!(verify_password(&hash, "password1"));
    }

    #[test]
    fn test_malformed_hash_is_a_mismatch() {
        assert!(!verify_password("not-a-bcrypt-hash", "password1"));
        assert!(!verify_password("", "password1"));
        assert!(!verify_password("$2b$04$truncated", "password1"));
    }
}
