//! Password hashing capability.
//!
//! The Auth Gate never reimplements credential hashing; it holds a
//! [`PasswordVerifier`] and makes a single comparison call per login.

use sha2::{Digest, Sha256};

/// Capability interface for salted password hashing and verification.
///
/// Injected into [`crate::application::services::AuthService`] so that the
/// hashing primitive stays swappable and mockable.
#[cfg_attr(test, mockall::automock)]
pub trait PasswordVerifier: Send + Sync {
    /// Hashes `password` with `salt`, returning a hex digest.
    fn hash(&self, password: &str, salt: &str) -> String;

    /// Returns true if `password` hashed with `salt` matches `hash`.
    fn verify(&self, password: &str, hash: &str, salt: &str) -> bool;
}

/// Salted SHA-256 implementation of [`PasswordVerifier`].
#[derive(Debug, Default)]
pub struct Sha256Verifier;

impl Sha256Verifier {
    pub fn new() -> Self {
        Self
    }
}

impl PasswordVerifier for Sha256Verifier {
    fn hash(&self, password: &str, salt: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(salt.as_bytes());
        hasher.update(password.as_bytes());
        hex::encode(hasher.finalize())
    }

    fn verify(&self, password: &str, hash: &str, salt: &str) -> bool {
        self.hash(password, salt) == hash
    }
}

/// Generates a random hex salt for a new user.
///
/// # Panics
///
/// Panics if the system random number generator fails (extremely rare).
pub fn generate_salt() -> String {
    let mut buffer = [0u8; 16];
    getrandom::fill(&mut buffer).expect("Failed to generate random bytes");
    hex::encode(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_is_deterministic() {
        let v = Sha256Verifier::new();
        assert_eq!(v.hash("secret", "salt1"), v.hash("secret", "salt1"));
    }

    #[test]
    fn test_hash_is_hex_sha256() {
        let v = Sha256Verifier::new();
        let h = v.hash("secret", "salt1");
        assert_eq!(h.len(), 64);
        assert!(h.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_salt_changes_hash() {
        let v = Sha256Verifier::new();
        assert_ne!(v.hash("secret", "salt1"), v.hash("secret", "salt2"));
    }

    #[test]
    fn test_verify_roundtrip() {
        let v = Sha256Verifier::new();
        let salt = generate_salt();
        let hash = v.hash("hunter2", &salt);

        assert!(v.verify("hunter2", &hash, &salt));
        assert!(!v.verify("hunter3", &hash, &salt));
    }

    #[test]
    fn test_generate_salt_unique() {
        assert_ne!(generate_salt(), generate_salt());
        assert_eq!(generate_salt().len(), 32);
    }
}
