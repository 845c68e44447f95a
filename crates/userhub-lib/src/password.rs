//! Password hashing port and its Argon2id implementation.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordVerifier, SaltString},
    Argon2,
};

use crate::error::{Error, Result};

/// Port for one-way password hashing.
///
/// Hashing is CPU-bound and synchronous; callers on async executors should
/// treat a call as a short blocking section.
pub trait PasswordHasher: Send + Sync {
    /// Hash a plaintext password into a self-describing hash string.
    fn hash(&self, password: &str) -> Result<String>;

    /// Check a plaintext password against a stored hash.
    ///
    /// Returns `Ok(false)` on mismatch; `Err` only when the stored hash
    /// itself cannot be parsed.
    fn verify(&self, password: &str, hash: &str) -> Result<bool>;
}

/// Argon2id-backed [`PasswordHasher`] with per-password random salts.
#[derive(Debug, Default, Clone)]
pub struct Argon2Hasher;

impl Argon2Hasher {
    pub fn new() -> Self {
        Self
    }
}

impl PasswordHasher for Argon2Hasher {
    fn hash(&self, password: &str) -> Result<String> {
        let salt = SaltString::generate(&mut OsRng);
        argon2::password_hash::PasswordHasher::hash_password(
            &Argon2::default(),
            password.as_bytes(),
            &salt,
        )
        .map(|hash| hash.to_string())
        .map_err(|e| Error::PasswordHash(e.to_string()))
    }

    fn verify(&self, password: &str, hash: &str) -> Result<bool> {
        let parsed = PasswordHash::new(hash).map_err(|e| Error::PasswordHash(e.to_string()))?;
        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_and_verify_roundtrip() {
        let hasher = Argon2Hasher::new();
        let hash = hasher.hash("Secret1!").unwrap();
        assert!(hash.starts_with("$argon2"));
        assert!(hasher.verify("Secret1!", &hash).unwrap());
        assert!(!hasher.verify("wrong", &hash).unwrap());
    }

    #[test]
    fn hashes_are_salted() {
        let hasher = Argon2Hasher::new();
        let a = hasher.hash("Secret1!").unwrap();
        let b = hasher.hash("Secret1!").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn verify_rejects_garbage_hash() {
        let hasher = Argon2Hasher::new();
        assert!(matches!(
            hasher.verify("Secret1!", "not-a-hash"),
            Err(Error::PasswordHash(_))
        ));
    }
}
