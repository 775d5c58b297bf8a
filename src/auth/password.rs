//! Password hashing behind a pluggable hasher seam
//!
//! Stored credentials are one-way PHC strings; the concrete algorithm sits
//! behind [`CredentialHasher`] so it can be swapped without touching callers.
//! The default is Argon2id with per-password random salts.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PasswordError {
    #[error("Failed to hash password: {0}")]
    HashingFailed(String),

    #[error("Failed to verify password: {0}")]
    VerificationFailed(String),

    #[error("Invalid password hash format: {0}")]
    InvalidHashFormat(String),
}

/// One-way credential hashing: `hash(plain) -> digest`, `verify(plain, digest) -> bool`.
pub trait CredentialHasher: Send + Sync {
    fn hash(&self, plain: &str) -> Result<String, PasswordError>;
    fn verify(&self, plain: &str, digest: &str) -> Result<bool, PasswordError>;
}

/// Argon2id with default parameters and a fresh 16-byte salt per hash.
pub struct Argon2Hasher;

impl CredentialHasher for Argon2Hasher {
    fn hash(&self, plain: &str) -> Result<String, PasswordError> {
        let salt = SaltString::generate(&mut OsRng);
        let digest = Argon2::default()
            .hash_password(plain.as_bytes(), &salt)
            .map_err(|e| PasswordError::HashingFailed(e.to_string()))?;
        Ok(digest.to_string())
    }

    fn verify(&self, plain: &str, digest: &str) -> Result<bool, PasswordError> {
        let parsed = PasswordHash::new(digest)
            .map_err(|e| PasswordError::InvalidHashFormat(e.to_string()))?;
        match Argon2::default().verify_password(plain.as_bytes(), &parsed) {
            Ok(()) => Ok(true),
            Err(argon2::password_hash::Error::Password) => Ok(false),
            Err(e) => Err(PasswordError::VerificationFailed(e.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_then_verify() {
        let hasher = Argon2Hasher;
        let digest = hasher.hash("hunter2!").unwrap();
        assert!(digest.starts_with("$argon2id$"));
        assert!(hasher.verify("hunter2!", &digest).unwrap());
        assert!(!hasher.verify("hunter3!", &digest).unwrap());
    }

    #[test]
    fn test_salts_differ_per_hash() {
        let hasher = Argon2Hasher;
        let a = hasher.hash("same-password").unwrap();
        let b = hasher.hash("same-password").unwrap();
        assert_ne!(a, b);
        assert!(hasher.verify("same-password", &a).unwrap());
        assert!(hasher.verify("same-password", &b).unwrap());
    }

    #[test]
    fn test_garbage_digest_is_an_error() {
        let hasher = Argon2Hasher;
        assert!(matches!(
            hasher.verify("anything", "not-a-phc-string"),
            Err(PasswordError::InvalidHashFormat(_))
        ));
    }
}
