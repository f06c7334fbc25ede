//! Salted password hashing.
//!
//! Stored form: `sha256$<salt>$<hex digest of salt || password>`.

use std::fmt;

use sha2::{Digest, Sha256};

const SCHEME: &str = "sha256";

/// An encoded password hash as kept in storage.
#[derive(Clone, PartialEq, Eq)]
pub struct PasswordHash(String);

impl PasswordHash {
    /// Hash `password` with a fresh random salt.
    #[must_use]
    pub fn create(password: &str) -> Self {
        let salt = uuid::Uuid::new_v4().simple().to_string();
        Self::with_salt(&salt, password)
    }

    fn with_salt(salt: &str, password: &str) -> Self {
        Self(format!("{SCHEME}${salt}${}", digest(salt, password)))
    }

    /// Wrap an already-encoded hash loaded from storage.
    #[must_use]
    pub fn from_encoded(encoded: impl Into<String>) -> Self {
        Self(encoded.into())
    }

    /// The encoded representation to persist.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Check `password` against this hash. Unknown encodings never verify.
    #[must_use]
    pub fn verify(&self, password: &str) -> bool {
        let mut parts = self.0.splitn(3, '$');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(SCHEME), Some(salt), Some(expected)) => {
                constant_time_eq(digest(salt, password).as_bytes(), expected.as_bytes())
            }
            _ => false,
        }
    }
}

// Never leak the hash into logs.
impl fmt::Debug for PasswordHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PasswordHash(..)")
    }
}

fn digest(salt: &str, password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(salt.as_bytes());
    hasher.update(password.as_bytes());
    format!("{:x}", hasher.finalize())
}

fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    a.len() == b.len() && a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_verify_matching_password() {
        let hash = PasswordHash::create("password123");
        assert!(hash.verify("password123"));
    }

    #[test]
    fn should_reject_wrong_password() {
        let hash = PasswordHash::create("password123");
        assert!(!hash.verify("password124"));
    }

    #[test]
    fn should_salt_each_hash_differently() {
        let a = PasswordHash::create("same");
        let b = PasswordHash::create("same");
        assert_ne!(a, b);
    }

    #[test]
    fn should_verify_hash_loaded_from_storage() {
        let stored = PasswordHash::create("secret").as_str().to_string();
        assert!(PasswordHash::from_encoded(stored).verify("secret"));
    }

    #[test]
    fn should_not_verify_unknown_scheme() {
        let hash = PasswordHash::from_encoded("$2b$10$abcdefghijklmnopqrstuv");
        assert!(!hash.verify("anything"));
    }

    #[test]
    fn should_redact_debug_output() {
        let hash = PasswordHash::create("secret");
        assert_eq!(format!("{hash:?}"), "PasswordHash(..)");
    }
}
