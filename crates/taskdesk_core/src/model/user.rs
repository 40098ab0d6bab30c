//! Credential record and password hashing.
//!
//! # Responsibility
//! - Define the per-user credential record persisted at signup.
//! - Own the salted-hash scheme and username rules.
//!
//! # Invariants
//! - Plaintext passwords are never stored; only `sha256(salt + password)`.
//! - `username` doubles as a file-path key and must satisfy
//!   `valid_username` before any storage path is derived from it.
//! - Credential records are created once and never mutated.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use uuid::Uuid;

/// Usernames are path components on disk, so the alphabet is restricted
/// to characters that are safe on every supported filesystem.
static USERNAME_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9][A-Za-z0-9_.-]{0,31}$").expect("username pattern is a valid literal")
});

/// Returns whether `name` is acceptable as an account name.
///
/// Case-sensitive: `Alice` and `alice` are distinct accounts.
pub fn valid_username(name: &str) -> bool {
    USERNAME_RE.is_match(name)
}

/// Optional profile fields collected at signup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: Option<String>,
    pub address: Option<String>,
    pub age: Option<u32>,
}

/// Per-user credential record, one JSON file per account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredentialRecord {
    /// Unique, case-sensitive account name; also the file-path key.
    pub username: String,
    /// Random per-user salt, hex encoded.
    pub salt: String,
    /// Hex SHA-256 of `salt + password`.
    pub password_hash: String,
    /// Optional signup profile fields.
    pub profile: Profile,
}

impl CredentialRecord {
    /// Builds a record for a new account, generating a fresh salt.
    pub fn new(username: impl Into<String>, password: &str, profile: Profile) -> Self {
        let salt = Uuid::new_v4().simple().to_string();
        let password_hash = hash_password(&salt, password);
        Self {
            username: username.into(),
            salt,
            password_hash,
            profile,
        }
    }

    /// Compares a candidate password against the stored hash.
    pub fn verify_password(&self, candidate: &str) -> bool {
        hash_password(&self.salt, candidate) == self.password_hash
    }
}

fn hash_password(salt: &str, password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(salt.as_bytes());
    hasher.update(password.as_bytes());
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::{valid_username, CredentialRecord, Profile};

    #[test]
    fn valid_username_accepts_simple_names() {
        assert!(valid_username("alice"));
        assert!(valid_username("Bob_42"));
        assert!(valid_username("a.b-c"));
    }

    #[test]
    fn valid_username_rejects_path_hazards() {
        assert!(!valid_username(""));
        assert!(!valid_username(".hidden"));
        assert!(!valid_username("../escape"));
        assert!(!valid_username("with space"));
        assert!(!valid_username(&"x".repeat(40)));
    }

    #[test]
    fn password_hash_is_salted_and_verifiable() {
        let a = CredentialRecord::new("alice", "pw1", Profile::default());
        let b = CredentialRecord::new("bob", "pw1", Profile::default());

        assert!(a.verify_password("pw1"));
        assert!(!a.verify_password("pw2"));
        assert_ne!(a.salt, b.salt);
        // Same password, different salts, different hashes.
        assert_ne!(a.password_hash, b.password_hash);
        assert_ne!(a.password_hash, "pw1");
    }
}
