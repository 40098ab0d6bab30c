//! Credential repository contract and JSON-file implementation.
//!
//! # Responsibility
//! - Persist one credential record per account, keyed by username.
//! - Enforce reject-on-duplicate at the storage boundary.
//!
//! # Invariants
//! - Records are write-once: no update or delete API exists.
//! - A missing record file means "unknown user", never an error.

use crate::model::user::CredentialRecord;
use crate::repo::task_repo::{RepoError, RepoResult};
use crate::store::{StoreError, StoreRoot};

/// Repository interface for account credential records.
pub trait CredentialRepository {
    /// Persists a new record; fails with `UserExists` on duplicates.
    fn create_credential(&self, record: &CredentialRecord) -> RepoResult<()>;
    /// Looks up one record; `None` when the account does not exist.
    fn find_credential(&self, username: &str) -> RepoResult<Option<CredentialRecord>>;
}

/// JSON-file backed credential repository.
pub struct JsonCredentialRepository {
    root: StoreRoot,
}

impl JsonCredentialRepository {
    pub fn new(root: &StoreRoot) -> Self {
        Self { root: root.clone() }
    }
}

impl CredentialRepository for JsonCredentialRepository {
    fn create_credential(&self, record: &CredentialRecord) -> RepoResult<()> {
        let path = self.root.credential_path(&record.username);
        if path.exists() {
            return Err(RepoError::UserExists(record.username.clone()));
        }

        let body = serde_json::to_string_pretty(record).map_err(|err| {
            RepoError::InvalidData(format!("credential record failed to serialize: {err}"))
        })?;
        std::fs::write(&path, body).map_err(|err| StoreError::io(&path, err))?;
        Ok(())
    }

    fn find_credential(&self, username: &str) -> RepoResult<Option<CredentialRecord>> {
        let path = self.root.credential_path(username);
        let raw = match std::fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(StoreError::io(&path, err).into()),
        };

        let record = serde_json::from_str(&raw).map_err(|err| {
            RepoError::InvalidData(format!(
                "credential file `{}` is not a valid record: {err}",
                path.display()
            ))
        })?;
        Ok(Some(record))
    }
}
