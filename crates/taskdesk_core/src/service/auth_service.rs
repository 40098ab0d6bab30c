//! Signup, login, and session lifecycle.
//!
//! # Responsibility
//! - Gate task-store access behind credential verification.
//! - Own the `Session` value that scopes every post-login operation.
//!
//! # Invariants
//! - A `Session` exists only between a successful `log_in` and
//!   `log_out`; there is no ambient "current user" state.
//! - Duplicate signup is rejected, never silently overwritten.
//! - Username validity is checked here, before any path is derived.

use crate::model::user::{valid_username, CredentialRecord, Profile};
use crate::repo::credential_repo::CredentialRepository;
use crate::repo::task_repo::RepoError;
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Authentication failure taxonomy.
#[derive(Debug)]
pub enum AuthError {
    /// No account exists for the username.
    UnknownUser(String),
    /// Account exists but the password hash did not match.
    WrongPassword(String),
    /// Signup attempted for an already-registered username.
    AccountExists(String),
    /// Username fails the path-safe account-name rules.
    InvalidUsername(String),
    /// Password was empty or whitespace-only.
    EmptyPassword,
    /// Underlying repository/storage failure.
    Repo(RepoError),
}

impl Display for AuthError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownUser(username) => {
                write!(f, "no account found for username `{username}`")
            }
            Self::WrongPassword(username) => {
                write!(f, "incorrect password for username `{username}`")
            }
            Self::AccountExists(username) => {
                write!(f, "an account already exists for username `{username}`")
            }
            Self::InvalidUsername(username) => write!(
                f,
                "invalid username `{username}`: use 1-32 letters, digits, `_`, `.` or `-`, \
                 starting with a letter or digit"
            ),
            Self::EmptyPassword => write!(f, "password cannot be empty"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for AuthError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RepoError> for AuthError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::UserExists(username) => Self::AccountExists(username),
            other => Self::Repo(other),
        }
    }
}

/// Request model for account creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignUpRequest {
    pub username: String,
    pub password: String,
    pub profile: Profile,
}

/// Proof of a successful login, scoping all task operations to one user.
///
/// Created only by `AuthService::log_in`; consumed by `log_out`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    username: String,
}

impl Session {
    /// Account this session is authenticated as.
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Ends the session, returning the control flow to anonymous state.
    pub fn log_out(self) {
        info!(
            "event=logout module=auth status=ok username={}",
            self.username
        );
    }
}

/// Use-case service for signup and login.
pub struct AuthService<C: CredentialRepository> {
    repo: C,
}

impl<C: CredentialRepository> AuthService<C> {
    /// Creates a service using the provided credential repository.
    pub fn new(repo: C) -> Self {
        Self { repo }
    }

    /// Creates a new account, rejecting duplicates and unsafe names.
    pub fn sign_up(&self, request: &SignUpRequest) -> Result<(), AuthError> {
        if !valid_username(&request.username) {
            return Err(AuthError::InvalidUsername(request.username.clone()));
        }
        if request.password.trim().is_empty() {
            return Err(AuthError::EmptyPassword);
        }

        let record = CredentialRecord::new(
            request.username.clone(),
            &request.password,
            request.profile.clone(),
        );
        self.repo.create_credential(&record)?;

        info!(
            "event=signup module=auth status=ok username={}",
            request.username
        );
        Ok(())
    }

    /// Verifies credentials and opens a session on success.
    pub fn log_in(&self, username: &str, password: &str) -> Result<Session, AuthError> {
        if !valid_username(username) {
            return Err(AuthError::InvalidUsername(username.to_string()));
        }

        let record = self
            .repo
            .find_credential(username)?
            .ok_or_else(|| AuthError::UnknownUser(username.to_string()))?;

        if !record.verify_password(password) {
            warn!("event=login module=auth status=denied username={username}");
            return Err(AuthError::WrongPassword(username.to_string()));
        }

        info!("event=login module=auth status=ok username={username}");
        Ok(Session {
            username: record.username,
        })
    }

    /// Loads the credential record backing an active session.
    ///
    /// Used by the profile view; the record always exists for a live
    /// session because accounts are never deleted.
    pub fn profile(&self, session: &Session) -> Result<CredentialRecord, AuthError> {
        self.repo
            .find_credential(session.username())?
            .ok_or_else(|| AuthError::UnknownUser(session.username().to_string()))
    }
}
