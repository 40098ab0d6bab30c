//! Flat-file storage bootstrap and path mapping.
//!
//! # Responsibility
//! - Open and lay out the on-disk data directory for TaskDesk.
//! - Map a username to its credential and task backing files.
//!
//! # Invariants
//! - `open_store` returns only after every subdirectory exists.
//! - Callers must validate usernames (`model::user::valid_username`)
//!   before deriving paths from them; paths are plain joins.
//! - One process, one writer: no locking is layered on the files.

use log::{error, info};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};
use std::time::Instant;

const USERS_DIR: &str = "users";
const TASKS_DIR: &str = "tasks";
const EXPORTS_DIR: &str = "exports";

pub type StoreResult<T> = Result<T, StoreError>;

/// Storage-layer failure with file-path context.
#[derive(Debug)]
pub enum StoreError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl StoreError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "storage I/O failed at `{}`: {source}", path.display())
            }
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
        }
    }
}

/// Root of the on-disk data directory.
///
/// Layout:
/// - `users/<username>.json` — credential record, one per account.
/// - `tasks/<username>.json` — ordered task collection, one per account.
/// - `exports/` — rendered export artifacts.
#[derive(Debug, Clone)]
pub struct StoreRoot {
    base: PathBuf,
}

impl StoreRoot {
    /// Base directory this store was opened at.
    pub fn base(&self) -> &Path {
        &self.base
    }

    /// Backing file holding one account's credential record.
    pub fn credential_path(&self, username: &str) -> PathBuf {
        self.base.join(USERS_DIR).join(format!("{username}.json"))
    }

    /// Backing file holding one account's ordered task collection.
    pub fn tasks_path(&self, username: &str) -> PathBuf {
        self.base.join(TASKS_DIR).join(format!("{username}.json"))
    }

    /// Directory export artifacts are written into.
    pub fn exports_dir(&self) -> PathBuf {
        self.base.join(EXPORTS_DIR)
    }
}

/// Opens (creating if necessary) the data directory at `path`.
///
/// # Side effects
/// - Creates the base directory and its subdirectories.
/// - Emits `store_open` logging events with duration and status.
pub fn open_store(path: impl AsRef<Path>) -> StoreResult<StoreRoot> {
    let started_at = Instant::now();
    info!("event=store_open module=store status=start");

    let base = path.as_ref().to_path_buf();
    for dir in [
        base.clone(),
        base.join(USERS_DIR),
        base.join(TASKS_DIR),
        base.join(EXPORTS_DIR),
    ] {
        if let Err(err) = std::fs::create_dir_all(&dir) {
            error!(
                "event=store_open module=store status=error duration_ms={} path={} error={}",
                started_at.elapsed().as_millis(),
                dir.display(),
                err
            );
            return Err(StoreError::io(dir, err));
        }
    }

    info!(
        "event=store_open module=store status=ok duration_ms={} base={}",
        started_at.elapsed().as_millis(),
        base.display()
    );
    Ok(StoreRoot { base })
}
