//! Task repository contract and JSON-file implementation.
//!
//! # Responsibility
//! - Provide stable CRUD APIs over one user's ordered task collection.
//! - Keep serialization and file layout inside the persistence boundary.
//!
//! # Invariants
//! - Every mutation is a full read-modify-write of the backing file
//!   (write-through; in-memory and on-disk state never diverge).
//! - Insertion order is preserved across all operations.
//! - Read paths reject malformed persisted state instead of masking it.

use crate::model::task::{Task, TaskId, TaskStatus, TaskValidationError};
use crate::store::{StoreError, StoreRoot};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

pub type RepoResult<T> = Result<T, RepoError>;

/// Generic repository error for persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Validation(TaskValidationError),
    Store(StoreError),
    TaskNotFound(TaskId),
    UserExists(String),
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Store(err) => write!(f, "{err}"),
            Self::TaskNotFound(id) => write!(f, "task not found: {id}"),
            Self::UserExists(username) => {
                write!(f, "account already exists for username `{username}`")
            }
            Self::InvalidData(message) => write!(f, "invalid persisted data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Store(err) => Some(err),
            Self::TaskNotFound(_) | Self::UserExists(_) | Self::InvalidData(_) => None,
        }
    }
}

impl From<TaskValidationError> for RepoError {
    fn from(value: TaskValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<StoreError> for RepoError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// Repository interface for one user's task collection.
pub trait TaskRepository {
    /// Returns all tasks in insertion order; empty when no file exists.
    fn list_tasks(&self) -> RepoResult<Vec<Task>>;
    /// Validates and appends one task at the end of the collection.
    fn append_task(&self, task: &Task) -> RepoResult<()>;
    /// Replaces only the status field of the identified task.
    fn update_status(&self, id: TaskId, status: TaskStatus) -> RepoResult<()>;
    /// Removes and returns the identified task; order of the rest is kept.
    fn delete_task(&self, id: TaskId) -> RepoResult<Task>;
}

/// JSON-file backed task repository, scoped to a single user.
pub struct JsonTaskRepository {
    path: PathBuf,
}

impl JsonTaskRepository {
    /// Builds a repository over `tasks/<username>.json` under `root`.
    ///
    /// The username must already have passed `valid_username`; the auth
    /// gate guarantees this for every session-scoped caller.
    pub fn new(root: &StoreRoot, username: &str) -> Self {
        Self {
            path: root.tasks_path(username),
        }
    }

    fn load(&self) -> RepoResult<Vec<Task>> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(StoreError::io(&self.path, err).into()),
        };

        serde_json::from_str(&raw).map_err(|err| {
            RepoError::InvalidData(format!(
                "task file `{}` is not a valid task collection: {err}",
                self.path.display()
            ))
        })
    }

    fn persist(&self, tasks: &[Task]) -> RepoResult<()> {
        let body = serde_json::to_string_pretty(tasks).map_err(|err| {
            RepoError::InvalidData(format!("task collection failed to serialize: {err}"))
        })?;
        std::fs::write(&self.path, body).map_err(|err| StoreError::io(&self.path, err))?;
        Ok(())
    }
}

impl TaskRepository for JsonTaskRepository {
    fn list_tasks(&self) -> RepoResult<Vec<Task>> {
        self.load()
    }

    fn append_task(&self, task: &Task) -> RepoResult<()> {
        task.validate()?;

        let mut tasks = self.load()?;
        tasks.push(task.clone());
        self.persist(&tasks)
    }

    fn update_status(&self, id: TaskId, status: TaskStatus) -> RepoResult<()> {
        let mut tasks = self.load()?;
        let task = tasks
            .iter_mut()
            .find(|task| task.id == id)
            .ok_or(RepoError::TaskNotFound(id))?;

        task.status = status;
        self.persist(&tasks)
    }

    fn delete_task(&self, id: TaskId) -> RepoResult<Task> {
        let mut tasks = self.load()?;
        let position = tasks
            .iter()
            .position(|task| task.id == id)
            .ok_or(RepoError::TaskNotFound(id))?;

        let removed = tasks.remove(position);
        self.persist(&tasks)?;
        Ok(removed)
    }
}
