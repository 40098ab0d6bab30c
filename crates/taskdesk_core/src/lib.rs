//! Core domain logic for TaskDesk.
//! This crate is the single source of truth for business invariants.

pub mod export;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod store;

pub use export::{render, ExportFormat, RenderError};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::task::{Priority, Task, TaskId, TaskStatus, TaskValidationError};
pub use model::user::{valid_username, CredentialRecord, Profile};
pub use repo::credential_repo::{CredentialRepository, JsonCredentialRepository};
pub use repo::task_repo::{JsonTaskRepository, RepoError, RepoResult, TaskRepository};
pub use service::auth_service::{AuthError, AuthService, Session, SignUpRequest};
pub use service::task_service::{AddTaskRequest, TaskService, TaskSummary};
pub use store::{open_store, StoreError, StoreResult, StoreRoot};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
