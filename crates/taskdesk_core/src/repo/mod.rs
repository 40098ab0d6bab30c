//! Repository layer abstractions and flat-file implementations.
//!
//! # Responsibility
//! - Define use-case oriented data access contracts.
//! - Isolate JSON file read-modify-write details from service
//!   orchestration.
//!
//! # Invariants
//! - Task writes enforce `Task::validate()` before persistence.
//! - Repository APIs return semantic errors (`TaskNotFound`,
//!   `UserExists`) in addition to storage transport errors.
//! - A missing backing file is "no data" on reads and is created
//!   implicitly on first write.

pub mod credential_repo;
pub mod task_repo;
