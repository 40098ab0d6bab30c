//! Domain model for users and their task lists.
//!
//! # Responsibility
//! - Define the canonical data structures used by core business logic.
//! - Keep validation rules next to the records they protect.
//!
//! # Invariants
//! - Every task is identified by a stable `TaskId`, never by position.
//! - A task list belongs to exactly one user.

pub mod task;
pub mod user;
