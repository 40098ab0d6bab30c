//! Task use-case service.
//!
//! # Responsibility
//! - Provide the CRUD + summary entry points UI layers call.
//! - Apply creation-time rules (deadline recency) before persistence.
//!
//! # Invariants
//! - Service APIs never bypass repository validation contracts.
//! - `update_status` can change nothing but the status field.
//! - The service stays storage-agnostic behind `TaskRepository`.

use crate::model::task::{Priority, Task, TaskId, TaskStatus, TaskValidationError};
use crate::repo::task_repo::{RepoResult, TaskRepository};
use chrono::{Local, NaiveDate};

/// Request model for creating one task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddTaskRequest {
    pub description: String,
    pub deadline: NaiveDate,
    pub priority: Priority,
    /// Optional free-text category; blank input maps to `None`.
    pub tag: Option<String>,
}

/// Aggregate counts over one user's task collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskSummary {
    pub total: usize,
    pub completed: usize,
    pub ongoing: usize,
    pub not_started: usize,
}

impl TaskSummary {
    /// Pure aggregate; `not_started` absorbs the remainder so
    /// `total == completed + ongoing + not_started` always holds.
    pub fn from_tasks(tasks: &[Task]) -> Self {
        let total = tasks.len();
        let completed = tasks
            .iter()
            .filter(|task| task.status == TaskStatus::Completed)
            .count();
        let ongoing = tasks
            .iter()
            .filter(|task| task.status == TaskStatus::Ongoing)
            .count();
        Self {
            total,
            completed,
            ongoing,
            not_started: total - completed - ongoing,
        }
    }
}

/// Use-case service wrapper for one authenticated user's tasks.
pub struct TaskService<R: TaskRepository> {
    repo: R,
}

impl<R: TaskRepository> TaskService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Lists all tasks in insertion order; empty when none exist.
    pub fn list_tasks(&self) -> RepoResult<Vec<Task>> {
        self.repo.list_tasks()
    }

    /// Creates a task, checking the deadline against the local date.
    ///
    /// # Contract
    /// - Status is forced to `Not Started`.
    /// - The created record is appended at the end and persisted
    ///   before it is returned.
    pub fn add_task(&self, request: &AddTaskRequest) -> RepoResult<Task> {
        self.add_task_as_of(request, Local::now().date_naive())
    }

    /// Creates a task with an explicit "today" for the deadline check.
    ///
    /// Split out so the creation rule is testable without a real clock.
    pub fn add_task_as_of(&self, request: &AddTaskRequest, today: NaiveDate) -> RepoResult<Task> {
        if request.deadline < today {
            return Err(TaskValidationError::DeadlinePassed {
                deadline: request.deadline,
                today,
            }
            .into());
        }

        let task = Task::new(
            request.description.clone(),
            request.deadline,
            request.priority,
            request.tag.clone(),
        );
        self.repo.append_task(&task)?;
        Ok(task)
    }

    /// Replaces only the status of the identified task.
    pub fn update_status(&self, id: TaskId, status: TaskStatus) -> RepoResult<()> {
        self.repo.update_status(id, status)
    }

    /// Permanently removes the identified task and returns it.
    pub fn delete_task(&self, id: TaskId) -> RepoResult<Task> {
        self.repo.delete_task(id)
    }

    /// Aggregate counts over the current collection.
    pub fn summarize(&self) -> RepoResult<TaskSummary> {
        Ok(TaskSummary::from_tasks(&self.repo.list_tasks()?))
    }
}
