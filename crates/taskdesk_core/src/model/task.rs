//! Task domain model.
//!
//! # Responsibility
//! - Define the canonical task record and its lifecycle states.
//! - Provide creation-time validation and the overdue rule.
//!
//! # Invariants
//! - `id` is stable for the task's lifetime and never reused.
//! - `status` is always one of the three enumerated values.
//! - Every new task starts as `TaskStatus::NotStarted`.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for a task record.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
/// Identity is decoupled from storage position, so deleting one task
/// never changes how the others are addressed.
pub type TaskId = Uuid;

/// Lifecycle state of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskStatus {
    /// Created but not started.
    #[serde(rename = "Not Started")]
    NotStarted,
    /// Work is in progress.
    Ongoing,
    /// Finished successfully.
    Completed,
}

impl TaskStatus {
    /// Canonical display/wire name for this status.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::NotStarted => "Not Started",
            Self::Ongoing => "Ongoing",
            Self::Completed => "Completed",
        }
    }

    /// Parses user-supplied text into a status, ignoring case and padding.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "not started" => Some(Self::NotStarted),
            "ongoing" => Some(Self::Ongoing),
            "completed" => Some(Self::Completed),
            _ => None,
        }
    }
}

impl Display for TaskStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Relative urgency of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    /// Canonical display/wire name for this priority.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }

    /// Parses user-supplied text into a priority, ignoring case and padding.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "high" => Some(Self::High),
            "medium" => Some(Self::Medium),
            "low" => Some(Self::Low),
            _ => None,
        }
    }
}

impl Display for Priority {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validation failure for task creation input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskValidationError {
    /// Description is empty or whitespace-only.
    EmptyDescription,
    /// Deadline is earlier than the creation date.
    DeadlinePassed { deadline: NaiveDate, today: NaiveDate },
}

impl Display for TaskValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyDescription => write!(f, "task description cannot be empty"),
            Self::DeadlinePassed { deadline, today } => write!(
                f,
                "deadline {deadline} is in the past (today is {today})"
            ),
        }
    }
}

impl Error for TaskValidationError {}

/// Canonical task record persisted in a user's backing file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Stable id assigned at creation.
    pub id: TaskId,
    /// Free-form description; never empty once persisted.
    pub description: String,
    /// Target calendar date, serialized as an ISO-8601 date string.
    pub deadline: NaiveDate,
    /// Lifecycle state; the only field `update_status` may change.
    pub status: TaskStatus,
    /// Relative urgency.
    pub priority: Priority,
    /// Optional free-text category.
    pub tag: Option<String>,
}

impl Task {
    /// Creates a new task with a generated stable id and default status.
    ///
    /// # Invariants
    /// - `status` starts as `TaskStatus::NotStarted`.
    /// - The caller is responsible for invoking `validate` before persisting.
    pub fn new(
        description: impl Into<String>,
        deadline: NaiveDate,
        priority: Priority,
        tag: Option<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            description: description.into(),
            deadline,
            status: TaskStatus::NotStarted,
            priority,
            tag,
        }
    }

    /// Checks structural rules that hold for every persisted task.
    ///
    /// Deadline recency is a creation-time rule, checked by the service
    /// against its clock; a stored task whose deadline has since passed
    /// is still valid (it is merely overdue).
    pub fn validate(&self) -> Result<(), TaskValidationError> {
        if self.description.trim().is_empty() {
            return Err(TaskValidationError::EmptyDescription);
        }
        Ok(())
    }

    /// Returns whether this task is overdue as of the given date.
    ///
    /// A completed task is never overdue, regardless of its deadline.
    pub fn is_overdue(&self, as_of: NaiveDate) -> bool {
        self.deadline < as_of && self.status != TaskStatus::Completed
    }
}
