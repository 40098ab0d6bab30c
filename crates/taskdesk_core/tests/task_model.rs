use chrono::NaiveDate;
use taskdesk_core::{Priority, Task, TaskStatus, TaskSummary, TaskValidationError};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn new_task_starts_not_started_with_a_fresh_id() {
    let task = Task::new("write tests", date(2099, 1, 1), Priority::Medium, None);

    assert!(!task.id.is_nil());
    assert_eq!(task.status, TaskStatus::NotStarted);
    assert_eq!(task.description, "write tests");
    assert_eq!(task.tag, None);
}

#[test]
fn validate_rejects_blank_description() {
    let task = Task::new("  \t ", date(2099, 1, 1), Priority::Low, None);
    assert_eq!(
        task.validate().unwrap_err(),
        TaskValidationError::EmptyDescription
    );
}

#[test]
fn status_and_priority_parse_is_forgiving_about_case() {
    assert_eq!(TaskStatus::parse(" completed "), Some(TaskStatus::Completed));
    assert_eq!(TaskStatus::parse("NOT STARTED"), Some(TaskStatus::NotStarted));
    assert_eq!(TaskStatus::parse("done"), None);

    assert_eq!(Priority::parse("high"), Some(Priority::High));
    assert_eq!(Priority::parse("urgent"), None);
}

#[test]
fn overdue_requires_past_deadline_and_unfinished_status() {
    let today = date(2025, 6, 15);
    let mut task = Task::new("pay rent", date(2025, 6, 1), Priority::High, None);

    assert!(task.is_overdue(today));

    task.status = TaskStatus::Ongoing;
    assert!(task.is_overdue(today));

    // Completed tasks are never overdue, regardless of date.
    task.status = TaskStatus::Completed;
    assert!(!task.is_overdue(today));

    let future = Task::new("later", date(2025, 7, 1), Priority::Low, None);
    assert!(!future.is_overdue(today));

    let due_today = Task::new("today", today, Priority::Low, None);
    assert!(!due_today.is_overdue(today));
}

#[test]
fn task_serialization_uses_expected_wire_fields() {
    let task = Task::new("Buy milk", date(2099, 1, 1), Priority::High, Some("errand".into()));

    let json = serde_json::to_value(&task).unwrap();
    assert_eq!(json["id"], task.id.to_string());
    assert_eq!(json["description"], "Buy milk");
    assert_eq!(json["deadline"], "2099-01-01");
    assert_eq!(json["status"], "Not Started");
    assert_eq!(json["priority"], "High");
    assert_eq!(json["tag"], "errand");

    let decoded: Task = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, task);
}

#[test]
fn deserialize_rejects_unknown_status() {
    let value = serde_json::json!({
        "id": "11111111-2222-4333-8444-555555555555",
        "description": "bad status",
        "deadline": "2099-01-01",
        "status": "Paused",
        "priority": "High",
        "tag": null
    });

    assert!(serde_json::from_value::<Task>(value).is_err());
}

#[test]
fn summary_counts_reconcile_over_mixed_statuses() {
    let mut tasks = vec![
        Task::new("a", date(2099, 1, 1), Priority::High, None),
        Task::new("b", date(2099, 1, 1), Priority::High, None),
        Task::new("c", date(2099, 1, 1), Priority::High, None),
        Task::new("d", date(2099, 1, 1), Priority::High, None),
    ];
    tasks[0].status = TaskStatus::Completed;
    tasks[1].status = TaskStatus::Ongoing;
    tasks[2].status = TaskStatus::Ongoing;

    let summary = TaskSummary::from_tasks(&tasks);
    assert_eq!(summary.total, 4);
    assert_eq!(summary.completed, 1);
    assert_eq!(summary.ongoing, 2);
    assert_eq!(summary.not_started, 1);

    let empty = TaskSummary::from_tasks(&[]);
    assert_eq!(empty.total, 0);
    assert_eq!(
        empty.total,
        empty.completed + empty.ongoing + empty.not_started
    );
}
