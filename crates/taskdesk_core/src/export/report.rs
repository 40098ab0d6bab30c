//! Plain-text tabular report renderer.

use crate::model::task::Task;

/// Renders the report body: a title line followed by one numbered row
/// per task in snapshot order.
pub(super) fn render(username: &str, tasks: &[Task]) -> String {
    let mut out = String::new();
    out.push_str(&format!("Task Report for {username}\n"));
    out.push_str(&"=".repeat(16 + username.len()));
    out.push('\n');

    for (index, task) in tasks.iter().enumerate() {
        out.push_str(&format!(
            "{}. {} | Due: {} | Status: {} | Priority: {} | Tag: {}\n",
            index + 1,
            task.description,
            task.deadline,
            task.status,
            task.priority,
            task.tag.as_deref().unwrap_or("-"),
        ));
    }

    out
}

#[cfg(test)]
mod tests {
    use crate::model::task::{Priority, Task};
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid test date")
    }

    #[test]
    fn report_rows_are_numbered_in_snapshot_order() {
        let tasks = vec![
            Task::new("first", date(2099, 1, 1), Priority::High, None),
            Task::new("second", date(2099, 2, 2), Priority::Low, Some("home".into())),
        ];

        let body = super::render("alice", &tasks);
        assert!(body.starts_with("Task Report for alice\n"));
        assert!(body.contains("1. first | Due: 2099-01-01 | Status: Not Started | Priority: High | Tag: -"));
        assert!(body.contains("2. second | Due: 2099-02-02 | Status: Not Started | Priority: Low | Tag: home"));
    }
}
