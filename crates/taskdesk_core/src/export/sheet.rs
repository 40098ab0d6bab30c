//! CSV spreadsheet renderer.
//!
//! RFC-4180 style: fields containing commas, quotes, or newlines are
//! wrapped in double quotes with embedded quotes doubled.

use crate::model::task::Task;

const HEADER: &str = "id,description,deadline,status,priority,tag";

pub(super) fn render(tasks: &[Task]) -> String {
    let mut out = String::new();
    out.push_str(HEADER);
    out.push('\n');

    for task in tasks {
        let row = [
            task.id.to_string(),
            task.description.clone(),
            task.deadline.to_string(),
            task.status.as_str().to_string(),
            task.priority.as_str().to_string(),
            task.tag.clone().unwrap_or_default(),
        ];
        let encoded: Vec<String> = row.iter().map(|field| escape(field)).collect();
        out.push_str(&encoded.join(","));
        out.push('\n');
    }

    out
}

fn escape(field: &str) -> String {
    if field.contains(['"', ',', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::escape;
    use crate::model::task::{Priority, Task};
    use chrono::NaiveDate;

    #[test]
    fn escape_quotes_only_when_needed() {
        assert_eq!(escape("plain"), "plain");
        assert_eq!(escape("a,b"), "\"a,b\"");
        assert_eq!(escape("say \"hi\""), "\"say \"\"hi\"\"\"");
    }

    #[test]
    fn sheet_has_header_and_one_row_per_task() {
        let deadline = NaiveDate::from_ymd_opt(2099, 1, 1).expect("valid test date");
        let tasks = vec![
            Task::new("buy milk, eggs", deadline, Priority::High, Some("errand".into())),
            Task::new("untagged", deadline, Priority::Medium, None),
        ];

        let body = super::render(&tasks);
        let lines: Vec<&str> = body.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "id,description,deadline,status,priority,tag");
        assert!(lines[1].contains("\"buy milk, eggs\""));
        assert!(lines[2].ends_with("untagged,2099-01-01,Not Started,Medium,"));
    }
}
