//! Interactive menu front-end for TaskDesk.
//!
//! # Responsibility
//! - Drive signup/login and the per-session task menu over stdin/stdout.
//! - Translate menu choices into core service calls.
//!
//! # Invariants
//! - Every error is reported as a message and control returns to a menu;
//!   no operation terminates the process.
//! - End of input (closed stdin) ends the dialogue and the process.
//! - Task operations run only through an authenticated `Session`.

use chrono::{Local, NaiveDate};
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use taskdesk_core::{
    open_store, render, AddTaskRequest, AuthService, ExportFormat, JsonCredentialRepository,
    JsonTaskRepository, Priority, Profile, Session, SignUpRequest, StoreRoot, Task, TaskService,
    TaskStatus,
};

const DATA_DIR_ENV: &str = "TASKDESK_DATA_DIR";
const DEFAULT_DATA_DIR: &str = "taskdesk_data";

fn main() {
    let data_dir = std::env::var(DATA_DIR_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_DATA_DIR));

    // Logging first, so the store-open events below reach the log file.
    init_logging(&data_dir);

    let root = match open_store(&data_dir) {
        Ok(root) => root,
        Err(err) => {
            eprintln!("Could not open data directory: {err}");
            return;
        }
    };

    println!("WELCOME TO TASKDESK");
    loop {
        println!();
        println!("1 - Sign Up");
        println!("2 - Log In");
        println!("0 - Exit");

        let Some(choice) = prompt("Enter your choice: ") else {
            return;
        };
        match choice.as_str() {
            "1" => sign_up(&root),
            "2" => {
                if let Some(session) = log_in(&root) {
                    session_menu(&root, &session);
                    session.log_out();
                    println!("Logged out.");
                }
            }
            "0" => return,
            other => println!("Invalid option `{other}`. Try again."),
        }
    }
}

/// Logging is best-effort for the CLI: a failed bootstrap must not block
/// the interactive loop. Creates `data_dir` itself so it does not depend
/// on the store having been opened yet.
fn init_logging(data_dir: &Path) {
    if let Err(err) = std::fs::create_dir_all(data_dir) {
        eprintln!("Warning: logging disabled ({err})");
        return;
    }
    let log_dir = match data_dir.canonicalize() {
        Ok(base) => base.join("logs"),
        Err(err) => {
            eprintln!("Warning: logging disabled ({err})");
            return;
        }
    };
    if let Err(err) = taskdesk_core::init_logging(
        taskdesk_core::default_log_level(),
        &log_dir.to_string_lossy(),
    ) {
        eprintln!("Warning: logging disabled ({err})");
    }
}

fn sign_up(root: &StoreRoot) {
    println!();
    println!("--- SIGN UP ---");
    let Some(username) = prompt("Choose a username: ") else {
        return;
    };
    let Some(password) = prompt("Create a password: ") else {
        return;
    };

    println!("Profile details (press Enter to skip any field).");
    let profile = Profile {
        name: prompt_optional("Full name: "),
        address: prompt_optional("Address: "),
        age: prompt_optional("Age: ").and_then(|raw| match raw.parse() {
            Ok(age) => Some(age),
            Err(_) => {
                println!("Age `{raw}` is not a number; leaving it unset.");
                None
            }
        }),
    };

    let auth = AuthService::new(JsonCredentialRepository::new(root));
    let request = SignUpRequest {
        username,
        password,
        profile,
    };
    match auth.sign_up(&request) {
        Ok(()) => println!("Account created! You can now log in."),
        Err(err) => println!("Signup failed: {err}"),
    }
}

fn log_in(root: &StoreRoot) -> Option<Session> {
    println!();
    println!("--- LOGIN ---");
    let username = prompt("Enter your username: ")?;
    let password = prompt("Enter your password: ")?;

    let auth = AuthService::new(JsonCredentialRepository::new(root));
    match auth.log_in(&username, &password) {
        Ok(session) => {
            println!("Welcome, {}!", session.username());
            Some(session)
        }
        Err(err) => {
            println!("Login failed: {err}");
            None
        }
    }
}

fn session_menu(root: &StoreRoot, session: &Session) {
    let tasks = TaskService::new(JsonTaskRepository::new(root, session.username()));

    loop {
        println!();
        println!("Choose an option:");
        println!("1 - View Profile");
        println!("2 - Add Task");
        println!("3 - View All Tasks");
        println!("4 - Update Task Status");
        println!("5 - Delete Task");
        println!("6 - Task Summary");
        println!("7 - Export Tasks");
        println!("8 - Logout");

        let Some(choice) = prompt("Enter your choice: ") else {
            return;
        };
        match choice.as_str() {
            "1" => view_profile(root, session),
            "2" => add_task(&tasks),
            "3" => view_tasks(&tasks),
            "4" => update_task_status(&tasks),
            "5" => delete_task(&tasks),
            "6" => show_summary(&tasks),
            "7" => export_tasks(root, session, &tasks),
            "8" => return,
            other => println!("Invalid option `{other}`. Try again."),
        }
    }
}

fn view_profile(root: &StoreRoot, session: &Session) {
    let auth = AuthService::new(JsonCredentialRepository::new(root));
    match auth.profile(session) {
        Ok(record) => {
            println!();
            println!("--- USER PROFILE ---");
            println!("Username: {}", record.username);
            println!("Name:     {}", record.profile.name.as_deref().unwrap_or("-"));
            println!(
                "Address:  {}",
                record.profile.address.as_deref().unwrap_or("-")
            );
            match record.profile.age {
                Some(age) => println!("Age:      {age}"),
                None => println!("Age:      -"),
            }
        }
        Err(err) => println!("Could not load profile: {err}"),
    }
}

fn add_task(tasks: &TaskService<JsonTaskRepository>) {
    println!();
    println!("--- ADD TASK ---");
    let Some(description) = prompt("Task description: ") else {
        return;
    };

    let Some(deadline_raw) = prompt("Deadline (YYYY-MM-DD): ") else {
        return;
    };
    let deadline = match NaiveDate::parse_from_str(&deadline_raw, "%Y-%m-%d") {
        Ok(deadline) => deadline,
        Err(_) => {
            println!("`{deadline_raw}` is not a valid date; expected YYYY-MM-DD.");
            return;
        }
    };

    let Some(priority_raw) = prompt("Priority (High / Medium / Low): ") else {
        return;
    };
    let priority = match Priority::parse(&priority_raw) {
        Some(priority) => priority,
        None => {
            println!("`{priority_raw}` is not a valid priority.");
            return;
        }
    };

    let request = AddTaskRequest {
        description,
        deadline,
        priority,
        tag: prompt_optional("Tag/Category (optional): "),
    };
    match tasks.add_task(&request) {
        Ok(task) => println!("Task added: {}", task.description),
        Err(err) => println!("Could not add task: {err}"),
    }
}

fn view_tasks(tasks: &TaskService<JsonTaskRepository>) {
    println!();
    println!("--- YOUR TASKS ---");
    match tasks.list_tasks() {
        Ok(list) if list.is_empty() => println!("No tasks yet."),
        Ok(list) => print_task_rows(&list),
        Err(err) => println!("Could not load tasks: {err}"),
    }
}

fn print_task_rows(list: &[Task]) {
    let today = Local::now().date_naive();
    for (index, task) in list.iter().enumerate() {
        let overdue = if task.is_overdue(today) {
            "  [OVERDUE]"
        } else {
            ""
        };
        println!(
            "{}. {} | Due: {} | Status: {} | Priority: {} | Tag: {}{overdue}",
            index + 1,
            task.description,
            task.deadline,
            task.status,
            task.priority,
            task.tag.as_deref().unwrap_or("-"),
        );
    }
}

/// Prints the current list and resolves a 1-based row choice to a task.
///
/// Rows are a display convenience only; the returned task carries the
/// stable id the services operate on.
fn choose_task(tasks: &TaskService<JsonTaskRepository>) -> Option<Task> {
    let list = match tasks.list_tasks() {
        Ok(list) => list,
        Err(err) => {
            println!("Could not load tasks: {err}");
            return None;
        }
    };
    if list.is_empty() {
        println!("No tasks yet.");
        return None;
    }

    print_task_rows(&list);
    let raw = prompt("Task number: ")?;
    match raw.parse::<usize>() {
        Ok(number) if (1..=list.len()).contains(&number) => Some(list[number - 1].clone()),
        _ => {
            println!("`{raw}` is not a listed task number.");
            None
        }
    }
}

fn update_task_status(tasks: &TaskService<JsonTaskRepository>) {
    println!();
    println!("--- UPDATE TASK STATUS ---");
    let Some(task) = choose_task(tasks) else {
        return;
    };

    let Some(status_raw) = prompt("New status (Not Started / Ongoing / Completed): ") else {
        return;
    };
    let Some(status) = TaskStatus::parse(&status_raw) else {
        println!("`{status_raw}` is not a valid status.");
        return;
    };

    match tasks.update_status(task.id, status) {
        Ok(()) => println!("Task status updated."),
        Err(err) => println!("Could not update task: {err}"),
    }
}

fn delete_task(tasks: &TaskService<JsonTaskRepository>) {
    println!();
    println!("--- DELETE TASK ---");
    let Some(task) = choose_task(tasks) else {
        return;
    };

    match tasks.delete_task(task.id) {
        Ok(removed) => println!("Deleted: {}", removed.description),
        Err(err) => println!("Could not delete task: {err}"),
    }
}

fn show_summary(tasks: &TaskService<JsonTaskRepository>) {
    match tasks.summarize() {
        Ok(summary) => {
            println!();
            println!("--- TASK SUMMARY ---");
            println!("Total:       {}", summary.total);
            println!("Completed:   {}", summary.completed);
            println!("Ongoing:     {}", summary.ongoing);
            println!("Not Started: {}", summary.not_started);
        }
        Err(err) => println!("Could not summarize tasks: {err}"),
    }
}

fn export_tasks(root: &StoreRoot, session: &Session, tasks: &TaskService<JsonTaskRepository>) {
    println!();
    println!("--- EXPORT TASKS ---");
    let snapshot = match tasks.list_tasks() {
        Ok(list) => list,
        Err(err) => {
            println!("Could not load tasks: {err}");
            return;
        }
    };
    if snapshot.is_empty() {
        println!("No tasks to export.");
        return;
    }

    println!("1 - Tabular report (.txt)");
    println!("2 - Spreadsheet (.csv)");
    let Some(choice) = prompt("Choose a format: ") else {
        return;
    };
    let format = match choice.as_str() {
        "1" => ExportFormat::Report,
        "2" => ExportFormat::Spreadsheet,
        other => {
            println!("Invalid option `{other}`.");
            return;
        }
    };

    match render(format, session.username(), &snapshot, &root.exports_dir()) {
        Ok(path) => println!("Exported to {}", path.display()),
        Err(err) => println!("Export failed: {err}"),
    }
}

/// Prompts for one line; `None` means stdin is closed (or unreadable)
/// and the dialogue should end.
fn prompt(label: &str) -> Option<String> {
    print!("{label}");
    let _ = io::stdout().flush();
    read_menu_line(&mut io::stdin().lock())
}

fn prompt_optional(label: &str) -> Option<String> {
    prompt(label).filter(|value| !value.is_empty())
}

/// Reads one trimmed line of menu input.
///
/// Returns `None` at end of input, so menu loops terminate instead of
/// spinning on an empty read from a closed stdin.
fn read_menu_line(input: &mut impl BufRead) -> Option<String> {
    let mut line = String::new();
    match input.read_line(&mut line) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(line.trim().to_string()),
    }
}
