//! Export adapter: renders a task snapshot into a document artifact.
//!
//! # Responsibility
//! - Turn a read-only task snapshot into an on-disk document.
//! - Name artifacts after the owning username.
//!
//! # Invariants
//! - Rendering never reads or writes the task store; it consumes only
//!   the snapshot it is handed.
//! - An empty snapshot is refused with `RenderError::EmptyTaskList`.

use crate::model::task::Task;
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

mod report;
mod sheet;

/// Supported export document formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// Human-readable tabular report, one numbered row per task.
    Report,
    /// CSV spreadsheet, one record per task, column per field.
    Spreadsheet,
}

impl ExportFormat {
    fn extension(self) -> &'static str {
        match self {
            Self::Report => "txt",
            Self::Spreadsheet => "csv",
        }
    }
}

impl Display for ExportFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Report => write!(f, "report"),
            Self::Spreadsheet => write!(f, "spreadsheet"),
        }
    }
}

/// Export failure taxonomy.
#[derive(Debug)]
pub enum RenderError {
    /// Nothing to render; callers should short-circuit before invoking.
    EmptyTaskList,
    /// Output path was not writable.
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl Display for RenderError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTaskList => write!(f, "cannot export an empty task list"),
            Self::Io { path, source } => {
                write!(f, "failed to write export to `{}`: {source}", path.display())
            }
        }
    }
}

impl Error for RenderError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::EmptyTaskList => None,
            Self::Io { source, .. } => Some(source),
        }
    }
}

/// Renders `tasks` into `out_dir` and returns the artifact path.
///
/// The artifact is named `<username>_tasks.<ext>`; an existing artifact
/// for the same user and format is overwritten.
pub fn render(
    format: ExportFormat,
    username: &str,
    tasks: &[Task],
    out_dir: &Path,
) -> Result<PathBuf, RenderError> {
    if tasks.is_empty() {
        return Err(RenderError::EmptyTaskList);
    }

    let body = match format {
        ExportFormat::Report => report::render(username, tasks),
        ExportFormat::Spreadsheet => sheet::render(tasks),
    };

    let path = out_dir.join(format!("{username}_tasks.{}", format.extension()));
    std::fs::write(&path, body).map_err(|err| RenderError::Io {
        path: path.clone(),
        source: err,
    })?;

    info!(
        "event=export module=export status=ok format={format} rows={} path={}",
        tasks.len(),
        path.display()
    );
    Ok(path)
}
