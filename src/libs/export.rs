//! Task export in CSV and JSON formats.
//!
//! Exports flatten tasks into string-typed records so both formats share one
//! shape and dates serialize the same way everywhere.

use crate::libs::task::Task;
use anyhow::Result;
use chrono::Local;
use serde::Serialize;
use std::fs::File;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum ExportFormat {
    /// Comma-separated values for spreadsheet tools.
    Csv,
    /// Pretty-printed JSON for programmatic processing.
    Json,
}

impl ExportFormat {
    fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

/// Flat, serializable projection of a [`Task`].
#[derive(Debug, Serialize)]
struct TaskRecord {
    id: i64,
    title: String,
    description: String,
    due_date: String,
    priority: String,
    status: String,
    created_at: String,
}

impl From<&Task> for TaskRecord {
    fn from(task: &Task) -> Self {
        TaskRecord {
            id: task.id.unwrap_or(0),
            title: task.title.clone(),
            description: task.description.clone(),
            due_date: task.due_date.to_string(),
            priority: task.priority.as_str().to_string(),
            status: task.status.as_str().to_string(),
            created_at: task.created_at.clone().unwrap_or_default(),
        }
    }
}

pub struct Exporter {
    format: ExportFormat,
    output: Option<PathBuf>,
}

impl Exporter {
    pub fn new(format: ExportFormat, output: Option<PathBuf>) -> Self {
        Self { format, output }
    }

    /// Writes all tasks to the target file and returns its path.
    ///
    /// Without an explicit output path a timestamped file name is generated
    /// in the current directory.
    pub fn export(&self, tasks: &[Task]) -> Result<PathBuf> {
        let path = match &self.output {
            Some(path) => path.clone(),
            None => PathBuf::from(format!(
                "ttrack_export_{}.{}",
                Local::now().format("%Y%m%d_%H%M%S"),
                self.format.extension()
            )),
        };

        let records: Vec<TaskRecord> = tasks.iter().map(TaskRecord::from).collect();
        match self.format {
            ExportFormat::Csv => {
                let mut writer = csv::Writer::from_path(&path)?;
                for record in &records {
                    writer.serialize(record)?;
                }
                writer.flush()?;
            }
            ExportFormat::Json => {
                let file = File::create(&path)?;
                serde_json::to_writer_pretty(file, &records)?;
            }
        }

        Ok(path)
    }
}
