//! Core task entity and query filter types.
//!
//! A [`Task`] is a plain value object: the database layer constructs it on
//! the read path and consumes it on the write path. No behavior beyond a
//! couple of display helpers is attached.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Date format used for due dates everywhere in the application.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Task importance level.
///
/// Parsing is forgiving: anything that is not a recognized level falls back
/// to `Medium`, so user input never has to be rejected on this field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "low" => Priority::Low,
            "high" => Priority::High,
            _ => Priority::Medium,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Task completion state.
///
/// The store writes whatever status it is told to; transition legality is a
/// caller concern. `In Progress` exists in the data model and in filters but
/// no interactive flow currently sets it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
pub enum TaskStatus {
    Pending,
    InProgress,
    Completed,
}

impl TaskStatus {
    pub fn parse(value: &str) -> Self {
        match value.trim() {
            "In Progress" => TaskStatus::InProgress,
            "Completed" => TaskStatus::Completed,
            _ => TaskStatus::Pending,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "Pending",
            TaskStatus::InProgress => "In Progress",
            TaskStatus::Completed => "Completed",
        }
    }
}

impl std::fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    /// Assigned by the database on insert, never reused.
    pub id: Option<i64>,
    pub title: String,
    pub description: String,
    pub due_date: NaiveDate,
    pub priority: Priority,
    pub status: TaskStatus,
    /// Set by the database on insert, immutable afterwards.
    pub created_at: Option<String>,
}

impl Task {
    pub fn new(title: &str, description: &str, due_date: NaiveDate, priority: Priority) -> Self {
        Task {
            id: None,
            title: title.to_string(),
            description: description.to_string(),
            due_date,
            priority,
            status: TaskStatus::Pending,
            created_at: None,
        }
    }

    /// A task is overdue when its due date has passed and it is not completed.
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        self.due_date < today && self.status != TaskStatus::Completed
    }
}

#[derive(Debug, Clone)]
pub enum TaskFilter {
    All,
    Status(TaskStatus),
}
