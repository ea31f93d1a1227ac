use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === TASK MESSAGES ===
            Message::TaskCreated(id) => format!("Task #{} created successfully", id),
            Message::TaskUpdated => "Task updated successfully".to_string(),
            Message::TaskCompleted => "Task marked as completed".to_string(),
            Message::TaskDeleted(title) => format!("Task '{}' was deleted", title),
            Message::TaskNotFoundWithId(id) => format!("Task with ID {} not found", id),
            Message::TasksNotFound => "No tasks found matching criteria".to_string(),
            Message::NoTasksToUpdate => "No tasks available to update".to_string(),
            Message::NoTasksToDelete => "No tasks available to delete".to_string(),
            Message::AllTasksCompleted => "All tasks are already completed!".to_string(),
            Message::TaskListHeader(label) => format!("--- {} ---", label),
            Message::TaskDetailsHeader => "--- TASK DETAILS ---".to_string(),
            Message::EditingTask(title) => format!("Editing task '{}' (leave a field unchanged to keep its current value)", title),
            Message::SelectTaskToUpdate => "Select a task to update".to_string(),
            Message::SelectTaskToComplete => "Select a task to complete".to_string(),
            Message::SelectTaskToDelete => "Select a task to delete".to_string(),
            Message::ConfirmDeleteTask(title) => format!("Are you sure you want to delete '{}'?", title),
            Message::OperationCancelled => "Operation cancelled".to_string(),

            // === PROMPT MESSAGES ===
            Message::PromptTaskTitle => "Task name".to_string(),
            Message::PromptTaskDescription => "Description".to_string(),
            Message::PromptTaskDueDate => "Due date (YYYY-MM-DD)".to_string(),
            Message::PromptTaskPriority => "Priority (Low/Medium/High)".to_string(),

            // === VALIDATION MESSAGES ===
            Message::TitleRequired => "Task name cannot be empty".to_string(),
            Message::InvalidDateFormat => "Invalid date, use the YYYY-MM-DD format".to_string(),
            Message::DueDateInPast => "Due date cannot be in the past".to_string(),

            // === ANALYTICS MESSAGES ===
            Message::StatsHeader => "--- ANALYTICS DASHBOARD ---".to_string(),
            Message::StatsNoData => "No data available".to_string(),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigDeleted => "Configuration removed".to_string(),
            Message::PromptDbFilePath => "Database file path (leave empty for the default location)".to_string(),

            // === EXPORT MESSAGES ===
            Message::ExportCompleted(path) => format!("Tasks exported successfully to: {}", path),
            Message::NothingToExport => "There are no tasks to export".to_string(),
        };
        write!(f, "{}", text)
    }
}
