//! Task update command.
//!
//! The store overwrites all editable fields unconditionally, so this command
//! reads the current row first and prompts with each current value as the
//! default; accepting a default resupplies the existing value. The task's
//! existing due date stays accepted even when it is already in the past.

use crate::db::tasks::Tasks;
use crate::libs::messages::Message;
use crate::libs::task::{Priority, Task, TaskFilter, DATE_FORMAT};
use crate::libs::view::View;
use crate::{msg_error, msg_info, msg_print, msg_success};
use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Input, Select};

#[derive(Debug, Args)]
pub struct UpdateArgs {
    /// ID of the task to update
    id: Option<i64>,
}

pub fn cmd(args: UpdateArgs) -> Result<()> {
    let mut tasks_db = Tasks::new()?;
    let today = Local::now().date_naive();

    let task = match args.id {
        Some(id) => match tasks_db.get_by_id(id)? {
            Some(task) => task,
            None => {
                msg_error!(Message::TaskNotFoundWithId(id));
                return Ok(());
            }
        },
        None => {
            let tasks = tasks_db.fetch(TaskFilter::All)?;
            if tasks.is_empty() {
                msg_info!(Message::NoTasksToUpdate);
                return Ok(());
            }
            View::tasks(&tasks)?;

            let labels: Vec<String> = tasks.iter().map(|t| format!("#{} {}", t.id.unwrap_or(0), t.title)).collect();
            let selection = Select::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::SelectTaskToUpdate.to_string())
                .items(&labels)
                .interact()?;
            tasks[selection].clone()
        }
    };
    let id = task.id.unwrap_or(0);

    msg_print!(Message::EditingTask(task.title.clone()), true);

    let title: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptTaskTitle.to_string())
        .default(task.title.clone())
        .validate_with(|input: &String| -> Result<(), String> {
            if input.trim().is_empty() {
                Err(Message::TitleRequired.to_string())
            } else {
                Ok(())
            }
        })
        .interact_text()?;

    let description: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptTaskDescription.to_string())
        .default(task.description.clone())
        .allow_empty(true)
        .interact_text()?;

    let current_due = task.due_date.to_string();
    let unchanged = current_due.clone();
    let due_input: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptTaskDueDate.to_string())
        .default(current_due)
        .validate_with(move |input: &String| -> Result<(), String> {
            if input.trim() == unchanged {
                return Ok(());
            }
            match NaiveDate::parse_from_str(input.trim(), DATE_FORMAT) {
                Ok(date) if date >= today => Ok(()),
                Ok(_) => Err(Message::DueDateInPast.to_string()),
                Err(_) => Err(Message::InvalidDateFormat.to_string()),
            }
        })
        .interact_text()?;
    let due_date = NaiveDate::parse_from_str(due_input.trim(), DATE_FORMAT)?;

    let priority_input: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptTaskPriority.to_string())
        .default(task.priority.as_str().to_string())
        .interact_text()?;
    let priority = Priority::parse(&priority_input);

    let updated = Task {
        title: title.trim().to_string(),
        description,
        due_date,
        priority,
        ..task
    };
    tasks_db.update(id, &updated)?;

    msg_success!(Message::TaskUpdated);
    Ok(())
}
