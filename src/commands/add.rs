//! Task creation command.
//!
//! Any field not supplied on the command line is collected interactively.
//! The due date must not be in the past; this rule lives here, not in the
//! store.

use crate::db::tasks::Tasks;
use crate::libs::messages::Message;
use crate::libs::task::{Priority, Task, DATE_FORMAT};
use crate::{msg_bail_anyhow, msg_success};
use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Input};

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Task title
    title: Option<String>,

    /// Longer description of the task
    #[arg(short, long)]
    description: Option<String>,

    /// Due date in YYYY-MM-DD format, today or later
    #[arg(long)]
    due: Option<String>,

    /// Task priority (Low/Medium/High); anything else means Medium
    #[arg(short, long)]
    priority: Option<String>,
}

pub fn cmd(args: AddArgs) -> Result<()> {
    let today = Local::now().date_naive();

    let title = match args.title {
        Some(title) => title,
        None => Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptTaskTitle.to_string())
            .validate_with(|input: &String| -> Result<(), String> {
                if input.trim().is_empty() {
                    Err(Message::TitleRequired.to_string())
                } else {
                    Ok(())
                }
            })
            .interact_text()?,
    };
    if title.trim().is_empty() {
        msg_bail_anyhow!(Message::TitleRequired);
    }

    let description = match args.description {
        Some(description) => description,
        None => Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptTaskDescription.to_string())
            .allow_empty(true)
            .interact_text()?,
    };

    let due_date = match args.due {
        Some(due) => {
            let date = match NaiveDate::parse_from_str(due.trim(), DATE_FORMAT) {
                Ok(date) => date,
                Err(_) => msg_bail_anyhow!(Message::InvalidDateFormat),
            };
            if date < today {
                msg_bail_anyhow!(Message::DueDateInPast);
            }
            date
        }
        None => {
            let due_input: String = Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptTaskDueDate.to_string())
                .validate_with(|input: &String| -> Result<(), String> {
                    match NaiveDate::parse_from_str(input.trim(), DATE_FORMAT) {
                        Ok(date) if date >= today => Ok(()),
                        Ok(_) => Err(Message::DueDateInPast.to_string()),
                        Err(_) => Err(Message::InvalidDateFormat.to_string()),
                    }
                })
                .interact_text()?;
            NaiveDate::parse_from_str(due_input.trim(), DATE_FORMAT)?
        }
    };

    let priority = match args.priority {
        Some(priority) => Priority::parse(&priority),
        None => {
            let priority_input: String = Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptTaskPriority.to_string())
                .default(Priority::Medium.as_str().to_string())
                .interact_text()?;
            Priority::parse(&priority_input)
        }
    };

    let task = Task::new(title.trim(), &description, due_date, priority);
    let id = Tasks::new()?.create(&task)?;

    msg_success!(Message::TaskCreated(id));
    Ok(())
}
