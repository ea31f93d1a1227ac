use crate::db::tasks::Tasks;
use crate::libs::messages::Message;
use crate::libs::task::{Task, TaskFilter, TaskStatus};
use crate::{msg_info, msg_success};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Select};

#[derive(Debug, Args)]
pub struct CompleteArgs {
    /// ID of the task to mark as completed
    id: Option<i64>,
}

pub fn cmd(args: CompleteArgs) -> Result<()> {
    let mut tasks_db = Tasks::new()?;

    let id = match args.id {
        Some(id) => id,
        None => {
            let tasks: Vec<Task> = tasks_db
                .fetch(TaskFilter::All)?
                .into_iter()
                .filter(|t| t.status != TaskStatus::Completed)
                .collect();
            if tasks.is_empty() {
                msg_info!(Message::AllTasksCompleted);
                return Ok(());
            }

            let labels: Vec<String> = tasks
                .iter()
                .map(|t| format!("#{} {} (due {})", t.id.unwrap_or(0), t.title, t.due_date))
                .collect();
            let selection = Select::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::SelectTaskToComplete.to_string())
                .items(&labels)
                .interact()?;
            tasks[selection].id.unwrap_or(0)
        }
    };

    tasks_db.complete(id)?;

    msg_success!(Message::TaskCompleted);
    Ok(())
}
