use crate::db::tasks::Tasks;
use crate::libs::messages::Message;
use crate::libs::task::TaskFilter;
use crate::{msg_error, msg_info, msg_success};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm, Select};

#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// ID of the task to delete
    id: Option<i64>,

    /// Skip the confirmation prompt
    #[arg(short, long)]
    yes: bool,
}

pub fn cmd(args: DeleteArgs) -> Result<()> {
    let mut tasks_db = Tasks::new()?;

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
                msg_info!(Message::NoTasksToDelete);
                return Ok(());
            }

            let labels: Vec<String> = tasks
                .iter()
                .map(|t| format!("#{} {} ({})", t.id.unwrap_or(0), t.title, t.status))
                .collect();
            let selection = Select::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::SelectTaskToDelete.to_string())
                .items(&labels)
                .interact()?;
            tasks[selection].clone()
        }
    };

    let confirmed = args.yes
        || Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::ConfirmDeleteTask(task.title.clone()).to_string())
            .default(false)
            .interact()?;

    if confirmed {
        tasks_db.delete(task.id.unwrap_or(0))?;
        msg_success!(Message::TaskDeleted(task.title));
    } else {
        msg_info!(Message::OperationCancelled);
    }

    Ok(())
}
