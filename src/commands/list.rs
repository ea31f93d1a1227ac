use crate::db::tasks::Tasks;
use crate::libs::messages::Message;
use crate::libs::task::{TaskFilter, TaskStatus};
use crate::libs::view::View;
use crate::{msg_error, msg_info, msg_print};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Show the details of a single task instead of the list
    id: Option<i64>,

    /// Only show tasks with this status
    #[arg(short, long, value_enum)]
    status: Option<TaskStatus>,
}

pub fn cmd(args: ListArgs) -> Result<()> {
    let mut tasks_db = Tasks::new()?;

    if let Some(id) = args.id {
        match tasks_db.get_by_id(id)? {
            Some(task) => {
                msg_print!(Message::TaskDetailsHeader, true);
                View::task_details(&task)?;
            }
            None => msg_error!(Message::TaskNotFoundWithId(id)),
        }
        return Ok(());
    }

    let filter = match args.status {
        Some(status) => TaskFilter::Status(status),
        None => TaskFilter::All,
    };
    let tasks = tasks_db.fetch(filter)?;
    if tasks.is_empty() {
        msg_info!(Message::TasksNotFound);
        return Ok(());
    }

    let label = match args.status {
        None => "ALL TASKS",
        Some(TaskStatus::Pending) => "PENDING TASKS",
        Some(TaskStatus::InProgress) => "IN PROGRESS",
        Some(TaskStatus::Completed) => "COMPLETED TASKS",
    };
    msg_print!(Message::TaskListHeader(label.to_string()), true);
    View::tasks(&tasks)?;

    Ok(())
}
