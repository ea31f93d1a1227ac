use crate::db::tasks::Tasks;
use crate::libs::messages::Message;
use crate::libs::stats::Stats;
use crate::libs::task::TaskFilter;
use crate::libs::view::View;
use crate::{msg_info, msg_print};
use anyhow::Result;

pub fn cmd() -> Result<()> {
    let tasks = Tasks::new()?.fetch(TaskFilter::All)?;
    if tasks.is_empty() {
        msg_info!(Message::StatsNoData);
        return Ok(());
    }

    let stats = Stats::collect(&tasks);
    msg_print!(Message::StatsHeader, true);
    View::stats(&stats)?;

    Ok(())
}
