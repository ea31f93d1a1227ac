use crate::db::tasks::Tasks;
use crate::libs::export::{ExportFormat, Exporter};
use crate::libs::messages::Message;
use crate::libs::task::TaskFilter;
use crate::{msg_success, msg_warning};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Output format for the exported data
    #[arg(short, long, value_enum, default_value = "csv")]
    format: ExportFormat,

    /// Custom output file path; defaults to a timestamped file name
    #[arg(short, long)]
    output: Option<PathBuf>,
}

pub fn cmd(args: ExportArgs) -> Result<()> {
    let tasks = Tasks::new()?.fetch(TaskFilter::All)?;
    if tasks.is_empty() {
        msg_warning!(Message::NothingToExport);
        return Ok(());
    }

    let exporter = Exporter::new(args.format, args.output);
    let path = exporter.export(&tasks)?;

    msg_success!(Message::ExportCompleted(path.display().to_string()));
    Ok(())
}
