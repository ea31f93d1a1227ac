pub mod add;
pub mod complete;
pub mod delete;
pub mod export;
pub mod init;
pub mod list;
pub mod stats;
pub mod update;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Add a new task")]
    Add(add::AddArgs),
    #[command(about = "List tasks or show the details of one task")]
    List(list::ListArgs),
    #[command(about = "Update an existing task")]
    Update(update::UpdateArgs),
    #[command(about = "Mark a task as completed")]
    Complete(complete::CompleteArgs),
    #[command(about = "Delete a task")]
    Delete(delete::DeleteArgs),
    #[command(about = "Show the analytics dashboard")]
    Stats,
    #[command(about = "Export tasks to a file")]
    Export(export::ExportArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Add(args) => add::cmd(args),
            Commands::List(args) => list::cmd(args),
            Commands::Update(args) => update::cmd(args),
            Commands::Complete(args) => complete::cmd(args),
            Commands::Delete(args) => delete::cmd(args),
            Commands::Stats => stats::cmd(),
            Commands::Export(args) => export::cmd(args),
        }
    }
}
