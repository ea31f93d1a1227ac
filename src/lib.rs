//! # ttrack - Terminal Task Tracker
//!
//! A command-line utility for tracking personal tasks backed by a local
//! SQLite database.
//!
//! ## Features
//!
//! - **Task Management**: Create, update, complete and delete tasks
//! - **Filtering**: List tasks by completion status, ordered by due date
//! - **Analytics**: Completion rate and priority breakdown dashboard
//! - **Data Export**: Export tasks to CSV and JSON formats
//!
//! ## Usage
//!
//! ```rust,no_run
//! use ttrack::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
