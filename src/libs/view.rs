use crate::libs::stats::Stats;
use crate::libs::task::{Task, TaskStatus};
use anyhow::Result;
use chrono::Local;
use prettytable::{color, row, Attr, Cell, Row, Table};

/// Terminal table rendering for tasks and the analytics dashboard.
pub struct View {}

impl View {
    /// Prints the task list; overdue due dates are highlighted in red and
    /// completed statuses in green.
    pub fn tasks(tasks: &[Task]) -> Result<()> {
        let today = Local::now().date_naive();
        let mut table = Table::new();

        table.add_row(row!["ID", "TITLE", "DUE DATE", "PRIORITY", "STATUS"]);
        for task in tasks {
            let mut due_cell = Cell::new(&task.due_date.to_string());
            if task.is_overdue(today) {
                due_cell = due_cell.with_style(Attr::ForegroundColor(color::RED));
            }
            let status_color = if task.status == TaskStatus::Completed {
                color::GREEN
            } else {
                color::YELLOW
            };
            table.add_row(Row::new(vec![
                Cell::new(&task.id.unwrap_or(0).to_string()),
                Cell::new(&task.title),
                due_cell,
                Cell::new(task.priority.as_str()),
                Cell::new(task.status.as_str()).with_style(Attr::ForegroundColor(status_color)),
            ]));
        }
        table.printstd();

        Ok(())
    }

    pub fn task_details(task: &Task) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", task.id.unwrap_or(0)]);
        table.add_row(row!["Name", task.title]);
        table.add_row(row!["Description", task.description]);
        table.add_row(row!["Due date", task.due_date]);
        table.add_row(row!["Priority", task.priority]);
        table.add_row(row!["Status", task.status]);
        table.add_row(row!["Created", task.created_at.clone().unwrap_or_default()]);
        table.printstd();

        Ok(())
    }

    /// Prints the analytics dashboard: totals, completion rate and the
    /// per-priority breakdown with proportional bars.
    pub fn stats(stats: &Stats) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["", "COUNT", "SHARE"]);
        table.add_row(row!["Total", stats.total, ""]);
        table.add_row(Row::new(vec![
            Cell::new("Completed"),
            Cell::new(&stats.completed.to_string()),
            Cell::new(&format!("{} {:.1}%", Self::bar(stats.completed, stats.total), stats.completion_rate()))
                .with_style(Attr::ForegroundColor(color::GREEN)),
        ]));
        table.add_row(Row::new(vec![
            Cell::new("High"),
            Cell::new(&stats.high.to_string()),
            Cell::new(&Self::bar(stats.high, stats.total)).with_style(Attr::ForegroundColor(color::RED)),
        ]));
        table.add_row(Row::new(vec![
            Cell::new("Medium"),
            Cell::new(&stats.medium.to_string()),
            Cell::new(&Self::bar(stats.medium, stats.total)).with_style(Attr::ForegroundColor(color::YELLOW)),
        ]));
        table.add_row(Row::new(vec![
            Cell::new("Low"),
            Cell::new(&stats.low.to_string()),
            Cell::new(&Self::bar(stats.low, stats.total)).with_style(Attr::ForegroundColor(color::BLUE)),
        ]));
        table.printstd();

        Ok(())
    }

    fn bar(count: usize, total: usize) -> String {
        "█".repeat(Stats::bar_len(count, total))
    }
}
