//! Task persistence operations.
//!
//! Every operation maps to exactly one parameterized SQL statement against
//! the `tasks` table; there are no multi-statement transactions. A `Tasks`
//! value owns its own connection, so constructing one per command gives each
//! operation a fresh connection that is released when the value drops,
//! whatever the exit path.
//!
//! Write operations that match zero rows fail with
//! [`Message::TaskNotFoundWithId`], which keeps "nothing matched"
//! distinguishable from a backend error at the call site.

use super::db::Db;
use crate::libs::messages::Message;
use crate::libs::task::{Priority, Task, TaskFilter, TaskStatus};
use crate::msg_error_anyhow;
use anyhow::Result;
use rusqlite::{params, params_from_iter, Connection};

// AUTOINCREMENT keeps ids monotonic: a deleted task's id is never handed out
// again.
const SCHEMA_TASKS: &str = "CREATE TABLE IF NOT EXISTS tasks (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    description TEXT,
    due_date DATE NOT NULL,
    priority TEXT NOT NULL,
    status TEXT NOT NULL,
    created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
)";

/// Insert a new task; the database assigns id and creation timestamp.
const INSERT_TASK: &str =
    "INSERT INTO tasks (title, description, due_date, priority, status, created_at) VALUES (?1, ?2, ?3, ?4, ?5, datetime(CURRENT_TIMESTAMP, 'localtime'))";

/// Tasks are always listed by ascending due date; ties stay in rowid order.
const SELECT_TASKS: &str = "SELECT * FROM tasks ORDER BY due_date ASC";
const SELECT_TASKS_BY_STATUS: &str = "SELECT * FROM tasks WHERE status = ?1 ORDER BY due_date ASC";
const SELECT_TASK_BY_ID: &str = "SELECT * FROM tasks WHERE id = ?1";

/// Overwrite the editable fields unconditionally; status is untouched.
const UPDATE_TASK: &str = "UPDATE tasks SET title = ?2, description = ?3, due_date = ?4, priority = ?5 WHERE id = ?1";
const COMPLETE_TASK: &str = "UPDATE tasks SET status = ?2 WHERE id = ?1";
const DELETE_TASK: &str = "DELETE FROM tasks WHERE id = ?1";

pub struct Tasks {
    conn: Connection,
}

impl Tasks {
    pub fn new() -> Result<Self> {
        let db = Db::new()?;
        db.conn.execute(SCHEMA_TASKS, [])?;

        Ok(Tasks { conn: db.conn })
    }

    /// Inserts a new task and returns the generated id.
    pub fn create(&mut self, task: &Task) -> Result<i64> {
        self.conn.execute(
            INSERT_TASK,
            params![task.title, task.description, task.due_date, task.priority.as_str(), task.status.as_str()],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Fetches tasks ordered by due date, optionally restricted to a status.
    ///
    /// An empty result is a valid outcome, not an error.
    pub fn fetch(&mut self, filter: TaskFilter) -> Result<Vec<Task>> {
        let (mut stmt, params) = match filter {
            TaskFilter::All => (self.conn.prepare(SELECT_TASKS)?, vec![]),
            TaskFilter::Status(status) => (self.conn.prepare(SELECT_TASKS_BY_STATUS)?, vec![status.as_str()]),
        };

        let task_iter = stmt.query_map(params_from_iter(params.iter()), |row| {
            Ok(Task {
                id: row.get(0)?,
                title: row.get(1)?,
                description: row.get::<_, Option<String>>(2)?.unwrap_or_default(),
                due_date: row.get(3)?,
                priority: Priority::parse(&row.get::<_, String>(4)?),
                status: TaskStatus::parse(&row.get::<_, String>(5)?),
                created_at: row.get(6)?,
            })
        })?;

        let mut tasks = Vec::new();
        for task in task_iter {
            tasks.push(task?);
        }
        Ok(tasks)
    }

    pub fn get_by_id(&mut self, id: i64) -> Result<Option<Task>> {
        let mut stmt = self.conn.prepare(SELECT_TASK_BY_ID)?;
        let mut task_iter = stmt.query_map(params![id], |row| {
            Ok(Task {
                id: row.get(0)?,
                title: row.get(1)?,
                description: row.get::<_, Option<String>>(2)?.unwrap_or_default(),
                due_date: row.get(3)?,
                priority: Priority::parse(&row.get::<_, String>(4)?),
                status: TaskStatus::parse(&row.get::<_, String>(5)?),
                created_at: row.get(6)?,
            })
        })?;

        match task_iter.next() {
            Some(Ok(task)) => Ok(Some(task)),
            Some(Err(e)) => Err(e.into()),
            None => Ok(None),
        }
    }

    /// Overwrites title, description, due date and priority of the task with
    /// the given id. The store accepts any due date here; validation is the
    /// caller's responsibility.
    pub fn update(&mut self, id: i64, task: &Task) -> Result<()> {
        let affected = self.conn.execute(
            UPDATE_TASK,
            params![id, task.title, task.description, task.due_date, task.priority.as_str()],
        )?;
        if affected == 0 {
            return Err(msg_error_anyhow!(Message::TaskNotFoundWithId(id)));
        }
        Ok(())
    }

    /// Sets the task's status to `Completed` regardless of its prior status,
    /// so repeating the call on the same id succeeds.
    pub fn complete(&mut self, id: i64) -> Result<()> {
        let affected = self.conn.execute(COMPLETE_TASK, params![id, TaskStatus::Completed.as_str()])?;
        if affected == 0 {
            return Err(msg_error_anyhow!(Message::TaskNotFoundWithId(id)));
        }
        Ok(())
    }

    /// Permanently removes the task with the given id.
    pub fn delete(&mut self, id: i64) -> Result<()> {
        let affected = self.conn.execute(DELETE_TASK, params![id])?;
        if affected == 0 {
            return Err(msg_error_anyhow!(Message::TaskNotFoundWithId(id)));
        }
        Ok(())
    }
}
