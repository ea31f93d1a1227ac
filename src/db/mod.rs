//! Database layer for the ttrack application.
//!
//! Built on SQLite. The schema is a single `tasks` table created on first
//! use; there is no migration system.

/// Connection management.
pub mod db;

/// CRUD operations over the tasks table.
pub mod tasks;
