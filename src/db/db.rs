use crate::libs::config::Config;
use crate::libs::data_storage::DataStorage;
use crate::msg_debug;
use anyhow::Result;
use rusqlite::Connection;

pub const DB_FILE_NAME: &str = "ttrack.db";

/// A single SQLite connection, opened fresh for every store instance and
/// released when the instance drops.
pub struct Db {
    pub conn: Connection,
}

impl Db {
    /// Opens a connection to the configured database file, falling back to
    /// the platform default location when no override is set.
    pub fn new() -> Result<Db> {
        let db_file_path = match Config::read()?.db_file {
            Some(path) => path,
            None => DataStorage::new().get_path(DB_FILE_NAME)?,
        };
        msg_debug!(format!("Opening database at {}", db_file_path.display()));
        let conn = Connection::open(db_file_path)?;

        Ok(Db { conn })
    }
}
