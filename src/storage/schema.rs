//! Database schema and connection management

use crate::error::{CarotError, Result};
use rusqlite::Connection;
use std::path::Path;
use std::sync::{Mutex, MutexGuard};

/// SQLite-backed key-value table holding the picks.
pub struct PickDatabase {
    conn: Mutex<Connection>,
}

impl PickDatabase {
    /// Open (or create) the database at `path` and ensure tables exist.
    pub fn new(path: &Path) -> Result<Self> {
        // Ensure the parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let conn = Connection::open(path)?;
        let db = Self {
            conn: Mutex::new(conn),
        };
        db.initialize_schema()?;
        Ok(db)
    }

    /// Throwaway database, used by tests.
    pub fn new_in_memory() -> Result<Self> {
        let db = Self {
            conn: Mutex::new(Connection::open_in_memory()?),
        };
        db.initialize_schema()?;
        Ok(db)
    }

    pub(crate) fn conn(&self) -> Result<MutexGuard<'_, Connection>> {
        self.conn.lock().map_err(|_| CarotError::Storage {
            message: "database connection lock poisoned".to_string(),
        })
    }

    fn initialize_schema(&self) -> Result<()> {
        self.conn()?.execute(
            "CREATE TABLE IF NOT EXISTS kv (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL
            )",
            [],
        )?;
        Ok(())
    }
}
