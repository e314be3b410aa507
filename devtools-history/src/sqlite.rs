use crate::error::{HistoryError, Result};
use crate::kv::KeyValueStore;
use rusqlite::{Connection, OptionalExtension, params};
use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::debug;

/// Key-value store kept in a single SQLite table.
#[derive(Clone, Debug)]
pub struct SqliteStore {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteStore {
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let conn = Connection::open(path)
            .map_err(|e| HistoryError::unavailable("open", &path.display().to_string(), e))?;
        debug!("sqlite store at {}", path.display());
        Self::with_connection(conn)
    }

    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .map_err(|e| HistoryError::unavailable("open", ":memory:", e))?;
        Self::with_connection(conn)
    }

    fn with_connection(conn: Connection) -> Result<Self> {
        conn.execute(
            "CREATE TABLE IF NOT EXISTS kv (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL
            )",
            [],
        )
        .map_err(|e| HistoryError::unavailable("init", "kv", e))?;

        Ok(SqliteStore {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    fn connection(&self, operation: &'static str, key: &str) -> Result<MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|e| HistoryError::unavailable(operation, key, e))
    }
}

impl KeyValueStore for SqliteStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let conn = self.connection("get", key)?;
        conn.query_row("SELECT value FROM kv WHERE key = ?1", params![key], |row| {
            row.get(0)
        })
        .optional()
        .map_err(|e| HistoryError::unavailable("get", key, e))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let conn = self.connection("set", key)?;
        conn.execute(
            "INSERT OR REPLACE INTO kv (key, value) VALUES (?1, ?2)",
            params![key, value],
        )
        .map_err(|e| HistoryError::unavailable("set", key, e))?;
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<()> {
        let conn = self.connection("delete", key)?;
        conn.execute("DELETE FROM kv WHERE key = ?1", params![key])
            .map_err(|e| HistoryError::unavailable("delete", key, e))?;
        Ok(())
    }
}
