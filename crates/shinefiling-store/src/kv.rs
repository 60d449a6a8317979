// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Durable key-value storage backed by SQLite.
//
// The client persists a handful of small JSON values per device (session,
// theme, local service overrides). A single `kv` table is enough; values
// are opaque strings and the callers own their encoding.

use std::collections::HashMap;
use std::sync::Mutex;

use rusqlite::{Connection, params};
use tracing::{debug, info, instrument};

use shinefiling_core::error::{Result, ShineError};

/// SQLite schema for the kv table.
const CREATE_TABLE_SQL: &str = r#"
    CREATE TABLE IF NOT EXISTS kv (
        key        TEXT PRIMARY KEY,
        value      TEXT NOT NULL,
        updated_at TEXT NOT NULL
    )
"#;

/// Durable string-to-string storage.
///
/// Implementations must tolerate concurrent access from the Dioxus task
/// pool, so all methods take `&self`.
pub trait KvStore: Send + Sync {
    /// Read the value for `key`, or `None` if it was never written.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write `value` under `key`, replacing any previous value atomically.
    fn put(&self, key: &str, value: &str) -> Result<()>;

    /// Delete `key`. Deleting a missing key is not an error.
    fn remove(&self, key: &str) -> Result<()>;
}

/// On-disk store used in normal operation.
///
/// `rusqlite::Connection` is `Send` but not `Sync`, so the connection sits
/// behind a `Mutex`. Contention is negligible: every operation is a single
/// sub-millisecond statement.
pub struct SqliteStore {
    conn: Mutex<Connection>,
}

impl SqliteStore {
    /// Open (or create) the store database at the given path.
    ///
    /// Applies WAL journal mode, which survives unclean shutdowns more
    /// gracefully, and creates the `kv` table if it does not exist.
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn open(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let conn = Connection::open(path.as_ref())
            .map_err(|e| ShineError::Database(format!("open: {e}")))?;

        conn.pragma_update(None, "journal_mode", "WAL")
            .map_err(|e| ShineError::Database(format!("WAL pragma: {e}")))?;

        conn.execute_batch(CREATE_TABLE_SQL)
            .map_err(|e| ShineError::Database(format!("create table: {e}")))?;

        info!("kv database opened");
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Open an in-memory database (useful for tests).
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .map_err(|e| ShineError::Database(format!("open in-memory: {e}")))?;

        conn.execute_batch(CREATE_TABLE_SQL)
            .map_err(|e| ShineError::Database(format!("create table: {e}")))?;

        debug!("in-memory kv database opened");
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }
}

impl KvStore for SqliteStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let conn = self.conn.lock().expect("kv lock poisoned");

        let mut stmt = conn
            .prepare("SELECT value FROM kv WHERE key = ?1")
            .map_err(|e| ShineError::Database(format!("prepare get: {e}")))?;

        let mut rows = stmt
            .query_map(params![key], |row| row.get::<_, String>(0))
            .map_err(|e| ShineError::Database(format!("query get: {e}")))?;

        match rows.next() {
            Some(Ok(value)) => Ok(Some(value)),
            Some(Err(e)) => Err(ShineError::Database(format!("row parse: {e}"))),
            None => Ok(None),
        }
    }

    fn put(&self, key: &str, value: &str) -> Result<()> {
        let conn = self.conn.lock().expect("kv lock poisoned");
        let now = chrono::Utc::now().to_rfc3339();

        conn.execute(
            "INSERT INTO kv (key, value, updated_at) VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value,
                                            updated_at = excluded.updated_at",
            params![key, value, now],
        )
        .map_err(|e| ShineError::Database(format!("put: {e}")))?;

        debug!(key, bytes = value.len(), "kv value written");
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let conn = self.conn.lock().expect("kv lock poisoned");

        conn.execute("DELETE FROM kv WHERE key = ?1", params![key])
            .map_err(|e| ShineError::Database(format!("remove: {e}")))?;

        debug!(key, "kv value removed");
        Ok(())
    }
}

/// In-memory store used when persistent storage is unavailable.
///
/// Everything is lost on exit, which the UI surfaces as a warning banner;
/// the app stays usable for browsing and filing.
#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KvStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let entries = self.entries.lock().expect("kv lock poisoned");
        Ok(entries.get(key).cloned())
    }

    fn put(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = self.entries.lock().expect("kv lock poisoned");
        entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let mut entries = self.entries.lock().expect("kv lock poisoned");
        entries.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stores() -> Vec<Box<dyn KvStore>> {
        vec![
            Box::new(SqliteStore::open_in_memory().expect("open in-memory db")),
            Box::new(MemoryStore::new()),
        ]
    }

    #[test]
    fn get_missing_key_returns_none() {
        for store in stores() {
            assert!(store.get("nope").expect("get").is_none());
        }
    }

    #[test]
    fn put_then_get_round_trips() {
        for store in stores() {
            store.put("theme", "dark").expect("put");
            assert_eq!(store.get("theme").expect("get").as_deref(), Some("dark"));
        }
    }

    #[test]
    fn put_replaces_existing_value() {
        for store in stores() {
            store.put("theme", "dark").expect("put");
            store.put("theme", "light").expect("put again");
            assert_eq!(store.get("theme").expect("get").as_deref(), Some("light"));
        }
    }

    #[test]
    fn remove_is_idempotent() {
        for store in stores() {
            store.put("user", "{}").expect("put");
            store.remove("user").expect("remove");
            store.remove("user").expect("remove again");
            assert!(store.get("user").expect("get").is_none());
        }
    }

    #[test]
    fn sqlite_store_survives_reopen() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("client.db");

        {
            let store = SqliteStore::open(&path).expect("open");
            store.put("user", r#"{"email":"a@b.in"}"#).expect("put");
        }

        let store = SqliteStore::open(&path).expect("reopen");
        assert_eq!(
            store.get("user").expect("get").as_deref(),
            Some(r#"{"email":"a@b.in"}"#)
        );
    }
}
