//! String key/value access to the `kv` table.

use super::db::Db;
use crate::libs::error::StoreError;
use rusqlite::{params, OptionalExtension};

const SELECT_VALUE: &str = "SELECT value FROM kv WHERE key = ?1";
const UPSERT_VALUE: &str = "INSERT INTO kv (key, value, updated_at) VALUES (?1, ?2, CURRENT_TIMESTAMP)
    ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at";
const DELETE_VALUE: &str = "DELETE FROM kv WHERE key = ?1";

pub struct KeyValue {
    db: Db,
}

impl KeyValue {
    pub fn new(db: Db) -> Self {
        Self { db }
    }

    pub fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let value = self.db.conn.query_row(SELECT_VALUE, params![key], |row| row.get(0)).optional()?;
        Ok(value)
    }

    pub fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.db.conn.execute(UPSERT_VALUE, params![key, value])?;
        Ok(())
    }

    /// Returns whether a value was removed.
    pub fn delete(&self, key: &str) -> Result<bool, StoreError> {
        let affected = self.db.conn.execute(DELETE_VALUE, params![key])?;
        Ok(affected > 0)
    }
}
