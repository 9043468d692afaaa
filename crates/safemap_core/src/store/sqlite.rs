use std::path::Path;

use rusqlite::{Connection, OptionalExtension};

use super::slot::StorageSlot;
use crate::db;
use crate::error::AppError;

/// Durable slot backed by the `kv_store` table.
pub struct SqliteSlot {
    conn: Connection,
}

impl SqliteSlot {
    pub fn open(path: &Path) -> Result<Self, AppError> {
        let mut conn = db::open(path)?;
        db::migrate(&mut conn)?;
        Ok(Self { conn })
    }

    pub fn open_in_memory() -> Result<Self, AppError> {
        let mut conn = db::open_in_memory()?;
        db::migrate(&mut conn)?;
        Ok(Self { conn })
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }
}

impl StorageSlot for SqliteSlot {
    fn get_item(&self, key: &str) -> Result<Option<String>, AppError> {
        self.conn
            .query_row("SELECT value FROM kv_store WHERE key = ?1", [key], |row| {
                row.get::<_, String>(0)
            })
            .optional()
            .map_err(|e| AppError::storage_read(key, e.to_string()))
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), AppError> {
        self.conn
            .execute(
                r#"
      INSERT INTO kv_store(key, value, updated_at)
      VALUES (?1, ?2, strftime('%Y-%m-%dT%H:%M:%fZ','now'))
      ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at
      "#,
                [key, value],
            )
            .map(|_| ())
            .map_err(|e| AppError::storage_write(key, e.to_string()))
    }

    fn remove_item(&mut self, key: &str) -> Result<(), AppError> {
        self.conn
            .execute("DELETE FROM kv_store WHERE key = ?1", [key])
            .map(|_| ())
            .map_err(|e| AppError::storage_write(key, e.to_string()))
    }
}
