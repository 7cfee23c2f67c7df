//! Notes read from a SQLite mirror of the vault.
//!
//! # Invariants
//! - The wrapped connection has the `notes` table; `try_new` checks it.

use crate::db::{self, migrations, DbError};
use crate::store::{NoteStore, StoreResult};
use async_trait::async_trait;
use log::debug;
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;
use std::sync::Mutex;

pub struct SqliteNoteStore {
    conn: Mutex<Connection>,
}

impl SqliteNoteStore {
    /// Wraps an already-opened connection.
    ///
    /// # Errors
    /// - `DbError::MissingNotesTable` when the schema is absent.
    pub fn try_new(conn: Connection) -> StoreResult<Self> {
        if !migrations::has_notes_table(&conn)? {
            return Err(DbError::MissingNotesTable.into());
        }
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    pub fn open(path: impl AsRef<Path>) -> StoreResult<Self> {
        Self::try_new(db::open_db(path)?)
    }

    /// Inserts or replaces a mirrored note. Used when seeding the mirror.
    pub fn upsert_note(&self, path: &str, content: &str) -> StoreResult<()> {
        let conn = self.lock();
        conn.execute(
            "INSERT INTO notes (path, content) VALUES (?1, ?2)
             ON CONFLICT(path) DO UPDATE SET
                content = excluded.content,
                updated_at = CAST(strftime('%s', 'now') AS INTEGER) * 1000;",
            params![path, content],
        )?;
        Ok(())
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Connection> {
        // Poisoning leaves the connection readable.
        self.conn
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait]
impl NoteStore for SqliteNoteStore {
    async fn read_note(&self, path: &str) -> StoreResult<Option<String>> {
        let conn = self.lock();
        let content = conn
            .query_row(
                "SELECT content FROM notes WHERE path = ?1;",
                params![path],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        debug!(
            "event=note_read module=store status=ok backend=sqlite found={}",
            content.is_some()
        );
        Ok(content)
    }

    async fn note_exists(&self, path: &str) -> StoreResult<bool> {
        let conn = self.lock();
        let exists = conn
            .query_row(
                "SELECT 1 FROM notes WHERE path = ?1;",
                params![path],
                |_| Ok(()),
            )
            .optional()?
            .is_some();
        Ok(exists)
    }
}
