//! Read-only note retrieval.
//!
//! # Responsibility
//! - Define the `NoteStore` contract views use to fetch note text by path.
//! - Provide in-memory, vault-directory and SQLite mirror adapters.
//!
//! # Invariants
//! - A missing note is `Ok(None)`, never an error.
//! - Stores never modify notes.
//! - Paths are vault-relative with `/` separators.

use crate::db::DbError;
use async_trait::async_trait;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::Arc;

pub mod memory;
pub mod sqlite;
pub mod vault_dir;

pub use memory::MemoryNoteStore;
pub use sqlite::SqliteNoteStore;
pub use vault_dir::VaultDirStore;

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Debug)]
pub enum StoreError {
    /// Path is empty, absolute, or escapes the vault root.
    InvalidPath(String),
    Io {
        path: String,
        source: std::io::Error,
    },
    Db(DbError),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidPath(path) => write!(f, "invalid note path `{path}`"),
            Self::Io { path, source } => write!(f, "failed to read note `{path}`: {source}"),
            Self::Db(err) => write!(f, "{err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidPath(_) => None,
            Self::Io { source, .. } => Some(source),
            Self::Db(err) => Some(err),
        }
    }
}

impl From<DbError> for StoreError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Vault read API consumed by the calendar views.
#[async_trait]
pub trait NoteStore: Send + Sync {
    /// Full text of the note at `path`, or `None` when it does not exist.
    async fn read_note(&self, path: &str) -> StoreResult<Option<String>>;

    /// Whether a note exists at `path`.
    async fn note_exists(&self, path: &str) -> StoreResult<bool> {
        Ok(self.read_note(path).await?.is_some())
    }
}

#[async_trait]
impl<S> NoteStore for Arc<S>
where
    S: NoteStore + ?Sized,
{
    async fn read_note(&self, path: &str) -> StoreResult<Option<String>> {
        (**self).read_note(path).await
    }

    async fn note_exists(&self, path: &str) -> StoreResult<bool> {
        (**self).note_exists(path).await
    }
}
