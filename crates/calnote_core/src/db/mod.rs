//! SQLite note mirror: connection setup and the `notes` schema.
//!
//! A mirror is a single `notes(path, content, updated_at)` table holding the
//! text of vault notes under their vault-relative paths. It is read-only
//! from the views' point of view.
//!
//! # Invariants
//! - Schema version lives in `PRAGMA user_version`; a mirror written by a
//!   newer build is refused, never downgraded.
//! - A connection is handed out only after its migrations committed.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod migrations;
mod open;

pub use open::{open_db, open_db_in_memory};

pub type DbResult<T> = Result<T, DbError>;

#[derive(Debug)]
pub enum DbError {
    Sqlite(rusqlite::Error),
    /// Mirror schema is ahead of every migration this build knows.
    SchemaTooNew { found: u32, supported: u32 },
    /// Connection lacks the `notes` table.
    MissingNotesTable,
}

impl Display for DbError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "note mirror: {err}"),
            Self::SchemaTooNew { found, supported } => write!(
                f,
                "note mirror schema v{found} is newer than this build supports (v{supported})"
            ),
            Self::MissingNotesTable => write!(f, "note mirror has no `notes` table"),
        }
    }
}

impl Error for DbError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
            Self::SchemaTooNew { .. } | Self::MissingNotesTable => None,
        }
    }
}

impl From<rusqlite::Error> for DbError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}
