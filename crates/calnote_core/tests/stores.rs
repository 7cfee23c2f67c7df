use calnote_core::db::DbError;
use calnote_core::{MemoryNoteStore, NoteStore, SqliteNoteStore, StoreError, VaultDirStore};
use futures::executor::block_on;
use rusqlite::Connection;
use std::fs;

#[test]
fn memory_store_reads_inserted_notes() {
    let store = MemoryNoteStore::new().with_note("Daily/03/03-15.md", "## A\nbody\n");

    assert_eq!(
        block_on(store.read_note("Daily/03/03-15.md")).unwrap().as_deref(),
        Some("## A\nbody\n")
    );
    assert_eq!(block_on(store.read_note("missing.md")).unwrap(), None);
    assert!(block_on(store.note_exists("Daily/03/03-15.md")).unwrap());
    assert!(!block_on(store.note_exists("missing.md")).unwrap());
}

#[test]
fn vault_dir_store_reads_nested_files() {
    let vault = tempfile::tempdir().unwrap();
    fs::create_dir_all(vault.path().join("Daily/03")).unwrap();
    fs::write(vault.path().join("Daily/03/03-15.md"), "## Plan\nship\n").unwrap();
    let store = VaultDirStore::new(vault.path());

    assert_eq!(
        block_on(store.read_note("Daily/03/03-15.md")).unwrap().as_deref(),
        Some("## Plan\nship\n")
    );
    assert_eq!(block_on(store.read_note("Daily/03/03-16.md")).unwrap(), None);
    assert!(block_on(store.note_exists("Daily/03/03-15.md")).unwrap());
    assert!(!block_on(store.note_exists("Daily/03")).unwrap());
}

#[test]
fn vault_dir_store_rejects_escaping_paths() {
    let vault = tempfile::tempdir().unwrap();
    let store = VaultDirStore::new(vault.path());

    let err = block_on(store.read_note("../outside.md")).unwrap_err();
    assert!(matches!(err, StoreError::InvalidPath(_)));
}

#[test]
fn sqlite_store_round_trips_mirrored_notes() {
    let dir = tempfile::tempdir().unwrap();
    let store = SqliteNoteStore::open(dir.path().join("mirror.db")).unwrap();

    store.upsert_note("Week/2024/Week10.md", "first").unwrap();
    store.upsert_note("Week/2024/Week10.md", "second").unwrap();

    assert_eq!(
        block_on(store.read_note("Week/2024/Week10.md")).unwrap().as_deref(),
        Some("second")
    );
    assert_eq!(block_on(store.read_note("Week/2024/Week11.md")).unwrap(), None);
    assert!(block_on(store.note_exists("Week/2024/Week10.md")).unwrap());
}

#[test]
fn sqlite_store_accepts_externally_created_schema() {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(
        "CREATE TABLE notes (path TEXT PRIMARY KEY NOT NULL, content TEXT NOT NULL, updated_at INTEGER NOT NULL DEFAULT 0);
         INSERT INTO notes (path, content) VALUES ('a.md', 'hello');",
    )
    .unwrap();

    let store = SqliteNoteStore::try_new(conn).unwrap();
    assert_eq!(
        block_on(store.read_note("a.md")).unwrap().as_deref(),
        Some("hello")
    );
}

#[test]
fn sqlite_store_requires_notes_table() {
    let conn = Connection::open_in_memory().unwrap();
    let err = SqliteNoteStore::try_new(conn).err().unwrap();
    assert!(matches!(err, StoreError::Db(DbError::MissingNotesTable)));
}
