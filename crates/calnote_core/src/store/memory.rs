use crate::store::{NoteStore, StoreResult};
use async_trait::async_trait;
use std::collections::BTreeMap;

/// Note store backed by an in-memory map. Used by tests and previews.
#[derive(Debug, Clone, Default)]
pub struct MemoryNoteStore {
    notes: BTreeMap<String, String>,
}

impl MemoryNoteStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_note(mut self, path: impl Into<String>, content: impl Into<String>) -> Self {
        self.insert(path, content);
        self
    }

    /// Inserts or replaces a note, returning the previous text.
    pub fn insert(&mut self, path: impl Into<String>, content: impl Into<String>) -> Option<String> {
        self.notes.insert(path.into(), content.into())
    }
}

#[async_trait]
impl NoteStore for MemoryNoteStore {
    async fn read_note(&self, path: &str) -> StoreResult<Option<String>> {
        Ok(self.notes.get(path).cloned())
    }

    async fn note_exists(&self, path: &str) -> StoreResult<bool> {
        Ok(self.notes.contains_key(path))
    }
}
