//! Notes read from a vault directory on disk.
//!
//! # Invariants
//! - Only plain relative paths are resolved; `..`, roots and prefixes are
//!   rejected before touching the filesystem.
//! - A missing file is `Ok(None)`.

use crate::store::{NoteStore, StoreError, StoreResult};
use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};

#[derive(Debug, Clone)]
pub struct VaultDirStore {
    root: PathBuf,
}

impl VaultDirStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn resolve(&self, path: &str) -> StoreResult<PathBuf> {
        let relative = Path::new(path);
        let mut components = relative.components().peekable();
        if components.peek().is_none() {
            return Err(StoreError::InvalidPath(path.to_string()));
        }
        if !components.all(|component| matches!(component, Component::Normal(_) | Component::CurDir)) {
            return Err(StoreError::InvalidPath(path.to_string()));
        }
        Ok(self.root.join(relative))
    }
}

#[async_trait]
impl NoteStore for VaultDirStore {
    async fn read_note(&self, path: &str) -> StoreResult<Option<String>> {
        let full_path = self.resolve(path)?;
        match std::fs::read_to_string(&full_path) {
            Ok(text) => Ok(Some(text)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StoreError::Io {
                path: path.to_string(),
                source,
            }),
        }
    }

    async fn note_exists(&self, path: &str) -> StoreResult<bool> {
        Ok(self.resolve(path)?.is_file())
    }
}
