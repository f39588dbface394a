//! In-memory resume store for testing.

use std::{
    collections::HashMap,
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use vitae_core::{
    application::{ApplicationError, ports::ResumeStore},
    error::VitaeResult,
};

/// In-memory store; clones share the same files.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    files: Arc<RwLock<HashMap<PathBuf, Vec<u8>>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a file (testing helper).
    pub fn insert(&self, path: impl Into<PathBuf>, content: impl Into<Vec<u8>>) -> VitaeResult<()> {
        let mut files = self
            .files
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;
        files.insert(path.into(), content.into());
        Ok(())
    }

    /// Read a file's text (testing helper).
    pub fn get(&self, path: &Path) -> Option<String> {
        let files = self.files.read().ok()?;
        files
            .get(path)
            .map(|bytes| String::from_utf8_lossy(bytes).into_owned())
    }

    pub fn exists(&self, path: &Path) -> bool {
        self.files
            .read()
            .map(|files| files.contains_key(path))
            .unwrap_or(false)
    }
}

impl ResumeStore for MemoryStore {
    fn read_text(&self, path: &Path) -> VitaeResult<String> {
        let bytes = self.read_bytes(path)?;
        String::from_utf8(bytes).map_err(|e| {
            ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: format!("Failed to read file: {}", e),
            }
            .into()
        })
    }

    fn read_bytes(&self, path: &Path) -> VitaeResult<Vec<u8>> {
        let files = self
            .files
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;
        files.get(path).cloned().ok_or_else(|| {
            ApplicationError::FileNotFound {
                path: path.to_path_buf(),
            }
            .into()
        })
    }

    fn write_text(&self, path: &Path, content: &str) -> VitaeResult<()> {
        self.insert(path, content)
    }
}
