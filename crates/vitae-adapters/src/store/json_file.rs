//! Local JSON file store using std::fs.

use std::io;
use std::path::Path;

use tracing::debug;
use vitae_core::{
    application::{ApplicationError, ports::ResumeStore},
    error::{VitaeError, VitaeResult},
};

/// Production store: whole-file reads and writes, UTF-8.
#[derive(Debug, Clone, Copy)]
pub struct JsonFileStore;

impl JsonFileStore {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFileStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ResumeStore for JsonFileStore {
    fn read_text(&self, path: &Path) -> VitaeResult<String> {
        std::fs::read_to_string(path).map_err(|e| map_io_error(path, e, "read file"))
    }

    fn read_bytes(&self, path: &Path) -> VitaeResult<Vec<u8>> {
        std::fs::read(path).map_err(|e| map_io_error(path, e, "read file"))
    }

    fn write_text(&self, path: &Path, content: &str) -> VitaeResult<()> {
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))?;
        debug!(path = %path.display(), bytes = content.len(), "File written");
        Ok(())
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> VitaeError {
    if e.kind() == io::ErrorKind::NotFound && operation.starts_with("read") {
        return ApplicationError::FileNotFound {
            path: path.to_path_buf(),
        }
        .into();
    }
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}
