//! Descriptor persistence.

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Failed to persist a descriptor
#[derive(Debug, Error)]
#[error("Failed to write {path}: {source}")]
pub struct WriteError {
    pub path: PathBuf,
    pub source: std::io::Error,
}

/// Persists rendered descriptor text.
pub trait TextWriter {
    /// Writes `content` to `path`, replacing any existing file.
    fn write_text(&self, path: &Path, content: &str) -> Result<(), WriteError>;
}

/// Writes descriptors straight to the local filesystem
///
/// Missing parent directories are created.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsTextWriter;

impl TextWriter for FsTextWriter {
    fn write_text(&self, path: &Path, content: &str) -> Result<(), WriteError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| WriteError {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        fs::write(path, content).map_err(|e| WriteError {
            path: path.to_path_buf(),
            source: e,
        })
    }
}
