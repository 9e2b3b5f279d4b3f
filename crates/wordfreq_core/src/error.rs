use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum WordCountError {
    #[error("file not found: {}", path.display())]
    FileNotFound { path: PathBuf },
    #[error("permission denied: {}", path.display())]
    FilePermission { path: PathBuf },
    #[error("processing error in {}: {reason}", path.display())]
    FileProcessing { path: PathBuf, reason: String },
    /// Reserved for content validation; nothing produces it yet.
    #[error("invalid file format in {}: {format}", path.display())]
    InvalidFileFormat { path: PathBuf, format: String },
    #[error("output error for {}: {reason}", path.display())]
    Output { path: PathBuf, reason: String },
    #[error("invalid argument {argument}: {reason}")]
    InvalidArgument { argument: String, reason: String },
    #[error("failed to start worker pool: {0}")]
    ThreadPool(String),
}

impl WordCountError {
    /// Map an error from opening `path` onto the file taxonomy.
    pub(crate) fn from_open(path: &Path, err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => WordCountError::FileNotFound {
                path: path.to_path_buf(),
            },
            io::ErrorKind::PermissionDenied => WordCountError::FilePermission {
                path: path.to_path_buf(),
            },
            _ => WordCountError::FileProcessing {
                path: path.to_path_buf(),
                reason: err.to_string(),
            },
        }
    }

    pub(crate) fn processing(path: &Path, reason: impl Into<String>) -> Self {
        WordCountError::FileProcessing {
            path: path.to_path_buf(),
            reason: reason.into(),
        }
    }

    /// Path the error refers to, if any.
    pub fn path(&self) -> Option<&Path> {
        match self {
            WordCountError::FileNotFound { path }
            | WordCountError::FilePermission { path }
            | WordCountError::FileProcessing { path, .. }
            | WordCountError::InvalidFileFormat { path, .. }
            | WordCountError::Output { path, .. } => Some(path),
            WordCountError::InvalidArgument { .. } | WordCountError::ThreadPool(_) => None,
        }
    }
}
