//! Error types for the directory tree comparison system.

use std::path::PathBuf;
use thiserror::Error;

/// Filesystem errors scoped to a single node.
///
/// These never fail a whole comparison: the builder logs them and drops the
/// affected field or subtree.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Path not found: {0:?}")]
    NotFound(PathBuf),

    #[error("Permission denied: {0:?}")]
    PermissionDenied(PathBuf),

    #[error("Invalid path: {0}")]
    InvalidPath(String),

    #[error("Storage I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

impl StorageError {
    /// Classify an I/O error raised while touching `path`.
    pub fn from_io(path: &std::path::Path, err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => StorageError::NotFound(path.to_path_buf()),
            std::io::ErrorKind::PermissionDenied => {
                StorageError::PermissionDenied(path.to_path_buf())
            }
            _ => StorageError::IoError(err),
        }
    }
}

/// Errors surfaced to the caller of a comparison.
#[derive(Debug, Error)]
pub enum CompareError {
    #[error("Both directory paths are required")]
    MissingPaths,

    #[error("Directory 1 does not exist: {0}")]
    FirstDirectoryNotFound(String),

    #[error("Directory 2 does not exist: {0}")]
    SecondDirectoryNotFound(String),

    #[error("Both directories are empty or inaccessible")]
    BothTreesInaccessible,

    #[error("Path not found in either tree: {0}")]
    NodeNotFound(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<config::ConfigError> for CompareError {
    fn from(err: config::ConfigError) -> Self {
        CompareError::ConfigError(err.to_string())
    }
}

impl From<serde_json::Error> for CompareError {
    fn from(err: serde_json::Error) -> Self {
        CompareError::Serialization(err.to_string())
    }
}
