//! # Record store errors

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Record store errors
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read store {path}: {source}")]
    ReadFailed { path: PathBuf, source: io::Error },

    #[error("failed to append to store {path}: {source}")]
    AppendFailed { path: PathBuf, source: io::Error },

    #[error("failed to rewrite store {path}: {source}")]
    RewriteFailed { path: PathBuf, source: io::Error },
}
