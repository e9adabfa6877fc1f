//! File-backed record store
//!
//! One record per line. Appends fsync before returning. Rewrites go
//! through a temp file in the same directory and rename over the
//! original, so a failed rewrite never clobbers existing contents.
//!
//! File handles are scoped to each call and released on every exit path.

use std::fs::{self, File, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use super::errors::{StoreError, StoreResult};
use super::RecordStore;

/// Record store backed by a single text file.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Creates a store over the given file path.
    ///
    /// The file itself is created lazily on first append or rewrite; a
    /// missing file reads as an empty store.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl RecordStore for FileStore {
    fn append(&mut self, line: &str) -> StoreResult<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| StoreError::AppendFailed {
                path: self.path.clone(),
                source: e,
            })?;

        writeln!(file, "{}", line).map_err(|e| StoreError::AppendFailed {
            path: self.path.clone(),
            source: e,
        })?;

        // fsync before acknowledging the append.
        file.sync_all().map_err(|e| StoreError::AppendFailed {
            path: self.path.clone(),
            source: e,
        })
    }

    fn read_all(&self) -> StoreResult<Vec<String>> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(c) => c,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(StoreError::ReadFailed {
                    path: self.path.clone(),
                    source: e,
                })
            }
        };
        Ok(contents.lines().map(str::to_owned).collect())
    }

    fn rewrite(&mut self, lines: &[String]) -> StoreResult<()> {
        let temp = self.temp_path();

        {
            let mut file = File::create(&temp).map_err(|e| StoreError::RewriteFailed {
                path: self.path.clone(),
                source: e,
            })?;

            for line in lines {
                writeln!(file, "{}", line).map_err(|e| StoreError::RewriteFailed {
                    path: self.path.clone(),
                    source: e,
                })?;
            }

            file.sync_all().map_err(|e| StoreError::RewriteFailed {
                path: self.path.clone(),
                source: e,
            })?;
        }

        // Atomic replace: the old contents survive any failure above.
        fs::rename(&temp, &self.path).map_err(|e| StoreError::RewriteFailed {
            path: self.path.clone(),
            source: e,
        })
    }
}
