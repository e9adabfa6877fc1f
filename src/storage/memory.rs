//! In-memory record store
//!
//! A plain vector of lines behind the same trait as the file store, so
//! services can be exercised without touching a filesystem.

use super::errors::StoreResult;
use super::RecordStore;

/// Record store over an in-memory vector of lines.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    lines: Vec<String>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the stored lines.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

impl RecordStore for MemoryStore {
    fn append(&mut self, line: &str) -> StoreResult<()> {
        self.lines.push(line.to_owned());
        Ok(())
    }

    fn read_all(&self) -> StoreResult<Vec<String>> {
        Ok(self.lines.clone())
    }

    fn rewrite(&mut self, lines: &[String]) -> StoreResult<()> {
        self.lines = lines.to_vec();
        Ok(())
    }
}
