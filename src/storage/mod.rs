//! Line-oriented record store
//!
//! The store exclusively owns the persisted representation: a sequence of
//! text lines. It supports append, full read, and all-or-nothing rewrite;
//! there are no in-place edits. A single caller at a time is assumed;
//! concurrent external mutation during a read-then-rewrite window is an
//! accepted limitation.

mod errors;
mod file;
mod memory;

pub use errors::{StoreError, StoreResult};
pub use file::FileStore;
pub use memory::MemoryStore;

/// Abstract line store the services write through.
///
/// Implementations must guarantee that a failed `rewrite` leaves the
/// previous contents intact.
pub trait RecordStore {
    /// Appends one line to the store.
    fn append(&mut self, line: &str) -> StoreResult<()>;

    /// Reads every stored line, in order.
    fn read_all(&self) -> StoreResult<Vec<String>>;

    /// Replaces the entire contents with the given lines, atomically.
    fn rewrite(&mut self, lines: &[String]) -> StoreResult<()>;
}
