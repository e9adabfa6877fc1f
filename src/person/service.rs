//! Record service: validated adds and rule-checked updates
//!
//! Every failure path (validation, not-found, storage) collapses to
//! `false` at this boundary; the distinction is only visible in log
//! events. No exception-like propagation crosses this surface and no
//! partial write is ever left behind.

use chrono::Utc;
use tracing::{debug, warn};

use crate::storage::RecordStore;
use crate::validation::{is_valid_address, is_valid_birthday, is_valid_identifier};

use super::record::PersonRecord;
use super::rules::UPDATE_RULES;

/// Orchestrates validation and persistence of person records.
///
/// The store is injected so callers can run against a file, an in-memory
/// fake, or anything else implementing [`RecordStore`].
pub struct PersonService<S: RecordStore> {
    store: S,
}

impl<S: RecordStore> PersonService<S> {
    /// Creates a service over the given record store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Returns the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Consumes the service, returning the store.
    pub fn into_store(self) -> S {
        self.store
    }

    /// Validates and appends a new person record.
    ///
    /// All three field grammars must pass. On success exactly one line is
    /// appended; on any validation miss or store error nothing is written.
    pub fn add_record(&mut self, record: &PersonRecord) -> bool {
        if !Self::passes_grammars(record) {
            return false;
        }

        match self.store.append(&record.to_line()) {
            Ok(()) => {
                debug!(id = %record.id, "person record added");
                true
            }
            Err(e) => {
                warn!(id = %record.id, error = %e, "store append failed");
                false
            }
        }
    }

    /// Updates the record whose id field equals `target_id`.
    ///
    /// The proposed record must itself satisfy the field grammars (the
    /// record invariant survives updates), and every rule in
    /// [`UPDATE_RULES`] must pass against the stored record. On success
    /// the matched line is replaced in place, all other lines are copied
    /// through unchanged, and the whole store is rewritten atomically. On
    /// any failure the store is left byte-for-byte as it was.
    pub fn update_record(&mut self, target_id: &str, updated: &PersonRecord) -> bool {
        if !Self::passes_grammars(updated) {
            return false;
        }

        let mut lines = match self.store.read_all() {
            Ok(lines) => lines,
            Err(e) => {
                warn!(id = %target_id, error = %e, "store read failed");
                return false;
            }
        };

        let Some(index) = lines
            .iter()
            .position(|line| PersonRecord::line_id(line) == Some(target_id))
        else {
            debug!(id = %target_id, "update target not found");
            return false;
        };

        let Some(old) = PersonRecord::from_line(&lines[index]) else {
            warn!(id = %target_id, "stored line is malformed");
            return false;
        };

        let today = Utc::now().date_naive();
        for rule in UPDATE_RULES {
            if !(rule.check)(&old, updated, today) {
                debug!(id = %target_id, rule = rule.name, "update rejected");
                return false;
            }
        }

        lines[index] = updated.to_line();
        match self.store.rewrite(&lines) {
            Ok(()) => {
                debug!(id = %target_id, "person record updated");
                true
            }
            Err(e) => {
                warn!(id = %target_id, error = %e, "store rewrite failed");
                false
            }
        }
    }

    fn passes_grammars(record: &PersonRecord) -> bool {
        if !is_valid_identifier(&record.id) {
            debug!(id = %record.id, "identifier rejected");
            return false;
        }
        if !is_valid_address(&record.address) {
            debug!(id = %record.id, "address rejected");
            return false;
        }
        if !is_valid_birthday(&record.birthday) {
            debug!(id = %record.id, "birthday rejected");
            return false;
        }
        true
    }
}
