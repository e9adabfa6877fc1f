//! Document service: validates and appends identity documents
//!
//! Failures collapse to `false` exactly as in the record service; nothing
//! is written on any rejection.

use chrono::Utc;
use tracing::{debug, warn};

use crate::person::{PersonRecord, ADULT_AGE};
use crate::storage::RecordStore;
use crate::validation::age_in_years;

use super::types::DocumentType;

/// Validates document values and appends accepted documents.
pub struct DocumentService<S: RecordStore> {
    store: S,
}

impl<S: RecordStore> DocumentService<S> {
    /// Creates a service over the given document store.
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

    /// Validates a document value for the given person and records it.
    ///
    /// The person carries the birthday the student-card eligibility check
    /// needs and the name written to the store. The type name is matched
    /// case-insensitively; unknown names are always invalid. On success
    /// one line is appended:
    ///
    /// `PersonID: <id> | User: <first> <last> | <DocumentType>: <value>`
    pub fn add_document(
        &mut self,
        person: &PersonRecord,
        document_type: &str,
        value: &str,
    ) -> bool {
        let Some(doc_type) = DocumentType::parse(document_type) else {
            debug!(id = %person.id, document_type, "unknown document type");
            return false;
        };

        if !doc_type.is_valid_value(value) {
            debug!(id = %person.id, document_type = %doc_type, "document value rejected");
            return false;
        }

        if doc_type.minor_only() {
            let today = Utc::now().date_naive();
            match age_in_years(&person.birthday, today) {
                Some(age) if age < ADULT_AGE => {}
                _ => {
                    debug!(id = %person.id, document_type = %doc_type, "person is not a minor");
                    return false;
                }
            }
        }

        let line = format!(
            "PersonID: {} | User: {} {} | {}: {}",
            person.id, person.first_name, person.last_name, doc_type, value
        );

        match self.store.append(&line) {
            Ok(()) => {
                debug!(id = %person.id, document_type = %doc_type, "document added");
                true
            }
            Err(e) => {
                warn!(id = %person.id, error = %e, "document store append failed");
                false
            }
        }
    }
}
