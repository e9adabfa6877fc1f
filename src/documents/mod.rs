//! Identity documents
//!
//! A closed set of document types, each with its own value grammar, plus
//! the service that validates values and appends accepted documents to an
//! auxiliary store. Documents are append-only: never updated or removed.

mod service;
mod types;

pub use service::DocumentService;
pub use types::DocumentType;
