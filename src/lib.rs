//! digitalid - A strict, file-backed personal record validator and store
//!
//! Person records are validated against fixed format rules, persisted as
//! pipe-delimited lines, and updated under a small set of business rules.
//! Identity documents (passport, drivers licence, medicare, student card)
//! are validated per type and appended to an auxiliary store.

pub mod documents;
pub mod person;
pub mod storage;
pub mod validation;
