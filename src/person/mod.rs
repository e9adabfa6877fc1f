//! Person records and the record service
//!
//! A person record is a transient value passed in and out; the record
//! store owns the persisted representation. The service validates before
//! every write and never leaves a partial write behind.

mod record;
mod rules;
mod service;

pub use record::PersonRecord;
pub use rules::{UpdateRule, ADULT_AGE, UPDATE_RULES};
pub use service::PersonService;
