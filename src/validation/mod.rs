//! Format validators for person records
//!
//! All predicates are pure: no I/O, no panics. Malformed input of any
//! shape (empty, wrong length, wrong characters) is simply not valid.

mod address;
mod birthday;
mod identifier;

pub use address::is_valid_address;
pub use birthday::{age_in_years, is_valid_birthday, parse_birthday};
pub use identifier::is_valid_identifier;
