//! Address grammar
//!
//! An address is a pipe-delimited 5-tuple:
//! house/street number | street name | suburb | state | country.
//! The state field must literally equal "Victoria"; this is a closed,
//! single-region policy, not general address validation.

/// Checks an address against the 5-field, Victoria-only grammar.
pub fn is_valid_address(address: &str) -> bool {
    let parts: Vec<&str> = address.split('|').collect();
    parts.len() == 5 && parts[3] == "Victoria"
}
