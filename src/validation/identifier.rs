//! Person identifier grammar
//!
//! An identifier is exactly 10 characters:
//! - positions 0-1: digits in '2'..='9'
//! - positions 2-7: at least two non-alphanumeric characters
//! - positions 8-9: ASCII uppercase letters

/// Checks an identifier against the 10-character grammar.
pub fn is_valid_identifier(id: &str) -> bool {
    let chars: Vec<char> = id.chars().collect();
    if chars.len() != 10 {
        return false;
    }

    if !chars[0..2].iter().all(|c| ('2'..='9').contains(c)) {
        return false;
    }

    if !chars[8..10].iter().all(|c| c.is_ascii_uppercase()) {
        return false;
    }

    // Duplicates count towards the minimum of two specials.
    let specials = chars[2..8].iter().filter(|c| !c.is_alphanumeric()).count();
    specials >= 2
}
