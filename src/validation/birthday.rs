//! Birthday grammar and coarse age computation
//!
//! Birthdays are `DD-MM-YYYY` and must name a real calendar date:
//! "31-02-2000" matches the character pattern but is rejected.

use chrono::{Datelike, NaiveDate};

/// Parses a `DD-MM-YYYY` birthday into a calendar date.
///
/// Returns `None` when the shape is wrong or the date does not exist.
pub fn parse_birthday(birthday: &str) -> Option<NaiveDate> {
    if !matches_pattern(birthday) {
        return None;
    }
    NaiveDate::parse_from_str(birthday, "%d-%m-%Y").ok()
}

/// Checks a birthday against the `DD-MM-YYYY` grammar and the calendar.
pub fn is_valid_birthday(birthday: &str) -> bool {
    parse_birthday(birthday).is_some()
}

/// Age on the given date, as a bare year difference.
///
/// Month and day are ignored: a person born in December counts a full
/// year from the following January. Update rules and student card
/// eligibility key off exactly this granularity.
pub fn age_in_years(birthday: &str, on: NaiveDate) -> Option<i32> {
    parse_birthday(birthday).map(|born| on.year() - born.year())
}

/// Two digits, '-', two digits, '-', four digits.
fn matches_pattern(s: &str) -> bool {
    let b = s.as_bytes();
    b.len() == 10
        && b[0].is_ascii_digit()
        && b[1].is_ascii_digit()
        && b[2] == b'-'
        && b[3].is_ascii_digit()
        && b[4].is_ascii_digit()
        && b[5] == b'-'
        && b[6..10].iter().all(|c| c.is_ascii_digit())
}
