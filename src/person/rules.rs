//! Update business rules, evaluated as an ordered table
//!
//! Each rule sees the stored (old) record, the proposed (new) record and
//! the current date, and either passes or rejects. Rules run in table
//! order; the first rejection aborts the update. Adding a rule is one
//! more row in [`UPDATE_RULES`].

use chrono::NaiveDate;

use crate::validation::age_in_years;

use super::record::PersonRecord;

/// Age at and above which a person counts as an adult.
pub const ADULT_AGE: i32 = 18;

/// A named update rule over the (old, new) record pair.
pub struct UpdateRule {
    /// Short name used in log events.
    pub name: &'static str,
    /// Returns true when the update passes this rule.
    pub check: fn(old: &PersonRecord, new: &PersonRecord, today: NaiveDate) -> bool,
}

/// The rule table, in evaluation order.
pub const UPDATE_RULES: &[UpdateRule] = &[
    UpdateRule {
        name: "minor_address_lock",
        check: minor_address_lock,
    },
    UpdateRule {
        name: "birthday_exclusive_change",
        check: birthday_exclusive_change,
    },
    UpdateRule {
        name: "even_id_lock",
        check: even_id_lock,
    },
];

/// A person under 18 (by the stored birthday) may not change address.
fn minor_address_lock(old: &PersonRecord, new: &PersonRecord, today: NaiveDate) -> bool {
    match age_in_years(&old.birthday, today) {
        Some(age) if age < ADULT_AGE => new.address == old.address,
        _ => true,
    }
}

/// A birthday change must leave every other field untouched.
fn birthday_exclusive_change(old: &PersonRecord, new: &PersonRecord, _today: NaiveDate) -> bool {
    if new.birthday == old.birthday {
        return true;
    }
    new.id == old.id
        && new.first_name == old.first_name
        && new.last_name == old.last_name
        && new.address == old.address
}

/// An id whose first character is an even digit is frozen.
fn even_id_lock(old: &PersonRecord, new: &PersonRecord, _today: NaiveDate) -> bool {
    match old.id.chars().next().and_then(|c| c.to_digit(10)) {
        Some(d) if d % 2 == 0 => new.id == old.id,
        _ => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
    }

    fn adult() -> PersonRecord {
        PersonRecord::new(
            "56s_d%&fAB",
            "John",
            "Doe",
            "32|Highland Street|Melbourne|Victoria|Australia",
            "15-11-1990",
        )
    }

    fn minor() -> PersonRecord {
        PersonRecord {
            birthday: "15-11-2010".to_owned(),
            ..adult()
        }
    }

    fn passes(old: &PersonRecord, new: &PersonRecord) -> bool {
        UPDATE_RULES
            .iter()
            .all(|rule| (rule.check)(old, new, today()))
    }

    #[test]
    fn test_minor_may_not_change_address() {
        let old = minor();
        let new = PersonRecord {
            address: "10|Main Road|Geelong|Victoria|Australia".to_owned(),
            ..old.clone()
        };
        assert!(!minor_address_lock(&old, &new, today()));
        assert!(!passes(&old, &new));
    }

    #[test]
    fn test_adult_may_change_address() {
        let old = adult();
        let new = PersonRecord {
            address: "10|Main Road|Geelong|Victoria|Australia".to_owned(),
            ..old.clone()
        };
        assert!(passes(&old, &new));
    }

    #[test]
    fn test_minor_age_boundary_is_coarse() {
        // Born late 2007: the bare year difference says 18 even though the
        // 18th birthday has not happened yet by June 2025.
        let old = PersonRecord {
            birthday: "31-12-2007".to_owned(),
            ..adult()
        };
        let new = PersonRecord {
            address: "10|Main Road|Geelong|Victoria|Australia".to_owned(),
            ..old.clone()
        };
        assert!(minor_address_lock(&old, &new, today()));
    }

    #[test]
    fn test_birthday_change_must_be_exclusive() {
        let old = adult();
        let mut new = old.clone();
        new.birthday = "16-11-1990".to_owned();
        assert!(birthday_exclusive_change(&old, &new, today()));

        new.last_name = "Smith".to_owned();
        assert!(!birthday_exclusive_change(&old, &new, today()));
    }

    #[test]
    fn test_name_change_alone_is_allowed() {
        let old = adult();
        let new = PersonRecord {
            first_name: "Jane".to_owned(),
            last_name: "Smith".to_owned(),
            ..old.clone()
        };
        assert!(passes(&old, &new));
    }

    #[test]
    fn test_even_leading_digit_freezes_id() {
        let old = PersonRecord {
            id: "26s_d%&fAB".to_owned(),
            ..adult()
        };
        let new = PersonRecord {
            id: "37s_d%&fAB".to_owned(),
            ..old.clone()
        };
        assert!(!even_id_lock(&old, &new, today()));
    }

    #[test]
    fn test_odd_leading_digit_allows_id_change() {
        let old = adult(); // id starts with '5'
        let new = PersonRecord {
            id: "37s_d%&fAB".to_owned(),
            ..old.clone()
        };
        assert!(passes(&old, &new));
    }
}
