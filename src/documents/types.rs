//! Document types and their value grammars
//!
//! Dispatch is a closed enum, not string branching: adding a document
//! type means one new variant plus its rows in the match tables below.

use std::fmt;

/// The closed set of supported identity documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentType {
    Passport,
    DriversLicence,
    Medicare,
    StudentCard,
}

impl DocumentType {
    /// Parses a human-readable document type name, case-insensitively.
    ///
    /// Unknown names yield `None`; there is no catch-all type.
    pub fn parse(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "passport" => Some(Self::Passport),
            "drivers licence" => Some(Self::DriversLicence),
            "medicare" => Some(Self::Medicare),
            "student card" => Some(Self::StudentCard),
            _ => None,
        }
    }

    /// Display name, as written to the document store.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Passport => "Passport",
            Self::DriversLicence => "Drivers Licence",
            Self::Medicare => "Medicare",
            Self::StudentCard => "Student Card",
        }
    }

    /// Whether the owning person must be a minor (under 18).
    pub fn minor_only(&self) -> bool {
        matches!(self, Self::StudentCard)
    }

    /// Checks a document value against this type's grammar.
    pub fn is_valid_value(&self, value: &str) -> bool {
        match self {
            Self::Passport => letters_then_digits(value, 2, 6),
            Self::DriversLicence => letters_then_digits(value, 2, 8),
            Self::Medicare => all_digits(value, 9),
            Self::StudentCard => all_digits(value, 12),
        }
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// `letters` ASCII uppercase letters followed by `digits` ASCII digits.
fn letters_then_digits(value: &str, letters: usize, digits: usize) -> bool {
    let b = value.as_bytes();
    b.len() == letters + digits
        && b[..letters].iter().all(|c| c.is_ascii_uppercase())
        && b[letters..].iter().all(|c| c.is_ascii_digit())
}

fn all_digits(value: &str, len: usize) -> bool {
    let b = value.as_bytes();
    b.len() == len && b.iter().all(|c| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(DocumentType::parse("Passport"), Some(DocumentType::Passport));
        assert_eq!(DocumentType::parse("PASSPORT"), Some(DocumentType::Passport));
        assert_eq!(
            DocumentType::parse("drivers licence"),
            Some(DocumentType::DriversLicence)
        );
        assert_eq!(
            DocumentType::parse("Student Card"),
            Some(DocumentType::StudentCard)
        );
        assert_eq!(DocumentType::parse("medicare"), Some(DocumentType::Medicare));
    }

    #[test]
    fn test_unknown_type_is_none() {
        assert_eq!(DocumentType::parse("Library Card"), None);
        assert_eq!(DocumentType::parse(""), None);
    }

    #[test]
    fn test_passport_grammar() {
        assert!(DocumentType::Passport.is_valid_value("AB123456"));
        assert!(!DocumentType::Passport.is_valid_value("12345678")); // no letters
        assert!(!DocumentType::Passport.is_valid_value("ab123456")); // lowercase
        assert!(!DocumentType::Passport.is_valid_value("AB12345")); // too short
        assert!(!DocumentType::Passport.is_valid_value("AB1234567")); // too long
    }

    #[test]
    fn test_drivers_licence_grammar() {
        assert!(DocumentType::DriversLicence.is_valid_value("VC12345678"));
        assert!(!DocumentType::DriversLicence.is_valid_value("VC123456"));
        assert!(!DocumentType::DriversLicence.is_valid_value("V012345678"));
    }

    #[test]
    fn test_medicare_grammar() {
        assert!(DocumentType::Medicare.is_valid_value("123456789"));
        assert!(!DocumentType::Medicare.is_valid_value("123"));
        assert!(!DocumentType::Medicare.is_valid_value("12345678X"));
    }

    #[test]
    fn test_student_card_grammar() {
        assert!(DocumentType::StudentCard.is_valid_value("123456789012"));
        assert!(!DocumentType::StudentCard.is_valid_value("12345678901"));
        assert!(!DocumentType::StudentCard.is_valid_value("1234567890123"));
    }

    #[test]
    fn test_only_student_card_is_minor_only() {
        assert!(DocumentType::StudentCard.minor_only());
        assert!(!DocumentType::Passport.minor_only());
        assert!(!DocumentType::DriversLicence.minor_only());
        assert!(!DocumentType::Medicare.minor_only());
    }
}
