//! Person record value type and its line codec
//!
//! The stored line is `id|first|last|address|birthday`. The address field
//! itself is a pipe-delimited 5-tuple, so a full line splits into exactly
//! nine raw segments. The codec keeps that shape for compatibility with
//! existing files rather than re-encoding the nested delimiter.

/// A person record as held in memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonRecord {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    /// Pipe-delimited 5-tuple: house/street|street name|suburb|state|country.
    pub address: String,
    /// Calendar date, DD-MM-YYYY.
    pub birthday: String,
}

impl PersonRecord {
    /// Builds a record from its five fields.
    pub fn new(
        id: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        address: impl Into<String>,
        birthday: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            address: address.into(),
            birthday: birthday.into(),
        }
    }

    /// Renders the stored line: `id|first|last|address|birthday`.
    pub fn to_line(&self) -> String {
        format!(
            "{}|{}|{}|{}|{}",
            self.id, self.first_name, self.last_name, self.address, self.birthday
        )
    }

    /// Decodes a stored line.
    ///
    /// Splits on `|` and expects exactly nine segments: three leading
    /// fields, the five address sub-fields, then the birthday. Any other
    /// shape is `None`.
    pub fn from_line(line: &str) -> Option<Self> {
        let parts: Vec<&str> = line.split('|').collect();
        if parts.len() != 9 {
            return None;
        }
        Some(Self {
            id: parts[0].to_owned(),
            first_name: parts[1].to_owned(),
            last_name: parts[2].to_owned(),
            address: parts[3..8].join("|"),
            birthday: parts[8].to_owned(),
        })
    }

    /// The id field of a stored line, without decoding the whole record.
    pub fn line_id(line: &str) -> Option<&str> {
        line.split('|').next()
    }
}
