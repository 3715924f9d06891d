//! Unit-identifier handling
//!
//! Unit identifiers are the 6-character codes naming a rental property.
//! They are uppercase-normalized everywhere before validation, storage, or
//! lookup so that `ab1234` and `AB1234` address the same unit.

/// Required length of a unit identifier, in characters.
pub const UNIT_ID_LENGTH: usize = 6;

/// Normalize a raw unit identifier: trim surrounding whitespace and uppercase.
pub fn normalize(raw: &str) -> String {
    raw.trim().to_uppercase()
}

/// Check a normalized unit identifier for validity (exactly 6 characters).
pub fn is_valid(unit_id: &str) -> bool {
    unit_id.chars().count() == UNIT_ID_LENGTH
}
