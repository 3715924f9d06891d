//! Input validation utilities for Villadesk API
//!
//! This module provides validation functions for request fields. Each
//! function checks one field and returns a `ValidationError` naming the
//! failed check; endpoint models collect failures into per-field violations.

use validator::{ValidateEmail, ValidationError};

use crate::unit_id;

/// Allowed property status values.
pub const PROPERTY_STATUSES: &[&str] = &["draft", "active", "paused"];

/// Maximum length for free-text descriptive fields.
pub const MAX_TEXT_FIELD_LENGTH: usize = 4096;

/// Maximum length for the interaction type classification.
pub const MAX_INTERACTION_TYPE_LENGTH: usize = 128;

/// Validate a unit identifier (after normalization).
///
/// Unit identifiers must be exactly 6 characters.
pub fn validate_unit_id(unit_id: &str) -> Result<(), ValidationError> {
    if unit_id.is_empty() {
        return Err(ValidationError::new("unit_id_empty"));
    }
    if !unit_id::is_valid(unit_id) {
        return Err(ValidationError::new("unit_id_length"));
    }
    Ok(())
}

/// Validate property status membership.
pub fn validate_status(status: &str) -> Result<(), ValidationError> {
    if !PROPERTY_STATUSES.contains(&status) {
        return Err(ValidationError::new("status_unknown"));
    }
    Ok(())
}

/// Validate an email address. Empty strings are accepted so an optional
/// email field can be submitted blank, as the original form allowed.
pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    if email.is_empty() {
        return Ok(());
    }
    if !email.validate_email() {
        return Err(ValidationError::new("email_invalid"));
    }
    Ok(())
}

/// Validate a free-text descriptive field.
pub fn validate_text_field(value: &str) -> Result<(), ValidationError> {
    if value.len() > MAX_TEXT_FIELD_LENGTH {
        return Err(ValidationError::new("text_too_long"));
    }
    Ok(())
}

/// Validate an interaction type classification.
pub fn validate_interaction_type(interaction_type: &str) -> Result<(), ValidationError> {
    if interaction_type.trim().is_empty() {
        return Err(ValidationError::new("interaction_type_empty"));
    }
    if interaction_type.len() > MAX_INTERACTION_TYPE_LENGTH {
        return Err(ValidationError::new("interaction_type_too_long"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_unit_id() {
        assert!(validate_unit_id("AB1234").is_ok());
        assert!(validate_unit_id("").is_err());
        assert!(validate_unit_id("AB123").is_err());
        assert!(validate_unit_id("AB12345").is_err());
    }

    #[test]
    fn test_validate_status() {
        assert!(validate_status("draft").is_ok());
        assert!(validate_status("active").is_ok());
        assert!(validate_status("paused").is_ok());
        assert!(validate_status("archived").is_err());
        assert!(validate_status("").is_err());
        assert!(validate_status("Active").is_err());
    }

    #[test]
    fn test_validate_email() {
        assert!(validate_email("manager@example.com").is_ok());
        assert!(validate_email("").is_ok()); // blank optional field
        assert!(validate_email("not-an-email").is_err());
        assert!(validate_email("two@@example.com").is_err());
    }

    #[test]
    fn test_validate_text_field() {
        assert!(validate_text_field("The pool is behind the Clubhouse.").is_ok());
        assert!(validate_text_field(&"a".repeat(MAX_TEXT_FIELD_LENGTH + 1)).is_err());
    }

    #[test]
    fn test_validate_interaction_type() {
        assert!(validate_interaction_type("lockout_assistance").is_ok());
        assert!(validate_interaction_type("").is_err());
        assert!(validate_interaction_type("   ").is_err());
        assert!(validate_interaction_type(&"x".repeat(MAX_INTERACTION_TYPE_LENGTH + 1)).is_err());
    }
}
