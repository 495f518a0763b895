//! Presence checks for creation payloads.
//!
//! Request bodies deserialize every field as `Option` so that a missing
//! value surfaces as a [`CoreError::Validation`] (400) instead of a
//! deserialization rejection.

use crate::error::CoreError;

/// Return the trimmed value of a required text field.
///
/// Absent, empty and whitespace-only values are all rejected.
pub fn require_text<'a>(value: Option<&'a str>, field: &str) -> Result<&'a str, CoreError> {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(CoreError::Validation(format!("{field} is required"))),
    }
}

/// Check several required fields at once, reporting every missing one.
pub fn require_all(fields: &[(&str, Option<&str>)]) -> Result<(), CoreError> {
    let missing: Vec<&str> = fields
        .iter()
        .filter(|(_, value)| value.map_or(true, |v| v.trim().is_empty()))
        .map(|(name, _)| *name)
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "missing required fields: {}",
            missing.join(", ")
        )))
    }
}
