//! Shared field checks for sub-assessment schemas.

use crate::domain::foundation::ValidationError;

/// Requires a string with visible content.
pub(crate) fn require_text(field: &str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::empty_field(field));
    }
    Ok(())
}

/// Optional text must not be blank when supplied.
pub(crate) fn optional_text(field: &str, value: Option<&str>) -> Result<(), ValidationError> {
    match value {
        Some(text) => require_text(field, text),
        None => Ok(()),
    }
}

/// Requires at least `min` characters (after trimming).
pub(crate) fn require_min_chars(field: &str, value: &str, min: usize) -> Result<(), ValidationError> {
    if value.trim().chars().count() < min {
        return Err(ValidationError::too_short(field, min));
    }
    Ok(())
}
