//! Field validation for single-record create and update of projects,
//! sub-divisions and tasks.

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

pub const ENTITY_PROJECT: &str = "Project";
pub const ENTITY_SUB_DIVISION: &str = "SubDivision";
pub const ENTITY_TASK: &str = "Task";

/// Maximum length of a business code.
pub const MAX_CODE_LEN: usize = 32;

/// Maximum length of a display name.
pub const MAX_NAME_LEN: usize = 200;

// ---------------------------------------------------------------------------
// Validation helpers
// ---------------------------------------------------------------------------

/// Validate that a required text field is present and not blank.
pub fn require_non_empty(field: &str, value: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        Err(CoreError::Validation(format!("{field} must not be empty")))
    } else {
        Ok(())
    }
}

/// Validate a business code: non-blank, at most [`MAX_CODE_LEN`] chars, no
/// whitespace.
pub fn validate_code(code: &str) -> Result<(), CoreError> {
    require_non_empty("code", code)?;
    if code.chars().count() > MAX_CODE_LEN {
        return Err(CoreError::Validation(format!(
            "code must be at most {MAX_CODE_LEN} characters"
        )));
    }
    if code.chars().any(char::is_whitespace) {
        return Err(CoreError::Validation(
            "code must not contain whitespace".to_string(),
        ));
    }
    Ok(())
}

/// Validate a display name: non-blank, at most [`MAX_NAME_LEN`] chars.
pub fn validate_name(name: &str) -> Result<(), CoreError> {
    require_non_empty("name", name)?;
    if name.chars().count() > MAX_NAME_LEN {
        return Err(CoreError::Validation(format!(
            "name must be at most {MAX_NAME_LEN} characters"
        )));
    }
    Ok(())
}

/// Validate an optional hour estimate.
pub fn validate_estimated_hours(hours: Option<i32>) -> Result<(), CoreError> {
    match hours {
        Some(h) if h < 0 => Err(CoreError::Validation(
            "estimated_hours must not be negative".to_string(),
        )),
        _ => Ok(()),
    }
}
