//! Recipe field constants and payload validation.

use crate::error::CoreError;

/// Placeholder for timing/cuisine fields a source does not provide.
pub const UNKNOWN: &str = "Unknown";

/// Difficulty assigned to recipes whose source does not rate them.
pub const DEFAULT_DIFFICULTY: &str = "Medium";

/// Maximum accepted title length, in characters.
pub const MAX_TITLE_LEN: usize = 200;

/// Validate a recipe title: non-blank and at most [`MAX_TITLE_LEN`] characters.
pub fn validate_title(title: &str) -> Result<(), CoreError> {
    if title.trim().is_empty() {
        return Err(CoreError::Validation("title must not be blank".into()));
    }
    let len = title.chars().count();
    if len > MAX_TITLE_LEN {
        return Err(CoreError::Validation(format!(
            "title must be at most {MAX_TITLE_LEN} characters, got {len}"
        )));
    }
    Ok(())
}

/// Validate that no entry of a list field (`ingredients`, `steps`) is blank.
pub fn validate_entries(field: &str, entries: &[String]) -> Result<(), CoreError> {
    match entries.iter().position(|e| e.trim().is_empty()) {
        Some(idx) => Err(CoreError::Validation(format!(
            "{field}[{idx}] must not be blank"
        ))),
        None => Ok(()),
    }
}
