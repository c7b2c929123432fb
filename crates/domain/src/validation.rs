//! Input checks shared by the services.

use crate::DomainError;

/// Rejects values that are empty once surrounding whitespace is removed.
pub fn require_non_blank(value: &str, message: &str) -> Result<(), DomainError> {
    if value.trim().is_empty() {
        return Err(DomainError::invalid(message));
    }
    Ok(())
}

/// Validates a whole batch of folder names before anything is written.
///
/// A single blank entry rejects the batch.
pub fn validate_folder_names<S: AsRef<str>>(names: &[S]) -> Result<(), DomainError> {
    if names.is_empty() {
        return Err(DomainError::invalid("At least one folder name is required"));
    }

    for (position, name) in names.iter().enumerate() {
        if name.as_ref().trim().is_empty() {
            return Err(DomainError::invalid(format!(
                "Folder name at position {} is blank",
                position
            )));
        }
    }

    Ok(())
}
