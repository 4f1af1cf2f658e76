//! Note validation and identifier rules.

use crate::error::CoreError;
use crate::types::DbId;

/// `note_id` value that asks for a new note instead of an update.
pub const NEW_NOTE_ID: DbId = 0;

/// Maximum note content length in bytes.
pub const MAX_CONTENT_LEN: usize = 100_000;

/// Entity name used in [`CoreError::NotFound`].
pub const NOTE_ENTITY: &str = "Note";

/// Confirmation phrase required by the purge operation.
pub const PURGE_CONFIRMATION: &str = "delete";

/// Validate note content (non-blank, at most [`MAX_CONTENT_LEN`] bytes).
pub fn validate_content(content: &str) -> Result<(), CoreError> {
    if content.trim().is_empty() {
        return Err(CoreError::Validation(
            "Note content cannot be empty".into(),
        ));
    }
    if content.len() > MAX_CONTENT_LEN {
        return Err(CoreError::Validation(format!(
            "Note content must be at most {MAX_CONTENT_LEN} bytes"
        )));
    }
    Ok(())
}

/// Validate the id passed to a save. `0` means "create".
pub fn validate_save_id(note_id: DbId) -> Result<(), CoreError> {
    if note_id < NEW_NOTE_ID {
        return Err(CoreError::Validation("Invalid note ID".into()));
    }
    Ok(())
}

/// Validate the id of an existing note (strictly positive).
pub fn validate_existing_id(note_id: DbId) -> Result<(), CoreError> {
    if note_id <= NEW_NOTE_ID {
        return Err(CoreError::Validation("Invalid note ID".into()));
    }
    Ok(())
}

/// Check the typed confirmation for the purge operation.
pub fn validate_purge_confirmation(confirm: &str) -> Result<(), CoreError> {
    if confirm != PURGE_CONFIRMATION {
        return Err(CoreError::Validation(format!(
            "Type '{PURGE_CONFIRMATION}' to confirm deleting all notes"
        )));
    }
    Ok(())
}

/// Build the not-found error for a note id.
pub fn note_not_found(id: DbId) -> CoreError {
    CoreError::NotFound {
        entity: NOTE_ENTITY,
        id,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_valid() {
        assert!(validate_content("Customer called about invoice").is_ok());
    }

    #[test]
    fn content_empty_rejected() {
        assert!(validate_content("").is_err());
    }

    #[test]
    fn content_whitespace_only_rejected() {
        assert!(validate_content("  \n\t ").is_err());
    }

    #[test]
    fn content_too_long_rejected() {
        let long = "x".repeat(MAX_CONTENT_LEN + 1);
        assert!(validate_content(&long).is_err());
    }

    #[test]
    fn content_limit_counts_bytes() {
        // 'é' is two bytes in UTF-8.
        let multibyte = "é".repeat(MAX_CONTENT_LEN / 2 + 1);
        assert!(multibyte.chars().count() < MAX_CONTENT_LEN);
        match validate_content(&multibyte) {
            Err(CoreError::Validation(msg)) => assert!(msg.ends_with("bytes"), "{msg}"),
            other => panic!("expected a validation error, got {other:?}"),
        }
    }

    #[test]
    fn save_id_zero_and_positive_accepted() {
        assert!(validate_save_id(0).is_ok());
        assert!(validate_save_id(17).is_ok());
    }

    #[test]
    fn save_id_negative_rejected() {
        assert!(validate_save_id(-1).is_err());
    }

    #[test]
    fn existing_id_zero_rejected() {
        assert!(validate_existing_id(0).is_err());
        assert!(validate_existing_id(1).is_ok());
    }

    #[test]
    fn purge_confirmation_is_exact() {
        assert!(validate_purge_confirmation("delete").is_ok());
        assert!(validate_purge_confirmation("DELETE").is_err());
        assert!(validate_purge_confirmation("").is_err());
    }
}
