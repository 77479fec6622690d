//! Error types shared across the domain layer.

use std::fmt;
use thiserror::Error;

/// Errors that occur during value object construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Field '{field}' cannot be empty")]
    EmptyField { field: String },

    #[error("Field '{field}' has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

impl ValidationError {
    /// Creates an empty field validation error.
    pub fn empty_field(field: impl Into<String>) -> Self {
        ValidationError::EmptyField { field: field.into() }
    }

    /// Creates an invalid format validation error.
    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Error codes organized by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Configuration errors
    DuplicateDialog,
    DialogNotFound,
    InvalidDialogId,
    MissingPromptOptions,

    // State errors
    InvalidDialogState,

    // Collaborator errors
    OutputFailed,
    ValidatorFailed,
    StorageFailed,
}

impl ErrorCode {
    /// Returns true for codes that indicate a developer or deployment defect
    /// rather than anything the end user did.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            ErrorCode::DuplicateDialog
                | ErrorCode::DialogNotFound
                | ErrorCode::InvalidDialogId
                | ErrorCode::MissingPromptOptions
        )
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::DuplicateDialog => "DUPLICATE_DIALOG",
            ErrorCode::DialogNotFound => "DIALOG_NOT_FOUND",
            ErrorCode::InvalidDialogId => "INVALID_DIALOG_ID",
            ErrorCode::MissingPromptOptions => "MISSING_PROMPT_OPTIONS",
            ErrorCode::InvalidDialogState => "INVALID_DIALOG_STATE",
            ErrorCode::OutputFailed => "OUTPUT_FAILED",
            ErrorCode::ValidatorFailed => "VALIDATOR_FAILED",
            ErrorCode::StorageFailed => "STORAGE_FAILED",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_empty_field_displays_correctly() {
        let err = ValidationError::empty_field("dialog_id");
        assert_eq!(format!("{}", err), "Field 'dialog_id' cannot be empty");
    }

    #[test]
    fn validation_error_invalid_format_displays_correctly() {
        let err = ValidationError::invalid_format("locale", "missing region");
        assert_eq!(
            format!("{}", err),
            "Field 'locale' has invalid format: missing region"
        );
    }

    #[test]
    fn error_code_display_formats_correctly() {
        assert_eq!(format!("{}", ErrorCode::DialogNotFound), "DIALOG_NOT_FOUND");
        assert_eq!(format!("{}", ErrorCode::OutputFailed), "OUTPUT_FAILED");
    }

    #[test]
    fn configuration_codes_are_classified() {
        assert!(ErrorCode::DuplicateDialog.is_configuration());
        assert!(ErrorCode::DialogNotFound.is_configuration());
        assert!(!ErrorCode::OutputFailed.is_configuration());
        assert!(!ErrorCode::InvalidDialogState.is_configuration());
    }
}
