//! Error types for the dialog engine

use crate::domain::foundation::{DialogId, ErrorCode, ValidationError};
use crate::ports::OutputError;

/// Dialog engine errors
#[derive(Debug, Clone, thiserror::Error, PartialEq)]
pub enum DialogError {
    #[error("Dialog '{0}' is already registered")]
    DuplicateDialog(DialogId),

    #[error("Dialog '{0}' is not registered")]
    DialogNotFound(String),

    #[error("Invalid dialog id: {0}")]
    InvalidDialogId(#[from] ValidationError),

    #[error("Prompt '{0}' was started without prompt options")]
    MissingPromptOptions(DialogId),

    #[error("Invalid dialog state: {0}")]
    InvalidState(String),

    #[error(transparent)]
    Output(#[from] OutputError),

    /// Raised by `PromptValidator` implementations whose backing check
    /// could not run (a lookup service was down, say). Rejecting input is
    /// `Ok(None)`, not this.
    #[error("Validator failed: {0}")]
    Validator(String),
}

impl DialogError {
    /// Returns the error code for this failure.
    pub fn code(&self) -> ErrorCode {
        match self {
            DialogError::DuplicateDialog(_) => ErrorCode::DuplicateDialog,
            DialogError::DialogNotFound(_) => ErrorCode::DialogNotFound,
            DialogError::InvalidDialogId(_) => ErrorCode::InvalidDialogId,
            DialogError::MissingPromptOptions(_) => ErrorCode::MissingPromptOptions,
            DialogError::InvalidState(_) => ErrorCode::InvalidDialogState,
            DialogError::Output(_) => ErrorCode::OutputFailed,
            DialogError::Validator(_) => ErrorCode::ValidatorFailed,
        }
    }

    /// True when the error points at a registration or deployment defect.
    ///
    /// These are never shown to end users and never retried.
    pub fn is_configuration_error(&self) -> bool {
        self.code().is_configuration()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_dialog_message() {
        let err = DialogError::DuplicateDialog(DialogId::new("root").unwrap());
        assert_eq!(err.to_string(), "Dialog 'root' is already registered");
        assert!(err.is_configuration_error());
    }

    #[test]
    fn test_dialog_not_found_is_configuration_error() {
        let err = DialogError::DialogNotFound("ghost".to_string());
        assert!(err.to_string().contains("ghost"));
        assert_eq!(err.code(), ErrorCode::DialogNotFound);
        assert!(err.is_configuration_error());
    }

    #[test]
    fn test_output_error_is_not_configuration_error() {
        let err: DialogError = OutputError::ChannelClosed.into();
        assert_eq!(err.code(), ErrorCode::OutputFailed);
        assert!(!err.is_configuration_error());
        assert_eq!(err.to_string(), "Channel closed");
    }

    #[test]
    fn test_invalid_dialog_id_wraps_validation_error() {
        let err: DialogError = ValidationError::empty_field("dialog_id").into();
        assert!(err.to_string().contains("cannot be empty"));
    }
}
