//! Error types for the notice CLI.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.
//! The renderer itself never fails; these errors come from loading contexts,
//! editing the template store, and writing workspace files.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for notice operations.
#[derive(Error, Debug)]
pub enum NoticeError {
    /// User provided invalid arguments or the workspace is in an invalid state.
    #[error("{0}")]
    UserError(String),

    /// A template record, config value, or strict render check was rejected.
    #[error("Validation failed: {0}")]
    ValidationError(String),

    /// A workspace file could not be read or written.
    #[error("I/O failed: {0}")]
    IoError(String),
}

impl NoticeError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            NoticeError::UserError(_) => exit_codes::USER_ERROR,
            NoticeError::ValidationError(_) => exit_codes::VALIDATION_FAILURE,
            NoticeError::IoError(_) => exit_codes::IO_FAILURE,
        }
    }
}

/// Result type alias for notice operations.
pub type Result<T> = std::result::Result<T, NoticeError>;
