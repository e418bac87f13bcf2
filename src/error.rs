//! Alehouse error types

use crate::types::ValidationError;

/// Alehouse error types
#[derive(Debug, thiserror::Error)]
pub enum AlehouseError {
    // Caller-correctable input errors
    #[error(transparent)]
    Validation(#[from] ValidationError),

    // Storage errors
    #[error("beer not found: {0}")]
    NotFound(String),

    #[error("{0}")]
    Storage(String),

    // Network errors (client side)
    #[error("transport error: {0}")]
    Transport(String),

    // Configuration errors
    #[error("configuration error: {0}")]
    Configuration(String),

    // Data errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// How a failure is reported to remote callers.
///
/// Validation failures are the caller's to fix; everything else is internal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    InvalidArgument,
    Internal,
}

impl AlehouseError {
    /// Shorthand for a validation failure with the given message.
    pub fn validation(message: impl Into<String>) -> Self {
        AlehouseError::Validation(ValidationError::new(message))
    }

    /// Whether the caller can fix this by changing the request.
    pub fn is_validation(&self) -> bool {
        matches!(self, AlehouseError::Validation(_))
    }

    /// Classify for the service boundary. Not-found is not special-cased.
    pub fn class(&self) -> ErrorClass {
        if self.is_validation() {
            ErrorClass::InvalidArgument
        } else {
            ErrorClass::Internal
        }
    }
}

/// Result type alias for Alehouse operations
pub type Result<T> = std::result::Result<T, AlehouseError>;
