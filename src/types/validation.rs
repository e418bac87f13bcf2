//! Caller-correctable validation failures.

/// A caller-correctable input error.
///
/// Displays its message verbatim; the service boundary relies on this to
/// forward the text unchanged in `INVALID_ARGUMENT` statuses.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ValidationError {
    message: String,
}

impl ValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The human-readable reason.
    pub fn message(&self) -> &str {
        &self.message
    }

    pub(crate) fn empty_id() -> Self {
        Self::new("beer ID is empty")
    }

    pub(crate) fn empty_name() -> Self {
        Self::new("beer name is empty")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displays_message_verbatim() {
        let err = ValidationError::new("msg");
        assert_eq!(err.to_string(), "msg");
        assert_eq!(err.message(), "msg");
    }
}
