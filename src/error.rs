//! Error types shared by every wellness area

use thiserror::Error;

use crate::store::StoreError;

/// Errors raised by wellness operations.
///
/// All of them are recoverable: the tool layer turns them into a message for
/// the caller and the process keeps serving.
#[derive(Debug, Error)]
pub enum WellnessError {
    /// A required field is missing or a value is outside its allowed range
    #[error("{0}")]
    Validation(String),

    /// An operation referenced an id that is not in the collection
    #[error("{kind} not found with id: {id}")]
    NotFound { kind: &'static str, id: i64 },

    /// A malformed enum value or argument was passed to a pure function
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Storage error: {0}")]
    Store(#[from] StoreError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl WellnessError {
    pub fn validation(message: impl Into<String>) -> Self {
        WellnessError::Validation(message.into())
    }

    pub fn invalid_argument(message: impl Into<String>) -> Self {
        WellnessError::InvalidArgument(message.into())
    }

    pub fn not_found(kind: &'static str, id: i64) -> Self {
        WellnessError::NotFound { kind, id }
    }
}

/// Result type for wellness operations
pub type WellnessResult<T> = Result<T, WellnessError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message() {
        let err = WellnessError::not_found("Event", 42);
        assert_eq!(err.to_string(), "Event not found with id: 42");
    }

    #[test]
    fn test_validation_message_is_bare() {
        let err = WellnessError::validation("Title is required");
        assert_eq!(err.to_string(), "Title is required");
    }
}
