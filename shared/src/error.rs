//! Error types for the storefront core
//!
//! One taxonomy for the whole workspace. Nothing here is fatal to
//! the process: validation failures reject a single user action,
//! feed failures are retryable, persistence failures degrade to an
//! empty cart.

use thiserror::Error;

/// Unified error type for the storefront engines
#[derive(Debug, Error)]
pub enum StoreError {
    /// Validation failure at the point of user action (no state mutation)
    #[error("{message}")]
    Validation { message: String },

    /// A schedule time field is not well-formed `HH:MM`
    #[error("invalid schedule time \"{value}\": expected HH:MM")]
    InvalidScheduleFormat { value: String },

    /// Schedule feed delivery failure (retryable, distinct from "closed")
    #[error("schedule feed error: {message}")]
    Feed { message: String },

    /// Durable cart slot unreadable/unwritable
    #[error("persistence error: {message}")]
    Persistence { message: String },
}

impl StoreError {
    // ========== Convenient constructors ==========

    /// Create a Validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation { message: message.into() }
    }

    /// Create an InvalidScheduleFormat error
    pub fn invalid_schedule_format(value: impl Into<String>) -> Self {
        Self::InvalidScheduleFormat { value: value.into() }
    }

    /// Create a Feed error
    pub fn feed(message: impl Into<String>) -> Self {
        Self::Feed { message: message.into() }
    }

    /// Create a Persistence error
    pub fn persistence(message: impl Into<String>) -> Self {
        Self::Persistence { message: message.into() }
    }

    /// Whether this error should be shown as a retryable connectivity
    /// state rather than a user mistake
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Feed { .. })
    }
}

/// Result type for storefront operations
pub type StoreResult<T> = Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors_and_messages() {
        let e = StoreError::validation("Por favor ingresa tu nombre");
        assert_eq!(e.to_string(), "Por favor ingresa tu nombre");

        let e = StoreError::invalid_schedule_format("25:00");
        assert_eq!(
            e.to_string(),
            "invalid schedule time \"25:00\": expected HH:MM"
        );
    }

    #[test]
    fn test_only_feed_errors_are_retryable() {
        assert!(StoreError::feed("offline").is_retryable());
        assert!(!StoreError::validation("x").is_retryable());
        assert!(!StoreError::persistence("x").is_retryable());
    }
}
