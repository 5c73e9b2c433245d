//! Domain errors for item operations
//!
//! These are domain-level errors that abstract away infrastructure details.
//! Adapters convert their own failures (sqlx, etc.) into `StorageFailure`.

use thiserror::Error;

/// Errors that can occur while listing or saving items
#[derive(Error, Debug)]
pub enum ItemError {
    /// The storage backend failed to read or write
    #[error("Storage operation failed: {0}")]
    StorageFailure(String),

    /// The item text is empty or whitespace only
    #[error("Item text cannot be empty")]
    EmptyText,

    /// The item text exceeds the configured limit
    #[error("Item text ({len} bytes) exceeds maximum allowed ({max} bytes)")]
    TextTooLong { len: usize, max: usize },

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl ItemError {
    /// Create a storage failure error with a message
    pub fn storage_failure(msg: impl Into<String>) -> Self {
        Self::StorageFailure(msg.into())
    }

    /// Create a text too long error
    pub fn text_too_long(len: usize, max: usize) -> Self {
        Self::TextTooLong { len, max }
    }

    /// Create a config error with a message
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::ConfigError(msg.into())
    }

    /// Whether the error was caused by the caller's input
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::EmptyText | Self::TextTooLong { .. })
    }
}

/// Result type alias for item operations
pub type Result<T> = std::result::Result<T, ItemError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_failure_error() {
        let err = ItemError::storage_failure("disk full");
        assert!(matches!(err, ItemError::StorageFailure(_)));
        assert_eq!(err.to_string(), "Storage operation failed: disk full");
        assert!(!err.is_validation());
    }

    #[test]
    fn test_text_too_long_error() {
        let err = ItemError::text_too_long(5000, 4096);
        assert!(err.to_string().contains("5000"));
        assert!(err.to_string().contains("4096"));
        assert!(err.is_validation());
    }

    #[test]
    fn test_empty_text_error() {
        let err = ItemError::EmptyText;
        assert_eq!(err.to_string(), "Item text cannot be empty");
        assert!(err.is_validation());
    }
}
