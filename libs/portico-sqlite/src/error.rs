//! Error types for the SQLite adapter

use portico_domain::ItemError;
use thiserror::Error;

/// Result type alias for SQLite bootstrap operations
pub type Result<T> = std::result::Result<T, SqliteError>;

/// Errors that can occur while opening or preparing the database
#[derive(Error, Debug)]
pub enum SqliteError {
    /// The database URL could not be parsed
    #[error("Invalid database URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    /// Could not open a connection pool
    #[error("Failed to connect to database: {0}")]
    Connect(#[source] sqlx::Error),

    /// Schema bootstrap failed
    #[error("Failed to prepare schema: {0}")]
    Schema(#[source] sqlx::Error),
}

impl From<SqliteError> for ItemError {
    fn from(err: SqliteError) -> Self {
        match err {
            SqliteError::InvalidUrl { .. } => ItemError::config_error(err.to_string()),
            SqliteError::Connect(_) | SqliteError::Schema(_) => {
                ItemError::storage_failure(err.to_string())
            }
        }
    }
}
