/// Core error types for Aceplay
use thiserror::Error;

/// Result type alias using `AceplayError`
pub type Result<T> = std::result::Result<T, AceplayError>;

/// Core error type for the Aceplay catalog
#[derive(Error, Debug)]
pub enum AceplayError {
    /// A required field is blank or otherwise malformed
    #[error("Validation failed for '{field}': {message}")]
    Validation {
        /// Name of the offending field, as it appears on the wire
        field: &'static str,
        /// Human-readable diagnostic
        message: String,
    },

    /// A URL field could not be parsed as an absolute URL
    #[error("Invalid URL in '{field}': {message}")]
    InvalidUrl {
        /// Name of the offending field, as it appears on the wire
        field: &'static str,
        /// Human-readable diagnostic
        message: String,
    },

    /// Entity not found
    #[error("{entity} not found: {id}")]
    NotFound {
        /// Entity kind ("Track", "Playlist", "User")
        entity: String,
        /// The id that was looked up
        id: String,
    },

    /// Storage-related errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Serialization errors
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    /// Other errors
    #[error("{0}")]
    Other(String),
}

impl AceplayError {
    /// Create a validation error naming the offending field
    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        Self::Validation {
            field,
            message: message.into(),
        }
    }

    /// Create an invalid URL error naming the offending field
    pub fn invalid_url(field: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidUrl {
            field,
            message: message.into(),
        }
    }

    /// Create a not found error
    pub fn not_found(entity: impl Into<String>, id: impl std::fmt::Display) -> Self {
        Self::NotFound {
            entity: entity.into(),
            id: id.to_string(),
        }
    }

    /// Create a storage error
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }
}
