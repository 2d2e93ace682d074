/// Server error types
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ServerError>;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Authentication failed: {0}")]
    Auth(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Validation failed for '{field}': {message}")]
    Validation { field: &'static str, message: String },

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal server error: {0}")]
    Internal(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JWT error: {0}")]
    Jwt(#[from] jsonwebtoken::errors::Error),

    #[error("Bcrypt error: {0}")]
    Bcrypt(#[from] bcrypt::BcryptError),
}

impl From<aceplay_core::AceplayError> for ServerError {
    fn from(err: aceplay_core::AceplayError) -> Self {
        use aceplay_core::AceplayError;
        match err {
            AceplayError::Validation { field, message }
            | AceplayError::InvalidUrl { field, message } => {
                ServerError::Validation { field, message }
            }
            AceplayError::NotFound { entity, id } => {
                ServerError::NotFound(format!("{entity} {id}"))
            }
            other => ServerError::Database(other.to_string()),
        }
    }
}

impl From<aceplay_storage::StorageError> for ServerError {
    fn from(err: aceplay_storage::StorageError) -> Self {
        use aceplay_storage::StorageError;
        match err {
            StorageError::NotFound { entity, id } => {
                ServerError::NotFound(format!("{entity} {id}"))
            }
            other => ServerError::Database(other.to_string()),
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        // Forbidden is decided before any existence check, so a 403 never
        // reveals whether the target record exists.
        let (status, body) = match self {
            ServerError::Auth(msg) => (StatusCode::UNAUTHORIZED, json!({ "error": msg })),
            ServerError::Forbidden(msg) => (StatusCode::FORBIDDEN, json!({ "error": msg })),
            ServerError::NotFound(msg) => (StatusCode::NOT_FOUND, json!({ "error": msg })),
            ServerError::Validation { field, message } => (
                StatusCode::BAD_REQUEST,
                json!({ "error": message, "field": field }),
            ),
            ServerError::BadRequest(msg) => (StatusCode::BAD_REQUEST, json!({ "error": msg })),
            ServerError::Database(ref msg) => {
                tracing::error!("Database error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": "Database error" }),
                )
            }
            ServerError::Config(ref msg) => {
                tracing::error!("Config error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": "Configuration error" }),
                )
            }
            ServerError::Internal(ref msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": "Internal server error" }),
                )
            }
            ServerError::Io(ref e) => {
                tracing::error!("IO error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": "IO error" }),
                )
            }
            ServerError::Jwt(ref e) => {
                tracing::error!("JWT error: {:?}", e);
                (StatusCode::UNAUTHORIZED, json!({ "error": "Invalid token" }))
            }
            ServerError::Bcrypt(ref e) => {
                tracing::error!("Bcrypt error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": "Password error" }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}
