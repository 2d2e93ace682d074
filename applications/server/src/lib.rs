//! Aceplay Server Library
//!
//! Authenticated REST API over the Aceplay media catalog.
//!
//! This library exposes the core components for testing purposes.

pub mod api;
pub mod config;
pub mod error;
pub mod middleware;
pub mod policy;
pub mod services;
pub mod state;

// Re-export commonly used types for convenience
pub use config::ServerConfig;
pub use error::{Result, ServerError};
pub use policy::TrackPolicy;
pub use services::auth::AuthService;
pub use state::AppState;
