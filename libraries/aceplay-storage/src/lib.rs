//! Aceplay Storage
//!
//! SQLite persistence layer for the Aceplay catalog.
//!
//! Each entity owns its queries in a vertical slice (`users`, `tracks`,
//! `playlists`); the [`Database`] wrapper owns the pool and exposes the
//! slices as methods. Migrations are embedded and applied on connect.
//!
//! # Example
//!
//! ```rust,no_run
//! use aceplay_storage::Database;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let db = Database::new("sqlite://aceplay.db").await?;
//! let tracks = db.get_all_tracks().await?;
//! # Ok(())
//! # }
//! ```

mod database;
mod error;

// Vertical slices
pub mod playlists;
pub mod tracks;
pub mod users;

pub use database::{create_pool, run_migrations, Database};
pub use error::{Result, StorageError};
