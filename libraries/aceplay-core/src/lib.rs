//! Aceplay Core
//!
//! Domain types, validation, and error handling for the Aceplay media
//! catalog.
//!
//! This crate defines:
//! - **Domain Types**: `Track`, `Playlist`, `User` and their id types
//! - **Validation**: explicit construction-time checks that name the
//!   offending field
//! - **Error Handling**: unified `AceplayError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use aceplay_core::types::{Playlist, Track};
//!
//! let track = Track::new(
//!     "Marching Bands of Manhattan",
//!     "Death Cab for Cutie",
//!     "https://example.org",
//! )?;
//!
//! let playlist = Playlist::new("Road trip", Some(true), vec![track])?;
//! assert_eq!(playlist.tracks().len(), 1);
//! # Ok::<(), aceplay_core::AceplayError>(())
//! ```

#![forbid(unsafe_code)]

pub mod error;
pub mod types;

// Re-export commonly used types
pub use error::{AceplayError, Result};
pub use types::{
    CoolFilter, CreatePlaylist, Playlist, PlaylistId, Track, TrackId, TrackPatch, User, UserId,
};
