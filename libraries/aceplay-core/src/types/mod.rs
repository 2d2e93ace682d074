/// Domain types for the Aceplay catalog
mod ids;
mod playlist;
mod track;
mod user;

pub use ids::{PlaylistId, TrackId, UserId};
pub use playlist::{CoolFilter, CreatePlaylist, Playlist};
pub use track::{Track, TrackPatch};
pub use user::User;

use crate::error::{AceplayError, Result};

/// Reject blank (empty or whitespace-only) values for a required field.
pub(crate) fn require_non_blank(field: &'static str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(AceplayError::validation(
            field,
            format!("blank {field} values are not permitted"),
        ));
    }
    Ok(())
}
