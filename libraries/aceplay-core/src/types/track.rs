/// Track domain types
use crate::error::{AceplayError, Result};
use crate::types::{require_non_blank, TrackId, UserId};
use serde::{Deserialize, Serialize};
use url::Url;

/// A media metadata record owned by a user.
///
/// `user_id` is a weak back-reference to the owning user; the user does not
/// control the track's lifecycle through it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Track {
    /// Server-assigned id; `None` until persisted
    pub id: Option<TrackId>,

    /// Track title (non-blank)
    pub title: String,

    /// Artist name (non-blank)
    pub artist: String,

    /// Absolute URL where the track can be reached.
    ///
    /// Validated with `url::Url` at the construction boundary, but stored as
    /// the caller's original string so it round-trips byte for byte.
    pub public_url: String,

    /// Owner reference, set at creation time through the API
    pub user_id: Option<UserId>,
}

impl Track {
    /// Create a new unpersisted track, validating every field.
    ///
    /// Blank title/artist fail with `AceplayError::Validation`; a
    /// `public_url` that does not parse as an absolute URL fails with
    /// `AceplayError::InvalidUrl`.
    pub fn new(
        title: impl Into<String>,
        artist: impl Into<String>,
        public_url: impl Into<String>,
    ) -> Result<Self> {
        let title = title.into();
        let artist = artist.into();
        let public_url = public_url.into();
        require_non_blank("title", &title)?;
        require_non_blank("artist", &artist)?;
        validate_public_url(&public_url)?;

        Ok(Self {
            id: None,
            title,
            artist,
            public_url,
            user_id: None,
        })
    }

    /// Whether two tracks are the same persisted record.
    ///
    /// Identity is the server-assigned id; unpersisted tracks are never the
    /// same record as anything.
    pub fn same_record(&self, other: &Track) -> bool {
        matches!((self.id, other.id), (Some(a), Some(b)) if a == b)
    }

    /// Apply a partial update: only fields present in the patch change,
    /// and each supplied field is re-validated.
    pub fn apply_patch(&mut self, patch: TrackPatch) -> Result<()> {
        if let Some(title) = patch.title {
            require_non_blank("title", &title)?;
            self.title = title;
        }
        if let Some(artist) = patch.artist {
            require_non_blank("artist", &artist)?;
            self.artist = artist;
        }
        if let Some(public_url) = patch.public_url {
            validate_public_url(&public_url)?;
            self.public_url = public_url;
        }
        Ok(())
    }
}

/// Partial update payload for a track.
///
/// Absent keys leave the corresponding field untouched.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackPatch {
    pub title: Option<String>,
    pub artist: Option<String>,
    pub public_url: Option<String>,
}

fn validate_public_url(raw: &str) -> Result<()> {
    // Url::parse rejects relative references, so this enforces absoluteness
    Url::parse(raw)
        .map(|_| ())
        .map_err(|e| AceplayError::invalid_url("publicUrl", e.to_string()))
}
