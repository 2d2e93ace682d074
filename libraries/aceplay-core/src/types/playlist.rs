/// Playlist domain types
use crate::error::Result;
use crate::types::{require_non_blank, PlaylistId, Track, TrackId};
use serde::{Deserialize, Serialize};

/// A named collection referencing zero or more tracks.
///
/// Membership is a set: unordered, duplicate-free, and non-owning — deleting
/// a playlist never deletes the tracks it references. The `is_cool` flag is
/// tri-state; an unset flag is distinct from `false`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Playlist {
    /// Server-assigned id; `None` until persisted
    pub id: Option<PlaylistId>,

    /// Playlist name (non-blank)
    pub name: String,

    /// Optional "cool" flag; `None` means never set
    pub is_cool: Option<bool>,

    /// Member tracks, eagerly resolved on every read.
    ///
    /// Always serialized as a sequence; an uninitialized association reads
    /// back as empty, never as null.
    #[serde(default)]
    pub tracks: Vec<Track>,
}

impl Playlist {
    /// Create a new unpersisted playlist with validated name.
    pub fn new(
        name: impl Into<String>,
        is_cool: Option<bool>,
        tracks: Vec<Track>,
    ) -> Result<Self> {
        let name = name.into();
        require_non_blank("name", &name)?;

        Ok(Self {
            id: None,
            name,
            is_cool,
            tracks,
        })
    }

    /// Member tracks. Never absent: an uninitialized association is empty.
    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }
}

/// Payload for creating a playlist: a name, an optional cool flag, and the
/// ids of any initial member tracks.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePlaylist {
    pub name: String,
    #[serde(default)]
    pub is_cool: Option<bool>,
    #[serde(default)]
    pub tracks: Vec<TrackId>,
}

/// Exact-match filter over the tri-state cool flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoolFilter {
    /// Playlists explicitly flagged cool
    Cool,
    /// Playlists explicitly flagged not cool
    NotCool,
    /// Playlists whose flag was never set
    Unset,
}

impl CoolFilter {
    /// Parse a query-string value: `true`, `false`, or `none`.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "true" => Some(Self::Cool),
            "false" => Some(Self::NotCool),
            "none" => Some(Self::Unset),
            _ => None,
        }
    }

    /// The flag state this filter matches.
    pub fn matches(self) -> Option<bool> {
        match self {
            Self::Cool => Some(true),
            Self::NotCool => Some(false),
            Self::Unset => None,
        }
    }
}
