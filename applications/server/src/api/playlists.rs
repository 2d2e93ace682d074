/// Playlists API routes
use crate::{
    error::{Result, ServerError},
    middleware::AuthenticatedUser,
    state::AppState,
};
use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use aceplay_core::{CoolFilter, CreatePlaylist, Playlist, PlaylistId, TrackId};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistQuery {
    /// Tri-state cool filter: `true`, `false`, or `none` for the unset state
    #[serde(default)]
    pub is_cool: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePlaylistRequest {
    pub name: Option<String>,
    #[serde(default)]
    pub is_cool: Option<bool>,
    #[serde(default)]
    pub tracks: Vec<TrackId>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddTrackRequest {
    pub track_id: TrackId,
}

/// GET /api/playlists
///
/// Full list, or an exact-match cool-flag filter when `isCool` is given.
/// Every returned playlist carries its fully resolved membership set.
pub async fn list_playlists(
    State(app_state): State<AppState>,
    _auth: AuthenticatedUser,
    Query(query): Query<PlaylistQuery>,
) -> Result<Json<Vec<Playlist>>> {
    let playlists = match query.is_cool.as_deref() {
        None => app_state.db.get_all_playlists().await?,
        Some(raw) => {
            let filter = CoolFilter::parse(raw).ok_or_else(|| {
                ServerError::BadRequest(format!(
                    "isCool must be 'true', 'false' or 'none', got '{raw}'"
                ))
            })?;
            app_state.db.get_playlists_by_cool(filter).await?
        }
    };

    Ok(Json(playlists))
}

/// POST /api/playlists
pub async fn create_playlist(
    State(app_state): State<AppState>,
    _auth: AuthenticatedUser,
    Json(req): Json<CreatePlaylistRequest>,
) -> Result<Json<Playlist>> {
    let name = req.name.ok_or_else(|| ServerError::Validation {
        field: "name",
        message: "name is required".to_string(),
    })?;

    // Construction-time validation: blank names rejected before any write
    aceplay_core::Playlist::new(&name, req.is_cool, vec![])?;

    let playlist = app_state
        .db
        .create_playlist(CreatePlaylist {
            name,
            is_cool: req.is_cool,
            tracks: req.tracks,
        })
        .await?;

    Ok(Json(playlist))
}

/// GET /api/playlists/first
///
/// The first-created playlist (lowest id); 404 when the store is empty.
pub async fn first_playlist(
    State(app_state): State<AppState>,
    _auth: AuthenticatedUser,
) -> Result<Json<Playlist>> {
    let playlist = app_state
        .db
        .get_first_playlist()
        .await?
        .ok_or_else(|| ServerError::NotFound("No playlists exist".to_string()))?;

    Ok(Json(playlist))
}

/// GET /api/playlists/:id
pub async fn get_playlist(
    Path(id): Path<PlaylistId>,
    State(app_state): State<AppState>,
    _auth: AuthenticatedUser,
) -> Result<Json<Playlist>> {
    let playlist = app_state
        .db
        .get_playlist(id)
        .await?
        .ok_or_else(|| ServerError::NotFound(format!("Playlist {id}")))?;

    Ok(Json(playlist))
}

/// DELETE /api/playlists/:id
pub async fn delete_playlist(
    Path(id): Path<PlaylistId>,
    State(app_state): State<AppState>,
    _auth: AuthenticatedUser,
) -> Result<Json<serde_json::Value>> {
    let removed = app_state.db.delete_playlist(id).await?;
    if !removed {
        return Err(ServerError::NotFound(format!("Playlist {id}")));
    }

    Ok(Json(serde_json::json!({ "success": true })))
}

/// POST /api/playlists/:id/tracks
///
/// Add a track to the playlist's membership set. Idempotent: re-adding a
/// member is not an error.
pub async fn add_track_to_playlist(
    Path(id): Path<PlaylistId>,
    State(app_state): State<AppState>,
    _auth: AuthenticatedUser,
    Json(req): Json<AddTrackRequest>,
) -> Result<Json<serde_json::Value>> {
    app_state.db.add_track_to_playlist(id, req.track_id).await?;

    Ok(Json(serde_json::json!({ "success": true })))
}

/// DELETE /api/playlists/:id/tracks/:track_id
pub async fn remove_track_from_playlist(
    Path((id, track_id)): Path<(PlaylistId, TrackId)>,
    State(app_state): State<AppState>,
    _auth: AuthenticatedUser,
) -> Result<Json<serde_json::Value>> {
    let removed = app_state.db.remove_track_from_playlist(id, track_id).await?;
    if !removed {
        return Err(ServerError::NotFound(format!(
            "Track {track_id} in playlist {id}"
        )));
    }

    Ok(Json(serde_json::json!({ "success": true })))
}
