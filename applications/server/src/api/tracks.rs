/// Tracks API routes
use crate::{
    error::{Result, ServerError},
    middleware::AuthenticatedUser,
    state::AppState,
};
use axum::{
    extract::{Path, State},
    Json,
};
use serde::Deserialize;
use aceplay_core::{Track, TrackId, TrackPatch};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTrackRequest {
    pub title: Option<String>,
    pub artist: Option<String>,
    pub public_url: Option<String>,
}

/// GET /api/tracks
///
/// Tracks in creation order; restricted to the caller's own tracks when the
/// listing policy is owner-scoped.
pub async fn list_tracks(
    State(app_state): State<AppState>,
    auth: AuthenticatedUser,
) -> Result<Json<Vec<Track>>> {
    let tracks = match app_state.policy.list_scope(auth.user_id()) {
        Some(owner) => app_state.db.get_tracks_by_user(owner).await?,
        None => app_state.db.get_all_tracks().await?,
    };

    Ok(Json(tracks))
}

/// POST /api/tracks
pub async fn create_track(
    State(app_state): State<AppState>,
    auth: AuthenticatedUser,
    Json(req): Json<CreateTrackRequest>,
) -> Result<Json<Track>> {
    let title = require_field("title", req.title)?;
    let artist = require_field("artist", req.artist)?;
    let public_url = require_field("publicUrl", req.public_url)?;

    let mut track = Track::new(title, artist, public_url)?;
    track.user_id = Some(auth.user_id());

    let track = app_state.db.save_track(track).await?;
    Ok(Json(track))
}

/// PATCH /api/tracks/:id
///
/// Partial update: only keys present in the payload are applied; everything
/// else keeps its prior value. Echoes the fully updated record.
pub async fn update_track(
    Path(id): Path<TrackId>,
    State(app_state): State<AppState>,
    auth: AuthenticatedUser,
    Json(patch): Json<TrackPatch>,
) -> Result<Json<Track>> {
    let mut track = app_state
        .db
        .get_track(id)
        .await?
        .ok_or_else(|| ServerError::NotFound(format!("Track {id}")))?;

    if !app_state.policy.may_mutate(auth.user_id(), &track) {
        return Err(ServerError::Forbidden("Not the track owner".to_string()));
    }

    track.apply_patch(patch)?;
    let track = app_state.db.save_track(track).await?;

    Ok(Json(track))
}

/// DELETE /api/tracks/:id
pub async fn delete_track(
    Path(id): Path<TrackId>,
    State(app_state): State<AppState>,
    auth: AuthenticatedUser,
) -> Result<Json<serde_json::Value>> {
    let track = app_state
        .db
        .get_track(id)
        .await?
        .ok_or_else(|| ServerError::NotFound(format!("Track {id}")))?;

    if !app_state.policy.may_mutate(auth.user_id(), &track) {
        return Err(ServerError::Forbidden("Not the track owner".to_string()));
    }

    app_state.db.delete_track(id).await?;

    Ok(Json(serde_json::json!({ "success": true })))
}

fn require_field(field: &'static str, value: Option<String>) -> Result<String> {
    value.ok_or_else(|| ServerError::Validation {
        field,
        message: format!("{field} is required"),
    })
}
