use crate::error::{Result, StorageError};
use aceplay_core::types::{CoolFilter, CreatePlaylist, Playlist, PlaylistId, Track, TrackId};
use sqlx::{Row, SqlitePool};

/// Create a new playlist with its initial membership set.
///
/// Every referenced track must exist; the insert and the membership rows run
/// in one transaction.
pub async fn create(pool: &SqlitePool, playlist: CreatePlaylist) -> Result<Playlist> {
    let mut tx = pool.begin().await?;

    let result = sqlx::query("INSERT INTO playlists (name, is_cool) VALUES (?, ?)")
        .bind(&playlist.name)
        .bind(playlist.is_cool)
        .execute(&mut *tx)
        .await?;

    let id = result.last_insert_rowid();

    for track_id in &playlist.tracks {
        let exists = sqlx::query("SELECT id FROM tracks WHERE id = ?")
            .bind(track_id)
            .fetch_optional(&mut *tx)
            .await?;
        if exists.is_none() {
            return Err(StorageError::not_found("Track", track_id));
        }

        sqlx::query("INSERT OR IGNORE INTO playlist_tracks (playlist_id, track_id) VALUES (?, ?)")
            .bind(id)
            .bind(track_id)
            .execute(&mut *tx)
            .await?;
    }

    tx.commit().await?;

    get_by_id(pool, id)
        .await?
        .ok_or_else(|| StorageError::not_found("Playlist", id))
}

/// Get playlist by ID, with its full membership set resolved.
pub async fn get_by_id(pool: &SqlitePool, id: PlaylistId) -> Result<Option<Playlist>> {
    let row = sqlx::query("SELECT id, name, is_cool FROM playlists WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?;

    match row {
        Some(row) => Ok(Some(resolve(pool, &row).await?)),
        None => Ok(None),
    }
}

/// Get all playlists in creation order, each with membership resolved.
pub async fn get_all(pool: &SqlitePool) -> Result<Vec<Playlist>> {
    let rows = sqlx::query("SELECT id, name, is_cool FROM playlists ORDER BY id")
        .fetch_all(pool)
        .await?;

    let mut playlists = Vec::with_capacity(rows.len());
    for row in rows {
        playlists.push(resolve(pool, &row).await?);
    }
    Ok(playlists)
}

/// Exact-match query over the tri-state cool flag.
///
/// `CoolFilter::Unset` matches only playlists whose flag was never set; it
/// never matches an explicit `false`.
pub async fn get_by_cool(pool: &SqlitePool, filter: CoolFilter) -> Result<Vec<Playlist>> {
    let rows = match filter.matches() {
        Some(value) => {
            sqlx::query("SELECT id, name, is_cool FROM playlists WHERE is_cool = ? ORDER BY id")
                .bind(value)
                .fetch_all(pool)
                .await?
        }
        None => {
            sqlx::query("SELECT id, name, is_cool FROM playlists WHERE is_cool IS NULL ORDER BY id")
                .fetch_all(pool)
                .await?
        }
    };

    let mut playlists = Vec::with_capacity(rows.len());
    for row in rows {
        playlists.push(resolve(pool, &row).await?);
    }
    Ok(playlists)
}

/// Get the first-created playlist: lowest id wins, `None` when the store is
/// empty.
pub async fn get_first(pool: &SqlitePool) -> Result<Option<Playlist>> {
    let row = sqlx::query("SELECT id, name, is_cool FROM playlists ORDER BY id ASC LIMIT 1")
        .fetch_optional(pool)
        .await?;

    match row {
        Some(row) => Ok(Some(resolve(pool, &row).await?)),
        None => Ok(None),
    }
}

/// Add a track to a playlist's membership set.
///
/// Idempotent: adding a track twice leaves a single membership row. Both the
/// playlist and the track must exist.
pub async fn add_track(pool: &SqlitePool, playlist_id: PlaylistId, track_id: TrackId) -> Result<()> {
    let playlist = sqlx::query("SELECT id FROM playlists WHERE id = ?")
        .bind(playlist_id)
        .fetch_optional(pool)
        .await?;
    if playlist.is_none() {
        return Err(StorageError::not_found("Playlist", playlist_id));
    }

    let track = sqlx::query("SELECT id FROM tracks WHERE id = ?")
        .bind(track_id)
        .fetch_optional(pool)
        .await?;
    if track.is_none() {
        return Err(StorageError::not_found("Track", track_id));
    }

    sqlx::query("INSERT OR IGNORE INTO playlist_tracks (playlist_id, track_id) VALUES (?, ?)")
        .bind(playlist_id)
        .bind(track_id)
        .execute(pool)
        .await?;

    Ok(())
}

/// Remove a track from a playlist's membership set.
///
/// Returns true iff the track was a member.
pub async fn remove_track(
    pool: &SqlitePool,
    playlist_id: PlaylistId,
    track_id: TrackId,
) -> Result<bool> {
    let result = sqlx::query("DELETE FROM playlist_tracks WHERE playlist_id = ? AND track_id = ?")
        .bind(playlist_id)
        .bind(track_id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

/// Delete a playlist and its membership rows. Referenced tracks survive.
///
/// Returns true iff a record existed and was removed.
pub async fn delete(pool: &SqlitePool, id: PlaylistId) -> Result<bool> {
    let mut tx = pool.begin().await?;

    sqlx::query("DELETE FROM playlist_tracks WHERE playlist_id = ?")
        .bind(id)
        .execute(&mut *tx)
        .await?;

    let result = sqlx::query("DELETE FROM playlists WHERE id = ?")
        .bind(id)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;
    Ok(result.rows_affected() > 0)
}

/// Eager membership resolution: every playlist read returns its full track
/// set, never a partial or absent collection.
async fn resolve(pool: &SqlitePool, row: &sqlx::sqlite::SqliteRow) -> Result<Playlist> {
    let id: PlaylistId = row.get("id");

    let track_rows = sqlx::query(
        r#"
        SELECT t.id, t.title, t.artist, t.public_url, t.user_id
        FROM playlist_tracks pt
        INNER JOIN tracks t ON pt.track_id = t.id
        WHERE pt.playlist_id = ?
        ORDER BY t.id
        "#,
    )
    .bind(id)
    .fetch_all(pool)
    .await?;

    let tracks = track_rows
        .iter()
        .map(|row| Track {
            id: Some(row.get("id")),
            title: row.get("title"),
            artist: row.get("artist"),
            public_url: row.get("public_url"),
            user_id: row.get("user_id"),
        })
        .collect();

    Ok(Playlist {
        id: Some(id),
        name: row.get("name"),
        is_cool: row.get::<Option<bool>, _>("is_cool"),
        tracks,
    })
}
