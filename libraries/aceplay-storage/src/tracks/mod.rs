use crate::error::{Result, StorageError};
use aceplay_core::types::{Track, TrackId, UserId};
use sqlx::{Row, SqlitePool};

/// Save a track: insert and assign an id when it has none, otherwise update
/// the existing record in place.
pub async fn save(pool: &SqlitePool, track: Track) -> Result<Track> {
    match track.id {
        None => {
            let result = sqlx::query(
                "INSERT INTO tracks (title, artist, public_url, user_id) VALUES (?, ?, ?, ?)",
            )
            .bind(&track.title)
            .bind(&track.artist)
            .bind(&track.public_url)
            .bind(track.user_id)
            .execute(pool)
            .await?;

            Ok(Track {
                id: Some(result.last_insert_rowid()),
                ..track
            })
        }
        Some(id) => {
            let result = sqlx::query(
                "UPDATE tracks SET title = ?, artist = ?, public_url = ?, user_id = ? WHERE id = ?",
            )
            .bind(&track.title)
            .bind(&track.artist)
            .bind(&track.public_url)
            .bind(track.user_id)
            .bind(id)
            .execute(pool)
            .await?;

            if result.rows_affected() == 0 {
                return Err(StorageError::not_found("Track", id));
            }
            Ok(track)
        }
    }
}

/// Get track by ID
pub async fn get_by_id(pool: &SqlitePool, id: TrackId) -> Result<Option<Track>> {
    let row = sqlx::query("SELECT id, title, artist, public_url, user_id FROM tracks WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?;

    Ok(row.map(|row| from_row(&row)))
}

/// Get all tracks in creation (id) order
pub async fn get_all(pool: &SqlitePool) -> Result<Vec<Track>> {
    let rows =
        sqlx::query("SELECT id, title, artist, public_url, user_id FROM tracks ORDER BY id")
            .fetch_all(pool)
            .await?;

    Ok(rows.iter().map(from_row).collect())
}

/// Get all tracks owned by a user, in creation order
pub async fn get_by_user(pool: &SqlitePool, user_id: UserId) -> Result<Vec<Track>> {
    let rows = sqlx::query(
        "SELECT id, title, artist, public_url, user_id FROM tracks WHERE user_id = ? ORDER BY id",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    Ok(rows.iter().map(from_row).collect())
}

/// Get the first-created track: lowest id wins, `None` when the store is
/// empty.
pub async fn get_first(pool: &SqlitePool) -> Result<Option<Track>> {
    let row = sqlx::query(
        "SELECT id, title, artist, public_url, user_id FROM tracks ORDER BY id ASC LIMIT 1",
    )
    .fetch_optional(pool)
    .await?;

    Ok(row.map(|row| from_row(&row)))
}

/// Delete a track and its playlist memberships.
///
/// Returns true iff a record existed and was removed.
pub async fn delete(pool: &SqlitePool, id: TrackId) -> Result<bool> {
    let mut tx = pool.begin().await?;

    sqlx::query("DELETE FROM playlist_tracks WHERE track_id = ?")
        .bind(id)
        .execute(&mut *tx)
        .await?;

    let result = sqlx::query("DELETE FROM tracks WHERE id = ?")
        .bind(id)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;
    Ok(result.rows_affected() > 0)
}

fn from_row(row: &sqlx::sqlite::SqliteRow) -> Track {
    Track {
        id: Some(row.get("id")),
        title: row.get("title"),
        artist: row.get("artist"),
        public_url: row.get("public_url"),
        user_id: row.get("user_id"),
    }
}
