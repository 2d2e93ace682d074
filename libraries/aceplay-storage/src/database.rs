/// Database implementation
use crate::error::{Result, StorageError};
use crate::{playlists, tracks, users};
use aceplay_core::types::{
    CoolFilter, CreatePlaylist, Playlist, PlaylistId, Track, TrackId, User, UserId,
};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;

/// Create a connection pool for the given database URL.
///
/// In-memory databases get a single-connection pool: every SQLite `:memory:`
/// connection is its own database.
pub async fn create_pool(database_url: &str) -> Result<SqlitePool> {
    let options = SqliteConnectOptions::from_str(database_url)
        .map_err(|e| StorageError::Connection(e.to_string()))?
        .create_if_missing(true)
        .foreign_keys(true);

    let max_connections = if database_url.contains(":memory:") { 1 } else { 5 };

    SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await
        .map_err(|e| StorageError::Connection(e.to_string()))
}

/// Run database migrations
pub async fn run_migrations(pool: &SqlitePool) -> Result<()> {
    // Embedded migrations for reliability across different execution contexts
    const MIGRATIONS: &[&str] = &[
        include_str!("../migrations/20250301000001_create_users.sql"),
        include_str!("../migrations/20250301000002_create_tracks.sql"),
        include_str!("../migrations/20250301000003_create_playlists.sql"),
        include_str!("../migrations/20250301000004_create_playlist_tracks.sql"),
    ];

    for migration in MIGRATIONS {
        sqlx::raw_sql(migration)
            .execute(pool)
            .await
            .map_err(|e| StorageError::Migration(e.to_string()))?;
    }

    Ok(())
}

/// SQLite database for the Aceplay catalog
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Create a new database connection with migrations applied.
    pub async fn new(database_url: &str) -> Result<Self> {
        let pool = create_pool(database_url).await?;
        run_migrations(&pool).await?;
        Ok(Self { pool })
    }

    /// Create database from an existing pool (for testing)
    pub fn from_pool(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Get a reference to the underlying pool
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    // User operations

    pub async fn create_user(&self, user: User) -> Result<User> {
        users::create(&self.pool, user).await
    }

    pub async fn get_user(&self, id: UserId) -> Result<Option<User>> {
        users::get_by_id(&self.pool, id).await
    }

    pub async fn get_user_by_username(&self, username: &str) -> Result<Option<User>> {
        users::get_by_username(&self.pool, username).await
    }

    pub async fn get_all_users(&self) -> Result<Vec<User>> {
        users::get_all(&self.pool).await
    }

    // Track operations

    pub async fn save_track(&self, track: Track) -> Result<Track> {
        tracks::save(&self.pool, track).await
    }

    pub async fn get_track(&self, id: TrackId) -> Result<Option<Track>> {
        tracks::get_by_id(&self.pool, id).await
    }

    pub async fn get_all_tracks(&self) -> Result<Vec<Track>> {
        tracks::get_all(&self.pool).await
    }

    pub async fn get_tracks_by_user(&self, user_id: UserId) -> Result<Vec<Track>> {
        tracks::get_by_user(&self.pool, user_id).await
    }

    pub async fn get_first_track(&self) -> Result<Option<Track>> {
        tracks::get_first(&self.pool).await
    }

    pub async fn delete_track(&self, id: TrackId) -> Result<bool> {
        tracks::delete(&self.pool, id).await
    }

    // Playlist operations

    pub async fn create_playlist(&self, playlist: CreatePlaylist) -> Result<Playlist> {
        playlists::create(&self.pool, playlist).await
    }

    pub async fn get_playlist(&self, id: PlaylistId) -> Result<Option<Playlist>> {
        playlists::get_by_id(&self.pool, id).await
    }

    pub async fn get_all_playlists(&self) -> Result<Vec<Playlist>> {
        playlists::get_all(&self.pool).await
    }

    pub async fn get_playlists_by_cool(&self, filter: CoolFilter) -> Result<Vec<Playlist>> {
        playlists::get_by_cool(&self.pool, filter).await
    }

    pub async fn get_first_playlist(&self) -> Result<Option<Playlist>> {
        playlists::get_first(&self.pool).await
    }

    pub async fn delete_playlist(&self, id: PlaylistId) -> Result<bool> {
        playlists::delete(&self.pool, id).await
    }

    pub async fn add_track_to_playlist(
        &self,
        playlist_id: PlaylistId,
        track_id: TrackId,
    ) -> Result<()> {
        playlists::add_track(&self.pool, playlist_id, track_id).await
    }

    pub async fn remove_track_from_playlist(
        &self,
        playlist_id: PlaylistId,
        track_id: TrackId,
    ) -> Result<bool> {
        playlists::remove_track(&self.pool, playlist_id, track_id).await
    }
}
