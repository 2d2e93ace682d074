//! Test helpers and fixtures for storage integration tests
//!
//! These helpers create test databases using REAL SQLite files (NOT in-memory)
//! to match production behavior and properly test migrations, constraints, and indexes.

use aceplay_core::types::{Track, TrackId, User, UserId};
use sqlx::SqlitePool;
use tempfile::TempDir;

/// Test database wrapper that cleans up on drop
pub struct TestDb {
    pub pool: SqlitePool,
    _temp_dir: TempDir,
}

impl TestDb {
    /// Create a new test database with migrations applied
    pub async fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let db_path = temp_dir.path().join("test.db");
        let db_url = format!("sqlite://{}", db_path.display());

        let pool = aceplay_storage::create_pool(&db_url)
            .await
            .expect("Failed to create pool");

        aceplay_storage::run_migrations(&pool)
            .await
            .expect("Failed to run migrations");

        Self {
            pool,
            _temp_dir: temp_dir,
        }
    }

    /// Get the pool reference
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

/// Test fixture: Create a test user
pub async fn create_test_user(pool: &SqlitePool, username: &str) -> UserId {
    let user = aceplay_storage::users::create(
        pool,
        User::new(username, "test-hash").expect("valid username"),
    )
    .await
    .expect("Failed to create test user");

    user.id.expect("user id assigned")
}

/// Test fixture: Create a test track, optionally owned
pub async fn create_test_track(
    pool: &SqlitePool,
    title: &str,
    artist: &str,
    owner: Option<UserId>,
) -> TrackId {
    let mut track = Track::new(title, artist, "https://example.org").expect("valid track");
    track.user_id = owner;

    let saved = aceplay_storage::tracks::save(pool, track)
        .await
        .expect("Failed to create test track");

    saved.id.expect("track id assigned")
}
