use crate::error::Result;
use aceplay_core::types::{User, UserId};
use sqlx::{Row, SqlitePool};

/// Insert a new user, assigning its id.
pub async fn create(pool: &SqlitePool, user: User) -> Result<User> {
    let result = sqlx::query("INSERT INTO users (username, password_hash) VALUES (?, ?)")
        .bind(&user.username)
        .bind(&user.password_hash)
        .execute(pool)
        .await?;

    Ok(User {
        id: Some(result.last_insert_rowid()),
        ..user
    })
}

/// Get user by ID
pub async fn get_by_id(pool: &SqlitePool, id: UserId) -> Result<Option<User>> {
    let row = sqlx::query("SELECT id, username, password_hash FROM users WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?;

    Ok(row.map(|row| from_row(&row)))
}

/// Get user by unique username
pub async fn get_by_username(pool: &SqlitePool, username: &str) -> Result<Option<User>> {
    let row = sqlx::query("SELECT id, username, password_hash FROM users WHERE username = ?")
        .bind(username)
        .fetch_optional(pool)
        .await?;

    Ok(row.map(|row| from_row(&row)))
}

/// Get all users in creation order
pub async fn get_all(pool: &SqlitePool) -> Result<Vec<User>> {
    let rows = sqlx::query("SELECT id, username, password_hash FROM users ORDER BY id")
        .fetch_all(pool)
        .await?;

    Ok(rows.iter().map(from_row).collect())
}

fn from_row(row: &sqlx::sqlite::SqliteRow) -> User {
    User {
        id: Some(row.get("id")),
        username: row.get("username"),
        password_hash: row.get("password_hash"),
    }
}
