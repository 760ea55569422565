//! User collection queries

use sqlx::{sqlite::SqliteRow, Row, SqlitePool};
use technotes_core::{error::Result, types::*, NotesError};

fn decode_roles(raw: &str) -> Result<Vec<String>> {
    Ok(serde_json::from_str(raw)?)
}

fn user_from_row(row: &SqliteRow) -> Result<User> {
    Ok(User {
        id: row.get("id"),
        username: row.get("username"),
        password: row.get("password"),
        roles: decode_roles(row.get("roles"))?,
        active: row.get::<i64, _>("active") != 0,
    })
}

/// Get all users without their password hashes, oldest first
pub async fn get_all(pool: &SqlitePool) -> Result<Vec<PublicUser>> {
    let rows = sqlx::query(
        "SELECT id, username, roles, active FROM users ORDER BY created_at, rowid",
    )
    .fetch_all(pool)
    .await?;

    rows.iter()
        .map(|row| -> Result<PublicUser> {
            Ok(PublicUser {
                id: row.get("id"),
                username: row.get("username"),
                roles: decode_roles(row.get("roles"))?,
                active: row.get::<i64, _>("active") != 0,
            })
        })
        .collect()
}

/// Get the first user whose username matches exactly
pub async fn get_by_username(pool: &SqlitePool, username: &str) -> Result<Option<User>> {
    let row = sqlx::query(
        r#"
        SELECT id, username, password, roles, active
        FROM users
        WHERE username = ?
        ORDER BY created_at, rowid
        LIMIT 1
        "#,
    )
    .bind(username)
    .fetch_optional(pool)
    .await?;

    row.as_ref().map(user_from_row).transpose()
}

/// Get the first user holding `username` other than `exclude`
pub async fn get_other_by_username(
    pool: &SqlitePool,
    username: &str,
    exclude: &UserId,
) -> Result<Option<User>> {
    let row = sqlx::query(
        r#"
        SELECT id, username, password, roles, active
        FROM users
        WHERE username = ? AND id != ?
        ORDER BY created_at, rowid
        LIMIT 1
        "#,
    )
    .bind(username)
    .bind(exclude)
    .fetch_optional(pool)
    .await?;

    row.as_ref().map(user_from_row).transpose()
}

/// Get user by ID
pub async fn get_by_id(pool: &SqlitePool, id: &UserId) -> Result<Option<User>> {
    let row = sqlx::query("SELECT id, username, password, roles, active FROM users WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?;

    row.as_ref().map(user_from_row).transpose()
}

/// Insert a new active user
///
/// Returns `None` when the insert reports no row back.
pub async fn create(pool: &SqlitePool, user: NewUser) -> Result<Option<User>> {
    let id = UserId::generate();
    let roles = serde_json::to_string(&user.roles)?;
    let now = chrono::Utc::now().timestamp();

    let row = sqlx::query(
        r#"
        INSERT INTO users (id, username, password, roles, active, created_at, updated_at)
        VALUES (?, ?, ?, ?, 1, ?, ?)
        RETURNING id, username, password, roles, active
        "#,
    )
    .bind(&id)
    .bind(&user.username)
    .bind(&user.password)
    .bind(roles)
    .bind(now)
    .bind(now)
    .fetch_optional(pool)
    .await?;

    row.as_ref().map(user_from_row).transpose()
}

/// Overwrite username, password, roles, and active flag of an existing user
pub async fn update(pool: &SqlitePool, user: &User) -> Result<User> {
    let roles = serde_json::to_string(&user.roles)?;
    let now = chrono::Utc::now().timestamp();

    let row = sqlx::query(
        r#"
        UPDATE users
        SET username = ?, password = ?, roles = ?, active = ?, updated_at = ?
        WHERE id = ?
        RETURNING id, username, password, roles, active
        "#,
    )
    .bind(&user.username)
    .bind(&user.password)
    .bind(roles)
    .bind(user.active)
    .bind(now)
    .bind(&user.id)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| NotesError::not_found("User", user.id.as_str()))?;

    user_from_row(&row)
}

/// Delete a user, returning whether a row was removed
pub async fn delete(pool: &SqlitePool, id: &UserId) -> Result<bool> {
    let result = sqlx::query("DELETE FROM users WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}
