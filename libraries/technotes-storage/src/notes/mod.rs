//! Note collection queries
//!
//! Only what the account service needs: ownership lookups and inserts.

use sqlx::{sqlite::SqliteRow, Row, SqlitePool};
use technotes_core::{error::Result, types::*};

fn note_from_row(row: &SqliteRow) -> Note {
    Note {
        id: row.get("id"),
        user: row.get("user_id"),
        title: row.get("title"),
        text: row.get("text"),
        completed: row.get::<i64, _>("completed") != 0,
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
    }
}

/// Get any one note assigned to the user
pub async fn get_one_by_user(pool: &SqlitePool, user_id: &UserId) -> Result<Option<Note>> {
    let row = sqlx::query(
        r#"
        SELECT id, user_id, title, text, completed, created_at, updated_at
        FROM notes
        WHERE user_id = ?
        LIMIT 1
        "#,
    )
    .bind(user_id)
    .fetch_optional(pool)
    .await?;

    Ok(row.as_ref().map(note_from_row))
}

/// Insert a new, not yet completed note
pub async fn create(pool: &SqlitePool, note: CreateNote) -> Result<Note> {
    let id = NoteId::generate();
    let now = chrono::Utc::now().to_rfc3339();

    sqlx::query(
        r#"
        INSERT INTO notes (id, user_id, title, text, completed, created_at, updated_at)
        VALUES (?, ?, ?, ?, 0, ?, ?)
        "#,
    )
    .bind(&id)
    .bind(&note.user)
    .bind(&note.title)
    .bind(&note.text)
    .bind(&now)
    .bind(&now)
    .execute(pool)
    .await?;

    Ok(Note {
        id,
        user: note.user,
        title: note.title,
        text: note.text,
        completed: false,
        created_at: now.clone(),
        updated_at: now,
    })
}
