use crate::{notes, users};
use async_trait::async_trait;
use sqlx::SqlitePool;
use technotes_core::{error::Result, types::*, NoteStore, UserStore};

/// Store backed by an `SQLite` pool
#[derive(Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for SqliteStore {
    async fn find_all(&self) -> Result<Vec<PublicUser>> {
        users::get_all(&self.pool).await
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>> {
        users::get_by_username(&self.pool, username).await
    }

    async fn find_other_with_username(
        &self,
        username: &str,
        exclude: &UserId,
    ) -> Result<Option<User>> {
        users::get_other_by_username(&self.pool, username, exclude).await
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>> {
        users::get_by_id(&self.pool, id).await
    }

    async fn create(&self, user: NewUser) -> Result<Option<User>> {
        users::create(&self.pool, user).await
    }

    async fn save(&self, user: &User) -> Result<User> {
        users::update(&self.pool, user).await
    }

    async fn delete_one(&self, id: &UserId) -> Result<bool> {
        users::delete(&self.pool, id).await
    }
}

#[async_trait]
impl NoteStore for SqliteStore {
    async fn find_one_by_user(&self, user_id: &UserId) -> Result<Option<Note>> {
        notes::get_one_by_user(&self.pool, user_id).await
    }

    async fn create_note(&self, note: CreateNote) -> Result<Note> {
        notes::create(&self.pool, note).await
    }
}
