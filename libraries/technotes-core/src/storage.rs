//! Storage ports for the user and note collections

use crate::error::Result;
use crate::types::{CreateNote, NewUser, Note, PublicUser, User, UserId};
use async_trait::async_trait;

/// Access to the user collection
///
/// Implemented by the `SQLite` store and the in-memory store. Lookups return
/// plain data; nothing returned here writes back on its own.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Get every user, projected without the password hash
    async fn find_all(&self) -> Result<Vec<PublicUser>>;

    /// Get the first user with exactly this username
    async fn find_by_username(&self, username: &str) -> Result<Option<User>>;

    /// Get the first user with this username whose ID is not `exclude`
    async fn find_other_with_username(
        &self,
        username: &str,
        exclude: &UserId,
    ) -> Result<Option<User>>;

    /// Get a user by ID
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>>;

    /// Insert a new user (active by default)
    ///
    /// Returns `None` if the store did not hand back the created record.
    async fn create(&self, user: NewUser) -> Result<Option<User>>;

    /// Persist every field of an existing user
    async fn save(&self, user: &User) -> Result<User>;

    /// Delete a user, returning whether a record was removed
    async fn delete_one(&self, id: &UserId) -> Result<bool>;
}

/// Access to the note collection
#[async_trait]
pub trait NoteStore: Send + Sync {
    /// Get any one note owned by the given user
    async fn find_one_by_user(&self, user_id: &UserId) -> Result<Option<Note>>;

    /// Insert a new note
    async fn create_note(&self, note: CreateNote) -> Result<Note>;
}
