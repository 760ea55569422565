//! User account management
//!
//! List, create, update, and delete users against the injected stores. Each
//! operation validates its input, runs its checks, then writes; none of the
//! check-then-write sequences are transactional, so two concurrent requests
//! for the same username can both pass the duplicate check.

use crate::services::PasswordHasher;
use serde::Deserialize;
use std::sync::Arc;
use technotes_core::{NewUser, NoteStore, NotesError, PublicUser, UserId, UserStore};
use thiserror::Error;

/// Failures of the account operations
///
/// The display text is the message returned to API clients.
#[derive(Debug, Error)]
pub enum AccountError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    NotFound(String),

    #[error("Duplicate username")]
    DuplicateUsername,

    #[error("User has assigned notes")]
    HasAssignedNotes,

    /// The store accepted the insert but returned no record
    #[error("Invalid user data received")]
    InvalidUserData,

    #[error("Storage error: {0}")]
    Storage(#[from] NotesError),

    #[error("Password hashing failed: {0}")]
    Hash(#[from] bcrypt::BcryptError),

    #[error("Background task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

/// Body of `POST /users`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateUserRequest {
    pub username: Option<String>,
    pub password: Option<String>,
    pub roles: Option<Vec<String>>,
}

/// Body of `PATCH /users`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateUserRequest {
    pub id: Option<String>,
    pub username: Option<String>,
    pub roles: Option<Vec<String>>,
    pub active: Option<bool>,

    /// Left out (or empty) to keep the current password
    pub password: Option<String>,
}

/// Body of `DELETE /users`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DeleteUserRequest {
    pub id: Option<String>,
}

const FIELDS_REQUIRED: &str = "All fields are required";

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

fn non_empty_roles(roles: Option<Vec<String>>) -> Option<Vec<String>> {
    roles.filter(|r| !r.is_empty())
}

/// Account operations over the user and note collections
pub struct UserAccountService {
    users: Arc<dyn UserStore>,
    notes: Arc<dyn NoteStore>,
    hasher: PasswordHasher,
}

impl UserAccountService {
    pub fn new(users: Arc<dyn UserStore>, notes: Arc<dyn NoteStore>, hasher: PasswordHasher) -> Self {
        Self {
            users,
            notes,
            hasher,
        }
    }

    /// All users, without password hashes
    pub async fn list(&self) -> Result<Vec<PublicUser>, AccountError> {
        let users = self.users.find_all().await?;
        if users.is_empty() {
            return Err(AccountError::NotFound("No users found".to_string()));
        }
        Ok(users)
    }

    /// Create an active user and return the confirmation message
    pub async fn create(&self, req: CreateUserRequest) -> Result<String, AccountError> {
        let (Some(username), Some(password), Some(roles)) = (
            non_empty(req.username),
            non_empty(req.password),
            non_empty_roles(req.roles),
        ) else {
            return Err(AccountError::Validation(FIELDS_REQUIRED.to_string()));
        };

        if self.users.find_by_username(&username).await?.is_some() {
            tracing::warn!("Rejected new user {}: username taken", username);
            return Err(AccountError::DuplicateUsername);
        }

        let password = self.hasher.hash(&password).await?;

        let created = self
            .users
            .create(NewUser {
                username: username.clone(),
                password,
                roles,
            })
            .await?
            .ok_or(AccountError::InvalidUserData)?;

        tracing::info!("Created user {} ({})", created.username, created.id);
        Ok(format!("New user {} created", username))
    }

    /// Replace username, roles, and active flag; re-hash the password only if one is given
    pub async fn update(&self, req: UpdateUserRequest) -> Result<String, AccountError> {
        let (Some(id), Some(username), Some(roles), Some(active)) = (
            non_empty(req.id),
            non_empty(req.username),
            non_empty_roles(req.roles),
            req.active,
        ) else {
            return Err(AccountError::Validation(FIELDS_REQUIRED.to_string()));
        };
        let id = UserId::new(id);

        let Some(mut user) = self.users.find_by_id(&id).await? else {
            return Err(AccountError::NotFound("User not found".to_string()));
        };

        // Keeping your own name is not a duplicate
        if self
            .users
            .find_other_with_username(&username, &user.id)
            .await?
            .is_some()
        {
            tracing::warn!("Rejected rename of {} to {}: username taken", id, username);
            return Err(AccountError::DuplicateUsername);
        }

        user.username = username;
        user.roles = roles;
        user.active = active;

        if let Some(password) = non_empty(req.password) {
            user.password = self.hasher.hash(&password).await?;
        }

        let updated = self.users.save(&user).await?;

        tracing::info!("Updated user {} ({})", updated.username, updated.id);
        Ok(format!("{} updated", updated.username))
    }

    /// Delete a user that owns no notes
    pub async fn delete(&self, req: DeleteUserRequest) -> Result<String, AccountError> {
        let Some(id) = non_empty(req.id) else {
            return Err(AccountError::Validation("User ID required".to_string()));
        };
        let id = UserId::new(id);

        if self.notes.find_one_by_user(&id).await?.is_some() {
            tracing::warn!("Refused to delete user {}: notes still assigned", id);
            return Err(AccountError::HasAssignedNotes);
        }

        let Some(user) = self.users.find_by_id(&id).await? else {
            return Err(AccountError::NotFound("User not found".to_string()));
        };

        if !self.users.delete_one(&user.id).await? {
            return Err(AccountError::NotFound("User not found".to_string()));
        }

        tracing::info!("Deleted user {} ({})", user.username, user.id);
        Ok(format!("Username {} with ID {} deleted", user.username, user.id))
    }
}
