/// Note domain types
use crate::types::{NoteId, UserId};
use serde::{Deserialize, Serialize};

/// A note assigned to a user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Unique note identifier
    pub id: NoteId,

    /// Owning user
    pub user: UserId,

    /// Short heading
    pub title: String,
    /// Body text
    pub text: String,
    /// Whether the note has been marked done
    pub completed: bool,

    /// Creation timestamp (RFC 3339)
    pub created_at: String,

    /// Last update timestamp (RFC 3339)
    pub updated_at: String,
}

/// Data for inserting a new note
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateNote {
    /// User the note is assigned to
    pub user: UserId,
    /// Short heading
    pub title: String,
    /// Body text
    pub text: String,
}
