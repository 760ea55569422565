/// Errors raised by the user and note stores
use thiserror::Error;

/// Result type alias using `NotesError`
pub type Result<T> = std::result::Result<T, NotesError>;

/// Failure of a store operation
#[derive(Error, Debug)]
pub enum NotesError {
    /// A record addressed by ID does not exist
    #[error("{entity} not found: {id}")]
    NotFound {
        /// Collection name, e.g. `User`
        entity: String,
        /// ID that was looked up
        id: String,
    },

    /// A stored column could not be decoded (e.g. the roles JSON array)
    #[error("Corrupt record: {0}")]
    Corrupt(#[from] serde_json::Error),

    /// The backing database rejected or failed the query
    #[error("Database error: {0}")]
    Database(String),
}

impl NotesError {
    /// Record not found in the given collection
    pub fn not_found(entity: impl Into<String>, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity: entity.into(),
            id: id.into(),
        }
    }
}

#[cfg(feature = "sqlx-support")]
impl From<sqlx::Error> for NotesError {
    fn from(err: sqlx::Error) -> Self {
        Self::Database(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_names_collection_and_id() {
        let err = NotesError::not_found("User", "u-42");
        assert_eq!(err.to_string(), "User not found: u-42");
    }

    #[test]
    fn undecodable_roles_are_corrupt() {
        let err: NotesError = serde_json::from_str::<Vec<String>>("not json")
            .unwrap_err()
            .into();
        assert!(matches!(err, NotesError::Corrupt(_)));
    }
}
