/// Server error types
use crate::services::AccountError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ServerError>;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error(transparent)]
    Account(#[from] AccountError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Storage error: {0}")]
    Storage(#[from] technotes_storage::StorageError),
}

impl ServerError {
    fn status_and_message(self) -> (StatusCode, String) {
        match self {
            ServerError::Account(err) => match err {
                AccountError::Validation(_)
                | AccountError::NotFound(_)
                | AccountError::HasAssignedNotes
                | AccountError::InvalidUserData => (StatusCode::BAD_REQUEST, err.to_string()),
                AccountError::DuplicateUsername => (StatusCode::CONFLICT, err.to_string()),
                AccountError::Storage(ref e) => {
                    tracing::error!("Database error: {:?}", e);
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "Database error".to_string(),
                    )
                }
                AccountError::Hash(ref e) => {
                    tracing::error!("Bcrypt error: {:?}", e);
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "Password error".to_string(),
                    )
                }
                AccountError::Task(ref e) => {
                    tracing::error!("Hashing task failed: {:?}", e);
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "Internal server error".to_string(),
                    )
                }
            },
            ServerError::Config(ref msg) => {
                tracing::error!("Config error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Configuration error".to_string(),
                )
            }
            ServerError::Storage(ref e) => {
                tracing::error!("Storage error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Storage error".to_string(),
                )
            }
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, message) = self.status_and_message();

        let body = Json(json!({
            "message": message,
        }));

        (status, body).into_response()
    }
}
