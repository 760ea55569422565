/// User account API routes
use crate::{
    error::Result,
    services::{CreateUserRequest, DeleteUserRequest, UpdateUserRequest},
    state::AppState,
};
use axum::{extract::rejection::JsonRejection, extract::State, http::StatusCode, Json};
use serde::Serialize;
use technotes_core::PublicUser;

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Unreadable or mistyped bodies are treated as empty so the account
/// service reports them as missing fields.
///
/// A body sent without `Content-Type: application/json` is also unusable,
/// even when it holds valid JSON.
fn body_or_default<T: Default>(payload: std::result::Result<Json<T>, JsonRejection>) -> T {
    payload.map_or_else(
        |rejection| {
            tracing::debug!("Unusable request body: {}", rejection);
            T::default()
        },
        |Json(body)| body,
    )
}

/// GET /users
/// List all users without their passwords
pub async fn list_users(State(app_state): State<AppState>) -> Result<Json<Vec<PublicUser>>> {
    let users = app_state.accounts.list().await?;
    Ok(Json(users))
}

/// POST /users
/// Create a new user account
pub async fn create_user(
    State(app_state): State<AppState>,
    payload: std::result::Result<Json<CreateUserRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<MessageResponse>)> {
    let message = app_state.accounts.create(body_or_default(payload)).await?;
    Ok((StatusCode::CREATED, Json(MessageResponse { message })))
}

/// PATCH /users
/// Update a user account
pub async fn update_user(
    State(app_state): State<AppState>,
    payload: std::result::Result<Json<UpdateUserRequest>, JsonRejection>,
) -> Result<Json<MessageResponse>> {
    let message = app_state.accounts.update(body_or_default(payload)).await?;
    Ok(Json(MessageResponse { message }))
}

/// DELETE /users
/// Delete a user account that has no notes
pub async fn delete_user(
    State(app_state): State<AppState>,
    payload: std::result::Result<Json<DeleteUserRequest>, JsonRejection>,
) -> Result<Json<String>> {
    let reply = app_state.accounts.delete(body_or_default(payload)).await?;
    Ok(Json(reply))
}
