//! User registration handlers.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use validator::Validate;

use confbook_service::AddUserRequest;

use crate::dto::request::CreateUserRequest;
use crate::dto::response::UserResponse;
use crate::error::ApiError;
use crate::state::AppState;

/// POST /user
pub async fn add_user(
    State(state): State<AppState>,
    Json(req): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<UserResponse>), ApiError> {
    req.validate()?;

    let user = state
        .user_service
        .add_user(AddUserRequest { id: req.id })
        .await?;

    Ok((StatusCode::CREATED, Json(user.into())))
}
