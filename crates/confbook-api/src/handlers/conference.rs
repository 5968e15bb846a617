//! Conference registration handlers.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use validator::Validate;

use confbook_service::AddConferenceRequest;

use crate::dto::request::CreateConferenceRequest;
use crate::dto::response::ConferenceResponse;
use crate::error::ApiError;
use crate::state::AppState;

/// POST /conference
pub async fn add_conference(
    State(state): State<AppState>,
    Json(req): Json<CreateConferenceRequest>,
) -> Result<(StatusCode, Json<ConferenceResponse>), ApiError> {
    req.validate()?;

    let conference = state
        .conference_service
        .add_conference(AddConferenceRequest {
            name: req.name,
            start_time: req.start_time,
            end_time: req.end_time,
            available_slots: req.available_slots,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(conference.into())))
}
