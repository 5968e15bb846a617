//! Booking lifecycle handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use validator::Validate;

use confbook_service::{BookConferenceRequest, BookingStatusView};

use crate::dto::request::{ConfirmBookingRequest, CreateBookingRequest};
use crate::dto::response::BookingCreatedResponse;
use crate::error::ApiError;
use crate::extractors::parse_booking_id;
use crate::state::AppState;

/// POST /booking
pub async fn book_conference(
    State(state): State<AppState>,
    Json(req): Json<CreateBookingRequest>,
) -> Result<(StatusCode, Json<BookingCreatedResponse>), ApiError> {
    req.validate()?;

    let booking_id = state
        .booking_engine
        .book_conference(BookConferenceRequest::new(req.conference_name, req.user_id))
        .await?;

    Ok((StatusCode::CREATED, Json(BookingCreatedResponse { booking_id })))
}

/// POST /booking/waitlist/confirm
pub async fn confirm_waitlist_booking(
    State(state): State<AppState>,
    Json(req): Json<ConfirmBookingRequest>,
) -> Result<StatusCode, ApiError> {
    req.validate()?;
    let booking_id = parse_booking_id(&req.booking_id)?;

    state
        .booking_engine
        .confirm_waitlist_booking(&booking_id)
        .await?;

    Ok(StatusCode::OK)
}

/// DELETE /booking/{id}
pub async fn cancel_booking(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let booking_id = parse_booking_id(&id)?;
    state.booking_engine.cancel_booking(&booking_id).await?;
    Ok(StatusCode::OK)
}

/// GET /booking/{id}
pub async fn get_booking_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<BookingStatusView>, ApiError> {
    let booking_id = parse_booking_id(&id)?;
    let view = state.booking_engine.get_booking_status(&booking_id).await?;
    Ok(Json(view))
}
