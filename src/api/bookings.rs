//! Booking endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::{AppError, AppResult},
    models::{
        booking::{parse_calendar_day, UpdateBookingStatus},
        Booking, CreateBooking,
    },
};

use super::{AppJson, AuthenticatedUser};

/// List bookings on a day
#[utoipa::path(
    get,
    path = "/bookings/{date}",
    tag = "bookings",
    params(("date" = String, Path, description = "Day as YYYY-MM-DD or RFC 3339")),
    responses(
        (status = 200, description = "Bookings on that day", body = Vec<Booking>),
        (status = 400, description = "Invalid date", body = crate::error::ErrorResponse)
    )
)]
pub async fn list_bookings_for_date(
    State(state): State<crate::AppState>,
    Path(date): Path<String>,
) -> AppResult<Json<Vec<Booking>>> {
    let day = parse_calendar_day(&date)?;
    Ok(Json(state.services.bookings.list_for_date(day).await))
}

/// List every booking, newest first
#[utoipa::path(
    get,
    path = "/bookings",
    tag = "bookings",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "All bookings", body = Vec<Booking>),
        (status = 401, description = "Not authenticated", body = crate::error::ErrorResponse),
        (status = 403, description = "Not an administrator", body = crate::error::ErrorResponse)
    )
)]
pub async fn list_all_bookings(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
) -> AppResult<Json<Vec<Booking>>> {
    claims.require_admin()?;
    Ok(Json(state.services.bookings.list_all().await))
}

/// Book devices for a period
#[utoipa::path(
    post,
    path = "/bookings",
    tag = "bookings",
    request_body = CreateBooking,
    responses(
        (status = 201, description = "Booking created", body = Booking),
        (status = 400, description = "Invalid fields, with per-field details", body = crate::error::ErrorResponse),
        (status = 404, description = "Device or period not found", body = crate::error::ErrorResponse),
        (status = 409, description = "Not enough devices left", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_booking(
    State(state): State<crate::AppState>,
    AppJson(request): AppJson<CreateBooking>,
) -> AppResult<(StatusCode, Json<Booking>)> {
    let booking = state.services.bookings.create(request).await?;
    Ok((StatusCode::CREATED, Json(booking)))
}

/// Change a booking's status
#[utoipa::path(
    patch,
    path = "/bookings/{id}/status",
    tag = "bookings",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Booking ID")),
    request_body = UpdateBookingStatus,
    responses(
        (status = 200, description = "Booking updated", body = Booking),
        (status = 400, description = "Invalid status", body = crate::error::ErrorResponse),
        (status = 404, description = "Booking not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_booking_status(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<String>,
    AppJson(request): AppJson<UpdateBookingStatus>,
) -> AppResult<Json<Booking>> {
    claims.require_admin()?;
    let id: i32 = id
        .parse()
        .map_err(|_| AppError::BadRequest(format!("Invalid booking id: {}", id)))?;
    let booking = state.services.bookings.update_status(id, &request.status).await?;
    Ok(Json(booking))
}
