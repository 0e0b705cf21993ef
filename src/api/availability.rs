//! Availability endpoint

use axum::{
    extract::{Path, State},
    Json,
};

use crate::{
    error::AppResult,
    models::{booking::parse_calendar_day, PeriodAvailability},
};

/// Remaining devices for every period on a day
#[utoipa::path(
    get,
    path = "/availability/{date}",
    tag = "bookings",
    params(("date" = String, Path, description = "Day as YYYY-MM-DD or RFC 3339")),
    responses(
        (status = 200, description = "Per-period availability", body = Vec<PeriodAvailability>),
        (status = 400, description = "Invalid date", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_day_availability(
    State(state): State<crate::AppState>,
    Path(date): Path<String>,
) -> AppResult<Json<Vec<PeriodAvailability>>> {
    let day = parse_calendar_day(&date)?;
    Ok(Json(state.services.availability.day_availability(day).await))
}
