//! Device pool and class period endpoints

use axum::{extract::State, Json};

use crate::models::{Device, Period};

/// List all devices
#[utoipa::path(
    get,
    path = "/devices",
    tag = "devices",
    responses(
        (status = 200, description = "Device list", body = Vec<Device>)
    )
)]
pub async fn list_devices(State(state): State<crate::AppState>) -> Json<Vec<Device>> {
    Json(state.services.devices.list_devices().await)
}

/// List the class periods of the school day
#[utoipa::path(
    get,
    path = "/periods",
    tag = "devices",
    responses(
        (status = 200, description = "Period list", body = Vec<Period>)
    )
)]
pub async fn list_periods(State(state): State<crate::AppState>) -> Json<Vec<Period>> {
    Json(state.services.devices.list_periods().await)
}
