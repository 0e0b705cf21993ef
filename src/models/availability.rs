//! Per-period availability view

use serde::Serialize;
use utoipa::ToSchema;

/// Remaining pool capacity for one period on one day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PeriodAvailability {
    pub period_id: i32,
    pub period_name: String,
    pub start_time: String,
    pub end_time: String,
    pub capacity: i32,
    /// Devices held by active bookings
    pub booked: i32,
    pub available: i32,
    /// Whether a new booking can still be made
    pub bookable: bool,
}
