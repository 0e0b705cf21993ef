//! Dashboard statistics

use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PeriodUsage {
    pub period_id: i32,
    pub period_name: String,
    /// Bookings of any status
    pub count: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, ToSchema)]
pub struct DeviceStatusCounts {
    pub available: i64,
    pub borrowed: i64,
    pub maintenance: i64,
}

/// Usage summary across all dates
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub capacity: i64,
    /// Devices held by active bookings
    pub total_borrowed: i64,
    pub available: i64,
    pub bookings_by_period: Vec<PeriodUsage>,
    pub devices_by_status: DeviceStatusCounts,
}
