//! Device model

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Loan state of a single device
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum DeviceStatus {
    Available,
    Borrowed,
    Maintenance,
}

impl DeviceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeviceStatus::Available => "available",
            DeviceStatus::Borrowed => "borrowed",
            DeviceStatus::Maintenance => "maintenance",
        }
    }
}

impl std::fmt::Display for DeviceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Device record, one unit of the loanable pool
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Device {
    pub id: i32,
    /// Display name, e.g. "iPad 12"
    pub name: String,
    pub status: DeviceStatus,
}

/// Fields of a device before an id is assigned
#[derive(Debug, Clone)]
pub struct NewDevice {
    pub name: String,
    pub status: DeviceStatus,
}
