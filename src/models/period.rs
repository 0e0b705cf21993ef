//! Class period model

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Named time slot of the school day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Period {
    pub id: i32,
    pub name: String,
    /// Start time (HH:MM)
    pub start_time: String,
    /// End time (HH:MM)
    pub end_time: String,
}

#[derive(Debug, Clone)]
pub struct NewPeriod {
    pub name: String,
    pub start_time: String,
    pub end_time: String,
}

/// The school day, in order
pub const SCHOOL_DAY: [(&str, &str); 9] = [
    ("08:00", "08:45"),
    ("08:50", "09:35"),
    ("09:40", "10:25"),
    ("10:30", "11:15"),
    ("11:20", "12:05"),
    ("13:00", "13:45"),
    ("13:50", "14:35"),
    ("14:40", "15:25"),
    ("15:30", "16:15"),
];

impl NewPeriod {
    /// Periods seeded at startup, named "Period 1" to "Period 9"
    pub fn school_day() -> Vec<NewPeriod> {
        SCHOOL_DAY
            .iter()
            .enumerate()
            .map(|(i, (start, end))| NewPeriod {
                name: format!("Period {}", i + 1),
                start_time: start.to_string(),
                end_time: end.to_string(),
            })
            .collect()
    }
}
