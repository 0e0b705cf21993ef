//! Availability calculator over the fungible device pool

use chrono::NaiveDate;

use crate::{models::PeriodAvailability, repository::Repository};

#[derive(Clone)]
pub struct AvailabilityService {
    repository: Repository,
    capacity: i32,
}

impl AvailabilityService {
    pub fn new(repository: Repository, capacity: i32) -> Self {
        Self { repository, capacity }
    }

    pub fn capacity(&self) -> i32 {
        self.capacity
    }

    /// Devices held by active bookings for the period on that day
    pub async fn booked_quantity(&self, period_id: i32, date: NaiveDate) -> i32 {
        self.repository.bookings_booked_quantity(period_id, date).await
    }

    /// Pool capacity minus active bookings for the period on that day
    pub async fn available_count(&self, period_id: i32, date: NaiveDate) -> i32 {
        self.capacity - self.booked_quantity(period_id, date).await
    }

    /// Availability of every period on one day, in school-day order
    pub async fn day_availability(&self, date: NaiveDate) -> Vec<PeriodAvailability> {
        let mut out = Vec::new();
        for period in self.repository.periods_list().await {
            let booked = self.booked_quantity(period.id, date).await;
            let available = self.capacity - booked;
            out.push(PeriodAvailability {
                period_id: period.id,
                period_name: period.name,
                start_time: period.start_time,
                end_time: period.end_time,
                capacity: self.capacity,
                booked,
                available,
                bookable: available > 0,
            });
        }
        out
    }
}
