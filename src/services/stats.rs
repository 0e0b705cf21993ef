//! Dashboard statistics service

use crate::{
    models::{DashboardStats, DeviceStatus, DeviceStatusCounts, PeriodUsage},
    repository::Repository,
};

#[derive(Clone)]
pub struct StatsService {
    repository: Repository,
    capacity: i32,
}

impl StatsService {
    pub fn new(repository: Repository, capacity: i32) -> Self {
        Self { repository, capacity }
    }

    /// Usage summary across all dates
    pub async fn dashboard(&self) -> DashboardStats {
        let capacity = i64::from(self.capacity);
        let total_borrowed = self.repository.bookings_total_active_quantity().await;

        let mut bookings_by_period = Vec::new();
        for period in self.repository.periods_list().await {
            bookings_by_period.push(PeriodUsage {
                count: self.repository.bookings_count_by_period(period.id).await,
                period_id: period.id,
                period_name: period.name,
            });
        }

        let devices_by_status = DeviceStatusCounts {
            available: self.repository.devices_count_by_status(DeviceStatus::Available).await,
            borrowed: self.repository.devices_count_by_status(DeviceStatus::Borrowed).await,
            maintenance: self.repository.devices_count_by_status(DeviceStatus::Maintenance).await,
        };

        DashboardStats {
            capacity,
            total_borrowed,
            available: (capacity - total_borrowed).max(0),
            bookings_by_period,
            devices_by_status,
        }
    }
}
