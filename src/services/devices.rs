//! Device pool and class period service

use crate::{
    models::{Device, DeviceStatus, NewDevice, NewPeriod, Period},
    repository::Repository,
};

#[derive(Clone)]
pub struct DevicesService {
    repository: Repository,
}

impl DevicesService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list_devices(&self) -> Vec<Device> {
        self.repository.devices_list().await
    }

    pub async fn list_periods(&self) -> Vec<Period> {
        self.repository.periods_list().await
    }

    /// Create the device pool and the school-day periods on an empty store
    pub async fn seed(&self, capacity: i32) {
        if self.repository.devices_list().await.is_empty() {
            for i in 1..=capacity {
                self.repository
                    .devices_create(NewDevice {
                        name: format!("iPad {}", i),
                        status: DeviceStatus::Available,
                    })
                    .await;
            }
            tracing::info!("Seeded device pool with {} devices", capacity);
        }

        if self.repository.periods_list().await.is_empty() {
            for period in NewPeriod::school_day() {
                self.repository.periods_create(period).await;
            }
        }
    }
}
