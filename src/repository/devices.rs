//! Device domain methods on Repository

use super::Repository;
use crate::{
    error::{AppError, AppResult},
    models::{Device, DeviceStatus, NewDevice},
};

impl Repository {
    /// List all devices
    pub async fn devices_list(&self) -> Vec<Device> {
        self.store.read().await.devices.values().cloned().collect()
    }

    /// Get device by ID
    pub async fn devices_get_by_id(&self, id: i32) -> Option<Device> {
        self.store.read().await.devices.get(&id).cloned()
    }

    /// Create device
    pub async fn devices_create(&self, data: NewDevice) -> Device {
        let mut store = self.store.write().await;
        let device = Device {
            id: self.sequences.devices.next(),
            name: data.name,
            status: data.status,
        };
        store.devices.insert(device.id, device.clone());
        device
    }

    /// Replace the status of a device, keeping every other field
    pub async fn devices_update_status(&self, id: i32, status: DeviceStatus) -> AppResult<Device> {
        let mut store = self.store.write().await;
        let device = store
            .devices
            .get_mut(&id)
            .ok_or_else(|| AppError::NotFound(format!("Device {} not found", id)))?;
        device.status = status;
        Ok(device.clone())
    }

    /// Count devices by status (for stats)
    pub async fn devices_count_by_status(&self, status: DeviceStatus) -> i64 {
        self.store
            .read()
            .await
            .devices
            .values()
            .filter(|d| d.status == status)
            .count() as i64
    }
}
