//! Booking domain methods on Repository

use chrono::NaiveDate;

use super::{Repository, Store};
use crate::{
    error::{AppError, AppResult},
    models::{Booking, BookingStatus, DeviceStatus, NewBooking},
};

impl Store {
    fn booked_quantity(&self, period_id: i32, date: NaiveDate) -> i32 {
        self.bookings
            .values()
            .filter(|b| b.occupies(period_id, date))
            .map(|b| b.quantity)
            .sum()
    }

    fn insert_booking(&mut self, id: i32, data: NewBooking) -> Booking {
        let booking = Booking {
            id,
            device_id: data.device_id,
            period_id: data.period_id,
            booked_date: data.booked_date,
            borrower_name: data.borrower_name,
            phone_number: data.phone_number,
            purpose: data.purpose,
            quantity: data.quantity,
            status: BookingStatus::Active,
        };
        self.bookings.insert(booking.id, booking.clone());
        booking
    }
}

impl Repository {
    /// List all bookings in insertion order
    pub async fn bookings_list(&self) -> Vec<Booking> {
        self.store.read().await.bookings.values().cloned().collect()
    }

    /// Bookings whose booked date falls on the given calendar day
    pub async fn bookings_list_by_date(&self, date: NaiveDate) -> Vec<Booking> {
        self.store
            .read()
            .await
            .bookings
            .values()
            .filter(|b| b.is_on(date))
            .cloned()
            .collect()
    }

    pub async fn bookings_get_by_id(&self, id: i32) -> Option<Booking> {
        self.store.read().await.bookings.get(&id).cloned()
    }

    /// Insert a booking as-is, without capacity or device bookkeeping
    pub async fn bookings_create(&self, data: NewBooking) -> Booking {
        let mut store = self.store.write().await;
        let id = self.sequences.bookings.next();
        store.insert_booking(id, data)
    }

    /// Devices held by active bookings for a period on a calendar day
    pub async fn bookings_booked_quantity(&self, period_id: i32, date: NaiveDate) -> i32 {
        self.store.read().await.booked_quantity(period_id, date)
    }

    /// Replace the status of a booking, keeping every other field
    pub async fn bookings_update_status(
        &self,
        id: i32,
        status: BookingStatus,
    ) -> AppResult<Booking> {
        let mut store = self.store.write().await;
        let booking = store
            .bookings
            .get_mut(&id)
            .ok_or_else(|| AppError::NotFound(format!("Booking {} not found", id)))?;
        booking.status = status;
        Ok(booking.clone())
    }

    /// Create an active booking and mark its device borrowed.
    ///
    /// Device and period must exist and the slot must still have `quantity`
    /// devices free out of `capacity`. Everything happens under a single write
    /// lock, so two concurrent requests cannot both take the last devices.
    pub async fn bookings_create_with_device(
        &self,
        data: NewBooking,
        capacity: i32,
    ) -> AppResult<Booking> {
        let mut store = self.store.write().await;

        if !store.devices.contains_key(&data.device_id) {
            return Err(AppError::NotFound(format!("Device {} not found", data.device_id)));
        }
        if !store.periods.contains_key(&data.period_id) {
            return Err(AppError::NotFound(format!("Period {} not found", data.period_id)));
        }

        let date = data.booked_date.date_naive();
        let available = capacity - store.booked_quantity(data.period_id, date);
        if data.quantity > available {
            return Err(AppError::Conflict(format!(
                "Only {} devices left for period {} on {}",
                available.max(0),
                data.period_id,
                date
            )));
        }

        let device_id = data.device_id;
        let id = self.sequences.bookings.next();
        let booking = store.insert_booking(id, data);
        if let Some(device) = store.devices.get_mut(&device_id) {
            device.status = DeviceStatus::Borrowed;
        }
        Ok(booking)
    }

    /// Close out a booking and hand its device back to the pool
    pub async fn bookings_complete(&self, id: i32) -> AppResult<Booking> {
        let mut store = self.store.write().await;
        let booking = store
            .bookings
            .get_mut(&id)
            .ok_or_else(|| AppError::NotFound(format!("Booking {} not found", id)))?;
        booking.status = BookingStatus::Completed;
        let booking = booking.clone();

        if let Some(device) = store.devices.get_mut(&booking.device_id) {
            device.status = DeviceStatus::Available;
        }
        Ok(booking)
    }

    /// Devices held by all active bookings, any day (for stats)
    pub async fn bookings_total_active_quantity(&self) -> i64 {
        self.store
            .read()
            .await
            .bookings
            .values()
            .filter(|b| b.status == BookingStatus::Active)
            .map(|b| i64::from(b.quantity))
            .sum()
    }

    /// Number of bookings of any status for a period (for stats)
    pub async fn bookings_count_by_period(&self, period_id: i32) -> i64 {
        self.store
            .read()
            .await
            .bookings
            .values()
            .filter(|b| b.period_id == period_id)
            .count() as i64
    }
}
