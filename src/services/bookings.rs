//! Booking lifecycle service

use chrono::NaiveDate;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::{
    error::{AppError, AppResult},
    models::{Booking, BookingStatus, CreateBooking},
    repository::Repository,
};

#[derive(Clone)]
pub struct BookingsService {
    repository: Repository,
    capacity: i32,
}

impl BookingsService {
    pub fn new(repository: Repository, capacity: i32) -> Self {
        Self { repository, capacity }
    }

    /// Bookings on a calendar day
    pub async fn list_for_date(&self, date: NaiveDate) -> Vec<Booking> {
        self.repository.bookings_list_by_date(date).await
    }

    /// Every booking, newest booked date first
    pub async fn list_all(&self) -> Vec<Booking> {
        let mut bookings = self.repository.bookings_list().await;
        // stable: ties keep insertion order
        bookings.sort_by(|a, b| b.booked_date.cmp(&a.booked_date));
        bookings
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<Booking> {
        self.repository
            .bookings_get_by_id(id)
            .await
            .ok_or_else(|| AppError::NotFound(format!("Booking {} not found", id)))
    }

    /// Validate and create a booking, marking its device borrowed
    pub async fn create(&self, request: CreateBooking) -> AppResult<Booking> {
        let mut errors = match request.validate() {
            Ok(()) => ValidationErrors::new(),
            Err(errors) => errors,
        };
        if request.quantity().is_some_and(|q| q > self.capacity) {
            let mut err = ValidationError::new("range");
            err.message = Some(format!("Quantity must be between 1 and {}", self.capacity).into());
            errors.add("quantity", err);
        }
        if !errors.is_empty() {
            return Err(errors.into());
        }

        let data = request.into_new_booking()?;

        let booking = self
            .repository
            .bookings_create_with_device(data, self.capacity)
            .await?;

        tracing::info!(
            booking_id = booking.id,
            period_id = booking.period_id,
            date = %booking.booked_date.date_naive(),
            quantity = booking.quantity,
            "Booking created"
        );
        Ok(booking)
    }

    /// Move a booking to `status`.
    ///
    /// Completing a booking returns its device to the pool. A completed
    /// booking cannot be reopened.
    pub async fn update_status(&self, id: i32, status: &str) -> AppResult<Booking> {
        let target: BookingStatus = status.parse()?;
        let current = self.get_by_id(id).await?;

        if current.status == target {
            return Ok(current);
        }

        match target {
            BookingStatus::Completed => {
                let booking = self.repository.bookings_complete(id).await?;
                tracing::info!(booking_id = id, device_id = booking.device_id, "Booking completed");
                Ok(booking)
            }
            BookingStatus::Active => Err(AppError::InvalidState(format!(
                "Booking {} is already completed",
                id
            ))),
        }
    }
}
