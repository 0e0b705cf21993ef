//! Business logic services

pub mod auth;
pub mod availability;
pub mod bookings;
pub mod devices;
pub mod stats;

use crate::{config::AppConfig, error::AppResult, repository::Repository};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub auth: auth::AuthService,
    pub availability: availability::AvailabilityService,
    pub bookings: bookings::BookingsService,
    pub devices: devices::DevicesService,
    pub stats: stats::StatsService,
}

impl Services {
    /// Create all services over the given repository and seed the initial data
    pub async fn new(repository: Repository, config: &AppConfig) -> AppResult<Self> {
        let capacity = config.pool.capacity;
        let services = Self {
            auth: auth::AuthService::new(repository.clone(), config.auth.clone()),
            availability: availability::AvailabilityService::new(repository.clone(), capacity),
            bookings: bookings::BookingsService::new(repository.clone(), capacity),
            devices: devices::DevicesService::new(repository.clone()),
            stats: stats::StatsService::new(repository, capacity),
        };

        services.devices.seed(capacity).await;
        services.auth.ensure_admin().await?;

        Ok(services)
    }
}
