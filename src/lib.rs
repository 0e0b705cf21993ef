//! School device booking server
//!
//! Teachers reserve tablets from a shared pool for class periods on a given
//! date; administrators close bookings out. State is kept in memory for the
//! lifetime of the process and served as a REST JSON API.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}

impl AppState {
    /// Build a fresh store, seed it and wire the services
    pub async fn new(config: AppConfig) -> AppResult<Self> {
        let repository = repository::Repository::new();
        let services = services::Services::new(repository, &config).await?;
        Ok(Self {
            config: Arc::new(config),
            services: Arc::new(services),
        })
    }
}
