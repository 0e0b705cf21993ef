//! OpenAPI documentation

use axum::Router;
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{auth, availability, bookings, devices, health, stats};

struct BearerAuth;

impl Modify for BearerAuth {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Device Booking API",
        version = "1.0.0",
        description = "Class-period reservations over the school tablet pool"
    ),
    servers(
        (url = "/api", description = "API")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Auth
        auth::login,
        auth::me,
        // Devices
        devices::list_devices,
        devices::list_periods,
        // Bookings
        availability::get_day_availability,
        bookings::list_bookings_for_date,
        bookings::list_all_bookings,
        bookings::create_booking,
        bookings::update_booking_status,
        // Stats
        stats::get_dashboard,
    ),
    components(
        schemas(
            // Auth
            crate::services::auth::LoginRequest,
            auth::LoginResponse,
            auth::UserInfo,
            // Devices
            crate::models::device::Device,
            crate::models::device::DeviceStatus,
            crate::models::period::Period,
            // Bookings
            crate::models::booking::Booking,
            crate::models::booking::BookingStatus,
            crate::models::booking::CreateBooking,
            crate::models::booking::UpdateBookingStatus,
            crate::models::availability::PeriodAvailability,
            // Stats
            crate::models::stats::DashboardStats,
            crate::models::stats::PeriodUsage,
            crate::models::stats::DeviceStatusCounts,
            // Health
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
            crate::error::FieldError,
        )
    ),
    modifiers(&BearerAuth),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "auth", description = "Authentication endpoints"),
        (name = "devices", description = "Device pool and class periods"),
        (name = "bookings", description = "Bookings and availability"),
        (name = "stats", description = "Dashboard statistics")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
