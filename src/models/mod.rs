//! Data models for the booking server

pub mod availability;
pub mod booking;
pub mod device;
pub mod period;
pub mod stats;
pub mod user;

// Re-export commonly used types
pub use availability::PeriodAvailability;
pub use booking::{Booking, BookingStatus, CreateBooking, NewBooking};
pub use device::{Device, DeviceStatus, NewDevice};
pub use period::{NewPeriod, Period};
pub use stats::{DashboardStats, DeviceStatusCounts, PeriodUsage};
pub use user::{NewUser, User, UserClaims};
