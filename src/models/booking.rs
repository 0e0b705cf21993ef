//! Booking model and related types

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use crate::error::{AppError, AppResult};

static PHONE_NUMBER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{10}$").unwrap());

/// Booking lifecycle: `active` until closed out, then `completed`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Active,
    Completed,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Active => "active",
            BookingStatus::Completed => "completed",
        }
    }
}

impl std::fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for BookingStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(BookingStatus::Active),
            "completed" => Ok(BookingStatus::Completed),
            other => Err(AppError::InvalidState(format!("Invalid booking status: {}", other))),
        }
    }
}

/// Booking record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: i32,
    pub device_id: i32,
    pub period_id: i32,
    pub booked_date: DateTime<Utc>,
    pub borrower_name: String,
    pub phone_number: String,
    pub purpose: String,
    /// Number of devices reserved from the pool
    pub quantity: i32,
    pub status: BookingStatus,
}

impl Booking {
    /// Whether this booking falls on the given calendar day (UTC)
    pub fn is_on(&self, date: NaiveDate) -> bool {
        self.booked_date.date_naive() == date
    }

    /// Whether this booking currently holds devices for the period and day
    pub fn occupies(&self, period_id: i32, date: NaiveDate) -> bool {
        self.status == BookingStatus::Active && self.period_id == period_id && self.is_on(date)
    }
}

/// Validated booking fields before an id is assigned
#[derive(Debug, Clone)]
pub struct NewBooking {
    pub device_id: i32,
    pub period_id: i32,
    pub booked_date: DateTime<Utc>,
    pub borrower_name: String,
    pub phone_number: String,
    pub purpose: String,
    pub quantity: i32,
}

/// Create booking request.
///
/// Fields are kept as raw JSON values so that a missing or mistyped field is
/// reported by `validate()` together with every other failing field.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateBooking {
    #[schema(value_type = i32)]
    #[validate(
        required(message = "Device is required"),
        custom(function = "validate_id")
    )]
    pub device_id: Option<Value>,
    #[schema(value_type = i32)]
    #[validate(
        required(message = "Period is required"),
        custom(function = "validate_id")
    )]
    pub period_id: Option<Value>,
    /// `YYYY-MM-DD` or an RFC 3339 timestamp
    #[schema(value_type = String)]
    #[validate(
        required(message = "Booked date is required"),
        custom(function = "validate_booked_date")
    )]
    pub booked_date: Option<Value>,
    #[schema(value_type = String)]
    #[validate(
        required(message = "Borrower name is required"),
        custom(function = "validate_borrower_name")
    )]
    pub borrower_name: Option<Value>,
    #[schema(value_type = String)]
    #[validate(
        required(message = "Phone number is required"),
        custom(function = "validate_phone_number")
    )]
    pub phone_number: Option<Value>,
    #[schema(value_type = Option<String>)]
    #[validate(custom(function = "validate_purpose"))]
    pub purpose: Option<Value>,
    /// At least 1 and at most the pool capacity
    #[schema(value_type = i32)]
    #[validate(
        required(message = "Quantity is required"),
        custom(function = "validate_quantity")
    )]
    pub quantity: Option<Value>,
}

impl CreateBooking {
    /// Requested quantity, if it is an integer
    pub fn quantity(&self) -> Option<i32> {
        self.quantity.as_ref().and_then(as_i32)
    }

    /// Convert a request that already passed `validate()`
    pub fn into_new_booking(self) -> AppResult<NewBooking> {
        let booked_date = parse_booked_date(required_str(&self.booked_date, "bookedDate")?)?;
        Ok(NewBooking {
            device_id: required_i32(&self.device_id, "deviceId")?,
            period_id: required_i32(&self.period_id, "periodId")?,
            booked_date,
            borrower_name: required_str(&self.borrower_name, "borrowerName")?
                .trim()
                .to_string(),
            phone_number: required_str(&self.phone_number, "phoneNumber")?.to_string(),
            purpose: self
                .purpose
                .as_ref()
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string(),
            quantity: required_i32(&self.quantity, "quantity")?,
        })
    }
}

fn as_i32(value: &Value) -> Option<i32> {
    value.as_i64().and_then(|v| i32::try_from(v).ok())
}

fn required_i32(value: &Option<Value>, field: &str) -> AppResult<i32> {
    value
        .as_ref()
        .and_then(as_i32)
        .ok_or_else(|| AppError::BadRequest(format!("{} must be an integer", field)))
}

fn required_str<'a>(value: &'a Option<Value>, field: &str) -> AppResult<&'a str> {
    value
        .as_ref()
        .and_then(Value::as_str)
        .ok_or_else(|| AppError::BadRequest(format!("{} must be a string", field)))
}

/// Update booking status request
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpdateBookingStatus {
    /// `active` or `completed`
    pub status: String,
}

/// Parse a booking date, either a bare `YYYY-MM-DD` (midnight UTC) or RFC 3339
pub fn parse_booked_date(value: &str) -> AppResult<DateTime<Utc>> {
    let value = value.trim();
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Ok(date.and_time(NaiveTime::MIN).and_utc());
    }
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| AppError::BadRequest(format!("Invalid date: {}", value)))
}

/// Calendar day of a date path parameter
pub fn parse_calendar_day(value: &str) -> AppResult<NaiveDate> {
    parse_booked_date(value).map(|dt| dt.date_naive())
}

fn field_error(code: &'static str, message: &'static str) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(message.into());
    err
}

fn expect_str<'a>(value: &'a Value, message: &'static str) -> Result<&'a str, ValidationError> {
    value.as_str().ok_or_else(|| field_error("type", message))
}

fn validate_id(value: &Value) -> Result<(), ValidationError> {
    as_i32(value)
        .map(|_| ())
        .ok_or_else(|| field_error("type", "Must be an integer id"))
}

fn validate_booked_date(value: &Value) -> Result<(), ValidationError> {
    let value = expect_str(value, "Date must be a string")?;
    parse_booked_date(value)
        .map(|_| ())
        .map_err(|_| field_error("date", "Date must be YYYY-MM-DD or an RFC 3339 timestamp"))
}

fn validate_borrower_name(value: &Value) -> Result<(), ValidationError> {
    let value = expect_str(value, "Borrower name must be a string")?;
    if value.trim().is_empty() {
        return Err(field_error("required", "Borrower name is required"));
    }
    Ok(())
}

fn validate_phone_number(value: &Value) -> Result<(), ValidationError> {
    let value = expect_str(value, "Phone number must be a string")?;
    if !PHONE_NUMBER_RE.is_match(value) {
        return Err(field_error("regex", "Phone number must have exactly 10 digits"));
    }
    Ok(())
}

fn validate_purpose(value: &Value) -> Result<(), ValidationError> {
    expect_str(value, "Purpose must be a string").map(|_| ())
}

fn validate_quantity(value: &Value) -> Result<(), ValidationError> {
    match as_i32(value) {
        Some(quantity) if quantity >= 1 => Ok(()),
        Some(_) => Err(field_error("range", "Quantity must be at least 1")),
        None => Err(field_error("type", "Quantity must be an integer")),
    }
}
