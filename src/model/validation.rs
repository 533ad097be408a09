use chrono::NaiveDate;
use thiserror::Error;

/// Text format used to enter and display trip dates (e.g. `16/02/2026`).
pub const DATE_FORMAT: &str = "%d/%m/%Y";

/// Validation errors for domain model fields.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("city name cannot be empty")]
    EmptyCityName,
    #[error("invalid date (expected dd/mm/yyyy): {0}")]
    InvalidDate(String),
    #[error("invalid country code: {0}")]
    InvalidCountryCode(String),
    #[error("latitude out of range: {0}")]
    InvalidLatitude(String),
    #[error("longitude out of range: {0}")]
    InvalidLongitude(String),
}

/// Validates a city name: must contain something other than whitespace.
pub fn validate_city_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        Err(ValidationError::EmptyCityName)
    } else {
        Ok(())
    }
}

/// Parses a trip date in `dd/mm/yyyy` form. Surrounding whitespace is ignored.
pub fn parse_trip_date(text: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(text.trim(), DATE_FORMAT)
        .map_err(|_| ValidationError::InvalidDate(text.to_string()))
}

/// Formats a date the way [`parse_trip_date`] reads it.
pub fn format_trip_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}
