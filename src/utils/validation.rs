use chrono::NaiveDate;
use validator::{Validate, ValidationError};
use crate::errors::AppError;

/// Storage format for birth dates.
pub const BIRTH_DATE_FORMAT: &str = "%Y-%m-%d";

pub fn validate_payload<T: Validate>(payload: &T) -> Result<(), AppError> {
    payload.validate()
        .map_err(AppError::from)
}

pub fn validate_birth_date(birth_date: &str) -> Result<(), ValidationError> {
    if NaiveDate::parse_from_str(birth_date, BIRTH_DATE_FORMAT).is_err() {
        return Err(ValidationError::new("Birth date must be a valid YYYY-MM-DD date"));
    }
    Ok(())
}
