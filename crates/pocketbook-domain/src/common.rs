//! Amount trait, date helpers, and validation errors for record types.

use chrono::NaiveDate;
use thiserror::Error;

/// Calendar date layout used on disk and at the prompt.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Supplies a common contract for retrieving numeric amounts.
pub trait Amounted {
    fn amount(&self) -> f64;
}

/// Field-level failures raised when a record would violate its invariants.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("amount must be a positive number, got {0}")]
    NonPositiveAmount(f64),
    #[error("category must not be empty")]
    EmptyCategory,
    #[error("invalid date `{0}`, expected YYYY-MM-DD")]
    InvalidDate(String),
}

/// Parses a strict `YYYY-MM-DD` date.
pub fn parse_iso_date(raw: &str) -> Result<NaiveDate, ValidationError> {
    let trimmed = raw.trim();
    // chrono accepts unpadded fields; the stored layout is always zero-padded.
    if trimmed.len() != 10 {
        return Err(ValidationError::InvalidDate(trimmed.to_string()));
    }
    NaiveDate::parse_from_str(trimmed, DATE_FORMAT)
        .map_err(|_| ValidationError::InvalidDate(trimmed.to_string()))
}
