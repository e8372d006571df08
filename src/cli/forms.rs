//! Parsing of raw prompt answers into typed values, plus a re-prompt loop.

use std::io::Write;

use chrono::NaiveDate;
use pocketbook_domain::{parse_iso_date, ValidationError};
use thiserror::Error;

use crate::cli::io::LineSource;
use crate::cli::output::Output;
use crate::errors::Result;

/// Rejections raised while interpreting user input. All are recovered by re-prompting.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    #[error("`{0}` is not a number")]
    NotANumber(String),
    #[error("`{0}` is not a whole number")]
    NotAPosition(String),
    #[error("please answer y or n")]
    NotYesNo,
    #[error("{0}")]
    Invalid(#[from] ValidationError),
}

pub fn parse_amount(raw: &str) -> std::result::Result<f64, InputError> {
    let trimmed = raw.trim();
    let value: f64 = trimmed
        .parse()
        .map_err(|_| InputError::NotANumber(trimmed.to_string()))?;
    if !value.is_finite() || value <= 0.0 {
        return Err(ValidationError::NonPositiveAmount(value).into());
    }
    Ok(value)
}

pub fn parse_category(raw: &str) -> std::result::Result<String, InputError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyCategory.into());
    }
    Ok(trimmed.to_string())
}

pub fn parse_date(raw: &str) -> std::result::Result<NaiveDate, InputError> {
    Ok(parse_iso_date(raw)?)
}

/// Parses a 1-based list position. Range checks belong to the core operations.
pub fn parse_position(raw: &str) -> std::result::Result<usize, InputError> {
    let trimmed = raw.trim();
    trimmed
        .parse()
        .map_err(|_| InputError::NotAPosition(trimmed.to_string()))
}

pub fn parse_yes_no(raw: &str) -> std::result::Result<bool, InputError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" => Ok(true),
        "n" | "no" => Ok(false),
        _ => Err(InputError::NotYesNo),
    }
}

/// Asks until `parse` accepts the answer. Returns `None` once input is exhausted.
pub fn prompt_until<T, W, F>(
    input: &mut dyn LineSource,
    out: &mut Output<W>,
    prompt: &str,
    parse: F,
) -> Result<Option<T>>
where
    W: Write,
    F: Fn(&str) -> std::result::Result<T, InputError>,
{
    loop {
        let Some(raw) = input.read_line(prompt)? else {
            return Ok(None);
        };
        match parse(&raw) {
            Ok(value) => return Ok(Some(value)),
            Err(err) => {
                tracing::debug!(%err, "rejected input");
                out.warning(format!("Invalid input: {err}. Please try again."))?;
            }
        }
    }
}
