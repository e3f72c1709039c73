use std::sync::OnceLock;

use regex::Regex;
use thiserror::Error;

use crate::calendar::Event;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter date in DD/MM/YYYY format")]
    DateFormat,
    #[error("Please enter a description for the event")]
    EmptyText,
}

fn date_pattern() -> &'static Regex {
    static DATE_RE: OnceLock<Regex> = OnceLock::new();
    DATE_RE.get_or_init(|| Regex::new(r"^[0-9]{2}/[0-9]{2}/[0-9]{4}$").expect("invalid date regex"))
}

/// Checks form input before it may touch the store.
///
/// Only the shape of the date is checked. `31/02/2024` passes and later sorts
/// after every real date.
pub fn validate(date: &str, text: &str) -> Result<Event, ValidationError> {
    if !date_pattern().is_match(date) {
        return Err(ValidationError::DateFormat);
    }
    if text.trim().is_empty() {
        return Err(ValidationError::EmptyText);
    }
    Ok(Event::new(date, text))
}
