use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

pub const DATE_FORMAT: &str = "%d/%m/%Y";

/// A user-entered note pinned to a `DD/MM/YYYY` date.
///
/// The date is kept as the raw string the user typed. Grid lookups compare it
/// byte for byte, so `1/2/2024` never matches `01/02/2024`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    #[serde(default, deserialize_with = "lenient_string")]
    pub date: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub text: String,
}

impl Event {
    pub fn new(date: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            text: text.into(),
        }
    }

    /// Chronological value of `date`, or `None` when it is not a real
    /// `DD/MM/YYYY` calendar day.
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        parse_date_key(&self.date)
    }
}

pub fn date_key(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

pub fn parse_date_key(key: &str) -> Option<NaiveDate> {
    let mut parts = key.split('/');
    let day = parts.next()?.parse::<u32>().ok()?;
    let month = parts.next()?.parse::<u32>().ok()?;
    let year = parts.next()?.parse::<i32>().ok()?;
    if parts.next().is_some() {
        return None;
    }
    NaiveDate::from_ymd_opt(year, month, day)
}

// Stored payloads are not schema checked; scalars are kept as their text form.
fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Null => String::new(),
        serde_json::Value::String(s) => s,
        other => other.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn date_key_is_zero_padded() {
        assert_eq!(date_key(date(2024, 1, 3)), "03/01/2024");
    }

    #[test]
    fn parses_well_formed_key() {
        assert_eq!(parse_date_key("29/02/2024"), Some(date(2024, 2, 29)));
    }

    #[test]
    fn impossible_calendar_day_does_not_parse() {
        assert_eq!(parse_date_key("31/02/2024"), None);
        assert_eq!(parse_date_key("29/02/2023"), None);
    }

    #[test]
    fn iso_style_key_does_not_parse() {
        assert_eq!(parse_date_key("2024-01-01"), None);
        assert_eq!(parse_date_key("01/01/2024/extra"), None);
    }

    #[test]
    fn serializes_as_date_and_text_object() {
        let event = Event::new("01/01/2024", "New year");
        let json = serde_json::to_string(&event).unwrap();
        assert_eq!(json, r#"{"date":"01/01/2024","text":"New year"}"#);
    }

    #[test]
    fn missing_fields_deserialize_as_empty() {
        let event: Event = serde_json::from_str(r#"{"text":"orphan"}"#).unwrap();
        assert_eq!(event, Event::new("", "orphan"));
    }

    #[test]
    fn scalar_fields_are_stringified() {
        let event: Event = serde_json::from_str(r#"{"date":20240101,"text":null}"#).unwrap();
        assert_eq!(event, Event::new("20240101", ""));
        assert_eq!(event.parsed_date(), None);
    }
}
