use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use std::fmt;

/// A train date that could not be turned into a calendar day
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateError {
    pub raw: String,
}

impl fmt::Display for DateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unrecognised train date '{}'", self.raw)
    }
}

impl std::error::Error for DateError {}

/// The current calendar day in the viewer's local time zone
#[must_use]
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Resolve the date a train runs on.
///
/// Search results carry `DD-MM-YYYY`, which is read day-first. Anything else
/// (ISO dates, full timestamps) goes through [`parse_calendar_date`]. A missing
/// date means the train runs `today`.
///
/// # Errors
///
/// Returns [`DateError`] when the string is present but matches no known format.
pub fn parse_train_date(raw: Option<&str>, today: NaiveDate) -> Result<NaiveDate, DateError> {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return Ok(today);
    };

    let parts: Vec<&str> = raw.split('-').collect();
    // A four digit leading part is already year-first (ISO), not DD-MM-YYYY
    if let [day, month, year] = parts.as_slice() {
        if day.len() != 4 {
            return NaiveDate::parse_from_str(&format!("{year}-{month}-{day}"), "%Y-%m-%d")
                .map_err(|_| DateError { raw: raw.to_string() });
        }
    }

    parse_calendar_date(raw).ok_or_else(|| DateError { raw: raw.to_string() })
}

/// Reduce an ISO date or timestamp to the calendar day it names.
///
/// Timestamps with an offset keep the day as written in that offset, so
/// `2024-03-05T00:00:00Z` and `2024-03-05T23:30:00+05:30` are both the 5th.
#[must_use]
pub fn parse_calendar_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|dt| dt.date())
}

/// Format a calendar day the way the backend stores travel dates
/// (UTC midnight, millisecond precision, e.g. `2024-03-05T00:00:00.000Z`)
#[must_use]
pub fn to_iso_midnight(date: NaiveDate) -> String {
    date.and_time(NaiveTime::MIN)
        .and_utc()
        .format("%Y-%m-%dT%H:%M:%S%.3fZ")
        .to_string()
}

/// Format a journey length given in minutes as `"{h}h {m}m"`
#[must_use]
pub fn format_duration(minutes: Option<u32>) -> String {
    match minutes {
        Some(total) if total > 0 => format!("{}h {}m", total / 60, total % 60),
        _ => "N/A".to_string(),
    }
}
