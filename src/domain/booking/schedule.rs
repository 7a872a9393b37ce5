//! Requested meeting slot: calendar date, 12-hour wall-clock time and
//! an optional IANA timezone.

use serde::{Deserialize, Serialize};

use super::BookingError;

/// Timezone applied when the caller does not supply one.
pub const DEFAULT_TIMEZONE: &str = "UTC";

/// A validated meeting slot.
///
/// Construction parses the 12-hour time strictly (`H:MM AM|PM`, hour
/// 1-12); anything else is rejected without partial parsing. The
/// original 12-hour string is kept verbatim for display alongside the
/// derived 24-hour form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    date: String,
    time: String,
    time_24h: String,
    timezone: Option<String>,
}

impl Schedule {
    /// Validates and builds a slot from user input.
    pub fn new(
        date: impl Into<String>,
        time: impl Into<String>,
        timezone: Option<String>,
    ) -> Result<Self, BookingError> {
        let date = date.into();
        let time = time.into();
        if date.trim().is_empty() {
            return Err(BookingError::missing_field("date"));
        }
        let time_24h = to_24_hour(&time).ok_or_else(|| BookingError::invalid_time(&time))?;
        Ok(Self {
            date,
            time,
            time_24h,
            timezone: timezone.filter(|tz| !tz.is_empty()),
        })
    }

    /// The calendar date as supplied, `YYYY-MM-DD`.
    pub fn date(&self) -> &str {
        &self.date
    }

    /// The original 12-hour time string, e.g. `"02:00 PM"`.
    pub fn time(&self) -> &str {
        &self.time
    }

    /// The derived 24-hour time, e.g. `"14:00"`.
    pub fn time_24h(&self) -> &str {
        &self.time_24h
    }

    /// The effective timezone, defaulting to UTC.
    pub fn timezone(&self) -> &str {
        self.timezone.as_deref().unwrap_or(DEFAULT_TIMEZONE)
    }

    /// The timezone exactly as supplied, if any.
    pub fn timezone_raw(&self) -> Option<&str> {
        self.timezone.as_deref()
    }

    /// Combined local date-time sent to the meeting provider,
    /// `"{date}T{HH:MM}:00"`.
    pub fn start_time(&self) -> String {
        format!("{}T{}:00", self.date, self.time_24h)
    }

    /// Human-readable form used in the confirmation email,
    /// `"{date} at {time}"`.
    pub fn display_time(&self) -> String {
        format!("{} at {}", self.date, self.time)
    }
}

/// Converts a strict `H:MM AM|PM` string to `HH:MM`.
///
/// 12 AM maps to hour 0, 12 PM stays 12, any other PM hour adds 12.
/// Returns `None` for anything that does not match exactly: missing or
/// long minutes, hour outside 1-12, minute above 59, trailing garbage.
fn to_24_hour(input: &str) -> Option<String> {
    let s = input.trim();
    if !s.is_ascii() {
        return None;
    }
    let (clock, period) = s.split_at(s.len().checked_sub(2)?);
    let is_pm = match () {
        _ if period.eq_ignore_ascii_case("PM") => true,
        _ if period.eq_ignore_ascii_case("AM") => false,
        _ => return None,
    };

    // "H:MM" or "HH:MM", then only whitespace before the period marker.
    let clock = clock.trim_end();
    let (hour_str, minute_str) = clock.split_once(':')?;
    if hour_str.is_empty()
        || hour_str.len() > 2
        || !hour_str.bytes().all(|b| b.is_ascii_digit())
    {
        return None;
    }
    if minute_str.len() != 2 || !minute_str.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let hour: u32 = hour_str.parse().ok()?;
    let minute: u32 = minute_str.parse().ok()?;
    if !(1..=12).contains(&hour) || minute > 59 {
        return None;
    }

    let hour = match (hour, is_pm) {
        (12, false) => 0,
        (12, true) => 12,
        (h, true) => h + 12,
        (h, false) => h,
    };

    Some(format!("{:02}:{}", hour, minute_str))
}
