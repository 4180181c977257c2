//! Date and time-of-day helpers
//!
//! Records store times of day as `HH:MM` strings and dates as ISO `YYYY-MM-DD`.

use chrono::{NaiveDate, NaiveTime, Timelike};

use crate::error::{WellnessError, WellnessResult};

/// Parse a time of day given as `HH:MM` (or `HH:MM:SS`)
pub fn parse_time(value: &str) -> WellnessResult<NaiveTime> {
    let trimmed = value.trim();
    NaiveTime::parse_from_str(trimmed, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(trimmed, "%H:%M:%S"))
        .map_err(|_| {
            WellnessError::validation(format!("Invalid time '{}': expected HH:MM", value))
        })
}

/// Parse an optional time of day, treating blank input as absent
pub fn parse_optional_time(value: Option<&str>) -> WellnessResult<Option<NaiveTime>> {
    match value.map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => parse_time(s).map(Some),
    }
}

/// Parse an ISO calendar date
pub fn parse_date(value: &str) -> WellnessResult<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| {
        WellnessError::validation(format!("Invalid date '{}': expected YYYY-MM-DD", value))
    })
}

/// `YYYY-MM-DD`, zero-padded
pub fn iso_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// 12-hour display form, e.g. `7:05 PM`
pub fn format_time_12h(time: NaiveTime) -> String {
    let (pm, hour) = time.hour12();
    format!("{}:{:02} {}", hour, time.minute(), if pm { "PM" } else { "AM" })
}

/// Serde adapter for a required `HH:MM` time
pub mod hhmm {
    use chrono::NaiveTime;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&time.format("%H:%M").to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        super::parse_time(&raw).map_err(de::Error::custom)
    }
}

/// Serde adapter for an optional `HH:MM` time; `""` and `null` read as `None`
pub mod hhmm_option {
    use chrono::NaiveTime;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        time: &Option<NaiveTime>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match time {
            Some(t) => serializer.serialize_str(&t.format("%H:%M").to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<NaiveTime>, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        super::parse_optional_time(raw.as_deref()).map_err(de::Error::custom)
    }
}
