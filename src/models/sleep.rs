//! Sleep entry model
//!
//! One entry per night, keyed by the date the sleep is logged for.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use super::clock;
use super::record::Record;

pub const MIN_SLEEP_HOURS: f64 = 0.0;
pub const MAX_SLEEP_HOURS: f64 = 24.0;
pub const DEFAULT_SLEEP_GOAL: f64 = 8.0;
pub const MIN_SLEEP_GOAL: f64 = 4.0;
pub const MAX_SLEEP_GOAL: f64 = 12.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SleepEntry {
    pub id: i64,
    pub date: NaiveDate,
    pub hours: f64,
    #[serde(default, with = "clock::hhmm_option")]
    pub bedtime: Option<NaiveTime>,
    #[serde(default, with = "clock::hhmm_option")]
    pub wake_time: Option<NaiveTime>,
    /// 1 (very poor) to 5 (excellent)
    pub quality: u8,
    #[serde(default)]
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl SleepEntry {
    pub fn quality_label(&self) -> &'static str {
        quality_label(self.quality)
    }
}

impl Record for SleepEntry {
    const KIND: &'static str = "Sleep entry";

    fn id(&self) -> i64 {
        self.id
    }
}

/// Display label for a 1-5 quality score
pub fn quality_label(quality: u8) -> &'static str {
    match quality {
        1 => "Very Poor",
        2 => "Poor",
        3 => "Fair",
        4 => "Good",
        5 => "Excellent",
        _ => "Unknown",
    }
}

/// Data for logging a night of sleep
#[derive(Debug, Clone)]
pub struct SleepLog {
    pub date: NaiveDate,
    pub hours: f64,
    pub bedtime: Option<NaiveTime>,
    pub wake_time: Option<NaiveTime>,
    pub quality: u8,
    pub notes: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sleep_entry_camel_case() {
        let json = r#"{
            "id": 7,
            "date": "2024-05-01",
            "hours": 7.5,
            "bedtime": "23:00",
            "wakeTime": "06:30",
            "quality": 4,
            "notes": null,
            "createdAt": "2024-05-01T07:00:00Z"
        }"#;
        let entry: SleepEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.wake_time, Some(NaiveTime::from_hms_opt(6, 30, 0).unwrap()));
        assert_eq!(entry.quality_label(), "Good");
    }
}
