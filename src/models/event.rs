//! Calendar event model

use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use super::clock;
use super::record::Record;
use crate::error::WellnessError;

/// Event category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EventCategory {
    Exercise,
    Nutrition,
    Sleep,
    SelfCare,
    Social,
    Work,
    Other,
}

impl EventCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventCategory::Exercise => "exercise",
            EventCategory::Nutrition => "nutrition",
            EventCategory::Sleep => "sleep",
            EventCategory::SelfCare => "self-care",
            EventCategory::Social => "social",
            EventCategory::Work => "work",
            EventCategory::Other => "other",
        }
    }
}

impl FromStr for EventCategory {
    type Err = WellnessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "exercise" => Ok(EventCategory::Exercise),
            "nutrition" => Ok(EventCategory::Nutrition),
            "sleep" => Ok(EventCategory::Sleep),
            "self-care" | "selfcare" | "self_care" => Ok(EventCategory::SelfCare),
            "social" => Ok(EventCategory::Social),
            "work" => Ok(EventCategory::Work),
            "other" => Ok(EventCategory::Other),
            other => Err(WellnessError::invalid_argument(format!(
                "unknown event category '{}'",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }
}

impl FromStr for Priority {
    type Err = WellnessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "low" => Ok(Priority::Low),
            "medium" => Ok(Priority::Medium),
            "high" => Ok(Priority::High),
            other => Err(WellnessError::invalid_argument(format!(
                "unknown priority '{}' (expected low, medium or high)",
                other
            ))),
        }
    }
}

/// A scheduled event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEvent {
    pub id: i64,
    pub title: String,
    pub date: NaiveDate,
    #[serde(default, with = "clock::hhmm_option")]
    pub time: Option<NaiveTime>,
    #[serde(default)]
    pub description: Option<String>,
    pub category: EventCategory,
    pub priority: Priority,
    pub created_at: DateTime<Utc>,
}

impl CalendarEvent {
    /// Chronological sort key; untimed events sit at the start of their day
    pub fn start_key(&self) -> (NaiveDate, NaiveTime) {
        (self.date, self.time.unwrap_or(NaiveTime::MIN))
    }
}

impl Record for CalendarEvent {
    const KIND: &'static str = "Event";

    fn id(&self) -> i64 {
        self.id
    }
}

/// Raw event input as submitted by a caller.
///
/// `id` set means "edit this event"; fields are validated by `upsert_event`.
#[derive(Debug, Clone, Default)]
pub struct EventDraft {
    pub id: Option<i64>,
    pub title: String,
    pub date: String,
    pub time: Option<String>,
    pub description: Option<String>,
    pub category: String,
    pub priority: String,
}
