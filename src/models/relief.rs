//! Stress-relief activity model

use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use super::record::Record;
use crate::error::WellnessError;

pub const MAX_RATING: u8 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReliefCategory {
    Physical,
    Creative,
    Mindfulness,
    Social,
    Relaxation,
    Other,
}

impl ReliefCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReliefCategory::Physical => "physical",
            ReliefCategory::Creative => "creative",
            ReliefCategory::Mindfulness => "mindfulness",
            ReliefCategory::Social => "social",
            ReliefCategory::Relaxation => "relaxation",
            ReliefCategory::Other => "other",
        }
    }
}

impl FromStr for ReliefCategory {
    type Err = WellnessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "physical" => Ok(ReliefCategory::Physical),
            "creative" => Ok(ReliefCategory::Creative),
            "mindfulness" => Ok(ReliefCategory::Mindfulness),
            "social" => Ok(ReliefCategory::Social),
            "relaxation" => Ok(ReliefCategory::Relaxation),
            "other" => Ok(ReliefCategory::Other),
            other => Err(WellnessError::invalid_argument(format!(
                "unknown activity category '{}'",
                other
            ))),
        }
    }
}

/// A stress-relief activity the user returns to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReliefActivity {
    pub id: i64,
    pub name: String,
    pub category: ReliefCategory,
    #[serde(default)]
    pub description: Option<String>,
    /// Free text such as "15 minutes"
    #[serde(default)]
    pub duration: Option<String>,
    /// 0 means unrated
    #[serde(default, deserialize_with = "rating_from_number_or_string")]
    pub rating: u8,
    #[serde(default)]
    pub used_today: bool,
    pub created_at: DateTime<Utc>,
}

impl Record for ReliefActivity {
    const KIND: &'static str = "Activity";

    fn id(&self) -> i64 {
        self.id
    }
}

/// Data for creating or replacing an activity
#[derive(Debug, Clone)]
pub struct ActivityInput {
    pub name: String,
    pub category: ReliefCategory,
    pub description: Option<String>,
    pub duration: Option<String>,
    pub rating: Option<u8>,
}

/// Older exports wrote the rating as a string ("3")
fn rating_from_number_or_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u8, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(u8),
        Text(String),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Number(n) => Ok(n),
        Raw::Text(s) if s.trim().is_empty() => Ok(0),
        Raw::Text(s) => s.trim().parse().map_err(serde::de::Error::custom),
    }
}
