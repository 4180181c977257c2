//! Personal care checklist model

use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::record::Record;
use crate::error::WellnessError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CareFrequency {
    Daily,
    Weekly,
    Monthly,
    AsNeeded,
}

impl CareFrequency {
    pub fn as_str(&self) -> &'static str {
        match self {
            CareFrequency::Daily => "daily",
            CareFrequency::Weekly => "weekly",
            CareFrequency::Monthly => "monthly",
            CareFrequency::AsNeeded => "as-needed",
        }
    }
}

impl FromStr for CareFrequency {
    type Err = WellnessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "daily" => Ok(CareFrequency::Daily),
            "weekly" => Ok(CareFrequency::Weekly),
            "monthly" => Ok(CareFrequency::Monthly),
            "as-needed" | "as needed" | "as_needed" => Ok(CareFrequency::AsNeeded),
            other => Err(WellnessError::invalid_argument(format!(
                "unknown care frequency '{}'",
                other
            ))),
        }
    }
}

/// A personal care checklist item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CareItem {
    pub id: i64,
    pub name: String,
    pub frequency: CareFrequency,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub completed: bool,
    pub created_at: DateTime<Utc>,
}

impl Record for CareItem {
    const KIND: &'static str = "Care item";

    fn id(&self) -> i64 {
        self.id
    }
}
