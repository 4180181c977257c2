//! Meal log model
//!
//! Meals are appended when logged and removed on delete; they are never edited.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use super::clock;
use super::record::Record;
use crate::error::WellnessError;

/// Meal type enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

impl MealType {
    pub const ALL: [MealType; 4] = [
        MealType::Breakfast,
        MealType::Lunch,
        MealType::Dinner,
        MealType::Snack,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MealType::Breakfast => "breakfast",
            MealType::Lunch => "lunch",
            MealType::Dinner => "dinner",
            MealType::Snack => "snack",
        }
    }
}

impl FromStr for MealType {
    type Err = WellnessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "breakfast" => Ok(MealType::Breakfast),
            "lunch" => Ok(MealType::Lunch),
            "dinner" => Ok(MealType::Dinner),
            "snack" => Ok(MealType::Snack),
            other => Err(WellnessError::invalid_argument(format!(
                "unknown meal type '{}' (expected breakfast, lunch, dinner or snack)",
                other
            ))),
        }
    }
}

/// Portion size used to scale calorie lookups
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Portion {
    Small,
    Medium,
    Large,
}

impl Portion {
    pub fn as_str(&self) -> &'static str {
        match self {
            Portion::Small => "small",
            Portion::Medium => "medium",
            Portion::Large => "large",
        }
    }
}

impl fmt::Display for Portion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Portion {
    type Err = WellnessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "small" => Ok(Portion::Small),
            "medium" => Ok(Portion::Medium),
            "large" => Ok(Portion::Large),
            other => Err(WellnessError::invalid_argument(format!(
                "unknown portion '{}' (expected small, medium or large)",
                other
            ))),
        }
    }
}

/// A logged meal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealLogEntry {
    pub id: i64,
    #[serde(rename = "type")]
    pub meal_type: MealType,
    #[serde(with = "clock::hhmm")]
    pub time: NaiveTime,
    pub description: String,
    pub portion: Portion,
    pub calories: u32,
    #[serde(default)]
    pub notes: Option<String>,
    pub date: NaiveDate,
    pub timestamp: DateTime<Utc>,
}

impl Record for MealLogEntry {
    const KIND: &'static str = "Meal entry";

    fn id(&self) -> i64 {
        self.id
    }
}

/// Data for logging a meal
#[derive(Debug, Clone)]
pub struct MealLogCreate {
    pub date: NaiveDate,
    pub meal_type: MealType,
    pub time: NaiveTime,
    pub description: String,
    pub portion: Portion,
    /// Calories typed by the user; zero or absent means "estimate"
    pub manual_calories: Option<u32>,
    pub notes: Option<String>,
}

/// One filled water glass on one day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaterGlass {
    pub glass: u8,
    pub date: NaiveDate,
    pub timestamp: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_portion_parse() {
        assert_eq!("Medium".parse::<Portion>().unwrap(), Portion::Medium);
        let err = "huge".parse::<Portion>().unwrap_err();
        assert!(matches!(err, WellnessError::InvalidArgument(_)));
    }

    #[test]
    fn test_meal_entry_json_shape() {
        let json = r#"{
            "id": 1704100000000,
            "type": "lunch",
            "time": "12:30",
            "description": "chicken rice",
            "portion": "medium",
            "calories": 600,
            "notes": "",
            "date": "2024-01-01",
            "timestamp": "2024-01-01T04:30:00.000Z"
        }"#;
        let entry: MealLogEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.meal_type, MealType::Lunch);
        assert_eq!(entry.time, NaiveTime::from_hms_opt(12, 30, 0).unwrap());

        let value = serde_json::to_value(&entry).unwrap();
        assert_eq!(value["type"], "lunch");
        assert_eq!(value["time"], "12:30");
        assert_eq!(value["date"], "2024-01-01");
    }
}
