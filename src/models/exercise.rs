//! Exercise routine model
//!
//! A routine is a recurring weekly workout slot.

use std::str::FromStr;

use chrono::{DateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use super::clock;
use super::record::Record;
use crate::error::WellnessError;

/// Day of the week a routine recurs on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayOfWeek {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl DayOfWeek {
    /// Monday-first, the order the weekly schedule is shown in
    pub const ALL: [DayOfWeek; 7] = [
        DayOfWeek::Monday,
        DayOfWeek::Tuesday,
        DayOfWeek::Wednesday,
        DayOfWeek::Thursday,
        DayOfWeek::Friday,
        DayOfWeek::Saturday,
        DayOfWeek::Sunday,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DayOfWeek::Monday => "monday",
            DayOfWeek::Tuesday => "tuesday",
            DayOfWeek::Wednesday => "wednesday",
            DayOfWeek::Thursday => "thursday",
            DayOfWeek::Friday => "friday",
            DayOfWeek::Saturday => "saturday",
            DayOfWeek::Sunday => "sunday",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            DayOfWeek::Monday => "Monday",
            DayOfWeek::Tuesday => "Tuesday",
            DayOfWeek::Wednesday => "Wednesday",
            DayOfWeek::Thursday => "Thursday",
            DayOfWeek::Friday => "Friday",
            DayOfWeek::Saturday => "Saturday",
            DayOfWeek::Sunday => "Sunday",
        }
    }
}

impl From<chrono::Weekday> for DayOfWeek {
    fn from(day: chrono::Weekday) -> Self {
        DayOfWeek::ALL[day.num_days_from_monday() as usize]
    }
}

impl FromStr for DayOfWeek {
    type Err = WellnessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        DayOfWeek::ALL
            .iter()
            .copied()
            .find(|d| d.as_str() == lower || d.as_str()[..3] == lower)
            .ok_or_else(|| WellnessError::invalid_argument(format!("unknown day '{}'", s)))
    }
}

/// Exercise type enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExerciseType {
    Cardio,
    Strength,
    Flexibility,
    Sports,
    Other,
}

impl ExerciseType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExerciseType::Cardio => "cardio",
            ExerciseType::Strength => "strength",
            ExerciseType::Flexibility => "flexibility",
            ExerciseType::Sports => "sports",
            ExerciseType::Other => "other",
        }
    }
}

impl FromStr for ExerciseType {
    type Err = WellnessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "cardio" => Ok(ExerciseType::Cardio),
            "strength" => Ok(ExerciseType::Strength),
            "flexibility" => Ok(ExerciseType::Flexibility),
            "sports" | "sport" => Ok(ExerciseType::Sports),
            "other" => Ok(ExerciseType::Other),
            other => Err(WellnessError::invalid_argument(format!(
                "unknown exercise type '{}'",
                other
            ))),
        }
    }
}

/// A weekly exercise routine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseRoutine {
    pub id: i64,
    pub name: String,
    pub day: DayOfWeek,
    #[serde(with = "clock::hhmm")]
    pub time: NaiveTime,
    /// Minutes
    pub duration: u32,
    #[serde(rename = "type")]
    pub exercise_type: ExerciseType,
    pub description: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub reminder: bool,
    #[serde(default)]
    pub completed: bool,
    pub created_at: DateTime<Utc>,
}

impl Record for ExerciseRoutine {
    const KIND: &'static str = "Exercise routine";

    fn id(&self) -> i64 {
        self.id
    }
}

/// Data for creating or replacing a routine
#[derive(Debug, Clone)]
pub struct RoutineInput {
    pub name: String,
    pub day: DayOfWeek,
    pub time: NaiveTime,
    pub duration: u32,
    pub exercise_type: ExerciseType,
    pub description: String,
    pub location: Option<String>,
    pub reminder: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_parse_short_and_long() {
        assert_eq!("Wed".parse::<DayOfWeek>().unwrap(), DayOfWeek::Wednesday);
        assert_eq!("sunday".parse::<DayOfWeek>().unwrap(), DayOfWeek::Sunday);
        assert!("someday".parse::<DayOfWeek>().is_err());
    }

    #[test]
    fn test_from_chrono_weekday() {
        assert_eq!(DayOfWeek::from(chrono::Weekday::Mon), DayOfWeek::Monday);
        assert_eq!(DayOfWeek::from(chrono::Weekday::Sun), DayOfWeek::Sunday);
    }
}
