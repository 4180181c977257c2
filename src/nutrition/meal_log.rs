//! Meal log operations
//!
//! Logging, deleting and summarizing meals, plus the daily calorie goal.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::Serialize;

use crate::error::{WellnessError, WellnessResult};
use crate::models::{
    next_id, optional_text, remove_by_id, required_text, MealLogCreate, MealLogEntry, MealType,
};

use super::estimator::estimate;

pub const DEFAULT_DAILY_GOAL: u32 = 2000;
pub const MIN_DAILY_GOAL: u32 = 1000;
pub const MAX_DAILY_GOAL: u32 = 5000;
/// Upper bound for a manually entered meal
pub const MAX_MEAL_CALORIES: u32 = 10_000;

/// Calorie totals for one day against the goal
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailySummary {
    pub date: NaiveDate,
    pub total_calories: u32,
    pub meal_count: usize,
    pub daily_goal: u32,
    /// Never negative; 0 once the goal is passed
    pub remaining: u32,
    /// Capped at 100
    pub progress_percent: u32,
    pub over_goal: bool,
}

/// One day's meals grouped by type
#[derive(Debug, Clone, Default, Serialize)]
pub struct MealsByType {
    pub breakfast: Vec<MealLogEntry>,
    pub lunch: Vec<MealLogEntry>,
    pub dinner: Vec<MealLogEntry>,
    pub snack: Vec<MealLogEntry>,
}

/// Total calories for one day of the history series
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayTotal {
    pub date: NaiveDate,
    pub weekday: String,
    pub total_calories: u32,
}

/// Append a meal, estimating calories unless a positive manual value is given
pub fn log_meal(
    meals: &mut Vec<MealLogEntry>,
    data: MealLogCreate,
    now: DateTime<Utc>,
) -> WellnessResult<MealLogEntry> {
    let description = required_text(&data.description, "Food description")?;

    let calories = match data.manual_calories {
        Some(kcal) if kcal > MAX_MEAL_CALORIES => {
            return Err(WellnessError::validation(format!(
                "Please enter at most {} calories for one meal",
                MAX_MEAL_CALORIES
            )));
        }
        Some(kcal) if kcal > 0 => kcal,
        _ => estimate(&description, data.portion),
    };

    let entry = MealLogEntry {
        id: next_id(meals, now),
        meal_type: data.meal_type,
        time: data.time,
        description,
        portion: data.portion,
        calories,
        notes: optional_text(data.notes),
        date: data.date,
        timestamp: now,
    };

    meals.push(entry.clone());
    Ok(entry)
}

pub fn delete_meal(meals: &mut Vec<MealLogEntry>, id: i64) -> WellnessResult<MealLogEntry> {
    remove_by_id(meals, id)
}

pub fn meals_on(meals: &[MealLogEntry], date: NaiveDate) -> impl Iterator<Item = &MealLogEntry> {
    meals.iter().filter(move |m| m.date == date)
}

/// Saturates at `u32::MAX`; stored data is not bound by the per-meal cap
pub fn total_calories_on(meals: &[MealLogEntry], date: NaiveDate) -> u32 {
    meals_on(meals, date).fold(0u32, |total, m| total.saturating_add(m.calories))
}

pub fn daily_summary(meals: &[MealLogEntry], date: NaiveDate, daily_goal: u32) -> DailySummary {
    let total_calories = total_calories_on(meals, date);
    let meal_count = meals_on(meals, date).count();

    let progress = if daily_goal == 0 {
        100.0
    } else {
        (f64::from(total_calories) / f64::from(daily_goal) * 100.0).min(100.0)
    };

    DailySummary {
        date,
        total_calories,
        meal_count,
        daily_goal,
        remaining: daily_goal.saturating_sub(total_calories),
        progress_percent: progress.round() as u32,
        over_goal: total_calories > daily_goal,
    }
}

/// Meals of `date`, bucketed by type in logging order
pub fn group_by_type(meals: &[MealLogEntry], date: NaiveDate) -> MealsByType {
    let mut grouped = MealsByType::default();
    for meal in meals_on(meals, date) {
        let bucket = match meal.meal_type {
            MealType::Breakfast => &mut grouped.breakfast,
            MealType::Lunch => &mut grouped.lunch,
            MealType::Dinner => &mut grouped.dinner,
            MealType::Snack => &mut grouped.snack,
        };
        bucket.push(meal.clone());
    }
    grouped
}

/// Per-day totals for the `days` days ending on `end`, oldest first
pub fn calorie_history(meals: &[MealLogEntry], end: NaiveDate, days: u32) -> Vec<DayTotal> {
    (0..days)
        .rev()
        .map(|offset| {
            let date = end - Duration::days(i64::from(offset));
            DayTotal {
                date,
                weekday: date.format("%a").to_string(),
                total_calories: total_calories_on(meals, date),
            }
        })
        .collect()
}

pub fn validate_daily_goal(goal: u32) -> WellnessResult<u32> {
    if !(MIN_DAILY_GOAL..=MAX_DAILY_GOAL).contains(&goal) {
        return Err(WellnessError::validation(format!(
            "Please enter a goal between {} and {} calories",
            MIN_DAILY_GOAL, MAX_DAILY_GOAL
        )));
    }
    Ok(goal)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Portion;
    use chrono::{NaiveTime, TimeZone};

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    fn create(date: NaiveDate, meal_type: MealType, description: &str, manual: Option<u32>) -> MealLogCreate {
        MealLogCreate {
            date,
            meal_type,
            time: NaiveTime::from_hms_opt(12, 0, 0).unwrap(),
            description: description.to_string(),
            portion: Portion::Medium,
            manual_calories: manual,
            notes: Some("  ".to_string()),
        }
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 5, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_log_meal_estimates_when_no_manual_value() {
        let mut meals = Vec::new();
        let entry = log_meal(&mut meals, create(day(5), MealType::Lunch, "plain rice", None), now()).unwrap();
        assert_eq!(entry.calories, 250);
        assert_eq!(entry.notes, None);
        assert_eq!(meals.len(), 1);
    }

    #[test]
    fn test_manual_calories_win_unless_zero() {
        let mut meals = Vec::new();
        let manual = log_meal(&mut meals, create(day(5), MealType::Dinner, "pizza", Some(812)), now()).unwrap();
        assert_eq!(manual.calories, 812);
        let zero = log_meal(&mut meals, create(day(5), MealType::Dinner, "pizza", Some(0)), now()).unwrap();
        assert_eq!(zero.calories, 300);
        assert_ne!(manual.id, zero.id);
    }

    #[test]
    fn test_blank_description_rejected() {
        let mut meals = Vec::new();
        let result = log_meal(&mut meals, create(day(5), MealType::Snack, "  ", None), now());
        assert!(matches!(result, Err(WellnessError::Validation(_))));
        assert!(meals.is_empty());
    }

    #[test]
    fn test_daily_summary_caps_progress() {
        let mut meals = Vec::new();
        log_meal(&mut meals, create(day(5), MealType::Lunch, "x", Some(1500)), now()).unwrap();
        log_meal(&mut meals, create(day(5), MealType::Dinner, "x", Some(900)), now()).unwrap();
        log_meal(&mut meals, create(day(4), MealType::Dinner, "x", Some(400)), now()).unwrap();

        let summary = daily_summary(&meals, day(5), 2000);
        assert_eq!(summary.total_calories, 2400);
        assert_eq!(summary.meal_count, 2);
        assert_eq!(summary.remaining, 0);
        assert_eq!(summary.progress_percent, 100);
        assert!(summary.over_goal);

        let yesterday = daily_summary(&meals, day(4), 2000);
        assert_eq!(yesterday.remaining, 1600);
        assert_eq!(yesterday.progress_percent, 20);
        assert!(!yesterday.over_goal);
    }

    #[test]
    fn test_group_by_type() {
        let mut meals = Vec::new();
        log_meal(&mut meals, create(day(5), MealType::Breakfast, "egg", None), now()).unwrap();
        log_meal(&mut meals, create(day(5), MealType::Snack, "apple", None), now()).unwrap();
        log_meal(&mut meals, create(day(6), MealType::Snack, "apple", None), now()).unwrap();

        let grouped = group_by_type(&meals, day(5));
        assert_eq!(grouped.breakfast.len(), 1);
        assert_eq!(grouped.snack.len(), 1);
        assert!(grouped.lunch.is_empty());
    }

    #[test]
    fn test_calorie_history_oldest_first() {
        let mut meals = Vec::new();
        log_meal(&mut meals, create(day(7), MealType::Lunch, "x", Some(700)), now()).unwrap();
        log_meal(&mut meals, create(day(1), MealType::Lunch, "x", Some(100)), now()).unwrap();

        let history = calorie_history(&meals, day(7), 7);
        assert_eq!(history.len(), 7);
        assert_eq!(history[0].date, day(1));
        assert_eq!(history[0].total_calories, 100);
        assert_eq!(history[6].date, day(7));
        assert_eq!(history[6].total_calories, 700);
        assert_eq!(history[6].weekday, "Sun");
    }

    #[test]
    fn test_delete_missing_meal() {
        let mut meals = Vec::new();
        log_meal(&mut meals, create(day(5), MealType::Lunch, "rice", None), now()).unwrap();
        assert!(matches!(delete_meal(&mut meals, 1), Err(WellnessError::NotFound { .. })));
        assert_eq!(meals.len(), 1);
    }

    #[test]
    fn test_manual_calories_capped() {
        let mut meals = Vec::new();
        let result = log_meal(&mut meals, create(day(5), MealType::Dinner, "feast", Some(3_000_000_000)), now());
        assert!(matches!(result, Err(WellnessError::Validation(_))));
        assert!(meals.is_empty());

        let max = log_meal(&mut meals, create(day(5), MealType::Dinner, "feast", Some(MAX_MEAL_CALORIES)), now()).unwrap();
        assert_eq!(max.calories, MAX_MEAL_CALORIES);
    }

    #[test]
    fn test_day_total_saturates_on_stored_data() {
        let mut meals = Vec::new();
        log_meal(&mut meals, create(day(5), MealType::Lunch, "x", Some(500)), now()).unwrap();
        log_meal(&mut meals, create(day(5), MealType::Dinner, "x", Some(500)), now()).unwrap();
        for meal in meals.iter_mut() {
            meal.calories = 3_000_000_000;
        }

        let summary = daily_summary(&meals, day(5), 2000);
        assert_eq!(summary.total_calories, u32::MAX);
        assert_eq!(summary.remaining, 0);
        assert_eq!(calorie_history(&meals, day(5), 1)[0].total_calories, u32::MAX);
    }

    #[test]
    fn test_goal_bounds() {
        assert!(validate_daily_goal(999).is_err());
        assert!(validate_daily_goal(5001).is_err());
        assert_eq!(validate_daily_goal(1000).unwrap(), 1000);
        assert_eq!(validate_daily_goal(5000).unwrap(), 5000);
    }
}
