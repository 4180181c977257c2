//! Nutrition MCP Tools
//!
//! Meal logging, calorie estimates, the daily goal and water intake.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

use crate::models::{MealLogCreate, MealLogEntry, Portion, WaterGlass};
use crate::nutrition::{
    self, CalorieEstimate, DailySummary, DayTotal, FoodCalorieTable, MealsByType, WaterStatus,
    DEFAULT_DAILY_GOAL,
};
use crate::store::collection::{DAILY_GOAL_KEY, MEALS_KEY, WATER_KEY};
use crate::store::{save_value, KeyValueStore};

use super::{modify_collection, read_collection, read_setting, DeleteResponse};

/// Response for log_meal
#[derive(Debug, Serialize)]
pub struct LogMealResponse {
    pub meal: MealLogEntry,
    pub estimated: bool,
    pub day_total_calories: u32,
}

/// Response for get_daily_summary
#[derive(Debug, Serialize)]
pub struct DailyOverview {
    pub summary: DailySummary,
    pub meals: MealsByType,
    pub water: WaterStatus,
}

/// Response for get_calorie_history
#[derive(Debug, Serialize)]
pub struct CalorieHistoryResponse {
    pub days: Vec<DayTotal>,
    pub daily_goal: u32,
    pub average_calories: u32,
}

/// Response for set_daily_goal
#[derive(Debug, Serialize)]
pub struct GoalResponse {
    pub success: bool,
    pub daily_goal: u32,
}

/// Response for the water tools
#[derive(Debug, Serialize)]
pub struct WaterResponse {
    pub glass: Option<u8>,
    pub filled: Option<bool>,
    pub status: WaterStatus,
    pub goal_just_reached: bool,
}

fn daily_goal(store: &dyn KeyValueStore) -> Result<u32, String> {
    read_setting(store, DAILY_GOAL_KEY, DEFAULT_DAILY_GOAL)
}

/// Log a meal, estimating calories unless a manual value is supplied
pub fn log_meal(
    store: &dyn KeyValueStore,
    data: MealLogCreate,
    now: DateTime<Utc>,
) -> Result<LogMealResponse, String> {
    let estimated = !matches!(data.manual_calories, Some(kcal) if kcal > 0);
    let date = data.date;

    let (meal, day_total_calories) = modify_collection(store, MEALS_KEY, |meals: &mut Vec<MealLogEntry>| {
        let meal = nutrition::log_meal(meals, data, now)?;
        Ok((meal, nutrition::meal_log::total_calories_on(meals, date)))
    })?;

    tracing::info!(id = meal.id, calories = meal.calories, "logged meal");

    Ok(LogMealResponse {
        meal,
        estimated,
        day_total_calories,
    })
}

pub fn delete_meal(store: &dyn KeyValueStore, id: i64) -> Result<DeleteResponse, String> {
    modify_collection(store, MEALS_KEY, |meals: &mut Vec<MealLogEntry>| {
        nutrition::delete_meal(meals, id)
    })?;
    tracing::info!(id, "deleted meal");
    Ok(DeleteResponse::new(id))
}

/// Estimate calories without logging anything
pub fn estimate_calories(food_text: &str, portion: &str) -> Result<CalorieEstimate, String> {
    let portion: Portion = portion.parse().map_err(|e: crate::error::WellnessError| e.to_string())?;
    Ok(nutrition::explain(FoodCalorieTable::standard(), food_text, portion))
}

pub fn get_daily_summary(store: &dyn KeyValueStore, date: NaiveDate) -> Result<DailyOverview, String> {
    let meals: Vec<MealLogEntry> = read_collection(store, MEALS_KEY)?;
    let water: Vec<WaterGlass> = read_collection(store, WATER_KEY)?;
    let goal = daily_goal(store)?;

    Ok(DailyOverview {
        summary: nutrition::daily_summary(&meals, date, goal),
        meals: nutrition::group_by_type(&meals, date),
        water: nutrition::water_status(&water, date),
    })
}

pub fn get_calorie_history(
    store: &dyn KeyValueStore,
    end: NaiveDate,
    days: u32,
) -> Result<CalorieHistoryResponse, String> {
    if days == 0 || days > 90 {
        return Err("History length must be between 1 and 90 days".to_string());
    }

    let meals: Vec<MealLogEntry> = read_collection(store, MEALS_KEY)?;
    let history = nutrition::calorie_history(&meals, end, days);
    let total: u64 = history.iter().map(|d| u64::from(d.total_calories)).sum();
    let average = u32::try_from(total / u64::from(days)).unwrap_or(u32::MAX);

    Ok(CalorieHistoryResponse {
        average_calories: average,
        days: history,
        daily_goal: daily_goal(store)?,
    })
}

pub fn set_daily_goal(store: &dyn KeyValueStore, goal: u32) -> Result<GoalResponse, String> {
    let goal = nutrition::validate_daily_goal(goal).map_err(|e| e.to_string())?;
    save_value(store, DAILY_GOAL_KEY, &goal).map_err(|e| format!("Failed to save daily goal: {}", e))?;
    tracing::info!(goal, "daily calorie goal updated");

    Ok(GoalResponse {
        success: true,
        daily_goal: goal,
    })
}

fn water_response(
    water: &[WaterGlass],
    date: NaiveDate,
    glass: Option<u8>,
    filled: Option<bool>,
) -> WaterResponse {
    let status = nutrition::water_status(water, date);
    WaterResponse {
        goal_just_reached: filled == Some(true) && status.count == usize::from(status.goal),
        glass,
        filled,
        status,
    }
}

pub fn toggle_water_glass(
    store: &dyn KeyValueStore,
    date: NaiveDate,
    glass: u8,
    now: DateTime<Utc>,
) -> Result<WaterResponse, String> {
    modify_collection(store, WATER_KEY, |water: &mut Vec<WaterGlass>| {
        let filled = nutrition::toggle_glass(water, date, glass, now)?;
        Ok(water_response(water, date, Some(glass), Some(filled)))
    })
}

pub fn add_water_glass(
    store: &dyn KeyValueStore,
    date: NaiveDate,
    now: DateTime<Utc>,
) -> Result<WaterResponse, String> {
    modify_collection(store, WATER_KEY, |water: &mut Vec<WaterGlass>| {
        let glass = nutrition::add_glass(water, date, now)?;
        Ok(water_response(water, date, Some(glass), Some(true)))
    })
}

pub fn reset_water(store: &dyn KeyValueStore, date: NaiveDate) -> Result<WaterResponse, String> {
    let response = modify_collection(store, WATER_KEY, |water: &mut Vec<WaterGlass>| {
        nutrition::reset_water(water, date);
        Ok(water_response(water, date, None, None))
    })?;
    tracing::info!(%date, "water intake reset");
    Ok(response)
}

pub fn get_water_status(store: &dyn KeyValueStore, date: NaiveDate) -> Result<WaterStatus, String> {
    let water: Vec<WaterGlass> = read_collection(store, WATER_KEY)?;
    Ok(nutrition::water_status(&water, date))
}
