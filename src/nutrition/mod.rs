//! Nutrition module
//!
//! Calorie estimation, meal log summaries and water intake.

pub mod calorie_table;
pub mod estimator;
pub mod meal_log;
pub mod water;

pub use calorie_table::{FoodCalorieTable, PortionCalories, FALLBACK_KEYWORD, STANDARD_ENTRIES};
pub use estimator::{estimate, estimate_str, explain, CalorieEstimate};
pub use meal_log::{
    calorie_history, daily_summary, delete_meal, group_by_type, log_meal, validate_daily_goal,
    DailySummary, DayTotal, MealsByType, DEFAULT_DAILY_GOAL, MAX_DAILY_GOAL, MAX_MEAL_CALORIES,
    MIN_DAILY_GOAL,
};
pub use water::{add_glass, reset_water, toggle_glass, water_status, WaterStatus, WATER_GOAL};
