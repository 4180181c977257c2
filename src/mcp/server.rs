//! WellUp MCP Server Implementation
//!
//! Implements the MCP server with all WellUp tools.

use std::path::PathBuf;
use std::sync::Arc;

use chrono::{DateTime, Datelike, Local, NaiveDate, Utc};
use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{
    CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo,
};
use rmcp::{schemars, tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use crate::models::{
    clock, ActivityInput, EventDraft, MealLogCreate, MealType, Portion, ReliefCategory,
    RoutineInput, SleepLog,
};
use crate::store::Database;
use crate::tools::status::StatusTracker;
use crate::tools::{care, events, meals, relief, routines, sleep};

/// WellUp MCP Service
#[derive(Clone)]
pub struct WellupService {
    status_tracker: Arc<Mutex<StatusTracker>>,
    database: Database,
    tool_router: ToolRouter<WellupService>,
    /// Held for every load-modify-save cycle so concurrent calls never
    /// overwrite each other's changes
    write_lock: Arc<std::sync::Mutex<()>>,
}

impl WellupService {
    pub fn new(database_path: PathBuf, database: Database) -> Self {
        Self {
            status_tracker: Arc::new(Mutex::new(StatusTracker::new(database_path))),
            database,
            tool_router: Self::tool_router(),
            write_lock: Arc::new(std::sync::Mutex::new(())),
        }
    }

    fn write<T, F>(&self, op: F) -> Result<T, McpError>
    where
        F: FnOnce(&Database) -> Result<T, String>,
    {
        // Guards no data, so a poisoned lock is still safe to take
        let _guard = self
            .write_lock
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        op(&self.database).map_err(|e| McpError::internal_error(e, None))
    }
}

fn json_result<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| McpError::internal_error(format!("Serialization error: {}", e), None))?;
    Ok(CallToolResult::success(vec![Content::text(json)]))
}

fn now() -> DateTime<Utc> {
    Utc::now()
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Parse an optional `YYYY-MM-DD`, defaulting to today
fn date_or_today(date: Option<&str>) -> Result<NaiveDate, McpError> {
    match date.map(str::trim) {
        None | Some("") => Ok(today()),
        Some(s) => clock::parse_date(s).map_err(|e| McpError::invalid_params(e.to_string(), None)),
    }
}

fn parse_arg<T>(value: &str) -> Result<T, McpError>
where
    T: std::str::FromStr<Err = crate::error::WellnessError>,
{
    value
        .parse()
        .map_err(|e: crate::error::WellnessError| McpError::invalid_params(e.to_string(), None))
}

fn parse_time_arg(value: &str) -> Result<chrono::NaiveTime, McpError> {
    clock::parse_time(value).map_err(|e| McpError::invalid_params(e.to_string(), None))
}

fn parse_optional_time_arg(value: Option<&str>) -> Result<Option<chrono::NaiveTime>, McpError> {
    clock::parse_optional_time(value).map_err(|e| McpError::invalid_params(e.to_string(), None))
}

// ============================================================================
// Nutrition Parameter Structs
// ============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct LogMealParams {
    /// YYYY-MM-DD, defaults to today
    pub date: Option<String>,
    /// breakfast, lunch, dinner or snack
    pub meal_type: String,
    /// HH:MM
    pub time: String,
    pub description: String,
    /// small, medium or large
    #[serde(default = "default_portion")]
    pub portion: String,
    /// Known calories; omit to estimate from the description
    pub calories: Option<u32>,
    pub notes: Option<String>,
}

fn default_portion() -> String { "medium".to_string() }

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct IdParams {
    pub id: i64,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct EstimateCaloriesParams {
    pub description: String,
    #[serde(default = "default_portion")]
    pub portion: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct DateParams {
    /// YYYY-MM-DD, defaults to today
    pub date: Option<String>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct CalorieHistoryParams {
    /// Last day of the range, defaults to today
    pub end_date: Option<String>,
    #[serde(default = "default_history_days")]
    pub days: u32,
}

fn default_history_days() -> u32 { 7 }

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct SetDailyGoalParams {
    pub calories: u32,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ToggleWaterParams {
    pub date: Option<String>,
    /// Glass number, 1-8
    pub glass: u8,
}

// ============================================================================
// Calendar Parameter Structs
// ============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct MonthGridParams {
    /// Defaults to the current year
    pub year: Option<i32>,
    /// 1-12, defaults to the current month
    pub month: Option<u32>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct SaveEventParams {
    /// Set to edit an existing event
    pub id: Option<i64>,
    pub title: String,
    /// YYYY-MM-DD
    pub date: String,
    /// HH:MM
    pub time: Option<String>,
    pub description: Option<String>,
    /// exercise, nutrition, sleep, self-care, social, work or other
    pub category: String,
    /// low, medium or high
    pub priority: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct CategoryFilterParams {
    /// A category, or "all"
    pub category: Option<String>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct EventsOnDateParams {
    pub date: String,
}

// ============================================================================
// Sleep Parameter Structs
// ============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct LogSleepParams {
    /// YYYY-MM-DD, defaults to today
    pub date: Option<String>,
    pub hours: f64,
    /// HH:MM
    pub bedtime: Option<String>,
    /// HH:MM
    pub wake_time: Option<String>,
    /// 1 (very poor) to 5 (excellent)
    pub quality: u8,
    pub notes: Option<String>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct SleepOverviewParams {
    /// 7 or 30
    #[serde(default = "default_chart_days")]
    pub chart_days: u32,
}

fn default_chart_days() -> u32 { 7 }

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct SetSleepGoalParams {
    pub hours: f64,
}

// ============================================================================
// Exercise Parameter Structs
// ============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct AddRoutineParams {
    pub name: String,
    /// monday..sunday
    pub day: String,
    /// HH:MM
    pub time: String,
    /// Minutes
    pub duration: u32,
    /// cardio, strength, flexibility, sports or other
    pub exercise_type: String,
    pub description: String,
    pub location: Option<String>,
    #[serde(default)]
    pub reminder: bool,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct UpdateRoutineParams {
    pub id: i64,
    pub name: String,
    pub day: String,
    pub time: String,
    pub duration: u32,
    pub exercise_type: String,
    pub description: String,
    pub location: Option<String>,
    #[serde(default)]
    pub reminder: bool,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ListRoutinesParams {
    /// An exercise type, or "all"
    pub exercise_type: Option<String>,
}

// ============================================================================
// Care & Relief Parameter Structs
// ============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct AddCareItemParams {
    pub name: String,
    /// daily, weekly, monthly or as-needed
    #[serde(default = "default_frequency")]
    pub frequency: String,
    pub notes: Option<String>,
}

fn default_frequency() -> String { "daily".to_string() }

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct AddActivityParams {
    pub name: String,
    /// physical, creative, mindfulness, social, relaxation or other
    pub category: String,
    pub description: Option<String>,
    /// Free text, e.g. "15 minutes"
    pub duration: Option<String>,
    /// 0-5
    pub rating: Option<u8>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct UpdateActivityParams {
    pub id: i64,
    pub name: String,
    pub category: String,
    pub description: Option<String>,
    pub duration: Option<String>,
    pub rating: Option<u8>,
}

#[allow(clippy::too_many_arguments)]
fn routine_input(
    name: String,
    day: &str,
    time: &str,
    duration: u32,
    exercise_type: &str,
    description: String,
    location: Option<String>,
    reminder: bool,
) -> Result<RoutineInput, McpError> {
    Ok(RoutineInput {
        name,
        day: parse_arg(day)?,
        time: parse_time_arg(time)?,
        duration,
        exercise_type: parse_arg(exercise_type)?,
        description,
        location,
        reminder,
    })
}

fn activity_input(
    name: String,
    category: &str,
    description: Option<String>,
    duration: Option<String>,
    rating: Option<u8>,
) -> Result<ActivityInput, McpError> {
    let category: ReliefCategory = parse_arg(category)?;
    Ok(ActivityInput {
        name,
        category,
        description,
        duration,
        rating,
    })
}

// ============================================================================
// Tool Router
// ============================================================================

#[tool_router]
impl WellupService {
    // --- Status ---

    #[tool(description = "Get the current status of the WellUp service including build info, database status, and process information")]
    async fn wellup_status(&self) -> Result<CallToolResult, McpError> {
        let tracker = self.status_tracker.lock().await;
        let status = tracker.get_status(&self.database);
        json_result(&status)
    }

    #[tool(description = "Get instructions for meal logging, calorie estimates and water tracking. Call this when starting a nutrition session.")]
    fn nutrition_instructions(&self) -> Result<CallToolResult, McpError> {
        use crate::tools::status::NUTRITION_INSTRUCTIONS;
        Ok(CallToolResult::success(vec![Content::text(NUTRITION_INSTRUCTIONS)]))
    }

    #[tool(description = "Get instructions for the calendar and events.")]
    fn calendar_instructions(&self) -> Result<CallToolResult, McpError> {
        use crate::tools::status::CALENDAR_INSTRUCTIONS;
        Ok(CallToolResult::success(vec![Content::text(CALENDAR_INSTRUCTIONS)]))
    }

    #[tool(description = "Get instructions for sleep, exercise routines, personal care and stress relief.")]
    fn wellbeing_instructions(&self) -> Result<CallToolResult, McpError> {
        use crate::tools::status::WELLBEING_INSTRUCTIONS;
        Ok(CallToolResult::success(vec![Content::text(WELLBEING_INSTRUCTIONS)]))
    }

    // --- Nutrition ---

    #[tool(description = "Log a meal. Calories are estimated from the description and portion unless given.")]
    fn log_meal(&self, Parameters(p): Parameters<LogMealParams>) -> Result<CallToolResult, McpError> {
        let meal_type: MealType = parse_arg(&p.meal_type)?;
        let portion: Portion = parse_arg(&p.portion)?;
        let data = MealLogCreate {
            date: date_or_today(p.date.as_deref())?,
            meal_type,
            time: parse_time_arg(&p.time)?,
            description: p.description,
            portion,
            manual_calories: p.calories,
            notes: p.notes,
        };
        let result = self.write(|db| meals::log_meal(db, data, now()))?;
        json_result(&result)
    }

    #[tool(description = "Delete a logged meal")]
    fn delete_meal(&self, Parameters(p): Parameters<IdParams>) -> Result<CallToolResult, McpError> {
        let result = self.write(|db| meals::delete_meal(db, p.id))?;
        json_result(&result)
    }

    #[tool(description = "Estimate calories for a food description without logging it, showing which keywords and modifiers applied")]
    fn estimate_calories(&self, Parameters(p): Parameters<EstimateCaloriesParams>) -> Result<CallToolResult, McpError> {
        let result = meals::estimate_calories(&p.description, &p.portion)
            .map_err(|e| McpError::invalid_params(e, None))?;
        json_result(&result)
    }

    #[tool(description = "Get a day's calorie total against the goal, meals grouped by type, and water intake")]
    fn get_daily_summary(&self, Parameters(p): Parameters<DateParams>) -> Result<CallToolResult, McpError> {
        let date = date_or_today(p.date.as_deref())?;
        let result = meals::get_daily_summary(&self.database, date).map_err(|e| McpError::internal_error(e, None))?;
        json_result(&result)
    }

    #[tool(description = "Get per-day calorie totals for the days ending on end_date (default 7), oldest first")]
    fn get_calorie_history(&self, Parameters(p): Parameters<CalorieHistoryParams>) -> Result<CallToolResult, McpError> {
        let end = date_or_today(p.end_date.as_deref())?;
        let result = meals::get_calorie_history(&self.database, end, p.days).map_err(|e| McpError::internal_error(e, None))?;
        json_result(&result)
    }

    #[tool(description = "Set the daily calorie goal (1000-5000)")]
    fn set_daily_goal(&self, Parameters(p): Parameters<SetDailyGoalParams>) -> Result<CallToolResult, McpError> {
        let result = self.write(|db| meals::set_daily_goal(db, p.calories))?;
        json_result(&result)
    }

    #[tool(description = "Fill the next empty water glass for a day (8 per day)")]
    fn add_water_glass(&self, Parameters(p): Parameters<DateParams>) -> Result<CallToolResult, McpError> {
        let date = date_or_today(p.date.as_deref())?;
        let result = self.write(|db| meals::add_water_glass(db, date, now()))?;
        json_result(&result)
    }

    #[tool(description = "Fill or empty one numbered water glass (1-8)")]
    fn toggle_water_glass(&self, Parameters(p): Parameters<ToggleWaterParams>) -> Result<CallToolResult, McpError> {
        let date = date_or_today(p.date.as_deref())?;
        let result = self.write(|db| meals::toggle_water_glass(db, date, p.glass, now()))?;
        json_result(&result)
    }

    #[tool(description = "Empty every water glass for a day")]
    fn reset_water(&self, Parameters(p): Parameters<DateParams>) -> Result<CallToolResult, McpError> {
        let date = date_or_today(p.date.as_deref())?;
        let result = self.write(|db| meals::reset_water(db, date))?;
        json_result(&result)
    }

    #[tool(description = "Get water intake for a day")]
    fn get_water_status(&self, Parameters(p): Parameters<DateParams>) -> Result<CallToolResult, McpError> {
        let date = date_or_today(p.date.as_deref())?;
        let result = meals::get_water_status(&self.database, date).map_err(|e| McpError::internal_error(e, None))?;
        json_result(&result)
    }

    // --- Calendar ---

    #[tool(description = "Get the 42-cell calendar grid for a month (1-12), Sunday first, with today and event markers")]
    fn get_month_grid(&self, Parameters(p): Parameters<MonthGridParams>) -> Result<CallToolResult, McpError> {
        let today = today();
        let year = p.year.unwrap_or_else(|| today.year());
        let month = p.month.unwrap_or_else(|| today.month());
        let result = events::get_month_grid(&self.database, year, month, today)
            .map_err(|e| McpError::invalid_params(e, None))?;
        json_result(&result)
    }

    #[tool(description = "Create an event, or edit one by passing its id. Required: title, date, category, priority.")]
    fn save_event(&self, Parameters(p): Parameters<SaveEventParams>) -> Result<CallToolResult, McpError> {
        let draft = EventDraft {
            id: p.id,
            title: p.title,
            date: p.date,
            time: p.time,
            description: p.description,
            category: p.category,
            priority: p.priority,
        };
        let result = self.write(|db| events::save_event(db, draft, now()))?;
        json_result(&result)
    }

    #[tool(description = "Delete an event")]
    fn delete_event(&self, Parameters(p): Parameters<IdParams>) -> Result<CallToolResult, McpError> {
        let result = self.write(|db| events::delete_event(db, p.id))?;
        json_result(&result)
    }

    #[tool(description = "List events in date and time order, optionally for one category")]
    fn list_events(&self, Parameters(p): Parameters<CategoryFilterParams>) -> Result<CallToolResult, McpError> {
        let result = events::list_events(&self.database, p.category.as_deref()).map_err(|e| McpError::internal_error(e, None))?;
        json_result(&result)
    }

    #[tool(description = "List the events on one date")]
    fn events_on_date(&self, Parameters(p): Parameters<EventsOnDateParams>) -> Result<CallToolResult, McpError> {
        let date = clock::parse_date(&p.date).map_err(|e| McpError::invalid_params(e.to_string(), None))?;
        let result = events::events_on_date(&self.database, date).map_err(|e| McpError::internal_error(e, None))?;
        json_result(&result)
    }

    #[tool(description = "Export all events as a JSON document")]
    fn export_events(&self) -> Result<CallToolResult, McpError> {
        let result = events::export_events(&self.database).map_err(|e| McpError::internal_error(e, None))?;
        json_result(&result)
    }

    // --- Sleep ---

    #[tool(description = "Log a night of sleep. Logging the same date again replaces it.")]
    fn log_sleep(&self, Parameters(p): Parameters<LogSleepParams>) -> Result<CallToolResult, McpError> {
        let log = SleepLog {
            date: date_or_today(p.date.as_deref())?,
            hours: p.hours,
            bedtime: parse_optional_time_arg(p.bedtime.as_deref())?,
            wake_time: parse_optional_time_arg(p.wake_time.as_deref())?,
            quality: p.quality,
            notes: p.notes,
        };
        let result = self.write(|db| sleep::log_sleep(db, log, now()))?;
        json_result(&result)
    }

    #[tool(description = "Delete a sleep entry")]
    fn delete_sleep(&self, Parameters(p): Parameters<IdParams>) -> Result<CallToolResult, McpError> {
        let result = self.write(|db| sleep::delete_sleep(db, p.id))?;
        json_result(&result)
    }

    #[tool(description = "Get sleep statistics, the ten latest nights and a 7 or 30 day chart")]
    fn get_sleep_overview(&self, Parameters(p): Parameters<SleepOverviewParams>) -> Result<CallToolResult, McpError> {
        let result = sleep::get_sleep_overview(&self.database, today(), p.chart_days)
            .map_err(|e| McpError::internal_error(e, None))?;
        json_result(&result)
    }

    #[tool(description = "Set the nightly sleep goal in hours (4-12)")]
    fn set_sleep_goal(&self, Parameters(p): Parameters<SetSleepGoalParams>) -> Result<CallToolResult, McpError> {
        let result = self.write(|db| sleep::set_sleep_goal(db, p.hours))?;
        json_result(&result)
    }

    // --- Exercise ---

    #[tool(description = "Add a weekly exercise routine")]
    fn add_routine(&self, Parameters(p): Parameters<AddRoutineParams>) -> Result<CallToolResult, McpError> {
        let input = routine_input(p.name, &p.day, &p.time, p.duration, &p.exercise_type, p.description, p.location, p.reminder)?;
        let result = self.write(|db| routines::add_routine(db, input, now()))?;
        json_result(&result)
    }

    #[tool(description = "Replace an exercise routine's details")]
    fn update_routine(&self, Parameters(p): Parameters<UpdateRoutineParams>) -> Result<CallToolResult, McpError> {
        let input = routine_input(p.name, &p.day, &p.time, p.duration, &p.exercise_type, p.description, p.location, p.reminder)?;
        let result = self.write(|db| routines::update_routine(db, p.id, input))?;
        json_result(&result)
    }

    #[tool(description = "Delete an exercise routine")]
    fn delete_routine(&self, Parameters(p): Parameters<IdParams>) -> Result<CallToolResult, McpError> {
        let result = self.write(|db| routines::delete_routine(db, p.id))?;
        json_result(&result)
    }

    #[tool(description = "Toggle an exercise routine's completed mark")]
    fn complete_routine(&self, Parameters(p): Parameters<IdParams>) -> Result<CallToolResult, McpError> {
        let result = self.write(|db| routines::complete_routine(db, p.id))?;
        json_result(&result)
    }

    #[tool(description = "Get routines for Monday through Sunday, each day sorted by time")]
    fn get_weekly_schedule(&self) -> Result<CallToolResult, McpError> {
        let result = routines::get_weekly_schedule(&self.database).map_err(|e| McpError::internal_error(e, None))?;
        json_result(&result)
    }

    #[tool(description = "List exercise routines, optionally for one exercise type")]
    fn list_routines(&self, Parameters(p): Parameters<ListRoutinesParams>) -> Result<CallToolResult, McpError> {
        let result = routines::list_routines(&self.database, p.exercise_type.as_deref())
            .map_err(|e| McpError::internal_error(e, None))?;
        json_result(&result)
    }

    // --- Personal Care ---

    #[tool(description = "Add a personal care checklist item")]
    fn add_care_item(&self, Parameters(p): Parameters<AddCareItemParams>) -> Result<CallToolResult, McpError> {
        let result = self.write(|db| care::add_care_item(db, &p.name, &p.frequency, p.notes, now()))?;
        json_result(&result)
    }

    #[tool(description = "Check or uncheck a personal care item")]
    fn toggle_care_item(&self, Parameters(p): Parameters<IdParams>) -> Result<CallToolResult, McpError> {
        let result = self.write(|db| care::toggle_care_item(db, p.id))?;
        json_result(&result)
    }

    #[tool(description = "Delete a personal care item")]
    fn delete_care_item(&self, Parameters(p): Parameters<IdParams>) -> Result<CallToolResult, McpError> {
        let result = self.write(|db| care::delete_care_item(db, p.id))?;
        json_result(&result)
    }

    #[tool(description = "List personal care items with the completed count")]
    fn list_care_items(&self) -> Result<CallToolResult, McpError> {
        let result = care::list_care_items(&self.database).map_err(|e| McpError::internal_error(e, None))?;
        json_result(&result)
    }

    #[tool(description = "Export the personal care checklist as a JSON document")]
    fn export_care_routine(&self) -> Result<CallToolResult, McpError> {
        let result = care::export_care_routine(&self.database).map_err(|e| McpError::internal_error(e, None))?;
        json_result(&result)
    }

    // --- Stress Relief ---

    #[tool(description = "Add a stress-relief activity")]
    fn add_activity(&self, Parameters(p): Parameters<AddActivityParams>) -> Result<CallToolResult, McpError> {
        let input = activity_input(p.name, &p.category, p.description, p.duration, p.rating)?;
        let result = self.write(|db| relief::add_activity(db, input, now()))?;
        json_result(&result)
    }

    #[tool(description = "Replace a stress-relief activity's details")]
    fn update_activity(&self, Parameters(p): Parameters<UpdateActivityParams>) -> Result<CallToolResult, McpError> {
        let input = activity_input(p.name, &p.category, p.description, p.duration, p.rating)?;
        let result = self.write(|db| relief::update_activity(db, p.id, input))?;
        json_result(&result)
    }

    #[tool(description = "Delete a stress-relief activity")]
    fn delete_activity(&self, Parameters(p): Parameters<IdParams>) -> Result<CallToolResult, McpError> {
        let result = self.write(|db| relief::delete_activity(db, p.id))?;
        json_result(&result)
    }

    #[tool(description = "Toggle whether a stress-relief activity was used today")]
    fn mark_activity_used(&self, Parameters(p): Parameters<IdParams>) -> Result<CallToolResult, McpError> {
        let result = self.write(|db| relief::mark_activity_used(db, p.id))?;
        json_result(&result)
    }

    #[tool(description = "List stress-relief activities, optionally for one category")]
    fn list_activities(&self, Parameters(p): Parameters<CategoryFilterParams>) -> Result<CallToolResult, McpError> {
        let result = relief::list_activities(&self.database, p.category.as_deref())
            .map_err(|e| McpError::internal_error(e, None))?;
        json_result(&result)
    }

    #[tool(description = "Get the box breathing cycle: breathe in 4s, hold 2s, breathe out 4s, hold 2s")]
    fn get_breathing_pattern(&self) -> Result<CallToolResult, McpError> {
        json_result(&relief::get_breathing_pattern())
    }
}

#[tool_handler]
impl ServerHandler for WellupService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "wellup".into(),
                version: crate::build_info::VERSION.into(),
                title: Some("WellUp Wellness Manager".into()),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "WellUp - nutrition, calendar, sleep, exercise, personal care and stress relief tracking. \
                 Call nutrition_instructions, calendar_instructions or wellbeing_instructions first. \
                 Nutrition: log_meal/delete_meal, estimate_calories, get_daily_summary, get_calorie_history, set_daily_goal. \
                 Water: add_water_glass/toggle_water_glass/reset_water/get_water_status. \
                 Calendar: get_month_grid, save_event/delete_event, list_events, events_on_date, export_events. \
                 Sleep: log_sleep/delete_sleep, get_sleep_overview, set_sleep_goal. \
                 Exercise: add/update/delete/complete_routine, get_weekly_schedule, list_routines. \
                 Care: add/toggle/delete_care_item, list_care_items, export_care_routine. \
                 Relief: add/update/delete_activity, mark_activity_used, list_activities, get_breathing_pattern. \
                 Dates are YYYY-MM-DD and default to today; times are HH:MM."
                    .into(),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_router_lists_tools() {
        let service = WellupService::new(PathBuf::from("wellup.db"), Database::in_memory().unwrap());
        let tools = service.tool_router.list_all();
        let names: Vec<String> = tools.iter().map(|t| t.name.to_string()).collect();
        for expected in ["log_meal", "get_month_grid", "save_event", "log_sleep", "get_weekly_schedule", "get_breathing_pattern"] {
            assert!(names.iter().any(|n| n == expected), "missing tool {}", expected);
        }
    }

    #[test]
    fn test_writes_continue_after_a_panicked_op() {
        let service = WellupService::new(PathBuf::from("wellup.db"), Database::in_memory().unwrap());
        let panicked = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            service.write(|_| -> Result<(), String> { panic!("op failed mid-write") })
        }));
        assert!(panicked.is_err());
        assert!(service.write_lock.is_poisoned());

        let goal = service.write(|db| meals::set_daily_goal(db, 2200)).unwrap();
        assert_eq!(goal.daily_goal, 2200);
    }

    #[test]
    fn test_date_defaults_to_today() {
        assert_eq!(date_or_today(None).unwrap(), today());
        assert_eq!(date_or_today(Some(" ")).unwrap(), today());
        assert!(date_or_today(Some("2024-02-30")).is_err());
    }

    #[test]
    fn test_save_event_through_service() {
        let service = WellupService::new(PathBuf::from("wellup.db"), Database::in_memory().unwrap());
        let params = SaveEventParams {
            id: None,
            title: "Walk".to_string(),
            date: "2024-06-01".to_string(),
            time: None,
            description: None,
            category: "exercise".to_string(),
            priority: "low".to_string(),
        };
        assert!(service.save_event(Parameters(params)).is_ok());
        let listed = events::list_events(&service.database, None).unwrap();
        assert_eq!(listed.total, 1);
    }
}
