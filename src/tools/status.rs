//! WellUp Status Tool
//!
//! Runtime status of the service and usage guides for assistants.

use serde::Serialize;
use std::path::PathBuf;
use std::time::Instant;
use sysinfo::{Pid, ProcessesToUpdate, System};

use crate::build_info::{Area, BuildInfo};
use crate::store::Database;

/// Nutrition logging guide for AI assistants
pub const NUTRITION_INSTRUCTIONS: &str = r#"
# WellUp Nutrition Instructions

## Logging a meal

Call `log_meal` with:
- `date` (YYYY-MM-DD, defaults to today)
- `meal_type`: breakfast, lunch, dinner or snack
- `time` (HH:MM)
- `description`: what was eaten, in plain words ("fried chicken rice")
- `portion`: small, medium or large
- `calories` (optional): a known value from a label. Leave it out to estimate.

## How estimates work

The description is matched against a keyword table. Every keyword found adds
its calories for the chosen portion, so "chicken with rice" counts both.

| Word in description | Effect |
|---------------------|--------|
| fried | x1.3 |
| grilled / steamed | x0.9 |
| oil / butter | +100 kcal |
| salad and dressing | +150 kcal |

Nothing matched: a generic meal (300 / 500 / 700) is used. The total is
rounded to the nearest 10 kcal. Use `estimate_calories` to preview an estimate
and see which keywords matched.

## Daily goal

`set_daily_goal` accepts 1000 to 5000 kcal (default 2000).
`get_daily_summary` shows the total, remaining calories and water for a day.

## Water

Eight glasses a day. `add_water_glass` fills the next glass,
`toggle_water_glass` fills or empties a numbered glass (1-8) and
`reset_water` clears the day.
"#;

/// Calendar guide for AI assistants
pub const CALENDAR_INSTRUCTIONS: &str = r#"
# WellUp Calendar Instructions

## Events

`save_event` creates an event. Required: `title`, `date` (YYYY-MM-DD),
`category` and `priority` (low, medium, high). Optional: `time` (HH:MM) and
`description`.

Categories: exercise, nutrition, sleep, self-care, social, work, other.

To edit, pass the event's `id` together with every field. The creation time
is kept. An id that does not exist creates a new event instead.

## Viewing

- `get_month_grid(year, month)`: 42 day cells (six weeks, Sunday first) with
  flags for today and for days that have events. Months are 1-12.
- `list_events(category)`: all events in date and time order. Events without
  a time come first on their day.
- `events_on_date(date)`
- `export_events`: JSON document saved as wellup-schedule.json
"#;

/// Sleep, exercise, personal care and stress relief guide for AI assistants
pub const WELLBEING_INSTRUCTIONS: &str = r#"
# WellUp Wellbeing Instructions

## Sleep

`log_sleep` takes the date, hours (0-24), quality (1 very poor to 5
excellent), and optional bedtime, wake time and notes. Logging a date twice
replaces that night.

`get_sleep_overview` returns today's hours, 7 and 30 day averages, the ten
latest nights and a chart. Chart bars are "good" at or above the goal, "fair"
within an hour of it, otherwise "short". `set_sleep_goal` accepts 4-12 hours.

## Exercise routines

Routines repeat weekly. Required: name, day, time, duration (minutes) and a
description. Types: cardio, strength, flexibility, sports, other.
`get_weekly_schedule` lists Monday to Sunday, each day sorted by time.
`complete_routine` toggles the completed mark.

## Personal care

Checklist items with a frequency: daily, weekly, monthly or as-needed.
`toggle_care_item` checks or unchecks an item.

## Stress relief

Activities have a category (physical, creative, mindfulness, social,
relaxation, other), an optional duration and a 0-5 rating.
`mark_activity_used` toggles "used today". `get_breathing_pattern` returns the
box breathing cycle: in 4s, hold 2s, out 4s, hold 2s.
"#;

/// Runtime status of the WellUp service
#[derive(Debug, Clone, Serialize)]
pub struct WellupStatus {
    /// Build information
    pub build_number: u64,
    pub build_timestamp: &'static str,
    pub version: &'static str,
    pub areas: &'static [Area],

    /// Database information
    pub schema_version: i32,
    pub database_path: String,
    pub database_size_bytes: Option<u64>,
    pub stored_collections: Vec<String>,

    /// Process information
    pub uptime_seconds: u64,
    pub process_id: u32,
    pub memory_usage_bytes: u64,
}

/// Status tracker for collecting runtime information
pub struct StatusTracker {
    start_time: Instant,
    database_path: PathBuf,
}

impl StatusTracker {
    pub fn new(database_path: PathBuf) -> Self {
        Self {
            start_time: Instant::now(),
            database_path,
        }
    }

    /// Get the current status; collection keys are read from `database`
    pub fn get_status(&self, database: &Database) -> WellupStatus {
        let build_info = BuildInfo::current();

        let database_size_bytes = std::fs::metadata(&self.database_path)
            .ok()
            .map(|m| m.len());

        let stored_collections = database.keys().unwrap_or_else(|e| {
            tracing::warn!("Failed to list stored keys: {}", e);
            Vec::new()
        });

        let pid = std::process::id();
        let mut sys = System::new();
        sys.refresh_processes(ProcessesToUpdate::Some(&[Pid::from_u32(pid)]));

        let memory_usage_bytes = sys
            .process(Pid::from_u32(pid))
            .map(|p| p.memory())
            .unwrap_or(0);

        WellupStatus {
            build_number: build_info.build_number,
            build_timestamp: build_info.build_timestamp,
            version: build_info.version,
            areas: build_info.areas,
            schema_version: build_info.schema_version,
            database_path: self.database_path.display().to_string(),
            database_size_bytes,
            stored_collections,
            uptime_seconds: self.start_time.elapsed().as_secs(),
            process_id: pid,
            memory_usage_bytes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::collection::EVENTS_KEY;
    use crate::store::KeyValueStore;

    #[test]
    fn test_status_lists_collections() {
        let db = Database::in_memory().unwrap();
        db.set(EVENTS_KEY, "[]").unwrap();

        let tracker = StatusTracker::new(PathBuf::from("/nonexistent/wellup.db"));
        let status = tracker.get_status(&db);
        assert_eq!(status.database_size_bytes, None);
        assert_eq!(status.stored_collections, vec![EVENTS_KEY.to_string()]);
        assert_eq!(status.process_id, std::process::id());
        assert!(status.areas.iter().any(|a| a.collection == EVENTS_KEY));
    }
}
