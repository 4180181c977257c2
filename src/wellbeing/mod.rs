//! Wellbeing module
//!
//! Sleep, exercise routines, personal care and stress relief.

pub mod breathing;
pub mod care;
pub mod relief;
pub mod routines;
pub mod sleep;

pub use breathing::{breathing_pattern, BreathingPhase, BreathingStep};
pub use care::{add_care_item, delete_care_item, list_care_items, toggle_care_item, CareChecklist};
pub use relief::{add_activity, delete_activity, list_activities, mark_activity_used, update_activity};
pub use routines::{
    add_routine, complete_routine, delete_routine, list_routines, update_routine, weekly_schedule,
    DaySchedule,
};
pub use sleep::{
    average_hours, delete_sleep, log_sleep, recent_sleep, sleep_chart, sleep_statistics,
    validate_sleep_goal, SleepChartPoint, SleepStatistics, SleepStatus, RECENT_LIMIT,
};
