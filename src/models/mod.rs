//! Data models
//!
//! Records persisted in the key-value store, one collection per wellness area.

pub mod clock;
mod care;
mod event;
mod exercise;
mod meal;
mod record;
mod relief;
mod sleep;

pub use care::{CareFrequency, CareItem};
pub use event::{CalendarEvent, EventCategory, EventDraft, Priority};
pub use exercise::{DayOfWeek, ExerciseRoutine, ExerciseType, RoutineInput};
pub use meal::{MealLogCreate, MealLogEntry, MealType, Portion, WaterGlass};
pub use record::{
    find_mut, next_id, optional_text, position, remove_by_id, required_text, Filter, Record,
};
pub use relief::{ActivityInput, ReliefActivity, ReliefCategory, MAX_RATING};
pub use sleep::{
    quality_label, SleepEntry, SleepLog, DEFAULT_SLEEP_GOAL, MAX_SLEEP_GOAL, MAX_SLEEP_HOURS,
    MIN_SLEEP_GOAL, MIN_SLEEP_HOURS,
};
