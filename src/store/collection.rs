//! Typed collections on top of the key-value store
//!
//! Every wellness area persists one JSON document per key. A missing key reads
//! as an empty collection (or `None` for single values).

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::WellnessResult;

use super::KeyValueStore;

pub const MEALS_KEY: &str = "wellup_meals";
pub const DAILY_GOAL_KEY: &str = "wellup_daily_goal";
pub const WATER_KEY: &str = "wellup_water_intake";
pub const EVENTS_KEY: &str = "wellup_events";
pub const SLEEP_ENTRIES_KEY: &str = "wellup_sleep_entries";
pub const SLEEP_GOAL_KEY: &str = "wellup_sleep_goal";
pub const EXERCISE_ROUTINES_KEY: &str = "wellup_exercise_routines";
pub const CARE_ITEMS_KEY: &str = "wellup_care_items";
pub const RELIEF_ACTIVITIES_KEY: &str = "wellup_hobbies";

/// Load the collection stored under `key`
pub fn load_collection<T, S>(store: &S, key: &str) -> WellnessResult<Vec<T>>
where
    T: DeserializeOwned,
    S: KeyValueStore + ?Sized,
{
    match store.get(key)? {
        Some(raw) if !raw.trim().is_empty() => Ok(serde_json::from_str(&raw)?),
        _ => Ok(Vec::new()),
    }
}

/// Replace the collection stored under `key`
pub fn save_collection<T, S>(store: &S, key: &str, items: &[T]) -> WellnessResult<()>
where
    T: Serialize,
    S: KeyValueStore + ?Sized,
{
    let raw = serde_json::to_string(items)?;
    store.set(key, &raw)?;
    tracing::debug!(key, count = items.len(), "saved collection");
    Ok(())
}

/// Load a single value stored under `key`
pub fn load_value<T, S>(store: &S, key: &str) -> WellnessResult<Option<T>>
where
    T: DeserializeOwned,
    S: KeyValueStore + ?Sized,
{
    match store.get(key)? {
        Some(raw) if !raw.trim().is_empty() => Ok(Some(serde_json::from_str(&raw)?)),
        _ => Ok(None),
    }
}

/// Store a single value under `key`
pub fn save_value<T, S>(store: &S, key: &str, value: &T) -> WellnessResult<()>
where
    T: Serialize,
    S: KeyValueStore + ?Sized,
{
    let raw = serde_json::to_string(value)?;
    store.set(key, &raw)?;
    Ok(())
}
