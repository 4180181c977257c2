//! Stress relief MCP Tools

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::{ActivityInput, Filter, ReliefActivity, ReliefCategory};
use crate::store::collection::RELIEF_ACTIVITIES_KEY;
use crate::store::KeyValueStore;
use crate::wellbeing::{self, BreathingStep};

use super::{modify_collection, read_collection, DeleteResponse};

/// Response for list_activities
#[derive(Debug, Serialize)]
pub struct ListActivitiesResponse {
    pub activities: Vec<ReliefActivity>,
    pub total: usize,
    pub used_today: usize,
}

/// Response for get_breathing_pattern
#[derive(Debug, Serialize)]
pub struct BreathingPatternResponse {
    pub steps: Vec<BreathingStep>,
    pub cycle_seconds: u32,
}

pub fn add_activity(
    store: &dyn KeyValueStore,
    input: ActivityInput,
    now: DateTime<Utc>,
) -> Result<ReliefActivity, String> {
    let activity = modify_collection(store, RELIEF_ACTIVITIES_KEY, |activities: &mut Vec<ReliefActivity>| {
        wellbeing::add_activity(activities, input, now)
    })?;
    tracing::info!(id = activity.id, category = activity.category.as_str(), "activity added");
    Ok(activity)
}

pub fn update_activity(
    store: &dyn KeyValueStore,
    id: i64,
    input: ActivityInput,
) -> Result<ReliefActivity, String> {
    let activity = modify_collection(store, RELIEF_ACTIVITIES_KEY, |activities: &mut Vec<ReliefActivity>| {
        wellbeing::update_activity(activities, id, input)
    })?;
    tracing::info!(id, "activity updated");
    Ok(activity)
}

pub fn delete_activity(store: &dyn KeyValueStore, id: i64) -> Result<DeleteResponse, String> {
    modify_collection(store, RELIEF_ACTIVITIES_KEY, |activities: &mut Vec<ReliefActivity>| {
        wellbeing::delete_activity(activities, id)
    })?;
    tracing::info!(id, "activity deleted");
    Ok(DeleteResponse::new(id))
}

/// Toggle whether an activity was used today
pub fn mark_activity_used(store: &dyn KeyValueStore, id: i64) -> Result<ReliefActivity, String> {
    modify_collection(store, RELIEF_ACTIVITIES_KEY, |activities: &mut Vec<ReliefActivity>| {
        wellbeing::mark_activity_used(activities, id)
    })
}

pub fn list_activities(
    store: &dyn KeyValueStore,
    category: Option<&str>,
) -> Result<ListActivitiesResponse, String> {
    let filter: Filter<ReliefCategory> = Filter::parse(category).map_err(|e| e.to_string())?;
    let activities: Vec<ReliefActivity> = read_collection(store, RELIEF_ACTIVITIES_KEY)?;
    let activities = wellbeing::list_activities(&activities, filter);

    Ok(ListActivitiesResponse {
        total: activities.len(),
        used_today: activities.iter().filter(|a| a.used_today).count(),
        activities,
    })
}

pub fn get_breathing_pattern() -> BreathingPatternResponse {
    let steps = wellbeing::breathing_pattern();
    BreathingPatternResponse {
        cycle_seconds: steps.iter().map(|s| s.duration_secs).sum(),
        steps,
    }
}
