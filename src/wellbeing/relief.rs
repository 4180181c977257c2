//! Stress-relief activities

use chrono::{DateTime, Utc};

use crate::error::{WellnessError, WellnessResult};
use crate::models::{
    find_mut, next_id, optional_text, remove_by_id, required_text, ActivityInput, Filter,
    ReliefActivity, ReliefCategory, MAX_RATING,
};

fn check_rating(rating: Option<u8>) -> WellnessResult<u8> {
    let rating = rating.unwrap_or(0);
    if rating > MAX_RATING {
        return Err(WellnessError::validation(format!(
            "Rating must be between 0 and {}",
            MAX_RATING
        )));
    }
    Ok(rating)
}

pub fn add_activity(
    activities: &mut Vec<ReliefActivity>,
    input: ActivityInput,
    now: DateTime<Utc>,
) -> WellnessResult<ReliefActivity> {
    let name = required_text(&input.name, "Name")?;
    let rating = check_rating(input.rating)?;

    let activity = ReliefActivity {
        id: next_id(activities, now),
        name,
        category: input.category,
        description: optional_text(input.description),
        duration: optional_text(input.duration),
        rating,
        used_today: false,
        created_at: now,
    };
    activities.push(activity.clone());
    Ok(activity)
}

/// Replace an activity's details; `used_today` and creation time are kept
pub fn update_activity(
    activities: &mut [ReliefActivity],
    id: i64,
    input: ActivityInput,
) -> WellnessResult<ReliefActivity> {
    let name = required_text(&input.name, "Name")?;
    let rating = check_rating(input.rating)?;
    let activity = find_mut(activities, id)?;

    activity.name = name;
    activity.category = input.category;
    activity.description = optional_text(input.description);
    activity.duration = optional_text(input.duration);
    activity.rating = rating;

    Ok(activity.clone())
}

pub fn delete_activity(activities: &mut Vec<ReliefActivity>, id: i64) -> WellnessResult<ReliefActivity> {
    remove_by_id(activities, id)
}

/// Flip the used-today flag
pub fn mark_activity_used(activities: &mut [ReliefActivity], id: i64) -> WellnessResult<ReliefActivity> {
    let activity = find_mut(activities, id)?;
    activity.used_today = !activity.used_today;
    Ok(activity.clone())
}

pub fn list_activities(
    activities: &[ReliefActivity],
    filter: Filter<ReliefCategory>,
) -> Vec<ReliefActivity> {
    activities
        .iter()
        .filter(|a| filter.matches(&a.category))
        .cloned()
        .collect()
}
